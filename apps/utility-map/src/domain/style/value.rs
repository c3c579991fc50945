use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The number shown for a region, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum DisplayValue {
    Recorded(f64),
    NoData,
}

impl DisplayValue {
    pub fn as_option(self) -> Option<f64> {
        match self {
            Self::Recorded(value) => Some(value),
            Self::NoData => None,
        }
    }

    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recorded(value) => write!(f, "{}", value),
            Self::NoData => f.write_str("N/A"),
        }
    }
}

/// Tooltip line shown on hover: `"<RegionName>: <value or N/A>%"`.
pub fn tooltip_text(region_name: &str, value: DisplayValue) -> String {
    format!("{}: {}%", region_name, value)
}
