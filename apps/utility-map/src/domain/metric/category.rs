use crate::domain::shared::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use ts_rs::TS;

/// Which utility-access dataset colors the map.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MetricCategory {
    #[default]
    Electricity,
    Water,
    Utility,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 3] = [
        MetricCategory::Electricity,
        MetricCategory::Water,
        MetricCategory::Utility,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Utility => "utility",
        }
    }

    /// Label shown in the category selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity Coverage",
            Self::Water => "Tap Water Access",
            Self::Utility => "Utility Score",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
