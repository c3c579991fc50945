use crate::domain::{
    metric::{category::MetricCategory, table::Coloring},
    region::key::RegionKey,
    style::{
        fill::{FillStyle, HighlightStyle},
        resolver::RegionStyle,
        value::tooltip_text,
    },
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveRegionRequest {
    #[validate(length(min = 1, max = 100))]
    pub region: String,
    pub category: MetricCategory,
}

/// Tooltip label for features whose name property could not be read.
pub const UNNAMED_REGION_LABEL: &str = "Unknown region";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionStyleResponse {
    pub region: RegionKey,
    /// `None` when the region has no entry in the active table.
    pub value: Option<f64>,
    pub display_value: String,
    pub tooltip: String,
    pub style: FillStyle,
}

impl From<RegionStyle> for RegionStyleResponse {
    fn from(resolved: RegionStyle) -> Self {
        let display_value = resolved.value.to_string();
        let tooltip = tooltip_text(resolved.region.as_str(), resolved.value);
        Self {
            value: resolved.value.as_option(),
            display_value,
            tooltip,
            style: FillStyle::with_fill(resolved.color),
            region: resolved.region,
        }
    }
}

impl RegionStyleResponse {
    /// Like `From<RegionStyle>`, but the tooltip names a placeholder instead
    /// of the empty key.
    pub fn unnamed(resolved: RegionStyle) -> Self {
        let tooltip = tooltip_text(UNNAMED_REGION_LABEL, resolved.value);
        Self {
            tooltip,
            ..Self::from(resolved)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureStyleResponse {
    /// Position of the feature in the submitted collection.
    pub index: usize,
    /// False when no name property could be read from the feature.
    pub name_found: bool,
    #[serde(flatten)]
    #[ts(flatten)]
    pub resolved: RegionStyleResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StyleSheetResponse<T> {
    pub category: MetricCategory,
    pub coloring: Coloring,
    pub highlight: HighlightStyle,
    pub styles: Vec<T>,
}

impl<T> StyleSheetResponse<T> {
    pub fn new(category: MetricCategory, coloring: Coloring, styles: Vec<T>) -> Self {
        Self {
            category,
            coloring,
            highlight: HighlightStyle::default(),
            styles,
        }
    }
}
