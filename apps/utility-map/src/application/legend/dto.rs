use crate::domain::{
    metric::{category::MetricCategory, table::Coloring},
    style::color::Color,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegendSwatch {
    pub lower_bound: u8,
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegendResponse {
    pub category: MetricCategory,
    pub title: String,
    pub coloring: Coloring,
    /// Empty for direct-color categories.
    pub swatches: Vec<LegendSwatch>,
}
