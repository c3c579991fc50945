use crate::domain::metric::{category::MetricCategory, table::Coloring};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySummary {
    pub key: MetricCategory,
    pub label: String,
    pub coloring: Coloring,
    pub region_count: usize,
    pub is_default: bool,
}
