use super::{category::MetricCategory, table::MetricTable};
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
pub trait MetricTableRepository: Send + Sync {
    fn find_table(&self, category: MetricCategory) -> Option<Arc<MetricTable>>;
    fn categories(&self) -> Vec<MetricCategory>;
}
