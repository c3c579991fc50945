use super::{category::MetricCategory, repository::MetricTableRepository, table::MetricTable};
use std::{collections::BTreeMap, sync::Arc};

/// Immutable set of metric tables, one per configured category.
#[derive(Debug, Clone, Default)]
pub struct MetricCatalog {
    tables: BTreeMap<MetricCategory, Arc<MetricTable>>,
}

impl MetricCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, category: MetricCategory, table: MetricTable) -> Self {
        self.tables.insert(category, Arc::new(table));
        self
    }
}

impl MetricTableRepository for MetricCatalog {
    fn find_table(&self, category: MetricCategory) -> Option<Arc<MetricTable>> {
        self.tables.get(&category).cloned()
    }

    fn categories(&self) -> Vec<MetricCategory> {
        self.tables.keys().copied().collect()
    }
}
