use super::dto::CategorySummary;
use crate::domain::{
    metric::category::MetricCategory, shared::errors::DomainError,
    style::resolver::RegionStyleResolver,
};

pub struct ListCategoriesUseCase {
    resolver: RegionStyleResolver,
    default_category: MetricCategory,
}

impl ListCategoriesUseCase {
    pub fn new(resolver: RegionStyleResolver, default_category: MetricCategory) -> Self {
        Self {
            resolver,
            default_category,
        }
    }

    pub fn execute(&self) -> Result<Vec<CategorySummary>, DomainError> {
        self.resolver
            .categories()
            .into_iter()
            .map(|category| {
                let table = self.resolver.table(category)?;
                Ok(CategorySummary {
                    key: category,
                    label: category.label().to_string(),
                    coloring: table.coloring(),
                    region_count: table.len(),
                    is_default: category == self.default_category,
                })
            })
            .collect()
    }
}
