use crate::{
    application::{
        legend::use_case::BuildLegendUseCase, list_categories::use_case::ListCategoriesUseCase,
        resolve_style::use_case::ResolveStyleUseCase,
    },
    config::Config,
    domain::{
        metric::{category::MetricCategory, repository::MetricTableRepository},
        shared::errors::DomainError,
        style::resolver::RegionStyleResolver,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resolver: RegionStyleResolver,
    pub resolve_style: Arc<ResolveStyleUseCase>,
    pub legend: Arc<BuildLegendUseCase>,
    pub categories: Arc<ListCategoriesUseCase>,
}

impl AppState {
    pub fn new(config: Config, tables: Arc<dyn MetricTableRepository>) -> anyhow::Result<Self> {
        let resolver = RegionStyleResolver::new(tables);
        let extractor = config.region_name_extractor()?;
        tracing::debug!(properties = ?extractor.properties(), "Region name properties");

        Ok(Self {
            resolve_style: Arc::new(ResolveStyleUseCase::new(resolver.clone(), extractor)),
            legend: Arc::new(BuildLegendUseCase::new(resolver.clone())),
            categories: Arc::new(ListCategoriesUseCase::new(
                resolver.clone(),
                config.default_category,
            )),
            resolver,
            config,
        })
    }

    /// The requested category, or the configured default when none is given.
    pub fn category_or_default(&self, raw: Option<&str>) -> Result<MetricCategory, DomainError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(key) => key.parse(),
            None => Ok(self.config.default_category),
        }
    }
}
