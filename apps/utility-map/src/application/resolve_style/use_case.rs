use super::dto::{
    FeatureStyleResponse, RegionStyleResponse, ResolveRegionRequest, StyleSheetResponse,
};
use crate::{
    domain::{
        metric::category::MetricCategory,
        region::{extractor::RegionNameExtractor, key::RegionKey},
        shared::errors::DomainError,
        style::resolver::RegionStyleResolver,
    },
    infrastructure::geography::feature_collection::FeatureCollection,
};
use validator::Validate;

pub struct ResolveStyleUseCase {
    resolver: RegionStyleResolver,
    extractor: RegionNameExtractor,
}

impl ResolveStyleUseCase {
    pub fn new(resolver: RegionStyleResolver, extractor: RegionNameExtractor) -> Self {
        Self {
            resolver,
            extractor,
        }
    }

    pub fn execute(
        &self,
        request: ResolveRegionRequest,
    ) -> Result<RegionStyleResponse, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        self.resolver
            .resolve_style(&request.region, request.category)
            .map(RegionStyleResponse::from)
    }

    /// One style per feature, in the order the features were submitted.
    /// Features without a readable name get fallback styling.
    pub fn resolve_features(
        &self,
        category: MetricCategory,
        collection: &FeatureCollection,
    ) -> Result<StyleSheetResponse<FeatureStyleResponse>, DomainError> {
        let coloring = self.resolver.table(category)?.coloring();

        let styles = collection
            .region_keys(&self.extractor)
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                let name_found = key.is_some();
                let key = key.unwrap_or_else(RegionKey::empty);
                self.resolver
                    .resolve_style(key.as_str(), category)
                    .map(|resolved| FeatureStyleResponse {
                        index,
                        name_found,
                        resolved: if name_found {
                            resolved.into()
                        } else {
                            RegionStyleResponse::unnamed(resolved)
                        },
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            category = %category,
            features = styles.len(),
            unnamed = styles.iter().filter(|s| !s.name_found).count(),
            "resolved feature styles"
        );

        Ok(StyleSheetResponse::new(category, coloring, styles))
    }

    /// Styles for every region recorded in the category's table.
    pub fn resolve_recorded(
        &self,
        category: MetricCategory,
    ) -> Result<StyleSheetResponse<RegionStyleResponse>, DomainError> {
        let table = self.resolver.table(category)?;

        let styles = table
            .regions()
            .iter()
            .map(|region| {
                self.resolver
                    .resolve_style(region.as_str(), category)
                    .map(RegionStyleResponse::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StyleSheetResponse::new(category, table.coloring(), styles))
    }
}
