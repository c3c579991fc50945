use super::dto::{LegendResponse, LegendSwatch};
use crate::domain::{
    metric::{category::MetricCategory, table::Coloring},
    shared::errors::DomainError,
    style::{bucket::classify_bucket, resolver::RegionStyleResolver},
};

/// Swatch bounds, lowest first.
const LEGEND_BOUNDS: [u8; 5] = [0, 20, 40, 60, 80];

pub struct BuildLegendUseCase {
    resolver: RegionStyleResolver,
}

impl BuildLegendUseCase {
    pub fn new(resolver: RegionStyleResolver) -> Self {
        Self { resolver }
    }

    pub fn execute(&self, category: MetricCategory) -> Result<LegendResponse, DomainError> {
        let coloring = self.resolver.table(category)?.coloring();

        // Each swatch samples one past its bound so it lands inside the
        // bucket whose exclusive lower bound it labels.
        let swatches = match coloring {
            Coloring::Bucketed => LEGEND_BOUNDS
                .iter()
                .map(|&bound| LegendSwatch {
                    lower_bound: bound,
                    label: format!("{}%+", bound),
                    color: classify_bucket(f64::from(bound) + 1.0),
                })
                .collect(),
            Coloring::Direct => Vec::new(),
        };

        Ok(LegendResponse {
            category,
            title: category.label().to_string(),
            coloring,
            swatches,
        })
    }
}
