//! Region value resolution and fill color selection.
//!
//! The resolver is stateless: every call reads the immutable metric tables
//! and returns a fresh [`RegionStyle`]. It is safe to share behind an `Arc`
//! and call from any number of threads.

use super::{color::Color, value::DisplayValue};
use crate::domain::{
    metric::{
        category::MetricCategory,
        repository::MetricTableRepository,
        table::{Coloring, MetricTable},
    },
    region::key::RegionKey,
    shared::errors::DomainError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionStyle {
    pub region: RegionKey,
    pub category: MetricCategory,
    pub coloring: Coloring,
    pub value: DisplayValue,
    pub color: Color,
}

#[derive(Clone)]
pub struct RegionStyleResolver {
    tables: Arc<dyn MetricTableRepository>,
}

impl RegionStyleResolver {
    pub fn new(tables: Arc<dyn MetricTableRepository>) -> Self {
        Self { tables }
    }

    pub fn categories(&self) -> Vec<MetricCategory> {
        self.tables.categories()
    }

    /// The table registered for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnconfiguredCategory`] if there is none.
    pub fn table(&self, category: MetricCategory) -> Result<Arc<MetricTable>, DomainError> {
        self.tables
            .find_table(category)
            .ok_or_else(|| DomainError::UnconfiguredCategory(category.key().to_string()))
    }

    /// Resolve the display value and fill color of `region` under `category`.
    ///
    /// An unknown or empty region is not an error; it resolves to the
    /// table's fallback color with [`DisplayValue::NoData`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnconfiguredCategory`] if no table is
    /// registered for `category`.
    pub fn resolve_style(
        &self,
        region: &str,
        category: MetricCategory,
    ) -> Result<RegionStyle, DomainError> {
        let table = self.table(category)?;

        let region = RegionKey::new(region);
        let (value, color) = table.lookup(region.as_str());
        if value.is_no_data() {
            tracing::debug!(region = %region, category = %category, "no recorded value");
        }

        Ok(RegionStyle {
            region,
            category,
            coloring: table.coloring(),
            value,
            color,
        })
    }
}
