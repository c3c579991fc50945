//! Minimal GeoJSON reading: only the feature properties matter for styling,
//! geometry is left to the renderer and skipped during deserialization.

use crate::domain::region::{extractor::RegionNameExtractor, key::RegionKey};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Value>,
}

impl Feature {
    pub fn region_key(&self, extractor: &RegionNameExtractor) -> Option<RegionKey> {
        extractor.extract_from_value(self.properties.as_ref())
    }
}

impl FeatureCollection {
    /// One entry per feature, in input order.
    pub fn region_keys(&self, extractor: &RegionNameExtractor) -> Vec<Option<RegionKey>> {
        self.features
            .iter()
            .map(|feature| feature.region_key(extractor))
            .collect()
    }
}
