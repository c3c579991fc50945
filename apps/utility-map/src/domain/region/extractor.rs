//! Reading region names out of geography feature properties.
//!
//! Boundary datasets for India have shipped under two schemas: older GADM
//! exports carry the state name in `NAME_1`, newer geoBoundaries exports
//! carry it in `shapeName`. Properties are probed in order and the first
//! string that is not blank wins. The name itself is passed on unmodified.

use super::key::RegionKey;
use crate::domain::shared::errors::DomainError;
use serde_json::{Map, Value};

pub const LEGACY_NAME_PROPERTY: &str = "NAME_1";
pub const SHAPE_NAME_PROPERTY: &str = "shapeName";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionNameExtractor {
    properties: Vec<String>,
}

impl RegionNameExtractor {
    pub fn new<I, S>(properties: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let properties: Vec<String> = properties
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if properties.is_empty() {
            return Err(DomainError::ValidationError(
                "at least one region name property is required".into(),
            ));
        }

        Ok(Self { properties })
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// First non-empty string value among the candidate properties.
    pub fn extract(&self, properties: &Map<String, Value>) -> Option<RegionKey> {
        self.properties
            .iter()
            .filter_map(|name| properties.get(name).and_then(Value::as_str))
            .find(|name| !name.trim().is_empty())
            .map(RegionKey::new)
    }

    /// Like [`extract`](Self::extract) but accepts any JSON value, so a
    /// feature with `null` or missing properties degrades to `None`.
    pub fn extract_from_value(&self, properties: Option<&Value>) -> Option<RegionKey> {
        properties
            .and_then(Value::as_object)
            .and_then(|props| self.extract(props))
    }
}

impl Default for RegionNameExtractor {
    fn default() -> Self {
        Self {
            properties: vec![
                LEGACY_NAME_PROPERTY.to_string(),
                SHAPE_NAME_PROPERTY.to_string(),
            ],
        }
    }
}
