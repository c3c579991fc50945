use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};
use ts_rs::TS;

/// Name of a state or union territory as written by the geography source.
///
/// Kept verbatim: table lookups are exact, so a padded or differently cased
/// name does not match. An empty key is allowed: it stands for a feature
/// whose name could not be read and always resolves to fallback styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RegionKey(String);

impl RegionKey {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RegionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
