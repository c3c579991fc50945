//! CSS hex colors as handed to the map renderer.

use crate::domain::shared::errors::DomainError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};
use ts_rs::TS;

lazy_static! {
    static ref HEX_COLOR_REGEX: regex::Regex =
        regex::Regex::new(r"^#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
}

/// A `#rrggbb` or `#rrggbbaa` color string.
///
/// The text is kept exactly as configured so stored colors reach the
/// renderer byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Color(#[ts(type = "string")] Cow<'static, str>);

impl Color {
    /// Wrap a compile-time color literal without validation.
    pub const fn from_static(hex: &'static str) -> Self {
        Self(Cow::Borrowed(hex))
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let color = Self(Cow::Owned(value.into()));
        if color.is_valid() {
            Ok(color)
        } else {
            Err(DomainError::InvalidColor(color.0.into_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        HEX_COLOR_REGEX.is_match(&self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fill for regions without an entry in a direct-color table.
pub const NO_DATA_GRAY: Color = Color::from_static("#ccccccff");
