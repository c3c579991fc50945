//! Leaflet-style path options sent alongside every resolved color.

use super::color::Color;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FillStyle {
    pub fill_color: Color,
    pub weight: f64,
    pub opacity: f64,
    pub color: Color,
    pub fill_opacity: f64,
}

/// Overrides applied while the pointer is over a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HighlightStyle {
    pub weight: f64,
    pub color: Color,
    pub fill_opacity: f64,
}

impl FillStyle {
    pub fn with_fill(fill_color: Color) -> Self {
        Self {
            fill_color,
            weight: 1.5,
            opacity: 1.0,
            color: Color::from_static("#ffffff"),
            fill_opacity: 0.8,
        }
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            weight: 3.0,
            color: Color::from_static("#333333"),
            fill_opacity: 0.9,
        }
    }
}
