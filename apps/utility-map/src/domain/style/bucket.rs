//! Threshold ladder used by bucketed metric tables.

use super::color::Color;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One rung of the ladder: values strictly above `lower_bound` take `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorBucket {
    pub lower_bound: f64,
    pub color: Color,
}

/// Named rungs, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BucketLevel {
    DarkestHigh,
    High,
    Mid,
    Low,
    Lowest,
}

impl BucketLevel {
    pub const ALL: [BucketLevel; 5] = [
        BucketLevel::DarkestHigh,
        BucketLevel::High,
        BucketLevel::Mid,
        BucketLevel::Low,
        BucketLevel::Lowest,
    ];

    pub fn color(self) -> Color {
        match self {
            Self::DarkestHigh => Color::from_static("#7c1608ff"),
            Self::High => Color::from_static("#c47916ff"),
            Self::Mid => Color::from_static("#1821acff"),
            Self::Low => Color::from_static("#2781d4ff"),
            Self::Lowest => Color::from_static("#183488ff"),
        }
    }

    /// Exclusive lower bound, `None` for the catch-all rung.
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            Self::DarkestHigh => Some(80.0),
            Self::High => Some(60.0),
            Self::Mid => Some(40.0),
            Self::Low => Some(20.0),
            Self::Lowest => None,
        }
    }
}

/// Pick the rung for `value`. Evaluated top-down with strict `>`, so a value
/// sitting exactly on a bound belongs to the rung below it. NaN and anything
/// at or below 20 land on [`BucketLevel::Lowest`].
pub fn classify_level(value: f64) -> BucketLevel {
    BucketLevel::ALL
        .into_iter()
        .find(|level| level.lower_bound().is_some_and(|bound| value > bound))
        .unwrap_or(BucketLevel::Lowest)
}

pub fn classify_bucket(value: f64) -> Color {
    classify_level(value).color()
}

/// The ladder as (bound, color) pairs, strictly decreasing by bound. The
/// catch-all rung is reported with a bound of negative infinity.
pub fn ladder() -> Vec<ColorBucket> {
    BucketLevel::ALL
        .into_iter()
        .map(|level| ColorBucket {
            lower_bound: level.lower_bound().unwrap_or(f64::NEG_INFINITY),
            color: level.color(),
        })
        .collect()
}
