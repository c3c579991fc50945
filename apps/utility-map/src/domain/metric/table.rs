//! Per-category lookup tables.

use crate::domain::{
    region::key::RegionKey,
    style::{
        bucket::classify_bucket,
        color::{Color, NO_DATA_GRAY},
        value::DisplayValue,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// How a table turns an entry into a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Coloring {
    /// Color derived from the value through the threshold ladder.
    Bucketed,
    /// Color stored next to the value.
    Direct,
}

/// A value carrying its own hand-picked color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColoredValue {
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricTable {
    Bucketed(HashMap<RegionKey, f64>),
    Direct(HashMap<RegionKey, ColoredValue>),
}

impl MetricTable {
    pub fn bucketed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<RegionKey>,
    {
        Self::Bucketed(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn direct<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64, Color)>,
        K: Into<RegionKey>,
    {
        Self::Direct(
            entries
                .into_iter()
                .map(|(k, value, color)| (k.into(), ColoredValue { value, color }))
                .collect(),
        )
    }

    pub fn coloring(&self) -> Coloring {
        match self {
            Self::Bucketed(_) => Coloring::Bucketed,
            Self::Direct(_) => Coloring::Direct,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Bucketed(entries) => entries.len(),
            Self::Direct(entries) => entries.len(),
        }
    }

    /// Recorded region names in alphabetical order.
    pub fn regions(&self) -> Vec<RegionKey> {
        let mut keys: Vec<RegionKey> = match self {
            Self::Bucketed(entries) => entries.keys().cloned().collect(),
            Self::Direct(entries) => entries.keys().cloned().collect(),
        };
        keys.sort();
        keys
    }

    /// Value and fill color for `region`.
    ///
    /// A bucketed table colors a missing region as if it had recorded 0, so
    /// it shares the lowest rung with genuine zeros while the value still
    /// reads as no-data. A direct table falls back to neutral gray.
    pub fn lookup(&self, region: &str) -> (DisplayValue, Color) {
        match self {
            Self::Bucketed(entries) => match entries.get(region) {
                Some(&value) => (DisplayValue::Recorded(value), classify_bucket(value)),
                None => (DisplayValue::NoData, classify_bucket(0.0)),
            },
            Self::Direct(entries) => match entries.get(region) {
                Some(entry) => (DisplayValue::Recorded(entry.value), entry.color.clone()),
                None => (DisplayValue::NoData, NO_DATA_GRAY),
            },
        }
    }
}
