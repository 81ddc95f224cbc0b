use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{PyramidError, Result};
use crate::model::Series;

/// Which side of the central axis a category's bars extend toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// Explicit, exhaustive category-to-sign assignment.
///
/// This replaces the pattern of negating everything that fails a string
/// comparison against one literal category name: every category must be
/// assigned, and an unassigned category is a layout error rather than
/// silently landing on the negative side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignMap {
    signs: IndexMap<String, Sign>,
}

impl SignMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the common two-sided pyramid.
    #[must_use]
    pub fn mirrored(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self::new()
            .assign(positive, Sign::Positive)
            .assign(negative, Sign::Negative)
    }

    #[must_use]
    pub fn assign(mut self, category: impl Into<String>, sign: Sign) -> Self {
        self.signs.insert(category.into(), sign);
        self
    }

    #[must_use]
    pub fn sign_for(&self, category: &str) -> Option<Sign> {
        self.signs.get(category).copied()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, Sign)> {
        self.signs.iter().map(|(c, s)| (c.as_str(), *s))
    }
}

/// One drawable horizontal bar, derived from a (series, bucket) pair.
/// `span_start` is always 0; `span_end` carries the mirror sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarPrimitive {
    pub bucket_label: String,
    pub span_start: i64,
    pub span_end: i64,
    pub category: String,
}

/// Map series onto drawable bar primitives.
///
/// Pure: the same input always yields the same output. Output order follows
/// input series order, then bucket order within each series. Two primitives
/// sharing a bucket label belong on the same vertical axis row, diverging
/// left/right according to their category's sign.
///
/// Mismatched bucket-label sets across series are not validated here; the
/// renderer shows gaps for buckets missing from one side.
///
/// # Errors
/// Returns [`PyramidError::UnassignedCategory`] if a series category has no
/// entry in `signs`.
pub fn layout(series: &[Series], signs: &SignMap) -> Result<Vec<BarPrimitive>> {
    let total: usize = series.iter().map(|s| s.buckets.len()).sum();
    let mut primitives = Vec::with_capacity(total);

    for s in series {
        let sign = signs
            .sign_for(&s.category)
            .ok_or_else(|| PyramidError::UnassignedCategory {
                category: s.category.clone(),
            })?;

        for bucket in &s.buckets {
            primitives.push(BarPrimitive {
                bucket_label: bucket.label.clone(),
                span_start: 0,
                span_end: sign.multiplier() * i64::from(bucket.magnitude),
                category: s.category.clone(),
            });
        }
    }

    Ok(primitives)
}

/// Format a raw signed axis value as the unsigned percentage the chart
/// displays: spans are stored signed so the two sides diverge, but the
/// horizontal scale must read as magnitude on both sides.
#[must_use]
pub fn axis_label(raw: i64) -> String {
    format!("{}%", raw.unsigned_abs())
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
