use serde::Serialize;

use crate::error::Result;
use crate::layout::{axis_label, BarPrimitive};

use super::{ChartFormatter, PyramidView};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    axis: Axis,
    bars: &'a [BarPrimitive],
}

#[derive(Serialize)]
struct Summary {
    categories: Vec<String>,
    buckets: usize,
    max_span: u64,
}

/// Horizontal axis ticks at the extremes and center, with their display
/// labels (unsigned, even for the negative side).
#[derive(Serialize)]
struct Axis {
    ticks: Vec<i64>,
    labels: Vec<String>,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, view: &PyramidView<'_>) -> Result<String> {
        let mut categories: Vec<String> = Vec::new();
        let mut buckets: Vec<&str> = Vec::new();
        for p in view.primitives {
            if !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
            if !buckets.contains(&p.bucket_label.as_str()) {
                buckets.push(&p.bucket_label);
            }
        }

        let max_span = view
            .primitives
            .iter()
            .map(|p| p.span_end.unsigned_abs())
            .max()
            .unwrap_or(0);
        let signed_max = i64::try_from(max_span).unwrap_or(i64::MAX);

        let ticks = vec![-signed_max, 0, signed_max];
        let labels = ticks.iter().map(|&t| axis_label(t)).collect();

        let output = JsonOutput {
            summary: Summary {
                categories,
                buckets: buckets.len(),
                max_span,
            },
            axis: Axis { ticks, labels },
            bars: view.primitives,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
