use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// The fixed bucket-label set every generated series uses. Shared labels keep
/// the two sides of the pyramid aligned on the vertical axis.
pub const AGE_RANGES: [&str; 10] = [
    "0-10", "11-20", "21-30", "31-40", "41-50", "51-60", "61-70", "71-80", "81-90", "91+",
];

/// One categorical slot on the shared vertical axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    /// Percentage points; the built-in generators stay within [0, 100).
    pub magnitude: u32,
}

impl Bucket {
    pub fn new(label: impl Into<String>, magnitude: u32) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}

/// One category's full set of bucket magnitudes. Bucket order is meaningful:
/// it defines the vertical axis order and must match across series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub category: String,
    pub buckets: Vec<Bucket>,
}

impl Series {
    pub fn new(category: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        Self {
            category: category.into(),
            buckets,
        }
    }

    pub fn bucket_labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.label.as_str())
    }
}

/// Strategy for producing a complete set of series. Injectable so tests can
/// substitute a deterministic stub for real randomness.
pub trait DataSource {
    /// Produce the next complete series list.
    fn next_series(&mut self) -> Vec<Series>;
}

/// The single data-model handle: owns the current series list and replaces it
/// wholesale on regeneration. There is no partial-update API, so a consumer
/// can never observe a pyramid with mismatched sides mid-swap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyramidData {
    series: Vec<Series>,
}

impl PyramidData {
    #[must_use]
    pub const fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn from_source(source: &mut dyn DataSource) -> Self {
        Self::new(source.next_series())
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Replace the entire data model with a fresh snapshot from `source`.
    pub fn regenerate(&mut self, source: &mut dyn DataSource) {
        self.series = source.next_series();
    }
}

/// Generates one "Male" and one "Female" series over [`AGE_RANGES`] with
/// uniform random magnitudes in [0, 100).
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn random_series(&mut self, category: &str) -> Series {
        let buckets = AGE_RANGES
            .iter()
            .map(|label| Bucket::new(*label, self.rng.random_range(0..100)))
            .collect();
        Series::new(category, buckets)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for RandomSource {
    fn next_series(&mut self) -> Vec<Series> {
        vec![
            self.random_series("Male"),
            self.random_series("Female"),
        ]
    }
}

/// Returns a caller-supplied series list verbatim on every call.
#[derive(Debug, Clone)]
pub struct FixedSource {
    series: Vec<Series>,
}

impl FixedSource {
    #[must_use]
    pub const fn new(series: Vec<Series>) -> Self {
        Self { series }
    }
}

impl DataSource for FixedSource {
    fn next_series(&mut self) -> Vec<Series> {
        self.series.clone()
    }
}

/// The static example data set: a typical population distribution by age.
#[must_use]
pub fn example() -> Vec<Series> {
    let male = [12, 11, 13, 14, 12, 11, 9, 7, 5, 2];
    let female = [11, 11, 12, 13, 12, 12, 10, 8, 7, 4];
    vec![
        Series::new(
            "Male",
            AGE_RANGES
                .iter()
                .zip(male)
                .map(|(label, m)| Bucket::new(*label, m))
                .collect(),
        ),
        Series::new(
            "Female",
            AGE_RANGES
                .iter()
                .zip(female)
                .map(|(label, m)| Bucket::new(*label, m))
                .collect(),
        ),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
