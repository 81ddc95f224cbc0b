use serde::{Deserialize, Serialize};

use crate::error::{PyramidError, Result};

/// Bar thickness bounds, in terminal rows per bucket.
pub const BAR_HEIGHT_MIN: u16 = 1;
pub const BAR_HEIGHT_MAX: u16 = 25;

/// Pass-through style parameters for the drawing surface. None of these
/// affect layout math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Rows per bar.
    pub bar_height: u16,
    /// Color for the negative (left) side.
    pub left_color: String,
    /// Color for the positive (right) side.
    pub right_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bar_height: 1,
            left_color: "green".to_string(),
            right_color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub style: StyleConfig,
}

impl Config {
    /// # Errors
    /// Returns `PyramidError::Config` if a style value is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(BAR_HEIGHT_MIN..=BAR_HEIGHT_MAX).contains(&self.style.bar_height) {
            return Err(PyramidError::Config(format!(
                "bar_height must be between {BAR_HEIGHT_MIN} and {BAR_HEIGHT_MAX}, got {}",
                self.style.bar_height
            )));
        }
        Ok(())
    }

    /// Serialize as the TOML the `init` command writes.
    ///
    /// # Errors
    /// Returns `PyramidError::Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PyramidError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
