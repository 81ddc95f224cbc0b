mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{AnsiColor, ColorMode, TextFormatter};

use crate::error::Result;
use crate::layout::{BarPrimitive, SignMap};

/// Pass-through style parameters. These never affect layout math, only how
/// the drawing surface paints the primitives it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Rows per bar.
    pub bar_height: u16,
    /// Color for bars extending left (negative spans).
    pub left_color: AnsiColor,
    /// Color for bars extending right (positive spans).
    pub right_color: AnsiColor,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            bar_height: 1,
            left_color: AnsiColor::Green,
            right_color: AnsiColor::Blue,
        }
    }
}

/// Everything the drawing surface consumes per redraw: the laid-out bar
/// primitives, the category-to-side assignment they were laid out with, and
/// the style to paint them with.
#[derive(Debug, Clone)]
pub struct PyramidView<'a> {
    pub primitives: &'a [BarPrimitive],
    pub signs: &'a SignMap,
    pub style: Style,
}

/// Trait for rendering a pyramid view into an output format.
pub trait ChartFormatter {
    /// Format the view into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, view: &PyramidView<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
