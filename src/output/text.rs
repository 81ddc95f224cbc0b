use std::fmt::Write;

use indexmap::IndexMap;

use crate::error::{PyramidError, Result};
use crate::layout::{axis_label, BarPrimitive, Sign, SignMap};

use super::{ChartFormatter, PyramidView};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Named ANSI foreground colors for bar styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnsiColor {
    Red,
    #[default]
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }
}

impl std::str::FromStr for AnsiColor {
    type Err = PyramidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            _ => Err(PyramidError::InvalidColor {
                name: s.to_string(),
            }),
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Character cells per side of the central axis.
const SIDE_WIDTH: usize = 30;
const BAR_CHAR: char = '█';
const LEGEND_BLOCK: char = '■';

/// Renders the pyramid as rows of mirrored horizontal bars around a central
/// label gutter, with a legend header and percentage axis footer.
pub struct TextFormatter {
    use_colors: bool,
}

/// One vertical axis row: the two sides of a shared bucket label. A missing
/// side renders as a gap.
#[derive(Default)]
struct Row<'a> {
    left: Option<&'a BarPrimitive>,
    right: Option<&'a BarPrimitive>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: AnsiColor) -> String {
        if !self.use_colors || text.is_empty() {
            return text.to_string();
        }
        format!("{}{text}{ANSI_RESET}", color.code())
    }

    /// Group primitives into axis rows, aligned by bucket label in
    /// first-seen order regardless of which series a primitive came from.
    ///
    /// The side a primitive lands on comes from its category's assigned
    /// sign, not from the span's own sign: a zero-magnitude bar from the
    /// negative category must still occupy the left slot. A category the
    /// sign map does not know falls back to the span sign (best-effort,
    /// matching the gap policy for malformed input).
    fn group_rows<'a>(
        primitives: &'a [BarPrimitive],
        signs: &SignMap,
    ) -> IndexMap<&'a str, Row<'a>> {
        let mut rows: IndexMap<&str, Row<'_>> = IndexMap::new();
        for p in primitives {
            let row = rows.entry(p.bucket_label.as_str()).or_default();
            let sign = signs.sign_for(&p.category).unwrap_or(if p.span_end < 0 {
                Sign::Negative
            } else {
                Sign::Positive
            });
            match sign {
                Sign::Negative => row.left = Some(p),
                Sign::Positive => row.right = Some(p),
            }
        }
        rows
    }

    /// Legend entries follow the sign map's assignment order and list only
    /// assigned categories that actually appear in the primitives.
    fn legend(&self, view: &PyramidView<'_>) -> Option<String> {
        let parts: Vec<String> = view
            .signs
            .categories()
            .filter(|(cat, _)| view.primitives.iter().any(|p| p.category == *cat))
            .map(|(cat, sign)| {
                let color = match sign {
                    Sign::Negative => view.style.left_color,
                    Sign::Positive => view.style.right_color,
                };
                let block = self.colorize(&LEGEND_BLOCK.to_string(), color);
                format!("{block} {cat}")
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("   "))
        }
    }
}

/// Scale an absolute span onto [0, `SIDE_WIDTH`] cells, rounding to nearest.
fn scaled(span: i64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    let cells = (span.unsigned_abs() * SIDE_WIDTH as u64 + max / 2) / max;
    usize::try_from(cells).unwrap_or(SIDE_WIDTH)
}

impl ChartFormatter for TextFormatter {
    fn format(&self, view: &PyramidView<'_>) -> Result<String> {
        let mut output = String::new();

        if view.primitives.is_empty() {
            output.push_str("(no data)\n");
            return Ok(output);
        }

        let rows = Self::group_rows(view.primitives, view.signs);
        let max = view
            .primitives
            .iter()
            .map(|p| p.span_end.unsigned_abs())
            .max()
            .unwrap_or(0);
        let label_width = rows.keys().map(|l| l.len()).max().unwrap_or(0);
        let bar_height = view.style.bar_height.max(1);
        // Label sits on the middle repetition when bars are thicker than one row.
        let label_row = usize::from((bar_height - 1) / 2);

        if let Some(legend) = self.legend(view) {
            writeln!(output, "{:>width$}", legend, width = SIDE_WIDTH + 1).ok();
        }

        for (label, row) in &rows {
            let left_cells = row.left.map_or(0, |p| scaled(p.span_end, max));
            let right_cells = row.right.map_or(0, |p| scaled(p.span_end, max));

            for repeat in 0..usize::from(bar_height) {
                let left_bar = BAR_CHAR.to_string().repeat(left_cells);
                let right_bar = BAR_CHAR.to_string().repeat(right_cells);

                output.push_str(&" ".repeat(SIDE_WIDTH - left_cells));
                output.push_str(&self.colorize(&left_bar, view.style.left_color));
                output.push(' ');
                if repeat == label_row {
                    write!(output, "{label:^label_width$}").ok();
                } else {
                    output.push_str(&" ".repeat(label_width));
                }
                output.push(' ');
                output.push_str(&self.colorize(&right_bar, view.style.right_color));
                output.push('\n');
            }
        }

        let signed_max = i64::try_from(max).unwrap_or(i64::MAX);
        let left_tick = axis_label(-signed_max);
        let zero_tick = axis_label(0);
        let right_tick = axis_label(signed_max);
        writeln!(
            output,
            "{left_tick:<SIDE_WIDTH$} {zero_tick:^label_width$} {right_tick:>SIDE_WIDTH$}"
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
