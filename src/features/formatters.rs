//! Number formats for cell values
//!
//! A [`NumberFormat`] turns a cell value into its display text. Formats
//! compose: significance stars wrap whatever format the cell had before.
//!
//! ```rust
//! use textable::formatters::{NumberFormat, StarSide};
//! use textable::CellValue;
//!
//! let fmt = NumberFormat::Fixed(3).with_stars(StarSide::Right, vec![0.1, 0.05, 0.01]);
//! assert_eq!(fmt.format(&CellValue::Float(0.042)).unwrap(), "0.042**");
//! ```

use crate::core::model::CellValue;

/// Default significance levels for [`NumberFormat::Stars`]
pub const DEFAULT_STAR_LEVELS: [f64; 3] = [0.1, 0.05, 0.01];

/// Which side of the value the stars go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarSide {
    #[default]
    Left,
    Right,
}

/// How a cell value is turned into text
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumberFormat {
    /// The value's natural display form
    #[default]
    Plain,
    /// Integer with comma thousands separators (fractional part dropped)
    Thousands,
    /// Fixed number of digits after the decimal point
    Fixed(usize),
    /// Significance stars around the inner format
    Stars {
        side: StarSide,
        levels: Vec<f64>,
        inner: Box<NumberFormat>,
    },
}

impl NumberFormat {
    /// Wrap this format with significance stars
    pub fn with_stars(self, side: StarSide, levels: Vec<f64>) -> Self {
        NumberFormat::Stars {
            side,
            levels,
            inner: Box::new(self),
        }
    }

    /// Whether this format needs a numeric value
    pub fn is_numeric(&self) -> bool {
        !matches!(self, NumberFormat::Plain)
    }

    /// Format `value`, or `None` when a numeric format meets a non-numeric value
    pub fn format(&self, value: &CellValue) -> Option<String> {
        if value.is_empty() {
            return Some(String::new());
        }
        match self {
            NumberFormat::Plain => Some(value.to_string()),
            NumberFormat::Thousands => value.as_f64().map(|v| format_thousands(v.trunc() as i64)),
            NumberFormat::Fixed(digits) => value.as_f64().map(|v| format!("{:.*}", digits, v)),
            NumberFormat::Stars {
                side,
                levels,
                inner,
            } => {
                let v = value.as_f64()?;
                let stars = "*".repeat(star_count(v, levels));
                let body = inner.format(value)?;
                Some(match side {
                    StarSide::Left => format!("{}{}", stars, body),
                    StarSide::Right => format!("{}{}", body, stars),
                })
            }
        }
    }
}

/// Group an integer's digits in thousands: `1234567` -> `1,234,567`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Number of significance levels `value` clears, from the loosest down
fn star_count(value: f64, levels: &[f64]) -> usize {
    let mut sorted = levels.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.iter().take_while(|&&level| value <= level).count()
}
