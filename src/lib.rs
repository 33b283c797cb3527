//! # textable
//!
//! Build a table from rows of values, style it region by region, and emit
//! LaTeX source for it.
//!
//! ## Features
//!
//! - **Range addressing**: single cells, rows, columns, slices and index lists
//! - **Cell styling**: bold, italic, underline, rotation, font size, colors,
//!   alignment, row spacing and number formats
//! - **Merged cells**: `\multicolumn` / `\multirow` spans with conflict checks
//! - **Rules**: full and partial `\hline`/`\cline`, booktabs rules and
//!   vertical separators
//! - **Presentation**: floating tables, long tables with repeated headers,
//!   table notes and extra wrapping environments
//! - **WASM Support**: `render_rows` binding behind the `wasm` feature
//!
//! ## Usage
//!
//! ```rust
//! use textable::{Color, LineStyle, Range, Style, Table};
//!
//! let mut table = Table::new(vec![
//!     vec!["Model", "Accuracy", "Params"],
//!     vec!["small", "0.912", "12"],
//!     vec!["large", "0.948", "340"],
//! ])
//! .unwrap();
//!
//! table.apply(Range::row(0), Style::Bold(true)).unwrap();
//! table
//!     .apply(Range::row(0), Style::Background(Some(Color::new("gray").unwrap())))
//!     .unwrap();
//! table.line_below(Range::row(0), LineStyle::single()).unwrap();
//! // merging over non-empty cells needs `merge_with(.., MergeOptions::forced())`
//! assert!(table.merge(Range::region(2..3, 1..3)).is_err());
//!
//! let latex = table.to_latex().unwrap();
//! assert!(latex.starts_with("\\begin{tabular}"));
//! assert!(latex.contains("\\cellcolor{gray} \\textbf{Model}"));
//! ```

/// Core modules: ranges, the table model, selections and the emitter
pub mod core;

/// Data layer - special characters, packages and color names
pub mod data;

/// Feature modules - number formats, stacking, data loading
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core API
pub use core::emitter::{render, render_with_options, RenderOptions};
pub use core::model::{
    BorderSpec, Borders, Cell, CellAlign, CellStyle, CellValue, Color, Environment,
    FloatOptions, FontSize, Length, LineStyle, Location, LongOptions, MergeOptions, MergeSpec,
    Notes, Presentation, RowSource, RuleKind, Style, StyleAttr, Table, TabularKind, Trim, VLine,
};
pub use core::range::{Axis, CellPos, Range, Selector};
pub use core::selection::Selection;

// Re-export data and feature modules
pub use data::colors;
pub use data::constants;
pub use data::tex_preamble;
pub use features::formatters;
pub use features::stack::{hstack, vstack};

#[cfg(feature = "data-loading")]
pub use features::sources;

// Re-export utilities
pub use utils::error::{ErrorKind, RenderOutput, TableError, TableResult, TableWarning};

#[cfg(not(target_arch = "wasm32"))]
pub use utils::files::write_tex;

/// Render nested rows straight to LaTeX with default settings
///
/// Shorthand for `Table::new(rows)?.to_latex()`.
pub fn rows_to_latex<S: RowSource>(rows: S) -> TableResult<String> {
    Table::new(rows)?.to_latex()
}
