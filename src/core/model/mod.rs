//! Table data model
//!
//! - `value`: cell values and row sources
//! - `style`: per-cell style attributes
//! - `table`: the grid itself
//! - `merge`: merged regions
//! - `border`: horizontal rules and vertical separators
//! - `layout`: environment kind, floats, long tables and notes

pub mod border;
pub mod layout;
pub mod merge;
pub mod style;
pub mod table;
pub mod value;

pub use border::{BorderSpec, Borders, LineStyle, RuleKind, Trim, VLine};
pub use layout::{
    Environment, FloatOptions, Location, LongOptions, Notes, Presentation, TabularKind,
};
pub use merge::{MergeOptions, MergeSpec};
pub use style::{CellAlign, CellStyle, Color, FontSize, Length, Style, StyleAttr};
pub use table::{Cell, Table};
pub use value::{CellValue, RowSource};
