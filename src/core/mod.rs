//! Core table modules
//!
//! - `range`: cell addressing and resolution
//! - `model`: the table, its cell styles, merges and borders
//! - `selection`: chained styling of a resolved range
//! - `emitter`: LaTeX serialization

pub mod emitter;
pub mod model;
pub mod range;
pub mod selection;

pub use emitter::{render, render_with_options, RenderOptions};
pub use model::{Cell, CellValue, Table};
pub use range::{Axis, CellPos, Range, Selector};
pub use selection::Selection;
