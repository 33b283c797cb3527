//! Chained styling of a resolved range
//!
//! ```rust
//! use textable::{Color, Range, Table};
//!
//! let mut table = Table::new(vec![vec!["Name", "Score"], vec!["ada", "0.91"]]).unwrap();
//! table
//!     .select(Range::row(0))
//!     .unwrap()
//!     .bold(true)
//!     .background(Color::new("gray").unwrap().with_opacity(30).unwrap())
//!     .line_below_default()
//!     .unwrap();
//! table.select(Range::cell(1, 1)).unwrap().digits(1);
//!
//! let latex = table.to_latex().unwrap();
//! assert!(latex.contains("\\cellcolor{gray!30} \\textbf{Name}"));
//! assert!(latex.contains("0.9"));
//! ```

use indexmap::IndexSet;

use crate::core::model::{
    CellAlign, Color, FontSize, Length, LineStyle, MergeOptions, Style, Table,
};
use crate::core::range::{CellPos, Range};
use crate::features::formatters::{NumberFormat, StarSide};
use crate::utils::error::TableResult;

/// A range resolved against a table, ready for styling
///
/// Every setter overwrites one attribute on every selected cell, in call order.
pub struct Selection<'a> {
    table: &'a mut Table,
    range: Range,
    cells: IndexSet<CellPos>,
}

impl Table {
    /// Resolve `range` now and return a handle for chained styling
    pub fn select(&mut self, range: impl Into<Range>) -> TableResult<Selection<'_>> {
        let range = range.into();
        let cells = range.resolve(self.shape())?;
        Ok(Selection {
            table: self,
            range,
            cells,
        })
    }
}

impl<'a> Selection<'a> {
    /// Selected coordinates in row-major order
    pub fn cells(&self) -> &IndexSet<CellPos> {
        &self.cells
    }

    pub fn range(&self) -> &Range {
        &self.range
    }

    /// Apply any single attribute
    pub fn style(&mut self, style: Style) -> TableResult<&mut Self> {
        self.table.apply_resolved(&self.cells, style)?;
        Ok(self)
    }

    fn set(&mut self, style: Style) -> &mut Self {
        self.table.set_resolved(&self.cells, style);
        self
    }

    pub fn bold(&mut self, on: bool) -> &mut Self {
        self.set(Style::Bold(on))
    }

    pub fn italic(&mut self, on: bool) -> &mut Self {
        self.set(Style::Italic(on))
    }

    pub fn underline(&mut self, on: bool) -> &mut Self {
        self.set(Style::Underline(on))
    }

    /// Rotate by `angle` degrees (0 to 360)
    pub fn rotate(&mut self, angle: u16) -> TableResult<&mut Self> {
        self.style(Style::Rotation(Some(angle)))
    }

    pub fn font_size(&mut self, size: FontSize) -> &mut Self {
        self.set(Style::FontSize(Some(size)))
    }

    pub fn space_above(&mut self, space: Length) -> &mut Self {
        self.set(Style::SpaceAbove(Some(space)))
    }

    pub fn space_below(&mut self, space: Length) -> &mut Self {
        self.set(Style::SpaceBelow(Some(space)))
    }

    pub fn text_color(&mut self, color: Color) -> &mut Self {
        self.set(Style::TextColor(Some(color)))
    }

    pub fn background(&mut self, color: Color) -> &mut Self {
        self.set(Style::Background(Some(color)))
    }

    pub fn align(&mut self, align: CellAlign) -> &mut Self {
        self.set(Style::Align(Some(align)))
    }

    pub fn number_format(&mut self, format: NumberFormat) -> &mut Self {
        self.set(Style::Format(format))
    }

    /// Fixed number of decimal digits
    pub fn digits(&mut self, digits: usize) -> &mut Self {
        self.number_format(NumberFormat::Fixed(digits))
    }

    /// Thousands separators
    pub fn thousands(&mut self) -> &mut Self {
        self.number_format(NumberFormat::Thousands)
    }

    /// Add significance stars around each cell's current format
    pub fn stars(&mut self, side: StarSide, levels: &[f64]) -> &mut Self {
        log::debug!("adding stars to {} cell(s)", self.cells.len());
        self.table.update_resolved(&self.cells, |style| {
            let inner = std::mem::take(&mut style.format);
            style.format = inner.with_stars(side, levels.to_vec());
        });
        self
    }

    /// Merge the selection; it must be a contiguous rectangle
    pub fn merge(&mut self, force: bool) -> TableResult<&mut Self> {
        self.table
            .merge_with(self.range.clone(), MergeOptions { force })?;
        Ok(self)
    }

    pub fn line_below(&mut self, style: LineStyle) -> TableResult<&mut Self> {
        self.table.line_below(self.range.clone(), style)?;
        Ok(self)
    }

    /// Single rule below the selection
    pub fn line_below_default(&mut self) -> TableResult<&mut Self> {
        self.line_below(LineStyle::single())
    }

    pub fn line_above(&mut self, style: LineStyle) -> TableResult<&mut Self> {
        self.table.line_above(self.range.clone(), style)?;
        Ok(self)
    }

    pub fn remove_characters(&mut self, chars: Option<&str>) -> &mut Self {
        self.table.remove_characters_resolved(&self.cells, chars);
        self
    }

    pub fn escape_special(&mut self) -> &mut Self {
        self.table.escape_special_resolved(&self.cells);
        self
    }
}
