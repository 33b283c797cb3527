//! Merged cell regions

use super::table::Table;
use super::value::CellValue;
use crate::core::range::{CellPos, Range};
use crate::utils::error::{TableError, TableResult};

/// A rectangular block rendered as one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpec {
    /// Top-left cell, the only one rendered
    pub anchor: CellPos,
    /// Number of rows spanned
    pub rows: usize,
    /// Number of columns spanned
    pub cols: usize,
}

impl MergeSpec {
    pub fn new(anchor: impl Into<CellPos>, rows: usize, cols: usize) -> TableResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(TableError::invalid(format!(
                "merge must span at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        let anchor = anchor.into();
        if anchor.row.checked_add(rows).is_none() || anchor.col.checked_add(cols).is_none() {
            return Err(TableError::invalid(format!(
                "merge of {}x{} at {} overflows the grid",
                rows, cols, anchor
            )));
        }
        Ok(Self { anchor, rows, cols })
    }

    /// One past the last row
    ///
    /// Saturates, so an oversized span never fits any table.
    pub fn end_row(&self) -> usize {
        self.anchor.row.saturating_add(self.rows)
    }

    /// One past the last column
    pub fn end_col(&self) -> usize {
        self.anchor.col.saturating_add(self.cols)
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        (self.anchor.row..self.end_row()).contains(&pos.row)
            && (self.anchor.col..self.end_col()).contains(&pos.col)
    }

    pub fn overlaps(&self, other: &MergeSpec) -> bool {
        self.anchor.row < other.end_row()
            && other.anchor.row < self.end_row()
            && self.anchor.col < other.end_col()
            && other.anchor.col < self.end_col()
    }

    /// Whether the region fits inside a `(rows, cols)` table
    pub fn fits(&self, shape: (usize, usize)) -> bool {
        self.end_row() <= shape.0 && self.end_col() <= shape.1
    }

    /// Whether a horizontal line at row `boundary` would cut through the region
    pub fn splits_boundary(&self, boundary: usize, col: usize) -> bool {
        self.anchor.row < boundary
            && boundary < self.end_row()
            && (self.anchor.col..self.end_col()).contains(&col)
    }

    /// Whether a vertical line at column `boundary` would cut through the region
    pub fn splits_column_boundary(&self, boundary: usize) -> bool {
        self.anchor.col < boundary && boundary < self.end_col()
    }
}

/// Merge behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Clear non-empty cells covered by the merge instead of failing
    pub force: bool,
}

impl MergeOptions {
    pub fn forced() -> Self {
        Self { force: true }
    }
}

impl Table {
    /// Merge a contiguous rectangular region into its top-left cell
    pub fn merge(&mut self, range: impl Into<Range>) -> TableResult<()> {
        self.merge_with(range, MergeOptions::default())
    }

    pub fn merge_with(&mut self, range: impl Into<Range>, options: MergeOptions) -> TableResult<()> {
        let range = range.into();
        let (anchor, rows, cols) = range.rectangle(self.shape())?.ok_or_else(|| {
            TableError::invalid(format!("{:?} is not a contiguous rectangular region", range))
        })?;
        let spec = MergeSpec::new(anchor, rows, cols)?;

        self.check_merge_conflicts(&spec)?;

        let covered: Vec<CellPos> = (spec.anchor.row..spec.end_row())
            .flat_map(|r| (spec.anchor.col..spec.end_col()).map(move |c| CellPos::new(r, c)))
            .filter(|&pos| pos != spec.anchor)
            .collect();

        if options.force {
            for &pos in &covered {
                self.cell_at_mut(pos).value = CellValue::Empty;
            }
        } else if let Some(&pos) = covered.iter().find(|&&pos| !self.cell_at(pos).is_empty()) {
            return Err(TableError::conflict(format!(
                "cannot merge over non-empty cell {}",
                pos
            )));
        }

        self.register_merge(spec);
        Ok(())
    }

    /// Register a merge by anchor and span
    ///
    /// Only the anchor is checked here; a span running past the table is
    /// reported when rendering, since rows may still be appended.
    pub fn merge_span(&mut self, spec: MergeSpec) -> TableResult<()> {
        Range::Cell(spec.anchor).resolve(self.shape())?;
        self.check_merge_conflicts(&spec)?;
        self.register_merge(spec);
        Ok(())
    }

    pub fn merges(&self) -> &[MergeSpec] {
        &self.merges
    }

    /// The merge covering `pos`, if any
    pub fn merge_at(&self, pos: CellPos) -> Option<&MergeSpec> {
        self.merges.iter().find(|m| m.contains(pos))
    }

    /// Whether `pos` lies inside a merge without being its anchor
    pub fn is_suppressed(&self, pos: CellPos) -> bool {
        self.merge_at(pos).is_some_and(|m| m.anchor != pos)
    }

    fn check_merge_conflicts(&self, spec: &MergeSpec) -> TableResult<()> {
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(spec)) {
            return Err(TableError::conflict(format!(
                "attempting to merge {}x{} at {} over existing {}x{} merge at {}",
                spec.rows, spec.cols, spec.anchor, existing.rows, existing.cols, existing.anchor
            )));
        }
        Ok(())
    }

    fn register_merge(&mut self, spec: MergeSpec) {
        log::debug!(
            "merged {}x{} region anchored at {}",
            spec.rows,
            spec.cols,
            spec.anchor
        );
        self.merges.push(spec);
    }
}
