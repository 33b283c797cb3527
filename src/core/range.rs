//! Range addressing and resolution
//!
//! A [`Range`] names a group of cells (one cell, a row, a column, a
//! rectangular region, or the whole table). Resolving it against a table
//! shape yields the concrete coordinates in row-major order.
//!
//! ```rust
//! use textable::{CellPos, Range};
//!
//! let cells = Range::region(0..2, 1..).resolve((3, 3)).unwrap();
//! assert_eq!(cells.len(), 4);
//! assert!(cells.contains(&CellPos::new(1, 2)));
//! ```

use std::fmt;
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use indexmap::IndexSet;

use crate::utils::error::{TableError, TableResult};

/// Table axis, used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Index selection along a single axis
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Every index on the axis
    #[default]
    All,
    /// A single index
    Index(usize),
    /// Half-open span `start..end`; `end: None` runs to the end of the axis
    Span { start: usize, end: Option<usize> },
    /// Explicit indices, kept in the given order
    List(Vec<usize>),
}

impl Selector {
    /// Expand into concrete indices, checking each against `len`
    pub fn indices(&self, axis: Axis, len: usize) -> TableResult<Vec<usize>> {
        match self {
            Selector::All => Ok((0..len).collect()),
            Selector::Index(i) => {
                check(axis, *i, len)?;
                Ok(vec![*i])
            }
            Selector::Span { start, end } => {
                let end = end.unwrap_or(len);
                if end > len {
                    return Err(TableError::index(axis, end - 1, len));
                }
                if *start > end {
                    return Err(TableError::index(axis, *start, len));
                }
                Ok((*start..end).collect())
            }
            Selector::List(list) => {
                for &i in list {
                    check(axis, i, len)?;
                }
                Ok(list.clone())
            }
        }
    }

    /// Expand into a contiguous `(start, count)` block, if the selection is one
    pub fn contiguous(&self, axis: Axis, len: usize) -> TableResult<Option<(usize, usize)>> {
        let indices = self.indices(axis, len)?;
        let Some(&first) = indices.first() else {
            return Ok(None);
        };
        let is_block = indices.iter().enumerate().all(|(k, &i)| i == first + k);
        Ok(is_block.then_some((first, indices.len())))
    }
}

fn check(axis: Axis, index: usize, len: usize) -> TableResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(TableError::index(axis, index, len))
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Index(i)
    }
}

impl From<std::ops::Range<usize>> for Selector {
    fn from(r: std::ops::Range<usize>) -> Self {
        Selector::Span {
            start: r.start,
            end: Some(r.end),
        }
    }
}

impl From<RangeFrom<usize>> for Selector {
    fn from(r: RangeFrom<usize>) -> Self {
        Selector::Span {
            start: r.start,
            end: None,
        }
    }
}

impl From<RangeTo<usize>> for Selector {
    fn from(r: RangeTo<usize>) -> Self {
        Selector::Span {
            start: 0,
            end: Some(r.end),
        }
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(r: RangeInclusive<usize>) -> Self {
        Selector::Span {
            start: *r.start(),
            end: r.end().checked_add(1),
        }
    }
}

impl From<RangeToInclusive<usize>> for Selector {
    fn from(r: RangeToInclusive<usize>) -> Self {
        Selector::Span {
            start: 0,
            end: r.end.checked_add(1),
        }
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::All
    }
}

impl From<Vec<usize>> for Selector {
    fn from(list: Vec<usize>) -> Self {
        Selector::List(list)
    }
}

impl From<&[usize]> for Selector {
    fn from(list: &[usize]) -> Self {
        Selector::List(list.to_vec())
    }
}

/// Addressing unit selecting one or more cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    /// A single cell
    Cell(CellPos),
    /// Every cell of one row
    Row(usize),
    /// Every cell of one column
    Column(usize),
    /// Cross product of a row selection and a column selection
    Region { rows: Selector, cols: Selector },
    /// The whole table
    All,
}

impl Range {
    pub fn cell(row: usize, col: usize) -> Self {
        Range::Cell(CellPos::new(row, col))
    }

    pub fn row(row: usize) -> Self {
        Range::Row(row)
    }

    pub fn column(col: usize) -> Self {
        Range::Column(col)
    }

    pub fn region(rows: impl Into<Selector>, cols: impl Into<Selector>) -> Self {
        Range::Region {
            rows: rows.into(),
            cols: cols.into(),
        }
    }

    pub fn all() -> Self {
        Range::All
    }

    /// Row and column selectors equivalent to this range
    pub fn selectors(&self) -> (Selector, Selector) {
        match self {
            Range::Cell(pos) => (Selector::Index(pos.row), Selector::Index(pos.col)),
            Range::Row(r) => (Selector::Index(*r), Selector::All),
            Range::Column(c) => (Selector::All, Selector::Index(*c)),
            Range::Region { rows, cols } => (rows.clone(), cols.clone()),
            Range::All => (Selector::All, Selector::All),
        }
    }

    /// Resolve against a `(rows, cols)` shape into concrete coordinates
    pub fn resolve(&self, shape: (usize, usize)) -> TableResult<IndexSet<CellPos>> {
        let (row_sel, col_sel) = self.selectors();
        let rows = row_sel.indices(Axis::Row, shape.0)?;
        let cols = col_sel.indices(Axis::Column, shape.1)?;

        let mut cells = IndexSet::with_capacity(rows.len() * cols.len());
        for &r in &rows {
            for &c in &cols {
                cells.insert(CellPos::new(r, c));
            }
        }
        Ok(cells)
    }

    /// Resolve into a contiguous rectangle `(anchor, row_span, col_span)`
    ///
    /// Returns `Ok(None)` when the range is empty or not a single block.
    pub fn rectangle(&self, shape: (usize, usize)) -> TableResult<Option<(CellPos, usize, usize)>> {
        let (row_sel, col_sel) = self.selectors();
        let rows = row_sel.contiguous(Axis::Row, shape.0)?;
        let cols = col_sel.contiguous(Axis::Column, shape.1)?;
        Ok(match (rows, cols) {
            (Some((r, nr)), Some((c, nc))) => Some((CellPos::new(r, c), nr, nc)),
            _ => None,
        })
    }
}

impl From<CellPos> for Range {
    fn from(pos: CellPos) -> Self {
        Range::Cell(pos)
    }
}

impl From<(usize, usize)> for Range {
    fn from((row, col): (usize, usize)) -> Self {
        Range::cell(row, col)
    }
}
