//! Horizontal rules and vertical column separators
//!
//! Horizontal boundaries are numbered `0..=rows`: boundary `b` sits above
//! row `b`, so boundary `rows` is below the last row. Vertical boundaries
//! are numbered the same way across columns.

use std::collections::BTreeMap;

use super::table::Table;
use crate::core::range::{Axis, Range, Selector};
use crate::utils::error::{TableError, TableResult};

/// Which ends of a booktabs rule are shortened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trim {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl Trim {
    /// `cmidrule` trim argument, e.g. `(lr)`
    pub fn arg(&self) -> &'static str {
        match self {
            Trim::None => "",
            Trim::Left => "(l)",
            Trim::Right => "(r)",
            Trim::Both => "(lr)",
        }
    }
}

/// Rule family used for a horizontal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleKind {
    /// `\hline` / `\cline`
    #[default]
    Plain,
    /// `\toprule`, `\midrule`, `\bottomrule` / `\cmidrule`
    Booktabs,
}

/// Style of a horizontal line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub kind: RuleKind,
    /// Number of stacked rules
    pub count: usize,
    pub trim: Trim,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::single()
    }
}

impl LineStyle {
    pub fn single() -> Self {
        Self {
            kind: RuleKind::Plain,
            count: 1,
            trim: Trim::None,
        }
    }

    pub fn double() -> Self {
        Self {
            count: 2,
            ..Self::single()
        }
    }

    pub fn booktabs() -> Self {
        Self {
            kind: RuleKind::Booktabs,
            ..Self::single()
        }
    }

    /// Shorten the rule ends; only booktabs rules support trimming
    pub fn trimmed(mut self, trim: Trim) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Vertical separator between columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VLine {
    #[default]
    Single,
    Double,
}

impl VLine {
    /// Column-spec token
    pub fn token(&self) -> &'static str {
        match self {
            VLine::Single => "|",
            VLine::Double => "||",
        }
    }
}

/// All registered lines of a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Borders {
    /// `(boundary, col)` to the segment style spanning that column
    pub(crate) horizontal: BTreeMap<(usize, usize), LineStyle>,
    /// Column boundary to separator
    pub(crate) vertical: BTreeMap<usize, VLine>,
}

impl Borders {
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    /// Segment style on horizontal boundary `boundary` over column `col`
    pub fn horizontal_at(&self, boundary: usize, col: usize) -> Option<LineStyle> {
        self.horizontal.get(&(boundary, col)).copied()
    }

    pub fn vertical_at(&self, boundary: usize) -> Option<VLine> {
        self.vertical.get(&boundary).copied()
    }

    /// Horizontal boundaries carrying at least one segment, ascending
    pub fn horizontal_boundaries(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.horizontal.keys().map(|&(b, _)| b).collect();
        out.dedup();
        out
    }

    /// Largest horizontal boundary in use
    pub fn max_horizontal(&self) -> Option<usize> {
        self.horizontal.keys().map(|&(b, _)| b).max()
    }

    pub fn max_vertical(&self) -> Option<usize> {
        self.vertical.keys().copied().max()
    }
}

/// A border registration
///
/// `style: None` removes a previously registered line.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderSpec {
    Horizontal {
        boundary: usize,
        cols: Selector,
        style: Option<LineStyle>,
    },
    Vertical {
        boundary: usize,
        style: Option<VLine>,
    },
}

impl BorderSpec {
    /// Full-width single rule on `boundary`
    pub fn hline(boundary: usize) -> Self {
        BorderSpec::Horizontal {
            boundary,
            cols: Selector::All,
            style: Some(LineStyle::single()),
        }
    }

    pub fn vline(boundary: usize) -> Self {
        BorderSpec::Vertical {
            boundary,
            style: Some(VLine::Single),
        }
    }
}

impl Table {
    /// Register or clear a line; the latest registration on an edge wins
    ///
    /// Column selections are checked now. The boundary itself is checked
    /// when rendering, since rows may still be appended.
    pub fn add_border(&mut self, spec: BorderSpec) -> TableResult<()> {
        match spec {
            BorderSpec::Horizontal {
                boundary,
                cols,
                style,
            } => {
                let cols = cols.indices(Axis::Column, self.n_cols)?;
                if let Some(LineStyle { count: 0, .. }) = style {
                    return Err(TableError::invalid("line count must be at least 1"));
                }
                for c in cols {
                    match style {
                        Some(s) => self.borders.horizontal.insert((boundary, c), s),
                        None => self.borders.horizontal.remove(&(boundary, c)),
                    };
                }
                log::debug!("horizontal border on boundary {}: {:?}", boundary, style);
            }
            BorderSpec::Vertical { boundary, style } => {
                match style {
                    Some(s) => self.borders.vertical.insert(boundary, s),
                    None => self.borders.vertical.remove(&boundary),
                };
                log::debug!("vertical border on boundary {}: {:?}", boundary, style);
            }
        }
        Ok(())
    }

    /// Draw a line under the last row of `range`, spanning its columns
    pub fn line_below(&mut self, range: impl Into<Range>, style: LineStyle) -> TableResult<()> {
        let (rows, cols) = self.line_extent(range.into())?;
        match rows.last() {
            Some(&last) => self.add_border(BorderSpec::Horizontal {
                boundary: last + 1,
                cols: Selector::List(cols),
                style: Some(style),
            }),
            None => Ok(()),
        }
    }

    /// Draw a line over the first row of `range`, spanning its columns
    pub fn line_above(&mut self, range: impl Into<Range>, style: LineStyle) -> TableResult<()> {
        let (rows, cols) = self.line_extent(range.into())?;
        match rows.first() {
            Some(&first) => self.add_border(BorderSpec::Horizontal {
                boundary: first,
                cols: Selector::List(cols),
                style: Some(style),
            }),
            None => Ok(()),
        }
    }

    /// Separator on the right edge of column `col`
    pub fn vline_after(&mut self, col: usize, style: VLine) -> TableResult<()> {
        if col >= self.n_cols {
            return Err(TableError::index(Axis::Column, col, self.n_cols));
        }
        self.add_border(BorderSpec::Vertical {
            boundary: col + 1,
            style: Some(style),
        })
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Sorted rows and columns covered by `range`
    fn line_extent(&self, range: Range) -> TableResult<(Vec<usize>, Vec<usize>)> {
        let (row_sel, col_sel) = range.selectors();
        let mut rows = row_sel.indices(Axis::Row, self.n_rows)?;
        let mut cols = col_sel.indices(Axis::Column, self.n_cols)?;
        rows.sort_unstable();
        cols.sort_unstable();
        cols.dedup();
        Ok((rows, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    fn grid() -> Table {
        Table::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_line_below_row() {
        let mut t = grid();
        t.line_below(Range::row(0), LineStyle::single()).unwrap();
        assert_eq!(t.borders().horizontal_boundaries(), vec![1]);
        for c in 0..3 {
            assert_eq!(t.borders().horizontal_at(1, c), Some(LineStyle::single()));
        }
    }

    #[test]
    fn test_line_above_partial() {
        let mut t = grid();
        t.line_above(Range::region(1, 1..3), LineStyle::booktabs())
            .unwrap();
        assert_eq!(t.borders().horizontal_at(1, 0), None);
        assert_eq!(t.borders().horizontal_at(1, 2), Some(LineStyle::booktabs()));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut t = grid();
        t.add_border(BorderSpec::hline(0)).unwrap();
        t.add_border(BorderSpec::Horizontal {
            boundary: 0,
            cols: Selector::Index(1),
            style: Some(LineStyle::double()),
        })
        .unwrap();
        assert_eq!(t.borders().horizontal_at(0, 0), Some(LineStyle::single()));
        assert_eq!(t.borders().horizontal_at(0, 1), Some(LineStyle::double()));

        t.add_border(BorderSpec::Horizontal {
            boundary: 0,
            cols: Selector::All,
            style: None,
        })
        .unwrap();
        assert!(t.borders().is_empty());
    }

    #[test]
    fn test_vertical_lines() {
        let mut t = grid();
        t.vline_after(0, VLine::Double).unwrap();
        t.add_border(BorderSpec::vline(0)).unwrap();
        assert_eq!(t.borders().vertical_at(1), Some(VLine::Double));
        assert_eq!(t.borders().vertical_at(0), Some(VLine::Single));
        assert_eq!(t.vline_after(3, VLine::Single).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn test_boundary_checked_later() {
        let mut t = grid();
        // recorded now, rejected by the renderer
        t.add_border(BorderSpec::hline(9)).unwrap();
        assert_eq!(t.borders().max_horizontal(), Some(9));

        let bad = BorderSpec::Horizontal {
            boundary: 0,
            cols: Selector::Index(7),
            style: Some(LineStyle::single()),
        };
        assert_eq!(t.add_border(bad).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut t = grid();
        let err = t
            .line_below(Range::row(0), LineStyle::single().with_count(0))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
