//! Combining tables side by side or on top of each other
//!
//! Cell values, styles and merges are carried over; borders and
//! presentation settings come from the first table.

use crate::core::model::{Cell, MergeSpec, Table};
use crate::core::range::CellPos;
use crate::utils::error::{TableError, TableResult};

/// Place `right` to the right of `left`; both need the same row count
pub fn hstack(left: &Table, right: &Table) -> TableResult<Table> {
    if left.row_count() != right.row_count() {
        return Err(TableError::invalid(format!(
            "cannot hstack tables with {} and {} rows",
            left.row_count(),
            right.row_count()
        )));
    }

    let rows: Vec<_> = (0..left.row_count())
        .map(|r| {
            let lhs = (0..left.col_count()).map(move |c| left.cell_at(CellPos::new(r, c)));
            let rhs = (0..right.col_count()).map(move |c| right.cell_at(CellPos::new(r, c)));
            lhs.chain(rhs).cloned().collect::<Vec<_>>()
        })
        .collect();

    let offset = left.col_count();
    let mut out = from_template(left, rows.concat(), left.row_count(), offset + right.col_count());
    out.column_aligns.extend(right.column_aligns().iter().cloned());
    out.merges.extend(right.merges().iter().map(|m| MergeSpec {
        anchor: CellPos::new(m.anchor.row, m.anchor.col + offset),
        ..*m
    }));
    out.warnings.extend(right.warnings().iter().cloned().map(|mut w| {
        if let Some(ref mut pos) = w.position {
            pos.col += offset;
        }
        w
    }));
    Ok(out)
}

/// Place `bottom` below `top`; both need the same column count
pub fn vstack(top: &Table, bottom: &Table) -> TableResult<Table> {
    if top.col_count() != bottom.col_count() {
        return Err(TableError::invalid(format!(
            "cannot vstack tables with {} and {} columns",
            top.col_count(),
            bottom.col_count()
        )));
    }

    let cells = top.cells.iter().chain(bottom.cells.iter()).cloned().collect();
    let offset = top.row_count();
    let mut out = from_template(top, cells, offset + bottom.row_count(), top.col_count());
    out.merges.extend(bottom.merges().iter().map(|m| MergeSpec {
        anchor: CellPos::new(m.anchor.row + offset, m.anchor.col),
        ..*m
    }));
    out.warnings.extend(bottom.warnings().iter().cloned().map(|mut w| {
        if let Some(ref mut pos) = w.position {
            pos.row += offset;
        }
        w
    }));
    Ok(out)
}

fn from_template(
    template: &Table,
    cells: Vec<Cell>,
    n_rows: usize,
    n_cols: usize,
) -> Table {
    let mut out = template.clone();
    out.cells = cells;
    out.n_rows = n_rows;
    out.n_cols = n_cols;
    log::debug!("stacked into {}x{} table", n_rows, n_cols);
    out
}
