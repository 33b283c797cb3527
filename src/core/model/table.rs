//! The table model: a rectangular grid of styled cells

use indexmap::IndexSet;

use super::border::Borders;
use super::layout::{Environment, FloatOptions, LongOptions, Notes, Presentation, TabularKind};
use super::merge::MergeSpec;
use super::style::{CellAlign, CellStyle, FontSize, Style};
use super::value::{CellValue, RowSource};
use crate::core::range::{Axis, CellPos, Range};
use crate::data::colors::is_color_expression;
use crate::data::constants::{escape_latex, SPECIAL_CHAR_PATTERN};
use crate::utils::error::{TableError, TableResult, TableWarning};

/// A single table cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
            style: CellStyle::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Rectangular table of styled cells plus merge, border and layout state
///
/// A `Table` is owned by one caller at a time; mutation requires `&mut`.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) n_rows: usize,
    pub(crate) n_cols: usize,
    /// Row-major cell storage
    pub(crate) cells: Vec<Cell>,
    pub(crate) merges: Vec<MergeSpec>,
    pub(crate) borders: Borders,
    /// Default alignment of each column
    pub(crate) column_aligns: Vec<CellAlign>,
    /// Raw column specification overriding `column_aligns`
    pub(crate) column_spec: Option<String>,
    pub(crate) kind: TabularKind,
    pub(crate) presentation: Presentation,
    pub(crate) notes: Notes,
    /// Wrapping environments, innermost first
    pub(crate) environments: Vec<Environment>,
    pub(crate) warnings: Vec<TableWarning>,
}

impl Table {
    /// Build a table from any row source
    ///
    /// All rows must have the same length.
    pub fn new<S: RowSource>(source: S) -> TableResult<Self> {
        let rows = source.into_rows();
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(TableError::invalid(format!(
                "rows must have equal length: row {} has {} cells, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }

        let cells = rows.into_iter().flatten().map(Cell::new).collect();
        let mut table = Table {
            n_rows,
            n_cols,
            cells,
            merges: Vec::new(),
            borders: Borders::default(),
            column_aligns: vec![CellAlign::Center; n_cols],
            column_spec: None,
            kind: TabularKind::default(),
            presentation: Presentation::default(),
            notes: Notes::default(),
            environments: Vec::new(),
            warnings: Vec::new(),
        };

        for r in 0..n_rows {
            for c in 0..n_cols {
                table.check_special_chars(CellPos::new(r, c));
            }
        }

        log::debug!("created {}x{} table", n_rows, n_cols);
        Ok(table)
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn row_count(&self) -> usize {
        self.n_rows
    }

    pub fn col_count(&self) -> usize {
        self.n_cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.n_rows && col < self.n_cols {
            self.cells.get(row * self.n_cols + col)
        } else {
            None
        }
    }

    pub(crate) fn cell_at(&self, pos: CellPos) -> &Cell {
        &self.cells[pos.row * self.n_cols + pos.col]
    }

    pub(crate) fn cell_at_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.cells[pos.row * self.n_cols + pos.col]
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cell(row, col).map(|c| &c.value)
    }

    pub fn style(&self, row: usize, col: usize) -> Option<&CellStyle> {
        self.cell(row, col).map(|c| &c.style)
    }

    /// Replace the value of one cell, keeping its style
    pub fn set_value(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<CellValue>,
    ) -> TableResult<()> {
        let pos = self.checked_pos(row, col)?;
        self.cell_at_mut(pos).value = value.into();
        self.check_special_chars(pos);
        Ok(())
    }

    /// Append a row of the same width
    pub fn push_row<I, T>(&mut self, values: I) -> TableResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let row: Vec<Cell> = values.into_iter().map(Cell::new).collect();
        if row.len() != self.n_cols {
            return Err(TableError::invalid(format!(
                "row has {} cells, expected {}",
                row.len(),
                self.n_cols
            )));
        }
        self.cells.extend(row);
        self.n_rows += 1;
        for c in 0..self.n_cols {
            self.check_special_chars(CellPos::new(self.n_rows - 1, c));
        }
        Ok(())
    }

    /// Values in row-major order, without styles
    pub fn values(&self) -> Vec<Vec<CellValue>> {
        if self.n_cols == 0 {
            return vec![Vec::new(); self.n_rows];
        }
        self.cells
            .chunks(self.n_cols)
            .map(|row| row.iter().map(|c| c.value.clone()).collect())
            .collect()
    }

    fn checked_pos(&self, row: usize, col: usize) -> TableResult<CellPos> {
        if row >= self.n_rows {
            return Err(TableError::index(Axis::Row, row, self.n_rows));
        }
        if col >= self.n_cols {
            return Err(TableError::index(Axis::Column, col, self.n_cols));
        }
        Ok(CellPos::new(row, col))
    }

    // === Styles ===

    /// Resolve `range` and overwrite `style`'s attribute on every cell in it
    pub fn apply(&mut self, range: impl Into<Range>, style: Style) -> TableResult<()> {
        let cells = range.into().resolve(self.shape())?;
        self.apply_resolved(&cells, style)
    }

    pub(crate) fn apply_resolved(
        &mut self,
        cells: &IndexSet<CellPos>,
        style: Style,
    ) -> TableResult<()> {
        style.validate()?;
        self.set_resolved(cells, style);
        Ok(())
    }

    /// Like `apply_resolved`, for styles that cannot fail validation
    pub(crate) fn set_resolved(&mut self, cells: &IndexSet<CellPos>, style: Style) {
        self.check_color(&style);
        log::debug!("applying {:?} to {} cell(s)", style.attr(), cells.len());
        for &pos in cells {
            self.cell_at_mut(pos).style.set(style.clone());
        }
    }

    /// Rewrite each resolved cell's style through `f`
    pub(crate) fn update_resolved<F>(&mut self, cells: &IndexSet<CellPos>, mut f: F)
    where
        F: FnMut(&mut CellStyle),
    {
        for &pos in cells {
            f(&mut self.cell_at_mut(pos).style);
        }
    }

    // === Content cleanup ===

    /// Remove characters from text cells; `None` removes every LaTeX special character
    pub fn remove_characters(
        &mut self,
        range: impl Into<Range>,
        chars: Option<&str>,
    ) -> TableResult<()> {
        let cells = range.into().resolve(self.shape())?;
        self.remove_characters_resolved(&cells, chars);
        Ok(())
    }

    pub(crate) fn remove_characters_resolved(
        &mut self,
        cells: &IndexSet<CellPos>,
        chars: Option<&str>,
    ) {
        for &pos in cells {
            let cell = self.cell_at_mut(pos);
            if let CellValue::Text(text) = &cell.value {
                let cleaned = match chars {
                    Some(set) => text.chars().filter(|c| !set.contains(*c)).collect(),
                    None => SPECIAL_CHAR_PATTERN.replace_all(text, "").into_owned(),
                };
                cell.value = CellValue::text(cleaned);
            }
            self.check_special_chars(pos);
        }
    }

    /// Escape LaTeX special characters in text cells
    pub fn escape_special(&mut self, range: impl Into<Range>) -> TableResult<()> {
        let cells = range.into().resolve(self.shape())?;
        self.escape_special_resolved(&cells);
        Ok(())
    }

    pub(crate) fn escape_special_resolved(&mut self, cells: &IndexSet<CellPos>) {
        for &pos in cells {
            let cell = self.cell_at_mut(pos);
            if let CellValue::Text(text) = &cell.value {
                cell.value = CellValue::Text(escape_latex(text));
            }
        }
        self.warnings
            .retain(|w| w.position.map_or(true, |p| !cells.contains(&p)));
    }

    // === Columns and presentation ===

    /// Default alignment of one column
    pub fn set_column_align(&mut self, col: usize, align: CellAlign) -> TableResult<()> {
        if col >= self.n_cols {
            return Err(TableError::index(Axis::Column, col, self.n_cols));
        }
        self.column_aligns[col] = align;
        Ok(())
    }

    pub fn column_aligns(&self) -> &[CellAlign] {
        &self.column_aligns
    }

    /// Use a raw column specification such as `p{3cm}ll`
    pub fn set_column_spec(&mut self, spec: impl Into<String>) {
        self.column_spec = Some(spec.into());
    }

    pub fn column_spec(&self) -> Option<&str> {
        self.column_spec.as_deref()
    }

    pub fn set_kind(&mut self, kind: TabularKind) {
        self.kind = kind;
    }

    pub fn kind(&self) -> TabularKind {
        self.kind
    }

    /// Place the table in a floating `table` environment
    pub fn set_float(&mut self, options: FloatOptions) {
        self.presentation = Presentation::Float(options);
    }

    /// Render as a page-breaking table
    pub fn set_long(&mut self, options: LongOptions) {
        self.presentation = Presentation::Long(options);
    }

    pub fn set_inline(&mut self) {
        self.presentation = Presentation::Inline;
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Add a footnote below the table; the last size given wins
    pub fn add_note(&mut self, note: impl Into<String>, size: FontSize) {
        self.notes.items.push(note.into());
        self.notes.size = size;
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Wrap the output in another environment
    ///
    /// With `prepend`, the environment becomes the innermost wrapper.
    pub fn add_environment(&mut self, env: Environment, prepend: bool) {
        if prepend {
            self.environments.insert(0, env);
        } else {
            self.environments.push(env);
        }
    }

    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    pub fn warnings(&self) -> &[TableWarning] {
        &self.warnings
    }

    // === Warnings ===

    fn check_special_chars(&mut self, pos: CellPos) {
        self.warnings.retain(|w| w.position != Some(pos));
        let Some(text) = self.cell_at(pos).value.as_text() else {
            return;
        };
        if let Some(found) = SPECIAL_CHAR_PATTERN.find(text) {
            let warning = TableWarning::at(
                format!("special character \"{}\" found", found.as_str()),
                pos,
            )
            .with_suggestion("special characters may cause LaTeX errors, use remove_characters() or escape_special()");
            log::warn!("{}", warning);
            self.warnings.push(warning);
        }
    }

    fn check_color(&mut self, style: &Style) {
        let color = match style {
            Style::TextColor(Some(c)) | Style::Background(Some(c)) => c,
            _ => return,
        };
        if !is_color_expression(color.name()) {
            let warning = TableWarning::new(format!("color \"{}\" not in default", color.name()))
                .with_suggestion("check name");
            if !self.warnings.contains(&warning) {
                log::warn!("{}", warning);
                self.warnings.push(warning);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    fn grid() -> Table {
        Table::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Table::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_shape_and_values() {
        let table = grid();
        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.value(1, 2), Some(&CellValue::Int(6)));
        assert_eq!(table.value(3, 0), None);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Vec::<Vec<i32>>::new()).unwrap();
        assert_eq!(table.shape(), (0, 0));
    }

    #[test]
    fn test_last_write_wins_per_attribute() {
        let mut table = grid();
        table
            .apply(Range::all(), Style::FontSize(Some(FontSize::Small)))
            .unwrap();
        table.apply(Range::row(0), Style::Bold(true)).unwrap();
        table
            .apply(Range::cell(0, 0), Style::FontSize(Some(FontSize::Huge)))
            .unwrap();
        // broad directive issued last still wins
        table
            .apply(Range::all(), Style::FontSize(Some(FontSize::Tiny)))
            .unwrap();

        let style = table.style(0, 0).unwrap();
        assert_eq!(style.font_size, Some(FontSize::Tiny));
        assert!(style.bold);
        assert!(!table.style(1, 0).unwrap().bold);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut table = grid();
        let err = table.apply(Range::row(3), Style::Bold(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
        // nothing changed
        assert!(table.cells.iter().all(|c| !c.style.bold));
    }

    #[test]
    fn test_apply_rejects_bad_rotation() {
        let mut table = grid();
        let err = table
            .apply(Range::all(), Style::Rotation(Some(400)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_set_value_and_push_row() {
        let mut table = grid();
        table.set_value(0, 0, "Total").unwrap();
        assert_eq!(table.value(0, 0), Some(&CellValue::Text("Total".into())));
        assert!(table.set_value(0, 9, 1).is_err());

        table.push_row([10, 11, 12]).unwrap();
        assert_eq!(table.shape(), (4, 3));
        assert!(table.push_row([1, 2]).is_err());
    }

    #[test]
    fn test_special_character_warnings() {
        let mut table = Table::new(vec![vec!["R&D", "plain"]]).unwrap();
        assert_eq!(table.warnings().len(), 1);
        assert_eq!(table.warnings()[0].position, Some(CellPos::new(0, 0)));

        table.escape_special(Range::cell(0, 0)).unwrap();
        assert_eq!(table.value(0, 0), Some(&CellValue::Text(r"R\&D".into())));
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn test_remove_characters() {
        let mut table = Table::new(vec![vec!["a_b$", "x-y"]]).unwrap();
        table.remove_characters(Range::cell(0, 0), None).unwrap();
        table.remove_characters(Range::cell(0, 1), Some("-")).unwrap();
        assert_eq!(table.value(0, 0), Some(&CellValue::Text("ab".into())));
        assert_eq!(table.value(0, 1), Some(&CellValue::Text("xy".into())));
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn test_remove_characters_keeps_remaining_warning() {
        let mut table = Table::new(vec![vec!["R&D-x"]]).unwrap();
        table.remove_characters(Range::cell(0, 0), Some("-")).unwrap();
        assert_eq!(table.value(0, 0), Some(&CellValue::Text("R&Dx".into())));
        assert_eq!(table.warnings().len(), 1);
        assert!(table.warnings()[0].message.contains('&'));

        table.remove_characters(Range::cell(0, 0), Some("&")).unwrap();
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn test_unknown_color_warns() {
        let mut table = grid();
        let color = "mauve".parse().unwrap();
        table
            .apply(Range::row(0), Style::Background(Some(color)))
            .unwrap();
        assert_eq!(table.warnings().len(), 1);
        assert!(table.warnings()[0].message.contains("mauve"));

        let color = "mauve".parse().unwrap();
        table
            .apply(Range::column(1), Style::TextColor(Some(color)))
            .unwrap();
        assert_eq!(table.warnings().len(), 1);
    }

    #[test]
    fn test_environments_order() {
        let mut table = grid();
        table.add_environment(Environment::new("landscape"), false);
        table.add_environment(Environment::new("center"), true);
        let names: Vec<_> = table.environments().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["center", "landscape"]);
    }
}
