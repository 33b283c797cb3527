//! Geometry-aware LaTeX table generator

use std::ops::Range as RowRange;

use super::cell::LatexCell;
use super::rules::{collapse_segments, RulePosition};
use crate::core::model::{CellAlign, LineStyle, Location, LongOptions, Table};
use crate::core::range::CellPos;
use crate::utils::error::{TableError, TableResult};

/// Walks a finished [`Table`] and produces the lines of its tabular body
///
/// The generator never mutates the table. Lines are returned without
/// their outer indentation; nesting is handled by the caller.
pub struct LatexTableGenerator<'a> {
    table: &'a Table,
    pad: String,
}

impl<'a> LatexTableGenerator<'a> {
    pub fn new(table: &'a Table, indent: usize) -> Self {
        LatexTableGenerator {
            table,
            pad: " ".repeat(indent),
        }
    }

    pub fn pad(&self) -> &str {
        &self.pad
    }

    /// Check the geometry that can only be judged on the final shape
    pub fn validate(&self) -> TableResult<()> {
        let (rows, cols) = self.table.shape();
        if let Some(m) = self.table.merges().iter().find(|m| !m.fits((rows, cols))) {
            return Err(TableError::render(format!(
                "merge of {}x{} at {} exceeds table bounds {}x{}",
                m.rows, m.cols, m.anchor, rows, cols
            )));
        }
        let borders = self.table.borders();
        if let Some(b) = borders.max_horizontal().filter(|&b| b > rows) {
            return Err(TableError::render(format!(
                "horizontal line on boundary {} outside a table of {} rows",
                b, rows
            )));
        }
        if let Some(b) = borders.max_vertical().filter(|&b| b > cols) {
            return Err(TableError::render(format!(
                "vertical line on boundary {} outside a table of {} columns",
                b, cols
            )));
        }
        Ok(())
    }

    /// Generate a complete non-breaking tabular environment
    pub fn tabular(&self) -> TableResult<Vec<String>> {
        let env = self.table.kind().env_name();
        let mut lines = vec![format!("\\begin{{{}}}{{{}}}", env, self.column_spec())];
        lines.extend(self.indented(self.block(0..self.table.row_count(), true)?));
        lines.push(format!("\\end{{{}}}", env));
        Ok(lines)
    }

    /// Generate a page-breaking table with repeated header rows
    pub fn long_table(&self, options: &LongOptions, has_notes: bool) -> TableResult<Vec<String>> {
        let (rows, cols) = self.table.shape();
        let kind = self.table.kind().to_long();
        let env = kind.env_name();
        let repeats = options.repeats.min(rows);

        let begin = if kind.env_name() == "longtable" {
            format!(
                "\\begin{{{}}}[{}]{{{}}}",
                env,
                options.location.longtable_arg(),
                self.column_spec()
            )
        } else {
            format!("\\begin{{{}}}{{{}}}", env, self.column_spec())
        };

        let mut body = Vec::new();
        let has_head = options.caption.is_some() || repeats > 0;
        if has_head {
            let head = if repeats > 0 {
                self.block(0..repeats, true)?
            } else {
                Vec::new()
            };

            if let Some(ref caption) = options.caption {
                body.push(format!(
                    "{} \\\\",
                    caption_command(caption, options.label.as_deref())
                ));
            }
            body.extend(head.iter().cloned());
            body.push("\\endfirsthead".to_string());

            let continued = if options.caption.is_some() {
                "\\tablename\\ \\thetable\\ -- \\emph{Continued from previous page}"
            } else {
                "\\emph{Continued from previous page}"
            };
            body.push(format!("\\multicolumn{{{}}}{{c}}{{{}}} \\\\", cols, continued));
            body.extend(head);
            body.push("\\endhead".to_string());

            body.push(format!(
                "\\multicolumn{{{}}}{{r}}{{\\emph{{Continued on next page}}}} \\\\",
                cols
            ));
            body.push("\\endfoot".to_string());
        }
        if has_notes {
            body.push("\\insertTableNotes \\\\".to_string());
        }
        if has_head || has_notes {
            body.push("\\endlastfoot".to_string());
        }
        body.extend(self.block(repeats..rows, repeats == 0)?);

        let mut lines = vec![begin];
        lines.extend(self.indented(body));
        lines.push(format!("\\end{{{}}}", env));
        Ok(lines)
    }

    /// Rows in `rows` with the rules between them
    ///
    /// The rule on the boundary above the first row is included only with
    /// `leading_rule`; the rule below each row always is.
    pub fn block(&self, rows: RowRange<usize>, leading_rule: bool) -> TableResult<Vec<String>> {
        let mut lines = Vec::new();
        if leading_rule {
            lines.extend(self.rule_line(rows.start));
        }
        for r in rows {
            lines.extend(self.row_lines(r)?);
            lines.extend(self.rule_line(r + 1));
        }
        Ok(lines)
    }

    /// Column specification, e.g. `|l|cc|`
    pub fn column_spec(&self) -> String {
        if let Some(spec) = self.table.column_spec() {
            return spec.to_string();
        }
        let mut spec = String::from(self.bar(0));
        for (c, align) in self.table.column_aligns().iter().enumerate() {
            spec.push_str(&align.to_spec());
            spec.push_str(self.bar(c + 1));
        }
        spec
    }

    fn bar(&self, boundary: usize) -> &'static str {
        if self.table.column_spec().is_some() {
            return "";
        }
        self.table
            .borders()
            .vertical_at(boundary)
            .map(|v| v.token())
            .unwrap_or("")
    }

    /// `\multicolumn` spec for `width` columns starting at `col`
    fn span_spec(&self, col: usize, width: usize, align: Option<&CellAlign>) -> String {
        let align = align
            .or_else(|| self.table.column_aligns().get(col))
            .map(CellAlign::to_spec)
            .unwrap_or_else(|| "c".to_string());
        let left = if col == 0 { self.bar(0) } else { "" };
        format!("{}{}{}", left, align, self.bar(col + width))
    }

    fn has_interior_bar(&self, col: usize, width: usize) -> bool {
        (col + 1..col + width).any(|b| !self.bar(b).is_empty())
    }

    /// The rule line on horizontal boundary `boundary`, if any
    pub fn rule_line(&self, boundary: usize) -> Option<String> {
        let (rows, cols) = self.table.shape();
        let segments: Vec<Option<LineStyle>> = (0..cols)
            .map(|c| {
                let style = self.table.borders().horizontal_at(boundary, c)?;
                if self
                    .table
                    .merges()
                    .iter()
                    .any(|m| m.splits_boundary(boundary, c))
                {
                    log::debug!(
                        "dropping rule segment on boundary {} column {} inside a merge",
                        boundary,
                        c
                    );
                    return None;
                }
                Some(style)
            })
            .collect();

        let position = if boundary == 0 {
            RulePosition::Top
        } else if boundary == rows {
            RulePosition::Bottom
        } else {
            RulePosition::Middle
        };

        let lines = collapse_segments(&segments, position);
        if lines.is_empty() {
            return None;
        }
        let rendered: Vec<String> = lines.iter().map(|l| l.to_latex()).collect();
        Some(rendered.join(" "))
    }

    /// The optional spacing line and the content line of row `r`
    pub fn row_lines(&self, r: usize) -> TableResult<Vec<String>> {
        let cols = self.table.col_count();
        let mut slots: Vec<String> = Vec::with_capacity(cols);
        let mut space_above = None;
        let mut space_below = None;

        let mut c = 0;
        while c < cols {
            let pos = CellPos::new(r, c);
            match self.table.merge_at(pos) {
                Some(m) if m.anchor == pos => {
                    let cell = self.table.cell_at(pos);
                    let mut latex = LatexCell::from_model(cell, pos)?.with_spans(m.rows, m.cols);
                    if m.cols > 1 || cell.style.align.is_some() {
                        latex = latex.with_span_spec(self.span_spec(c, m.cols, cell.style.align.as_ref()));
                    }
                    space_above = space_above.or(cell.style.space_above.as_ref());
                    space_below = space_below.or(cell.style.space_below.as_ref());
                    slots.push(latex.to_latex());
                    c += m.cols;
                }
                Some(m) => {
                    // continuation of a merge from a row above
                    let width = m.end_col() - c;
                    let anchor = self.table.cell_at(m.anchor);
                    let fill = anchor.style.background.as_ref().map(ToString::to_string);
                    if self.has_interior_bar(c, width) {
                        let spec = self.span_spec(c, width, anchor.style.align.as_ref());
                        let slot = LatexCell::placeholder(fill)
                            .with_spans(1, width)
                            .with_span_spec(spec);
                        slots.push(slot.to_latex());
                    } else {
                        let slot = LatexCell::placeholder(fill).to_latex();
                        slots.extend(std::iter::repeat(slot).take(width));
                    }
                    c += width;
                }
                None => {
                    let cell = self.table.cell_at(pos);
                    let mut latex = LatexCell::from_model(cell, pos)?;
                    if let Some(ref align) = cell.style.align {
                        latex = latex.with_span_spec(self.span_spec(c, 1, Some(align)));
                    }
                    space_above = space_above.or(cell.style.space_above.as_ref());
                    space_below = space_below.or(cell.style.space_below.as_ref());
                    slots.push(latex.to_latex());
                    c += 1;
                }
            }
        }

        let mut line = String::new();
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 {
                line.push_str(if slot.is_empty() { " &" } else { " & " });
            }
            line.push_str(slot);
        }
        let line = line.trim_start();

        let mut out = Vec::with_capacity(2);
        if let Some(space) = space_above {
            out.push(format!("\\addlinespace[{}]", space));
        }
        let end = match space_below {
            Some(space) => format!("\\\\[{}]", space),
            None => "\\\\".to_string(),
        };
        if line.is_empty() {
            out.push(end);
        } else {
            out.push(format!("{} {}", line, end));
        }
        Ok(out)
    }

    /// Prefix every non-empty line with one level of indentation
    pub fn indented(&self, lines: Vec<String>) -> Vec<String> {
        indent_lines(lines, &self.pad)
    }
}

pub(crate) fn indent_lines(lines: Vec<String>, pad: &str) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| if l.is_empty() { l } else { format!("{}{}", pad, l) })
        .collect()
}

/// `\caption{..}` with the label inside, as captions in floats and long tables take it
pub(crate) fn caption_command(caption: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("\\caption{{{} \\label{{{}}}}}", caption, label),
        None => format!("\\caption{{{}}}", caption),
    }
}

/// `\captionsetup` line matching the table location
pub(crate) fn caption_setup(location: Location) -> String {
    format!(
        "\\captionsetup{{singlelinecheck=false,justification={}}}",
        location.justification()
    )
}
