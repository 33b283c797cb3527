//! Table to LaTeX Emission Engine
//!
//! Serializes a finished [`Table`] into LaTeX source, handling merged
//! spans, partial rules, vertical separators and the surrounding
//! presentation (floats, long tables, notes, extra environments).
//!
//! # Architecture
//!
//! ```text
//! Table -> validation -> rows/rules (generator) -> presentation wrappers -> text
//! ```
//!
//! # Example
//!
//! ```rust
//! use textable::{Range, Style, Table};
//!
//! let mut table = Table::new(vec![vec!["a", "b"], vec!["c", "d"]]).unwrap();
//! table.apply(Range::row(0), Style::Bold(true)).unwrap();
//! let latex = table.to_latex().unwrap();
//! assert!(latex.contains("\\textbf{a} & \\textbf{b} \\\\"));
//! ```

mod cell;
mod generator;
mod rules;

#[cfg(test)]
mod tests;

pub use cell::{style_text, LatexCell};
pub use generator::LatexTableGenerator;
pub use rules::{collapse_segments, LatexHLine, RulePosition};

use generator::{caption_command, caption_setup, indent_lines};

use crate::core::model::{
    Environment, FloatOptions, LongOptions, Notes, Presentation, Table,
};
use crate::utils::error::{RenderOutput, TableError, TableResult};

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Render a table with default options
pub fn render(table: &Table) -> TableResult<RenderOutput> {
    render_with_options(table, &RenderOptions::default())
}

/// Render a table to LaTeX
///
/// Either the whole document fragment is produced or an error is returned;
/// no partial output escapes.
pub fn render_with_options(table: &Table, options: &RenderOptions) -> TableResult<RenderOutput> {
    let gen = LatexTableGenerator::new(table, options.indent);
    gen.validate()?;

    let notes = table.notes();
    let inline_long;
    let long = match table.presentation() {
        Presentation::Long(opts) => Some(opts),
        Presentation::Float(_) if table.kind().is_long() => {
            return Err(TableError::render(format!(
                "a {} cannot be placed in a floating table",
                table.kind().env_name()
            )));
        }
        Presentation::Inline if table.kind().is_long() => {
            inline_long = LongOptions::uncaptioned(0);
            Some(&inline_long)
        }
        _ => None,
    };

    let mut lines = match long {
        Some(opts) => {
            let mut lines = Vec::new();
            if !notes.is_empty() {
                lines.extend(notes_block("TableNotes", notes, gen.pad()));
            }
            lines.extend(gen.long_table(opts, !notes.is_empty())?);
            lines
        }
        None => {
            let mut lines = gen.tabular()?;
            if !notes.is_empty() {
                lines.extend(notes_block("tablenotes", notes, gen.pad()));
            }
            lines
        }
    };

    if !notes.is_empty() {
        lines = wrap(&Environment::new("ThreePartTable"), lines, gen.pad());
    }

    if let Presentation::Float(ref opts) = table.presentation() {
        lines = float_wrap(opts, lines, gen.pad());
    }

    for env in table.environments() {
        lines = wrap(env, lines, gen.pad());
    }

    log::debug!(
        "rendered {}x{} table into {} lines",
        table.row_count(),
        table.col_count(),
        lines.len()
    );

    Ok(RenderOutput::with_warnings(
        lines.join("\n"),
        table.warnings().to_vec(),
    ))
}

fn wrap(env: &Environment, body: Vec<String>, pad: &str) -> Vec<String> {
    let mut lines = vec![format!("\\begin{{{}}}{}", env.name, env.post)];
    lines.extend(indent_lines(body, pad));
    lines.push(format!("\\end{{{}}}", env.name));
    lines
}

fn notes_block(env: &str, notes: &Notes, pad: &str) -> Vec<String> {
    let mut body = vec![notes.size.to_string()];
    body.extend(notes.items.iter().map(|item| format!("\\item {}", item)));
    wrap(&Environment::new(env), body, pad)
}

fn float_wrap(options: &FloatOptions, inner: Vec<String>, pad: &str) -> Vec<String> {
    let post = options
        .placement
        .as_ref()
        .map(|p| format!("[{}]", p))
        .unwrap_or_default();
    let mut body = vec![
        format!("\\{}", options.location.justification()),
        caption_setup(options.location),
        caption_command(&options.caption, options.label.as_deref()),
    ];
    body.extend(inner);
    wrap(&Environment::new("table").with_post(post), body, pad)
}

impl Table {
    /// Render with default options
    pub fn render(&self) -> TableResult<RenderOutput> {
        render(self)
    }

    pub fn render_with_options(&self, options: &RenderOptions) -> TableResult<RenderOutput> {
        render_with_options(self, options)
    }

    /// Rendered LaTeX text, dropping the warnings
    pub fn to_latex(&self) -> TableResult<String> {
        render(self).map(|out| out.content)
    }
}
