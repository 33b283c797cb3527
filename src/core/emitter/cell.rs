//! Cell markup for LaTeX table generation

use crate::core::model::{Cell, CellStyle};
use crate::core::range::CellPos;
use crate::utils::error::{TableError, TableResult};

/// One emitted slot of a table row
#[derive(Debug, Clone, PartialEq)]
pub struct LatexCell {
    /// Formatted value with its text-level style commands applied
    pub content: String,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Column spec for a `\multicolumn` wrapper, e.g. `r|`
    pub span_spec: Option<String>,
    /// Background color expression
    pub fill: Option<String>,
    /// Whether this slot continues a merge from a row above
    pub is_placeholder: bool,
}

impl LatexCell {
    /// Create a plain cell with content
    pub fn new(content: impl Into<String>) -> Self {
        LatexCell {
            content: content.into(),
            rowspan: 1,
            colspan: 1,
            span_spec: None,
            fill: None,
            is_placeholder: false,
        }
    }

    /// Create an empty slot covered by a merge from a previous row
    pub fn placeholder(fill: Option<String>) -> Self {
        LatexCell {
            fill,
            is_placeholder: true,
            ..LatexCell::new(String::new())
        }
    }

    /// Build the anchor or stand-alone cell at `pos` from the model
    pub fn from_model(cell: &Cell, pos: CellPos) -> TableResult<Self> {
        let text = cell.style.format.format(&cell.value).ok_or_else(|| {
            TableError::render(format!(
                "number format {:?} cannot be applied to non-numeric value \"{}\" at {}",
                cell.style.format, cell.value, pos
            ))
        })?;

        Ok(LatexCell {
            content: style_text(text, &cell.style),
            fill: cell.style.background.as_ref().map(ToString::to_string),
            ..LatexCell::new(String::new())
        })
    }

    pub fn with_spans(mut self, rowspan: usize, colspan: usize) -> Self {
        self.rowspan = rowspan;
        self.colspan = colspan;
        self
    }

    pub fn with_span_spec(mut self, spec: impl Into<String>) -> Self {
        self.span_spec = Some(spec.into());
        self
    }

    /// Generate LaTeX code for this slot
    pub fn to_latex(&self) -> String {
        let mut out = String::new();

        if let Some(ref color) = self.fill {
            out.push_str(&format!("\\cellcolor{{{}}}", color));
        }

        if !self.is_placeholder {
            let inner = if self.rowspan > 1 {
                format!("\\multirow{{{}}}{{*}}{{{}}}", self.rowspan, self.content)
            } else {
                self.content.clone()
            };
            if !inner.is_empty() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&inner);
            }
        }

        match self.span_spec {
            Some(ref spec) => format!("\\multicolumn{{{}}}{{{}}}{{{}}}", self.colspan, spec, out),
            None => out,
        }
    }
}

/// Wrap a formatted value in its text-level style commands
///
/// Innermost first: color, size, bold, italic, underline, rotation.
pub fn style_text(text: String, style: &CellStyle) -> String {
    if text.is_empty() {
        return text;
    }
    let mut s = text;
    if let Some(ref color) = style.text_color {
        s = format!("\\textcolor{{{}}}{{{}}}", color, s);
    }
    if let Some(size) = style.font_size {
        s = format!("{{{} {}}}", size, s);
    }
    if style.bold {
        s = format!("\\textbf{{{}}}", s);
    }
    if style.italic {
        s = format!("\\emph{{{}}}", s);
    }
    if style.underline {
        s = format!("\\uline{{{}}}", s);
    }
    if let Some(angle) = style.rotation {
        s = format!("\\rotatebox{{{}}}{{{}}}", angle, s);
    }
    s
}
