//! WASM bindings for textable
//!
//! This module provides JavaScript-accessible functions for rendering
//! arrays of rows as LaTeX tables.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::formatters::NumberFormat;
#[cfg(feature = "wasm")]
use crate::{
    CellValue, FloatOptions, FontSize, LineStyle, LongOptions, Range, RenderOptions, Style,
    Table, TableResult,
};

/// Rendering options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderRowsOptions {
    /// Treat the first row as a header
    #[serde(default = "default_true")]
    pub header: bool,
    /// Bold the header row
    #[serde(default = "default_true")]
    pub header_bold: bool,
    /// Use booktabs rules instead of `\hline`
    #[serde(default)]
    pub booktabs: bool,
    /// Fixed decimal digits for floating-point values
    #[serde(default)]
    pub digits: Option<usize>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// Page-breaking longtable
    #[serde(default)]
    pub long: bool,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

#[cfg(feature = "wasm")]
impl Default for RenderRowsOptions {
    fn default() -> Self {
        Self {
            header: true,
            header_bold: true,
            booktabs: false,
            digits: None,
            caption: None,
            label: None,
            long: false,
            notes: Vec::new(),
            indent: default_indent(),
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_indent() -> usize {
    2
}

/// A JavaScript cell value
#[cfg(feature = "wasm")]
#[derive(Deserialize)]
#[serde(untagged)]
enum JsCell {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

#[cfg(feature = "wasm")]
impl From<JsCell> for CellValue {
    fn from(cell: JsCell) -> Self {
        match cell {
            JsCell::Int(i) => CellValue::Int(i),
            JsCell::Float(f) => CellValue::Float(f),
            JsCell::Bool(b) => CellValue::Text(b.to_string()),
            JsCell::Text(s) => CellValue::Text(s),
        }
    }
}

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The LaTeX output
    pub output: String,
    /// Whether rendering was successful
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
    /// Warnings collected while building and rendering the table
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render an array of rows as a LaTeX table
///
/// # Arguments
/// * `rows` - Array of arrays of strings, numbers, booleans or nulls
/// * `options` - `RenderRowsOptions` object (optional)
///
/// # Returns
/// A `RenderResult` object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderRows")]
pub fn render_rows(rows: JsValue, options: JsValue) -> JsValue {
    let opts: RenderRowsOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match serde_wasm_bindgen::from_value::<Vec<Vec<Option<JsCell>>>>(rows) {
        Ok(rows) => match build_and_render(rows, &opts) {
            Ok(output) => RenderResult {
                output: output.content,
                success: true,
                error: None,
                warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
            },
            Err(e) => failure(e.to_string()),
        },
        Err(e) => failure(format!("rows must be an array of arrays: {}", e)),
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

#[cfg(feature = "wasm")]
fn failure(error: String) -> RenderResult {
    RenderResult {
        output: String::new(),
        success: false,
        error: Some(error),
        warnings: Vec::new(),
    }
}

#[cfg(feature = "wasm")]
fn build_and_render(
    rows: Vec<Vec<Option<JsCell>>>,
    opts: &RenderRowsOptions,
) -> TableResult<crate::RenderOutput> {
    let mut table = Table::new(rows)?;
    let n_rows = table.row_count();

    if let Some(digits) = opts.digits {
        for r in 0..n_rows {
            for c in 0..table.col_count() {
                if let Some(CellValue::Float(_)) = table.value(r, c) {
                    table.apply(Range::cell(r, c), Style::Format(NumberFormat::Fixed(digits)))?;
                }
            }
        }
    }

    let rule = if opts.booktabs {
        LineStyle::booktabs()
    } else {
        LineStyle::single()
    };
    if opts.header && n_rows > 0 {
        if opts.header_bold {
            table.apply(Range::row(0), Style::Bold(true))?;
        }
        if n_rows > 1 {
            table.line_below(Range::row(0), rule)?;
        }
    }
    if opts.booktabs && n_rows > 0 {
        table.line_above(Range::row(0), rule)?;
        table.line_below(Range::row(n_rows - 1), rule)?;
    }

    for note in &opts.notes {
        table.add_note(note.clone(), FontSize::FootnoteSize);
    }

    if opts.long {
        table.set_long(LongOptions {
            caption: opts.caption.clone(),
            label: opts.caption.as_ref().and(opts.label.clone()),
            repeats: usize::from(opts.header),
            ..LongOptions::default()
        });
    } else if let Some(ref caption) = opts.caption {
        let mut float = FloatOptions::new(caption.clone());
        if let Some(ref label) = opts.label {
            float = float.with_label(label.clone());
        }
        table.set_float(float);
    }

    table.render_with_options(&RenderOptions::new().with_indent(opts.indent))
}

/// The `\usepackage` lines required by generated tables
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "texPreamble")]
pub fn tex_preamble_wasm() -> String {
    crate::tex_preamble()
}

/// Get the library version
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
