//! Per-cell style attributes
//!
//! A [`Style`] is one attribute/value assignment. Applying it to a cell
//! overwrites only that attribute; every other attribute keeps whatever
//! the most recent assignment left there.

use std::fmt;
use std::str::FromStr;

use crate::features::formatters::NumberFormat;
use crate::utils::error::{TableError, TableResult};

/// LaTeX font size switches, smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontSize {
    Tiny,
    ScriptSize,
    FootnoteSize,
    Small,
    NormalSize,
    /// `\large`
    Large,
    /// `\Large`
    Larger,
    /// `\LARGE`
    Largest,
    /// `\huge`
    Huge,
    /// `\Huge`
    Huger,
}

impl FontSize {
    pub const ALL: [FontSize; 10] = [
        FontSize::Tiny,
        FontSize::ScriptSize,
        FontSize::FootnoteSize,
        FontSize::Small,
        FontSize::NormalSize,
        FontSize::Large,
        FontSize::Larger,
        FontSize::Largest,
        FontSize::Huge,
        FontSize::Huger,
    ];

    /// Command name without the backslash
    pub fn command(&self) -> &'static str {
        match self {
            FontSize::Tiny => "tiny",
            FontSize::ScriptSize => "scriptsize",
            FontSize::FootnoteSize => "footnotesize",
            FontSize::Small => "small",
            FontSize::NormalSize => "normalsize",
            FontSize::Large => "large",
            FontSize::Larger => "Large",
            FontSize::Largest => "LARGE",
            FontSize::Huge => "huge",
            FontSize::Huger => "Huge",
        }
    }
}

impl FromStr for FontSize {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('\\');
        FontSize::ALL
            .into_iter()
            .find(|size| size.command() == name)
            .ok_or_else(|| TableError::invalid(format!("'{}' is not a valid font size", s)))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.command())
    }
}

/// Horizontal alignment of a column or a single cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellAlign {
    Left,
    #[default]
    Center,
    Right,
    /// Paragraph column with width, e.g., p{3cm}
    Para(String),
}

impl CellAlign {
    /// Column specification token (`l`, `c`, `r`, `p{..}`)
    pub fn to_spec(&self) -> String {
        match self {
            CellAlign::Left => "l".to_string(),
            CellAlign::Center => "c".to_string(),
            CellAlign::Right => "r".to_string(),
            CellAlign::Para(width) => format!("p{{{}}}", width),
        }
    }
}

impl FromStr for CellAlign {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "l" | "left" => return Ok(CellAlign::Left),
            "c" | "center" => return Ok(CellAlign::Center),
            "r" | "right" => return Ok(CellAlign::Right),
            _ => {}
        }
        match s.strip_prefix("p{").and_then(|rest| rest.strip_suffix('}')) {
            Some(width) if !width.is_empty() => Ok(CellAlign::Para(width.to_string())),
            _ => Err(TableError::invalid(format!("'{}' is not a valid alignment", s))),
        }
    }
}

/// An xcolor color name with an optional tint percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    name: String,
    opacity: u8,
}

impl Color {
    /// A named color at full strength
    pub fn new(name: impl Into<String>) -> TableResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() || name.contains(|c: char| c.is_whitespace() || "{}\\".contains(c)) {
            return Err(TableError::invalid(format!("'{}' is not a valid color name", name)));
        }
        Ok(Self { name, opacity: 100 })
    }

    /// Tint the color to `opacity` percent (0-100)
    pub fn with_opacity(mut self, opacity: u8) -> TableResult<Self> {
        if opacity > 100 {
            return Err(TableError::invalid(format!(
                "opacity should be between 0 and 100, received {}",
                opacity
            )));
        }
        self.opacity = opacity;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opacity < 100 {
            write!(f, "{}!{}", self.name, self.opacity)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl FromStr for Color {
    type Err = TableError;

    /// Parses `gray` or `gray!50`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('!') {
            Some((name, pct)) if pct.chars().all(|c| c.is_ascii_digit()) => {
                let opacity = pct
                    .parse::<u8>()
                    .map_err(|_| TableError::invalid(format!("bad opacity in '{}'", s)))?;
                Color::new(name)?.with_opacity(opacity)
            }
            _ => Color::new(s),
        }
    }
}

/// A LaTeX length such as `1cm` or `0.5em`
#[derive(Debug, Clone, PartialEq)]
pub struct Length(String);

impl Length {
    pub fn new(dim: impl Into<String>) -> TableResult<Self> {
        let dim = dim.into().trim().to_string();
        if dim.is_empty() || dim.contains(|c: char| "{}[]".contains(c)) {
            return Err(TableError::invalid(format!("'{}' is not a valid length", dim)));
        }
        Ok(Self(dim))
    }

    /// A length in centimeters
    pub fn cm(value: f64) -> Self {
        Self(format!("{}cm", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names of the individual style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttr {
    Bold,
    Italic,
    Underline,
    Rotation,
    FontSize,
    SpaceAbove,
    SpaceBelow,
    TextColor,
    Background,
    Align,
    Format,
}

/// A single attribute assignment
///
/// `None` payloads reset the attribute to "inherit from the environment".
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Bold(bool),
    Italic(bool),
    Underline(bool),
    /// Rotation angle in degrees, 0 to 360
    Rotation(Option<u16>),
    FontSize(Option<FontSize>),
    SpaceAbove(Option<Length>),
    SpaceBelow(Option<Length>),
    TextColor(Option<Color>),
    Background(Option<Color>),
    Align(Option<CellAlign>),
    Format(NumberFormat),
}

impl Style {
    pub fn attr(&self) -> StyleAttr {
        match self {
            Style::Bold(_) => StyleAttr::Bold,
            Style::Italic(_) => StyleAttr::Italic,
            Style::Underline(_) => StyleAttr::Underline,
            Style::Rotation(_) => StyleAttr::Rotation,
            Style::FontSize(_) => StyleAttr::FontSize,
            Style::SpaceAbove(_) => StyleAttr::SpaceAbove,
            Style::SpaceBelow(_) => StyleAttr::SpaceBelow,
            Style::TextColor(_) => StyleAttr::TextColor,
            Style::Background(_) => StyleAttr::Background,
            Style::Align(_) => StyleAttr::Align,
            Style::Format(_) => StyleAttr::Format,
        }
    }

    /// Check the value before any cell is touched
    pub fn validate(&self) -> TableResult<()> {
        match self {
            Style::Rotation(Some(angle)) if *angle > 360 => Err(TableError::invalid(format!(
                "received {}, angle must be between 0 and 360",
                angle
            ))),
            _ => Ok(()),
        }
    }
}

/// Resolved style of one cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub rotation: Option<u16>,
    pub font_size: Option<FontSize>,
    pub space_above: Option<Length>,
    pub space_below: Option<Length>,
    pub text_color: Option<Color>,
    pub background: Option<Color>,
    pub align: Option<CellAlign>,
    pub format: NumberFormat,
}

impl CellStyle {
    /// Overwrite one attribute
    pub fn set(&mut self, style: Style) {
        match style {
            Style::Bold(v) => self.bold = v,
            Style::Italic(v) => self.italic = v,
            Style::Underline(v) => self.underline = v,
            Style::Rotation(v) => self.rotation = v,
            Style::FontSize(v) => self.font_size = v,
            Style::SpaceAbove(v) => self.space_above = v,
            Style::SpaceBelow(v) => self.space_below = v,
            Style::TextColor(v) => self.text_color = v,
            Style::Background(v) => self.background = v,
            Style::Align(v) => self.align = v,
            Style::Format(v) => self.format = v,
        }
    }

    /// Whether no attribute differs from the default
    pub fn is_plain(&self) -> bool {
        *self == CellStyle::default()
    }
}
