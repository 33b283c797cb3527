//! Presentation settings: environment kind, floats, long tables, notes

use super::style::FontSize;
use crate::utils::error::{TableError, TableResult};

/// The tabular-like environment holding the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabularKind {
    #[default]
    Tabular,
    Tabu,
    LongTabu,
    LongTable,
}

impl TabularKind {
    pub fn env_name(&self) -> &'static str {
        match self {
            TabularKind::Tabular => "tabular",
            TabularKind::Tabu => "tabu",
            TabularKind::LongTabu => "longtabu",
            TabularKind::LongTable => "longtable",
        }
    }

    /// Page-breaking counterpart of this kind
    pub fn to_long(self) -> Self {
        match self {
            TabularKind::Tabular | TabularKind::LongTable => TabularKind::LongTable,
            TabularKind::Tabu | TabularKind::LongTabu => TabularKind::LongTabu,
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, TabularKind::LongTabu | TabularKind::LongTable)
    }
}

impl std::str::FromStr for TabularKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "tabular" => Ok(TabularKind::Tabular),
            "tabu" => Ok(TabularKind::Tabu),
            "longtabu" => Ok(TabularKind::LongTabu),
            "longtable" => Ok(TabularKind::LongTable),
            other => Err(TableError::invalid(format!(
                "{} not a valid tabular type",
                other
            ))),
        }
    }
}

/// Horizontal justification of a table on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Center,
    Left,
    Right,
}

impl Location {
    /// Justification switch used inside floats
    pub fn justification(&self) -> &'static str {
        match self {
            Location::Center => "centering",
            Location::Left => "raggedright",
            Location::Right => "raggedleft",
        }
    }

    /// Position argument for longtable
    pub fn longtable_arg(&self) -> char {
        match self {
            Location::Center => 'c',
            Location::Left => 'l',
            Location::Right => 'r',
        }
    }
}

impl std::str::FromStr for Location {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "c" | "center" => Ok(Location::Center),
            "l" | "left" => Ok(Location::Left),
            "r" | "right" => Ok(Location::Right),
            other => Err(TableError::invalid(format!(
                "must specify c, l, or r; received {}",
                other
            ))),
        }
    }
}

/// Options for a floating `table` environment
#[derive(Debug, Clone, PartialEq)]
pub struct FloatOptions {
    pub caption: String,
    pub label: Option<String>,
    pub location: Location,
    /// Float placement specifier, e.g. `htbp`
    pub placement: Option<String>,
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self {
            caption: "Table 1".to_string(),
            label: Some("table1".to_string()),
            location: Location::Center,
            placement: Some("htbp".to_string()),
        }
    }
}

impl FloatOptions {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }
}

/// Options for a page-breaking table
#[derive(Debug, Clone, PartialEq)]
pub struct LongOptions {
    pub caption: Option<String>,
    pub label: Option<String>,
    pub location: Location,
    /// Number of leading rows repeated at the top of every page
    pub repeats: usize,
}

impl Default for LongOptions {
    fn default() -> Self {
        Self {
            caption: Some("Table 1".to_string()),
            label: Some("table1".to_string()),
            location: Location::Center,
            repeats: 1,
        }
    }
}

impl LongOptions {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Default::default()
        }
    }

    /// No caption or label, header rows only
    pub fn uncaptioned(repeats: usize) -> Self {
        Self {
            caption: None,
            label: None,
            location: Location::Center,
            repeats,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }
}

/// How the rows are placed in the document
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Presentation {
    /// Bare tabular environment
    #[default]
    Inline,
    /// Inside a floating `table` with caption
    Float(FloatOptions),
    /// Page-breaking table with repeated header rows
    Long(LongOptions),
}

/// Table footnotes rendered through threeparttable(x)
#[derive(Debug, Clone, PartialEq)]
pub struct Notes {
    pub items: Vec<String>,
    pub size: FontSize,
}

impl Default for Notes {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            size: FontSize::ScriptSize,
        }
    }
}

impl Notes {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Extra environment wrapped around the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    /// Text placed right after `\begin{name}`, e.g. arguments
    pub post: String,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            post: String::new(),
        }
    }

    pub fn with_post(mut self, post: impl Into<String>) -> Self {
        self.post = post.into();
        self
    }
}
