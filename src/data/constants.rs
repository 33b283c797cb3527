//! Fixed LaTeX vocabulary used by the emitter
//!
//! Special characters and the packages a document needs to compile the
//! generated tables.

use lazy_static::lazy_static;
use regex::Regex;

/// Characters with special meaning in LaTeX text mode
pub const SPECIAL_CHARS: [char; 10] = ['&', '%', '#', '_', '{', '}', '$', '\\', '~', '^'];

lazy_static! {
    /// Matches any LaTeX special character
    pub static ref SPECIAL_CHAR_PATTERN: Regex = Regex::new(r"[&%#_{}$\\~^]").unwrap();
}

/// Packages required by the generated markup, in load order
pub const REQUIRED_PACKAGES: &[(&str, Option<&str>)] = &[
    ("booktabs", None),
    ("makecell", None),
    ("longtable", None),
    ("multirow", None),
    ("ulem", Some("normalem")),
    ("tabu", None),
    ("caption", None),
    ("graphicx", None),
    ("pdflscape", None),
    ("xcolor", Some("table,dvipsnames")),
    ("threeparttablex", None),
];

/// `\usepackage` lines for every package the generated markup may use
pub fn tex_preamble() -> String {
    REQUIRED_PACKAGES
        .iter()
        .map(|(name, opts)| match opts {
            Some(opts) => format!("\\usepackage[{}]{{{}}}", opts, name),
            None => format!("\\usepackage{{{}}}", name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape replacement for a LaTeX special character
pub fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some(r"\&"),
        '%' => Some(r"\%"),
        '#' => Some(r"\#"),
        '_' => Some(r"\_"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '$' => Some(r"\$"),
        '\\' => Some(r"\textbackslash{}"),
        '~' => Some(r"\textasciitilde{}"),
        '^' => Some(r"\textasciicircum{}"),
        _ => None,
    }
}

/// Escape every LaTeX special character in `text`
pub fn escape_latex(text: &str) -> String {
    SPECIAL_CHAR_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            caps[0]
                .chars()
                .next()
                .and_then(escape_char)
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}
