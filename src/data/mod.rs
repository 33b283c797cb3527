//! Data layer - Static LaTeX vocabulary
//!
//! - Special characters and their escapes
//! - Required packages
//! - xcolor color names

pub mod colors;
pub mod constants;

// Re-export commonly used items
pub use colors::{is_color_expression, is_known_color, NAMED_COLORS};
pub use constants::{
    escape_latex, tex_preamble, REQUIRED_PACKAGES, SPECIAL_CHARS, SPECIAL_CHAR_PATTERN,
};
