//! Utility modules
//!
//! - Error, warning and output types
//! - Writing `.tex` files

pub mod error;
pub mod files;

pub use error::{ErrorKind, RenderOutput, TableError, TableResult, TableWarning};

#[cfg(not(target_arch = "wasm32"))]
pub use files::{tex_path, write_tex};
