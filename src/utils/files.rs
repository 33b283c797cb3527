//! Writing rendered tables to disk
//!
//! Filesystem access is unavailable on `wasm32`, so these helpers are
//! compiled for native targets only.

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use crate::utils::error::TableResult;

/// `path` with a `.tex` extension, unless it already has one
#[cfg(not(target_arch = "wasm32"))]
pub fn tex_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.extension() {
        Some(ext) if ext == "tex" => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".tex");
            PathBuf::from(name)
        }
    }
}

/// Write `content` to `path`, appending `.tex` when missing
///
/// Returns the path actually written.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_tex(path: impl AsRef<Path>, content: &str) -> TableResult<PathBuf> {
    let target = tex_path(path);
    fs::write(&target, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), target.display());
    Ok(target)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_tex_path() {
        assert_eq!(tex_path("table"), PathBuf::from("table.tex"));
        assert_eq!(tex_path("out/table.tex"), PathBuf::from("out/table.tex"));
        assert_eq!(tex_path("table.v2"), PathBuf::from("table.v2.tex"));
    }

    #[test]
    fn test_write_tex() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_tex(dir.path().join("results"), "\\begin{tabular}{c}\n").unwrap();
        assert_eq!(written, dir.path().join("results.tex"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "\\begin{tabular}{c}\n");
    }

    #[test]
    fn test_write_tex_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_tex(dir.path().join("missing").join("t"), "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
