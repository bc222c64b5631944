use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::ScanResult;
use crate::error::GenError;

/// Files in `dir` matching `pattern`, in the glob crate's (sorted) order.
/// `dir` is taken literally, only `pattern` may contain wildcards.
/// Anything that is not a directory is kept, so a broken link fails when read.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, GenError> {
    let full = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join(pattern);
    let mut paths = Vec::new();
    for entry in glob::glob(&full.to_string_lossy())? {
        let path = entry?;
        if !path.is_dir() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Base name without extension, e.g. `src/instr/load.rs` -> `load`.
pub fn module_name(path: &Path) -> Option<&str> {
    path.file_stem()?.to_str()
}

/// Scans `paths` in order. Any file that cannot be read aborts the whole scan.
/// Bytes that are not valid UTF-8 are replaced, not rejected.
pub fn scan_paths(paths: &[PathBuf]) -> Result<ScanResult, GenError> {
    let mut result = ScanResult::new();
    for path in paths {
        let bytes = fs::read(path).map_err(|err| GenError::io(path, err))?;
        let text = String::from_utf8_lossy(&bytes);
        let source = path.to_string_lossy();
        let found = result.scan_source(&text, &source);
        debug!("Scanned '{}': {} annotation(s)", source, found);

        // Registered even with zero annotations so the import list stays stable.
        if let Some(module) = module_name(path) {
            result.register_module(module);
        }
    }
    Ok(result)
}

pub fn scan_dir(dir: &Path, pattern: &str) -> Result<ScanResult, GenError> {
    let paths = discover(dir, pattern)?;
    info!(
        "Scanning {} file(s) in '{}' matching '{}'",
        paths.len(),
        dir.display(),
        pattern
    );
    scan_paths(&paths)
}
