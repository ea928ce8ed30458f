//! Cached-result probing and output directory management.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Checks for a results file previously generated by this tool.
///
/// Returns true iff a filesystem entry exists at `cache_path`. The optional
/// `manifest_path` is accepted for interface compatibility but not yet
/// consulted.
pub fn has_cached_result(cache_path: &Path, manifest_path: Option<&Path>) -> bool {
    if let Some(manifest) = manifest_path {
        tracing::debug!(
            manifest = %manifest.display(),
            "manifest path supplied but not consulted"
        );
    }
    cache_path.exists()
}

/// Creates `dir` and any missing parents if absent. Idempotent; returns the
/// same path so call sites can chain into a join.
///
/// Filesystem errors (permissions, invalid path) propagate to the caller
/// untranslated.
pub fn ensure_directory(dir: &Path) -> Result<&Path> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    Ok(dir)
}
