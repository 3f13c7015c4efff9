//! Search-root resolution.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::XdgDirs;

/// Existing directories to scan for one asset category.
///
/// Every data dir joined with `data_subdir` comes first, in data-dir order,
/// followed by `$HOME/<legacy_subdir>`. Candidates that are missing or not
/// directories are dropped.
pub fn resolve_search_paths(dirs: &XdgDirs, data_subdir: &str, legacy_subdir: &str) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = dirs
        .data_dirs()
        .map(|dir| dir.join(data_subdir))
        .filter(|candidate| keep(candidate))
        .collect();

    let legacy = dirs.home.join(legacy_subdir);
    if keep(&legacy) {
        roots.push(legacy);
    }

    roots
}

fn keep(candidate: &Path) -> bool {
    let is_dir = candidate.is_dir();
    if !is_dir {
        trace!(path = %candidate.display(), "search root skipped");
    }
    is_dir
}
