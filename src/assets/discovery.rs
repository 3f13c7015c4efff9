//! Directory scanning across search roots.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Names of the immediate subdirectories of `roots` accepted by `is_valid`.
///
/// The result is sorted and free of duplicates. A root that cannot be listed
/// is logged and skipped; discovery itself never fails.
pub fn discover<F>(roots: &[PathBuf], is_valid: F) -> Vec<String>
where
    F: Fn(&Path, &str) -> bool,
{
    let mut found = BTreeSet::new();

    for root in roots {
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    warn!(root = %root.display(), error = %err, "could not read search root");
                    break;
                }
                Err(err) => {
                    debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 name");
                continue;
            };

            if is_valid(entry.path(), name) {
                found.insert(name.to_string());
            }
        }
    }

    debug!(roots = roots.len(), count = found.len(), "discovery complete");
    found.into_iter().collect()
}
