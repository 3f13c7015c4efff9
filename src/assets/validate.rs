//! Structural checks deciding whether a directory is a usable asset package.
//!
//! Only presence is checked; `index.theme` contents are never parsed.

use std::path::Path;

use tracing::warn;

use super::AssetCategory;

const INDEX_FILE: &str = "index.theme";

/// At least one of these must be a subdirectory of an icon theme.
pub const ICON_CONTENT_DIRS: &[&str] = &[
    "scalable", "apps", "16x16", "22x22", "24x24", "32x32", "36x36", "48x48", "64x64", "72x72",
    "96x96", "128x128", "256x256", "512x512", "mimetypes",
];

pub fn is_widget_theme(path: &Path, name: &str) -> bool {
    !is_excluded(AssetCategory::WidgetTheme, name) && has_index(path)
}

pub fn is_icon_theme(path: &Path, name: &str) -> bool {
    if is_excluded(AssetCategory::IconTheme, name) || !has_index(path) {
        return false;
    }

    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read icon theme contents");
            return false;
        }
    };

    entries.filter_map(std::result::Result::ok).any(|entry| {
        entry
            .file_name()
            .to_str()
            .is_some_and(|child| ICON_CONTENT_DIRS.contains(&child))
            && entry.path().is_dir()
    })
}

pub fn is_cursor_theme(path: &Path, name: &str) -> bool {
    !is_excluded(AssetCategory::CursorTheme, name)
        && has_index(path)
        && path.join("cursors").is_dir()
}

fn is_excluded(category: AssetCategory, name: &str) -> bool {
    category.excluded().contains(&name)
}

fn has_index(path: &Path) -> bool {
    path.join(INDEX_FILE).is_file()
}
