//! Installed theme, icon theme, and cursor theme discovery.
//!
//! Each [`AssetCategory`] knows where its packages live, which names are
//! never user-selectable, and how to tell a usable package from a stray
//! directory.

pub mod discovery;
pub mod paths;
pub mod validate;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::XdgDirs;

pub use discovery::discover;
pub use paths::resolve_search_paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum AssetCategory {
    /// GTK widget theme
    #[value(name = "theme")]
    #[serde(rename = "theme")]
    WidgetTheme,
    /// Icon theme
    #[value(name = "icon")]
    #[serde(rename = "icon")]
    IconTheme,
    /// Cursor theme
    #[value(name = "cursor")]
    #[serde(rename = "cursor")]
    CursorTheme,
}

impl AssetCategory {
    pub const ALL: [Self; 3] = [Self::WidgetTheme, Self::IconTheme, Self::CursorTheme];

    /// Subdirectory searched under every XDG data dir.
    #[must_use]
    pub const fn data_subdir(self) -> &'static str {
        match self {
            Self::WidgetTheme => "themes",
            Self::IconTheme | Self::CursorTheme => "icons",
        }
    }

    /// Dot directory searched directly under `$HOME`.
    #[must_use]
    pub const fn legacy_subdir(self) -> &'static str {
        match self {
            Self::WidgetTheme => ".themes",
            Self::IconTheme | Self::CursorTheme => ".icons",
        }
    }

    /// Names that are installed but never offered for selection.
    #[must_use]
    pub const fn excluded(self) -> &'static [&'static str] {
        match self {
            Self::WidgetTheme => &["Default", "Emacs"],
            Self::IconTheme => &["hicolor", "locolor", "default", "gnome"],
            Self::CursorTheme => &["default"],
        }
    }

    #[must_use]
    pub fn validator(self) -> fn(&std::path::Path, &str) -> bool {
        match self {
            Self::WidgetTheme => validate::is_widget_theme,
            Self::IconTheme => validate::is_icon_theme,
            Self::CursorTheme => validate::is_cursor_theme,
        }
    }

    /// Name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WidgetTheme => "theme",
            Self::IconTheme => "icon",
            Self::CursorTheme => "cursor",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted, de-duplicated names of every valid installed asset of `category`.
pub fn installed(dirs: &XdgDirs, category: AssetCategory) -> Vec<String> {
    let roots = resolve_search_paths(dirs, category.data_subdir(), category.legacy_subdir());
    discover(&roots, category.validator())
}
