//! Desktop appearance settings: the live store and the legacy settings files.

pub mod files;
pub mod store;
pub mod sync;

use serde::{Deserialize, Serialize};

pub use files::FileStores;
pub use store::{Gsettings, LiveStore};
pub use sync::ThemeSync;

pub const DESKTOP_INTERFACE_SCHEMA: &str = "org.gnome.desktop.interface";

pub const KEY_GTK_THEME: &str = "gtk-theme";
pub const KEY_ICON_THEME: &str = "icon-theme";
pub const KEY_CURSOR_THEME: &str = "cursor-theme";
pub const KEY_COLOR_SCHEME: &str = "color-scheme";

const PREFER_DARK: &str = "prefer-dark";
const PREFER_LIGHT: &str = "prefer-light";

/// Complete appearance state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub widget_theme: String,
    pub icon_theme: String,
    pub cursor_theme: String,
    pub prefer_dark: bool,
}

impl ThemeConfig {
    /// `color-scheme` value written to the live store.
    #[must_use]
    pub const fn color_scheme(&self) -> &'static str {
        if self.prefer_dark {
            PREFER_DARK
        } else {
            PREFER_LIGHT
        }
    }

    /// Anything but `prefer-dark` reads as light.
    #[must_use]
    pub fn prefers_dark(color_scheme: &str) -> bool {
        color_scheme == PREFER_DARK
    }
}
