//! Changing one appearance setting at a time.
//!
//! Every change validates the requested name against what is installed,
//! re-reads the live configuration, edits only the targeted field, and saves
//! everything back. There is no locking: a concurrent change made between the
//! read and the save is overwritten.

use tracing::debug;

use crate::assets::{self, AssetCategory};
use crate::config::XdgDirs;
use crate::error::{LookError, Result};
use crate::settings::{ThemeConfig, ThemeSync};

const LIGHT_KEYWORDS: &[&str] = &["light", "snow", "white"];
const DARK_KEYWORDS: &[&str] = &["dark", "dracula", "gruvbox", "nord", "night"];

/// Guess the color-scheme preference from a widget theme name.
///
/// Light keywords are checked first. `None` means the name gives no hint and
/// the current preference should be kept.
#[must_use]
pub fn infer_prefer_dark(theme_name: &str) -> Option<bool> {
    let lower = theme_name.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

    if contains_any(LIGHT_KEYWORDS) {
        Some(false)
    } else if contains_any(DARK_KEYWORDS) {
        Some(true)
    } else {
        None
    }
}

pub struct ThemeSelector<'a> {
    dirs: &'a XdgDirs,
    sync: &'a ThemeSync<'a>,
}

impl<'a> ThemeSelector<'a> {
    pub const fn new(dirs: &'a XdgDirs, sync: &'a ThemeSync<'a>) -> Self {
        Self { dirs, sync }
    }

    /// Switch the widget theme. `prefer_dark` overrides the name-based guess.
    pub fn set_widget_theme(&self, name: &str, prefer_dark: Option<bool>) -> Result<ThemeConfig> {
        self.require_installed(AssetCategory::WidgetTheme, name)?;
        let inferred = prefer_dark.or_else(|| infer_prefer_dark(name));
        debug!(theme = name, ?inferred, "color scheme preference for theme");

        self.update(|cfg| {
            cfg.widget_theme = name.to_string();
            if let Some(dark) = inferred {
                cfg.prefer_dark = dark;
            }
        })
    }

    pub fn set_icon_theme(&self, name: &str) -> Result<ThemeConfig> {
        self.require_installed(AssetCategory::IconTheme, name)?;
        self.update(|cfg| cfg.icon_theme = name.to_string())
    }

    pub fn set_cursor_theme(&self, name: &str) -> Result<ThemeConfig> {
        self.require_installed(AssetCategory::CursorTheme, name)?;
        self.update(|cfg| cfg.cursor_theme = name.to_string())
    }

    /// Change only the light/dark preference.
    pub fn set_color_scheme(&self, prefer_dark: bool) -> Result<ThemeConfig> {
        self.update(|cfg| cfg.prefer_dark = prefer_dark)
    }

    fn require_installed(&self, category: AssetCategory, name: &str) -> Result<()> {
        let installed = assets::installed(self.dirs, category);
        if installed.binary_search_by(|candidate| candidate.as_str().cmp(name)).is_ok() {
            Ok(())
        } else {
            Err(LookError::NotFound {
                category: category.to_string(),
                name: name.to_string(),
            })
        }
    }

    fn update<F>(&self, edit: F) -> Result<ThemeConfig>
    where
        F: FnOnce(&mut ThemeConfig),
    {
        let mut cfg = self.sync.current()?;
        edit(&mut cfg);
        self.sync.save(&cfg)?;
        Ok(cfg)
    }
}
