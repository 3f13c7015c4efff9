//! Legacy per-toolkit settings files.
//!
//! GTK 3 and GTK 4 read `settings.ini` from their own config directories and
//! GTK 2 reads `~/.gtkrc-2.0`. None of them consult the live store when run
//! outside a full session, so every save rewrites all three.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ThemeConfig;
use crate::config::XdgDirs;
use crate::error::{LookError, Result};

/// Where the settings files live for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStores {
    pub gtk3_dir: PathBuf,
    pub gtk4_dir: PathBuf,
    pub gtkrc2: PathBuf,
}

/// Rendered payloads, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedWrites {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<(PathBuf, String)>,
}

impl FileStores {
    pub fn from_dirs(dirs: &XdgDirs) -> Self {
        Self {
            gtk3_dir: dirs.config_home.join("gtk-3.0"),
            gtk4_dir: dirs.config_home.join("gtk-4.0"),
            gtkrc2: dirs.home.join(".gtkrc-2.0"),
        }
    }

    /// Render every payload without touching the filesystem.
    pub fn stage(&self, cfg: &ThemeConfig) -> StagedWrites {
        let ini = render_settings_ini(cfg);
        StagedWrites {
            dirs: vec![self.gtk3_dir.clone(), self.gtk4_dir.clone()],
            files: vec![
                (self.gtk3_dir.join("settings.ini"), ini.clone()),
                (self.gtk4_dir.join("settings.ini"), ini),
                (self.gtkrc2.clone(), render_gtkrc2(cfg)),
            ],
        }
    }

    /// Write every file in order, stopping at the first failure.
    ///
    /// Files written before the failure stay on disk.
    pub fn save(&self, cfg: &ThemeConfig) -> Result<()> {
        self.stage(cfg).commit()
    }
}

impl StagedWrites {
    pub fn commit(&self) -> Result<()> {
        for dir in &self.dirs {
            std::fs::create_dir_all(dir).map_err(|source| write_error(dir, source))?;
        }
        for (path, contents) in &self.files {
            std::fs::write(path, contents).map_err(|source| write_error(path, source))?;
            debug!(path = %path.display(), "wrote settings file");
        }
        Ok(())
    }
}

fn write_error(path: &Path, source: std::io::Error) -> LookError {
    LookError::Write {
        target: path.display().to_string(),
        source,
    }
}

/// `settings.ini` for GTK 3 and GTK 4.
pub fn render_settings_ini(cfg: &ThemeConfig) -> String {
    let mut out = String::from("[Settings]\n");
    let _ = writeln!(out, "gtk-theme-name={}", cfg.widget_theme);
    let _ = writeln!(out, "gtk-icon-theme-name={}", cfg.icon_theme);
    let _ = writeln!(out, "gtk-cursor-theme-name={}", cfg.cursor_theme);
    let _ = writeln!(out, "gtk-application-prefer-dark-theme={}", cfg.prefer_dark);
    out
}

/// `.gtkrc-2.0`; GTK 2 has no dark preference.
pub fn render_gtkrc2(cfg: &ThemeConfig) -> String {
    format!(
        "gtk-theme-name=\"{}\"\ngtk-icon-theme-name=\"{}\"\ngtk-cursor-theme-name=\"{}\"\n",
        cfg.widget_theme, cfg.icon_theme, cfg.cursor_theme
    )
}
