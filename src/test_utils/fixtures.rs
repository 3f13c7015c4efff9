use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::XdgDirs;

/// Isolated HOME and XDG data tree inside a temp directory.
///
/// Nothing under the data dirs exists until a test creates it; only the home
/// directory is created up front.
pub struct AssetTree {
    pub temp_dir: TempDir,
    pub dirs: XdgDirs,
}

impl Default for AssetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetTree {
    #[must_use]
    pub fn new() -> Self {
        Self::with_system_dirs(&["usr/share"])
    }

    /// `system_dirs` are relative to the temp root and become `XDG_DATA_DIRS`.
    #[must_use]
    pub fn with_system_dirs(system_dirs: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let home = root.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");

        let data_dirs = system_dirs
            .iter()
            .map(|dir| root.join(dir).display().to_string())
            .collect::<Vec<_>>()
            .join(":");
        let home_str = home.display().to_string();

        let dirs = XdgDirs::from_lookup(|key| match key {
            "HOME" => Some(home_str.clone()),
            "XDG_DATA_DIRS" => Some(data_dirs.clone()),
            _ => None,
        });

        Self { temp_dir, dirs }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// First entry of `XDG_DATA_DIRS`.
    #[must_use]
    pub fn system_dir(&self) -> &Path {
        &self.dirs.system_data_dirs[0]
    }

    pub fn mkdir(&self, path: &Path) {
        std::fs::create_dir_all(path).expect("Failed to create dir");
    }

    /// Create an empty file, creating parents as needed.
    pub fn touch(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.mkdir(parent);
        }
        std::fs::write(path, "").expect("Failed to write file");
    }

    /// `<root>/<name>/index.theme`
    pub fn widget_theme(&self, root: &Path, name: &str) -> PathBuf {
        let path = root.join(name);
        self.touch(&path.join("index.theme"));
        path
    }

    /// `<root>/<name>/index.theme` plus an `apps` folder.
    pub fn icon_theme(&self, root: &Path, name: &str) -> PathBuf {
        let path = self.widget_theme(root, name);
        self.mkdir(&path.join("apps"));
        path
    }

    /// `<root>/<name>/index.theme` plus a `cursors` folder.
    pub fn cursor_theme(&self, root: &Path, name: &str) -> PathBuf {
        let path = self.widget_theme(root, name);
        self.mkdir(&path.join("cursors"));
        path
    }
}

/// Write an executable shell script and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark script executable");
    path
}
