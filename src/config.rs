use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::output::OutputFormat;
use crate::error::{LookError, Result};

const FALLBACK_SYSTEM_DATA_DIRS: [&str; 2] = ["/usr/local/share", "/usr/share"];

/// Base directories resolved from the XDG environment.
///
/// Built once at startup and passed down explicitly so that search-path and
/// write-target resolution never consult the process environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdgDirs {
    pub system_data_dirs: Vec<PathBuf>,
    pub home_data_dir: PathBuf,
    pub config_home: PathBuf,
    pub home: PathBuf,
}

impl XdgDirs {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve directories from an arbitrary variable lookup. Unset and empty
    /// values are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let home = get("HOME")
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_default();

        let system_data_dirs = get("XDG_DATA_DIRS")
            .map(|value| {
                value
                    .split(':')
                    .filter(|entry| !entry.is_empty())
                    .map(PathBuf::from)
                    .collect::<Vec<_>>()
            })
            .filter(|parsed| !parsed.is_empty())
            .unwrap_or_else(|| {
                FALLBACK_SYSTEM_DATA_DIRS
                    .iter()
                    .map(PathBuf::from)
                    .collect()
            });

        let home_data_dir = get("XDG_DATA_HOME")
            .map_or_else(|| home.join(".local").join("share"), PathBuf::from);
        let config_home =
            get("XDG_CONFIG_HOME").map_or_else(|| home.join(".config"), PathBuf::from);

        Self {
            system_data_dirs,
            home_data_dir,
            config_home,
            home,
        }
    }

    /// System data dirs followed by the user data dir.
    pub fn data_dirs(&self) -> impl Iterator<Item = &Path> {
        self.system_data_dirs
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.home_data_dir.as_path()))
    }

    #[must_use]
    pub fn default_config_path(&self) -> PathBuf {
        self.config_home.join("lookctl").join("config.toml")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, dirs: &XdgDirs) -> Result<Self> {
        let mut config = Self::default();

        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("LOOKCTL_CONFIG").map(PathBuf::from))
            .unwrap_or_else(|| dirs.default_config_path());

        if let Some(patch) = Self::load_patch(&path)? {
            config.merge_patch(patch);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Defaults with only the environment overrides applied.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LookError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LookError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.store {
            self.store.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("LOOKCTL_GSETTINGS") {
            self.store.gsettings = value;
        }
        if let Some(value) = env_string("LOOKCTL_SCHEMA") {
            self.store.schema = value;
        }
        if env_bool("LOOKCTL_ROBOT").unwrap_or(false) {
            self.output.format = OutputFormat::Json;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Binary used to talk to the live settings store.
    #[serde(default)]
    pub gsettings: String,
    #[serde(default)]
    pub schema: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            gsettings: "gsettings".to_string(),
            schema: crate::settings::DESKTOP_INTERFACE_SCHEMA.to_string(),
        }
    }
}

impl StoreConfig {
    fn merge(&mut self, patch: StorePatch) {
        if let Some(value) = patch.gsettings {
            self.gsettings = value;
        }
        if let Some(value) = patch.schema {
            self.schema = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub store: Option<StorePatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StorePatch {
    pub gsettings: Option<String>,
    pub schema: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn xdg_dirs_use_env_values_when_set() {
        let dirs = XdgDirs::from_lookup(lookup(&[
            ("HOME", "/home/test"),
            ("XDG_DATA_DIRS", "/usr/data:/usr/local/data"),
            ("XDG_DATA_HOME", "/home/test/data"),
            ("XDG_CONFIG_HOME", "/home/test/cfg"),
        ]));

        assert_eq!(
            dirs.system_data_dirs,
            vec![PathBuf::from("/usr/data"), PathBuf::from("/usr/local/data")]
        );
        assert_eq!(dirs.home_data_dir, PathBuf::from("/home/test/data"));
        assert_eq!(dirs.config_home, PathBuf::from("/home/test/cfg"));
        assert_eq!(
            dirs.data_dirs().collect::<Vec<_>>(),
            vec![
                Path::new("/usr/data"),
                Path::new("/usr/local/data"),
                Path::new("/home/test/data"),
            ]
        );
    }

    #[test]
    fn xdg_dirs_fall_back_when_unset_or_empty() {
        let dirs = XdgDirs::from_lookup(lookup(&[
            ("HOME", "/home/test"),
            ("XDG_DATA_DIRS", ""),
        ]));

        assert_eq!(
            dirs.system_data_dirs,
            vec![PathBuf::from("/usr/local/share"), PathBuf::from("/usr/share")]
        );
        assert_eq!(dirs.home_data_dir, PathBuf::from("/home/test/.local/share"));
        assert_eq!(dirs.config_home, PathBuf::from("/home/test/.config"));
        assert_eq!(
            dirs.default_config_path(),
            PathBuf::from("/home/test/.config/lookctl/config.toml")
        );
    }

    #[test]
    fn xdg_data_dirs_skip_empty_segments() {
        let dirs = XdgDirs::from_lookup(lookup(&[
            ("HOME", "/home/test"),
            ("XDG_DATA_DIRS", ":/opt/share::"),
        ]));
        assert_eq!(dirs.system_data_dirs, vec![PathBuf::from("/opt/share")]);
    }

    #[test]
    fn config_file_patches_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[store]\ngsettings = \"/opt/bin/gsettings\"\n\n[output]\nformat = \"plain\"\n",
        )
        .unwrap();

        let patch = Config::load_patch(&path).unwrap().unwrap();
        let mut config = Config::default();
        config.merge_patch(patch);

        assert_eq!(config.store.gsettings, "/opt/bin/gsettings");
        assert_eq!(config.store.schema, "org.gnome.desktop.interface");
        assert_eq!(config.output.format, OutputFormat::Plain);
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_patch(&dir.path().join("absent.toml")).unwrap().is_none());
    }

    #[test]
    fn malformed_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store\n").unwrap();

        let err = Config::load_patch(&path).unwrap_err();
        assert_eq!(err.code(), "config");
    }
}
