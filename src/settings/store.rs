//! Live settings store access.
//!
//! Wraps the `gsettings` CLI. The [`LiveStore`] trait is the seam used by the
//! reader and writer so they can run against an in-memory store in tests.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::trace;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Key-value access to the running session's settings service.
pub trait LiveStore {
    /// Current value of `key`, with surrounding quotes removed.
    fn get(&self, schema: &str, key: &str) -> Result<String, StoreError>;

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Client for the `gsettings` command.
pub struct Gsettings {
    /// Path to gsettings binary (default: "gsettings")
    bin: PathBuf,
}

impl Gsettings {
    pub fn new() -> Self {
        Self::with_binary("gsettings")
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_binary(&config.gsettings)
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self { bin: binary.into() }
    }

    /// Whether the binary can be resolved on `PATH` (or exists, if absolute).
    pub fn is_available(&self) -> bool {
        which::which(&self.bin).is_ok()
    }

    fn program(&self) -> String {
        self.bin.display().to_string()
    }

    fn run_command(&self, args: &[&str]) -> Result<Vec<u8>, StoreError> {
        trace!(program = %self.bin.display(), ?args, "running live store command");

        let output = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| StoreError::Unavailable {
                program: self.program(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StoreError::Failed {
                program: self.program(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

impl Default for Gsettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveStore for Gsettings {
    fn get(&self, schema: &str, key: &str) -> Result<String, StoreError> {
        let stdout = self.run_command(&["get", schema, key])?;
        let raw = String::from_utf8(stdout)
            .map_err(|err| StoreError::InvalidOutput(format!("{key}: {err}")))?;
        Ok(unquote(&raw).to_string())
    }

    fn set(&self, schema: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.run_command(&["set", schema, key, value]).map(|_| ())
    }
}

/// `'Adwaita'\n` -> `Adwaita`
fn unquote(raw: &str) -> &str {
    raw.trim().trim_matches('\'')
}
