//! Error types for lookctl.

use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookError>;

#[derive(Debug, Error)]
pub enum LookError {
    #[error("failed to read {key} from the live settings store: {source}")]
    Read {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set {setting}: {source}")]
    Apply {
        setting: String,
        #[source]
        source: StoreError,
    },

    #[error("{category} '{name}' not found. see 'lookctl list {category}' for available names")]
    NotFound { category: String, name: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LookError {
    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read_failed",
            Self::Write { .. } => "write_failed",
            Self::Apply { .. } => "apply_failed",
            Self::NotFound { .. } => "not_found",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Failure talking to the live settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not run {program}: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("invalid output: {0}")]
    InvalidOutput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_points_at_list_command() {
        let err = LookError::NotFound {
            category: "icon".to_string(),
            name: "Papirus".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'Papirus'"));
        assert!(message.contains("lookctl list icon"));
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn apply_error_names_the_setting() {
        let err = LookError::Apply {
            setting: "cursor theme".to_string(),
            source: StoreError::InvalidOutput("bad".to_string()),
        };
        assert!(err.to_string().starts_with("failed to set cursor theme"));
        assert_eq!(err.code(), "apply_failed");
    }
}
