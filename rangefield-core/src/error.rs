//! Error types for configuration loading and the form container.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a field or form description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),
}

/// Failure while registering or addressing fields of a [`crate::Form`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field {0:?} is already registered")]
    DuplicateField(String),

    #[error("no field named {0:?}")]
    UnknownField(String),
}
