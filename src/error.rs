//! Typed errors for the library surface.
//!
//! The CLI and MCP layers wrap these in `anyhow` with extra context.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to resolve a message at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Neither the requested locale nor the default locale has the key.
    #[error("unknown message key \"{key}\"")]
    UnknownKey { key: String },
}

/// Failure to load a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML file {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("root of {path} must be an object")]
    InvalidRoot { path: PathBuf },

    #[error("unsupported catalog file extension: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("messages directory '{}' does not exist", path.display())]
    MissingRoot { path: PathBuf },

    #[error("default locale '{locale}' has no messages in {}", path.display())]
    MissingDefaultLocale { locale: String, path: PathBuf },
}
