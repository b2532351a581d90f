//! Error types for reference pack loading.

use std::path::PathBuf;

use aegis_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading a reference data pack.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The pack file could not be read.
    #[error("failed to read reference pack {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The pack is not valid YAML or does not match the pack shape.
    #[error("failed to parse reference pack {origin}: {source}")]
    YamlParse {
        /// File path, or `<embedded>` for the compiled-in pack.
        origin: String,
        source: serde_yaml::Error,
    },

    /// The pack parsed but violates a record invariant.
    #[error("invalid reference pack {origin}: {source}")]
    Validation {
        origin: String,
        source: ValidationError,
    },
}
