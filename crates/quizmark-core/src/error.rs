//! Definition-loading error types.
//!
//! The validator and scorer never fail; these errors cover only the file
//! surface that loads quiz definitions from disk. Defined here so callers
//! can match on the failure kind instead of string-matching messages.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a quiz definition file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The file could not be read.
    #[error("failed to read quiz definition {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the definition shape.
    #[error("failed to parse quiz definition {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A directory was expected.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
