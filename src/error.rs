//! Error types
//!
//! Only setup can fail. Once the loop runs, a tick never errors; the render
//! sink is the single collaborator whose failure is fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while preparing the simulation or its backends
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read settings file {path}: {source}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {path}: {source}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

impl SetupError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure reported by a render sink
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,

    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}
