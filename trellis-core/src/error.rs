//! Error types for trellis-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`ViewLayout`](crate::ViewLayout) file.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("cannot read view layout at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error with the file path and serde_yaml line context.
    #[error("failed to parse view layout at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
