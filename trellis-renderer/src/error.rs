//! Error types for trellis-renderer.
//!
//! [`InitError`] aborts construction; nothing can be rendered afterwards.
//! [`RenderError`] is returned per call and leaves the renderer usable.

use thiserror::Error;

use trellis_core::NamingRule;

/// Fatal errors raised while scanning, composing, or compiling the view set.
#[derive(Debug, Error)]
pub enum InitError {
    /// Traversal or read failure inside the view source.
    #[error("view source error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A layout or page file name lacks the template marker.
    #[error("invalid fragment name {path}: {rule}")]
    MissingMarker { path: String, rule: NamingRule },

    /// Tera rejected the composed source.
    #[error("failed to compile template {name} ({label}): {source}")]
    Compile {
        name: String,
        label: String,
        #[source]
        source: tera::Error,
    },

    /// The composed source calls a function that is not bound.
    #[error("template {name} calls unbound function `{function}`")]
    UnboundFunction { name: String, function: String },

    /// Two (layout, page) pairs produced the same composed name.
    #[error("template name {name} produced by both {first} and {second}")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// A function map key is not a valid template identifier.
    #[error("invalid helper function name `{name}`")]
    InvalidFunctionName { name: String },
}

/// Recoverable errors returned from a single render call.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No composed template is registered under the requested name.
    #[error("template {name} not found")]
    NotFound { name: String },

    /// Building the context or executing the template failed.
    #[error("failed to render template {name}: {source}")]
    Execution {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// Convenience constructor for [`InitError::Io`].
pub(crate) fn io_err(path: impl Into<String>, source: std::io::Error) -> InitError {
    InitError::Io {
        path: path.into(),
        source,
    }
}
