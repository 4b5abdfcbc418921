//! # trellis-renderer
//!
//! Composes layout, page, and shared fragments into a fixed set of Tera
//! templates at startup, then renders them by name.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trellis_renderer::{DirSource, Renderer, RendererConfig};
//!
//! fn serve() -> Result<(), Box<dyn std::error::Error>> {
//!     let renderer = Renderer::new(RendererConfig::new(DirSource::new("views")))?;
//!     let mut out = Vec::new();
//!     renderer.render(&mut out, "base:auth/login", &serde_json::json!({ "title": "Login" }), None)?;
//!     Ok(())
//! }
//! ```

pub mod composer;
pub mod engine;
pub mod error;
pub mod functions;
pub mod registry;
pub mod scanner;
pub mod source;
mod validate;

pub use composer::compose;
pub use engine::{Renderer, RendererConfig, ViewRender};
pub use error::{InitError, RenderError};
pub use functions::FunctionMap;
pub use registry::{ComposedTemplate, Registry};
pub use source::{DirSource, EmbeddedSource, ViewEntry, ViewSource};
