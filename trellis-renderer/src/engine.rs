//! Renderer — construction (scan + compose) and the render read path.
//!
//! # Lifecycle
//!
//! ```text
//! Renderer::new(config) ── Ok  ──> serving (immutable, Send + Sync)
//!                       └─ Err ──> aborted (InitError, nothing to render with)
//! ```
//!
//! A constructed [`Renderer`] never changes. Share it behind an `Arc` and call
//! [`Renderer::render`] from as many threads as needed.

use std::any::Any;
use std::io::Write;

use serde::Serialize;
use tera::Context;

use trellis_core::ViewLayout;

use crate::composer::compose;
use crate::error::{InitError, RenderError};
use crate::functions::FunctionMap;
use crate::registry::Registry;
use crate::source::ViewSource;

// ---------------------------------------------------------------------------
// RendererConfig
// ---------------------------------------------------------------------------

/// Everything [`Renderer::new`] needs: the view set, its helpers, and its layout.
pub struct RendererConfig {
    pub views: Box<dyn ViewSource>,
    pub funcs: FunctionMap,
    pub layout: ViewLayout,
}

impl RendererConfig {
    /// Config with no helpers and the default [`ViewLayout`].
    pub fn new(views: impl ViewSource + 'static) -> Self {
        Self {
            views: Box::new(views),
            funcs: FunctionMap::new(),
            layout: ViewLayout::default(),
        }
    }

    pub fn funcs(mut self, funcs: FunctionMap) -> Self {
        self.funcs = funcs;
        self
    }

    pub fn layout(mut self, layout: ViewLayout) -> Self {
        self.layout = layout;
        self
    }
}

// ---------------------------------------------------------------------------
// ViewRender
// ---------------------------------------------------------------------------

/// Render capability a request-handling layer plugs in as its response renderer.
///
/// Object safe so a framework can hold it as `Arc<dyn ViewRender>`.
pub trait ViewRender: Send + Sync {
    /// Render `name` with `data` into `out`. `ctx` is the framework's request
    /// context, passed through untouched.
    fn render_view(
        &self,
        out: &mut dyn Write,
        name: &str,
        data: &serde_json::Value,
        ctx: Option<&dyn Any>,
    ) -> Result<(), RenderError>;
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Fixed set of composed templates, built once at startup.
#[derive(Debug)]
pub struct Renderer {
    registry: Registry,
}

impl Renderer {
    /// Scan, compose, and compile the whole view set.
    ///
    /// Any malformed fragment name, unreadable file, parse error, unbound
    /// helper, or name collision is returned as an [`InitError`].
    pub fn new(config: RendererConfig) -> Result<Self, InitError> {
        let registry = compose(config.views.as_ref(), &config.layout, &config.funcs)?;
        Ok(Renderer { registry })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render the template registered as `name` (e.g. `base:auth/login`).
    ///
    /// `data` must serialize to a map (a struct or JSON object) or to null,
    /// which renders with an empty context. Unknown names
    /// fail before anything is written. `_ctx` is accepted for framework
    /// compatibility and not consulted.
    pub fn render<W: Write, T: Serialize + ?Sized>(
        &self,
        out: W,
        name: &str,
        data: &T,
        _ctx: Option<&dyn Any>,
    ) -> Result<(), RenderError> {
        if !self.registry.contains(name) {
            return Err(RenderError::NotFound {
                name: name.to_string(),
            });
        }
        let execution = |source| RenderError::Execution {
            name: name.to_string(),
            source,
        };
        let context = context_from(data).map_err(execution)?;
        self.registry
            .tera()
            .render_to(name, &context, out)
            .map_err(execution)
    }

    /// [`render`](Self::render) into a `String`.
    pub fn render_to_string<T: Serialize + ?Sized>(
        &self,
        name: &str,
        data: &T,
    ) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(&mut buf, name, data, None)?;
        // Tera only emits UTF-8 from UTF-8 sources.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Null data (`()`, `None`, `json!(null)`) becomes an empty context.
fn context_from<T: Serialize + ?Sized>(data: &T) -> tera::Result<Context> {
    match serde_json::to_value(data).map_err(tera::Error::json)? {
        serde_json::Value::Null => Ok(Context::new()),
        value => Context::from_value(value),
    }
}

impl ViewRender for Renderer {
    fn render_view(
        &self,
        out: &mut dyn Write,
        name: &str,
        data: &serde_json::Value,
        ctx: Option<&dyn Any>,
    ) -> Result<(), RenderError> {
        self.render(out, name, data, ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
