//! Subcommand implementations and the view-set options they share.

pub mod check;
pub mod list;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use trellis_core::ViewLayout;
use trellis_renderer::{DirSource, FunctionMap, Renderer, RendererConfig};

use crate::embedded::demo_views;

/// Where to load views from. Shared by every subcommand.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Directory holding the layouts/, pages/ and shared/ roots.
    /// Defaults to the bundled demo views.
    #[arg(long, value_name = "DIR")]
    pub views: Option<PathBuf>,

    /// YAML view layout overriding roots, marker, and escaping.
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

impl ViewArgs {
    /// Compose the view set. Any failure here is an initialization error.
    pub fn build(&self, funcs: FunctionMap) -> Result<Renderer> {
        let layout = match &self.layout {
            Some(path) => ViewLayout::load(path)?,
            None => ViewLayout::default(),
        };

        let config = match &self.views {
            Some(dir) => RendererConfig::new(DirSource::new(dir)),
            None => RendererConfig::new(demo_views()),
        };
        Renderer::new(config.funcs(funcs).layout(layout))
            .with_context(|| format!("failed to compose views from {}", self.describe()))
    }

    pub fn describe(&self) -> String {
        match &self.views {
            Some(dir) => format!("'{}'", dir.display()),
            None => "bundled demo views".to_string(),
        }
    }
}
