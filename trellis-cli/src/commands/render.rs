//! `trellis render <name>` — render one composed template with JSON data.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use trellis_renderer::FunctionMap;

use super::ViewArgs;

/// Arguments for `trellis render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Composed template name, e.g. `base:auth/login`.
    pub name: String,

    #[command(flatten)]
    pub views: ViewArgs,

    /// JSON object to render with (defaults to `{}`).
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self, funcs: FunctionMap) -> Result<()> {
        let data = self.load_data()?;
        let renderer = self.views.build(funcs)?;

        match &self.out {
            Some(path) => {
                // A failed render must leave an existing file intact.
                let mut buf = Vec::new();
                renderer.render(&mut buf, &self.name, &data, None)?;
                std::fs::write(path, buf)
                    .with_context(|| format!("cannot write '{}'", path.display()))?;
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                renderer.render(&mut out, &self.name, &data, None)?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn load_data(&self) -> Result<Value> {
        let Some(path) = &self.data else {
            return Ok(Value::Object(Default::default()));
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read data file '{}'", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("data file '{}' is not valid JSON", path.display()))
    }
}
