//! `trellis check` — compose the view set and report what was built.

use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use trellis_renderer::FunctionMap;

use super::ViewArgs;

/// Arguments for `trellis check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub views: ViewArgs,
}

impl CheckArgs {
    pub fn run(self, funcs: FunctionMap) -> Result<()> {
        let renderer = self.views.build(funcs)?;
        let registry = renderer.registry();

        let layouts: BTreeSet<_> = registry.iter().map(|t| t.name.layout()).collect();
        let pages: BTreeSet<_> = registry.iter().map(|t| t.name.page()).collect();

        println!(
            "{} {} templates composed from {} layouts × {} pages ({})",
            "✓".green(),
            registry.len(),
            layouts.len(),
            pages.len(),
            self.views.describe(),
        );
        if registry.is_empty() {
            println!("  no layout/page pairs found; nothing can be rendered");
        }
        Ok(())
    }
}
