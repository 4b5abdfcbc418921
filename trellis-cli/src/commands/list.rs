//! `trellis list` — every registered template name.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use trellis_renderer::{ComposedTemplate, FunctionMap};

use super::ViewArgs;

/// Arguments for `trellis list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub views: ViewArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Tabled)]
struct TemplateRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "layout")]
    layout: String,
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "bytes")]
    bytes: usize,
}

impl From<&ComposedTemplate> for TemplateRow {
    fn from(t: &ComposedTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            layout: t.layout_path.clone(),
            page: t.page_path.clone(),
            bytes: t.source.len(),
        }
    }
}

impl ListArgs {
    pub fn run(self, funcs: FunctionMap) -> Result<()> {
        let renderer = self.views.build(funcs)?;
        let rows: Vec<TemplateRow> = renderer.registry().iter().map(TemplateRow::from).collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("No templates registered.");
            return Ok(());
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
