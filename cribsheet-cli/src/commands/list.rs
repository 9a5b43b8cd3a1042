//! `cribsheet list <sheet>` — items grouped by category, in section order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use cribsheet_core::store;
use cribsheet_renderer::group_by_category;

/// List the items on a sheet, grouped by category.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the sheet file.
    pub sheet: PathBuf,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "id")]
    id: u64,
    #[tabled(rename = "label")]
    label: String,
    #[tabled(rename = "content")]
    content: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let sheet = store::load(&self.sheet)
            .with_context(|| format!("failed to load '{}'", self.sheet.display()))?;

        if sheet.items.is_empty() {
            println!("No items on '{}'. Add one with `cribsheet add`.", self.sheet.display());
            return Ok(());
        }

        println!(
            "'{}' | {} item(s) | \"{}\" | {} column(s)",
            self.sheet.display(),
            sheet.items.len(),
            sheet.params.title,
            sheet.params.columns,
        );
        for (category, items) in group_by_category(&sheet.items) {
            println!("{}", category.heading().to_uppercase().bold());
            let rows: Vec<ItemRow> = items
                .iter()
                .map(|item| ItemRow {
                    id: item.id.0,
                    label: item.label.clone(),
                    content: item.content.clone(),
                })
                .collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
        Ok(())
    }
}
