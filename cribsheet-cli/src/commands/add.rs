//! `cribsheet add <sheet> --category <c> [--label <l>] --content <text>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use cribsheet_core::store;

use super::super::CategoryArg;

/// Add an item to a sheet file.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Path to the sheet file.
    pub sheet: PathBuf,

    /// Item category: formula | definition | example | note.
    #[arg(long, short = 'c', value_name = "CATEGORY", default_value = "formula")]
    pub category: CategoryArg,

    /// Optional short label, shown bold before the content.
    #[arg(long, short = 'l', default_value = "")]
    pub label: String,

    /// The note text itself.
    #[arg(long)]
    pub content: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let mut sheet = store::load(&self.sheet)
            .with_context(|| format!("failed to load '{}'", self.sheet.display()))?;

        match sheet.add_item(self.category.0, self.label, self.content) {
            Some(id) => {
                store::save(&self.sheet, &sheet)
                    .with_context(|| format!("failed to save '{}'", self.sheet.display()))?;
                println!("✓ Added {} item #{id}", self.category.0);
            }
            None => {
                // Blank content is rejected at the input boundary.
                println!("{}", "Nothing added: content is blank".yellow());
            }
        }
        Ok(())
    }
}
