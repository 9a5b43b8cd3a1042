//! `cribsheet remove <sheet> <id>` — drop one item by id.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use cribsheet_core::{store, types::ItemId};

/// Remove an item from a sheet file by id.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Path to the sheet file.
    pub sheet: PathBuf,

    /// Id of the item to remove (see `cribsheet list`).
    pub id: u64,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        let mut sheet = store::load(&self.sheet)
            .with_context(|| format!("failed to load '{}'", self.sheet.display()))?;

        if sheet.remove_item(ItemId(self.id)) {
            store::save(&self.sheet, &sheet)
                .with_context(|| format!("failed to save '{}'", self.sheet.display()))?;
            println!("✓ Removed item #{}", self.id);
        } else {
            println!("{}", format!("No item #{} on this sheet", self.id).yellow());
        }
        Ok(())
    }
}
