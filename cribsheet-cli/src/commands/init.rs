//! `cribsheet init [path]` — scaffold a starter sheet file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cribsheet_core::store;

/// Scaffold a starter sheet file.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the sheet file.
    #[arg(default_value = "sheet.yaml")]
    pub path: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let sheet = store::scaffold(&self.path)
            .with_context(|| format!("failed to scaffold '{}'", self.path.display()))?;

        println!("✓ Wrote starter sheet to '{}'", self.path.display());
        println!(
            "  {} item(s), {} column(s), \"{}\"",
            sheet.items.len(),
            sheet.params.columns,
            sheet.params.title
        );
        println!("  Add more with `cribsheet add {} --content <text>`", self.path.display());
        Ok(())
    }
}
