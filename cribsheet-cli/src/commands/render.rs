//! `cribsheet render <sheet>` — generate the LaTeX document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cribsheet_core::{store, types::ColumnCount};
use cribsheet_renderer::Renderer;

use super::super::{BordersArg, FontSizeArg, MarginsArg, PaperSizeArg};

/// Render a sheet file to a LaTeX document.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the sheet file.
    pub sheet: PathBuf,

    /// Write the document here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Override the sheet's column count (1-5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub columns: Option<u8>,

    /// Override the font size: tiny | small | normal | large.
    #[arg(long)]
    pub font_size: Option<FontSizeArg>,

    /// Override the paper size: letter | a4.
    #[arg(long)]
    pub paper_size: Option<PaperSizeArg>,

    /// Override the margins: narrow | normal | wide.
    #[arg(long)]
    pub margins: Option<MarginsArg>,

    /// Override the sheet title.
    #[arg(long)]
    pub title: Option<String>,

    /// Override the column separator rule: on | off.
    #[arg(long, value_name = "ON|OFF")]
    pub borders: Option<BordersArg>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let mut sheet = store::load(&self.sheet)
            .with_context(|| format!("failed to load '{}'", self.sheet.display()))?;

        if let Some(columns) = self.columns {
            sheet.params.columns = ColumnCount::try_from(columns)?;
        }
        if let Some(font_size) = self.font_size {
            sheet.params.font_size = font_size.0;
        }
        if let Some(paper_size) = self.paper_size {
            sheet.params.paper_size = paper_size.0;
        }
        if let Some(margins) = self.margins {
            sheet.params.margins = margins.0;
        }
        if let Some(title) = self.title {
            sheet.params.title = title;
        }
        if let Some(borders) = self.borders {
            sheet.params.show_borders = borders.0;
        }

        let renderer = Renderer::new().context("failed to build renderer")?;
        let document = renderer
            .render(&sheet.items, &sheet.params)
            .context("failed to render document")?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, &document)
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                println!("✓ Wrote LaTeX document to '{}'", path.display());
            }
            None => print!("{document}"),
        }
        Ok(())
    }
}
