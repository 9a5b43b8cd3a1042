//! Cribsheet — LaTeX study-sheet generator CLI.
//!
//! # Usage
//!
//! ```text
//! cribsheet init [path]
//! cribsheet add <sheet> --category formula|definition|example|note [--label <text>] --content <text>
//! cribsheet remove <sheet> <id>
//! cribsheet list <sheet>
//! cribsheet render <sheet> [--output <path>] [--columns 1..5] [--font-size <s>]
//!                  [--paper-size <p>] [--margins <m>] [--title <t>] [--borders on|off]
//! cribsheet health [--url <base>]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, health::HealthArgs, init::InitArgs, list::ListArgs, remove::RemoveArgs,
    render::RenderArgs,
};
use cribsheet_core::types::{Category, FontSize, MarginPreset, PaperSize};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "cribsheet",
    version,
    about = "Assemble study notes and render them as a printable LaTeX cheat sheet",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold a starter sheet file.
    Init(InitArgs),

    /// Add an item to a sheet file.
    Add(AddArgs),

    /// Remove an item from a sheet file by id.
    Remove(RemoveArgs),

    /// List the items on a sheet, grouped by category.
    List(ListArgs),

    /// Render a sheet file to a LaTeX document.
    Render(RenderArgs),

    /// Probe the companion backend's health endpoint.
    Health(HealthArgs),
}

// ---------------------------------------------------------------------------
// Shared enum arguments — parsed from CLI strings, convert to core types
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`Category`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct CategoryArg(pub Category);

impl FromStr for CategoryArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "formula" => Ok(Self(Category::Formula)),
            "definition" => Ok(Self(Category::Definition)),
            "example" => Ok(Self(Category::Example)),
            "note" => Ok(Self(Category::Note)),
            other => Err(format!(
                "unknown category '{other}'; expected: formula, definition, example, note"
            )),
        }
    }
}

impl fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Thin wrapper so clap can parse [`FontSize`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct FontSizeArg(pub FontSize);

impl FromStr for FontSizeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(Self(FontSize::Tiny)),
            "small" => Ok(Self(FontSize::Small)),
            "normal" => Ok(Self(FontSize::Normal)),
            "large" => Ok(Self(FontSize::Large)),
            other => Err(format!(
                "unknown font size '{other}'; expected: tiny, small, normal, large"
            )),
        }
    }
}

impl fmt::Display for FontSizeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Thin wrapper so clap can parse [`PaperSize`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct PaperSizeArg(pub PaperSize);

impl FromStr for PaperSizeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letter" => Ok(Self(PaperSize::Letter)),
            "a4" => Ok(Self(PaperSize::A4)),
            other => Err(format!("unknown paper size '{other}'; expected: letter, a4")),
        }
    }
}

impl fmt::Display for PaperSizeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Thin wrapper so clap can parse [`MarginPreset`] from CLI args.
#[derive(Debug, Clone, Default)]
pub struct MarginsArg(pub MarginPreset);

impl FromStr for MarginsArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" => Ok(Self(MarginPreset::Narrow)),
            "normal" => Ok(Self(MarginPreset::Normal)),
            "wide" => Ok(Self(MarginPreset::Wide)),
            other => Err(format!(
                "unknown margin preset '{other}'; expected: narrow, normal, wide"
            )),
        }
    }
}

impl fmt::Display for MarginsArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// `on`/`off` flag for the column separator rule.
#[derive(Debug, Clone)]
pub struct BordersArg(pub bool);

impl FromStr for BordersArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" | "true" => Ok(Self(true)),
            "off" | "false" => Ok(Self(false)),
            other => Err(format!("unknown borders value '{other}'; expected: on, off")),
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Add(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Health(args) => args.run(),
    }
}
