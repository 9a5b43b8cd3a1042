//! `cribsheet health` — probe the companion backend's health endpoint.
//!
//! Peripheral glue: the backend is optional and the renderer never depends
//! on it.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Deserialize;

/// Probe the companion backend's health endpoint.
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Base URL of the backend.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub url: String,

    /// Emit the raw response body as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

impl HealthArgs {
    pub fn run(self) -> Result<()> {
        let endpoint = format!("{}/api/health/", self.url.trim_end_matches('/'));
        let body: serde_json::Value = ureq::get(&endpoint)
            .call()
            .with_context(|| format!("health request to {endpoint} failed"))?
            .into_json()
            .context("health response was not valid JSON")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&body).context("failed to serialize health JSON")?
            );
            return Ok(());
        }

        let health: HealthBody = serde_json::from_value(body)
            .context("health response missing a string 'status' field")?;
        if health.status == "ok" {
            println!("{} backend at {} reports '{}'", "✓".green(), self.url, health.status);
        } else {
            println!("{} backend at {} reports '{}'", "!".yellow(), self.url, health.status);
        }
        Ok(())
    }
}
