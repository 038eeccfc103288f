//! `durl check <url>` – verify placeholder values without network access.
//!
//! Prints availability per placeholder, never the values themselves.

use anyhow::{Context, Result};
use durl_core::env_source::EnvSource;
use durl_core::template;

pub fn run_check(url: &str) -> Result<()> {
    let placeholders = template::extract_placeholders(url);
    if placeholders.is_empty() {
        println!("No placeholders in URL.");
        return Ok(());
    }

    let env = EnvSource::from_current_dir().context("determine working directory")?;
    let mut missing = 0usize;
    for name in &placeholders {
        match env.resolve(name) {
            Ok(_) => println!("{name:<24} ok"),
            Err(_) => {
                missing += 1;
                println!("{name:<24} MISSING");
            }
        }
    }

    if missing > 0 {
        anyhow::bail!("{missing} of {} placeholder(s) unresolved", placeholders.len());
    }
    Ok(())
}
