//! `durl resolve <url>` – run the full resolution pipeline.

use anyhow::{Context, Result};
use durl_core::config::ResolverConfig;
use durl_core::env_source::EnvSource;
use durl_core::resolver::DistResolver;

pub fn run_resolve(cfg: ResolverConfig, url: &str) -> Result<()> {
    let env = EnvSource::from_current_dir().context("determine working directory")?;
    let resolver = DistResolver::new(cfg, env);
    let resolved = resolver.resolve_download_url(url)?;
    println!("{resolved}");
    Ok(())
}
