//! CLI for the durl download-URL resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use durl_core::config;

use commands::{run_check, run_resolve, run_tokens};

/// Top-level CLI for the durl download-URL resolver.
#[derive(Debug, Parser)]
#[command(name = "durl")]
#[command(about = "durl: resolve templated download URLs to artifact locations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a URL, following the indirection endpoint if it matches.
    Resolve {
        /// URL, possibly containing `{%NAME}` placeholders.
        url: String,

        /// Treat URLs containing HOST as indirection endpoints (repeatable,
        /// adds to the configured list).
        #[arg(long, value_name = "HOST")]
        host: Vec<String>,

        /// Fetch the descriptor even when the URL has no placeholders.
        #[arg(long)]
        always_fetch: bool,
    },

    /// List the distinct placeholders in a URL.
    Tokens {
        /// URL to scan.
        url: String,
    },

    /// Check placeholder values for a URL without touching the network.
    Check {
        /// URL to check.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                url,
                host,
                always_fetch,
            } => {
                cfg.endpoint_hosts.extend(host);
                if always_fetch {
                    cfg.fetch_without_placeholders = true;
                }
                run_resolve(cfg, &url)?;
            }
            CliCommand::Tokens { url } => run_tokens(&url),
            CliCommand::Check { url } => run_check(&url)?,
        }

        Ok(())
    }
}
