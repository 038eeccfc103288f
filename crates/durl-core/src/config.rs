use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::descriptor::FetchOptions;

/// Global configuration loaded from `~/.config/durl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Hosts treated as indirection endpoints, matched by substring against
    /// the requested URL. URLs naming none of these pass through untouched.
    #[serde(default)]
    pub endpoint_hosts: Vec<String>,
    /// Fetch the descriptor even when an endpoint URL carries no
    /// placeholders. Off by default: such URLs pass through like any other.
    #[serde(default)]
    pub fetch_without_placeholders: bool,
    /// Connect timeout for the descriptor GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for the descriptor GET, in seconds.
    pub request_timeout_secs: u64,
    /// Extra headers sent with the descriptor GET and handed to the host
    /// for the artifact download (e.g. cookie-based CDN auth).
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint_hosts: Vec::new(),
            fetch_without_placeholders: false,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            extra_headers: HashMap::new(),
        }
    }
}

impl ResolverConfig {
    /// Transport options for the descriptor fetch.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("durl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResolverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ResolverConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ResolverConfig::default();
        assert!(cfg.endpoint_hosts.is_empty());
        assert!(!cfg.fetch_without_placeholders);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert!(cfg.extra_headers.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ResolverConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ResolverConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoint_hosts, cfg.endpoint_hosts);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            endpoint_hosts = ["updates.vendor.example"]
            fetch_without_placeholders = true
            connect_timeout_secs = 5
            request_timeout_secs = 10

            [extra_headers]
            Cookie = "session=abc"
        "#;
        let cfg: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.endpoint_hosts, vec!["updates.vendor.example"]);
        assert!(cfg.fetch_without_placeholders);
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.extra_headers.get("Cookie").unwrap(), "session=abc");
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let toml = r#"
            connect_timeout_secs = 20
            request_timeout_secs = 40
        "#;
        let cfg: ResolverConfig = toml::from_str(toml).unwrap();
        assert!(cfg.endpoint_hosts.is_empty());
        assert!(!cfg.fetch_without_placeholders);
        assert!(cfg.extra_headers.is_empty());
    }

    #[test]
    fn fetch_options_reflect_timeouts() {
        let cfg = ResolverConfig {
            connect_timeout_secs: 3,
            request_timeout_secs: 7,
            ..ResolverConfig::default()
        };
        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(3));
        assert_eq!(opts.request_timeout, Duration::from_secs(7));
    }
}
