//! Resolution pipeline: placeholder substitution plus one indirection hop.
//!
//! Most URLs pass through untouched. A URL naming a configured indirection
//! endpoint gets its placeholders substituted from the environment, is
//! fetched once, and the final artifact URL is read out of the returned
//! descriptor. The host calls [`PreDownload::pre_download`] just before its
//! own download and performs whatever request comes back; retries and the
//! byte transfer itself stay with the host.

use std::collections::HashMap;

use crate::config::ResolverConfig;
use crate::descriptor;
use crate::env_source::EnvSource;
use crate::error::ResolveError;
use crate::template;

/// Request the host should perform instead of its original one: the final
/// URL plus the minimal extra headers for the GET.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// Hook invoked by the host before it downloads `url`. Implementations may
/// substitute a different request for the remainder of that download.
pub trait PreDownload {
    fn pre_download(&self, url: &str) -> Result<ResolvedRequest, ResolveError>;
}

/// Orchestrates template resolution against configured indirection
/// endpoints.
#[derive(Debug)]
pub struct DistResolver {
    config: ResolverConfig,
    env: EnvSource,
}

impl DistResolver {
    pub fn new(config: ResolverConfig, env: EnvSource) -> Self {
        Self { config, env }
    }

    /// True if `url` names one of the configured indirection endpoints.
    fn is_endpoint(&self, url: &str) -> bool {
        self.config
            .endpoint_hosts
            .iter()
            .any(|host| !host.is_empty() && url.contains(host.as_str()))
    }

    /// Resolves a templated URL to the final artifact URL.
    ///
    /// Non-endpoint URLs come back unchanged, as do endpoint URLs without
    /// placeholders unless `fetch_without_placeholders` is set. Results are
    /// not cached: identical inputs resolved twice fetch twice (resolution
    /// runs once per artifact per process in practice).
    ///
    /// Every placeholder is resolved before anything touches the network,
    /// so a missing value aborts without a fetch.
    pub fn resolve_download_url(&self, template_url: &str) -> Result<String, ResolveError> {
        if !self.is_endpoint(template_url) {
            return Ok(template_url.to_string());
        }

        let placeholders = template::extract_placeholders(template_url);
        if placeholders.is_empty() && !self.config.fetch_without_placeholders {
            return Ok(template_url.to_string());
        }

        let mut values = Vec::with_capacity(placeholders.len());
        for name in &placeholders {
            values.push((name.clone(), self.env.resolve(name)?));
        }
        let substituted = template::substitute(template_url, &values);

        // Log the template form only: substituted values are credentials.
        tracing::debug!(
            "fetching descriptor for {} ({} placeholder(s))",
            template_url,
            placeholders.len()
        );
        let body = descriptor::fetch(
            &substituted,
            &self.config.extra_headers,
            self.config.fetch_options(),
        )?;
        let parsed = descriptor::parse(&substituted, &body)?;
        let final_url = descriptor::extract_download_url(&substituted, &parsed)?;
        tracing::info!("resolved artifact location for {}", template_url);
        Ok(final_url)
    }
}

impl PreDownload for DistResolver {
    fn pre_download(&self, url: &str) -> Result<ResolvedRequest, ResolveError> {
        let resolved = self.resolve_download_url(url)?;
        let headers = if resolved == url {
            HashMap::new()
        } else {
            self.config.extra_headers.clone()
        };
        Ok(ResolvedRequest {
            url: resolved,
            headers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn resolver(hosts: &[&str], fetch_without_placeholders: bool) -> (DistResolver, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = ResolverConfig {
            endpoint_hosts: hosts.iter().map(|h| h.to_string()).collect(),
            fetch_without_placeholders,
            ..ResolverConfig::default()
        };
        let env = EnvSource::at(dir.path().to_path_buf());
        (DistResolver::new(config, env), dir)
    }

    #[test]
    fn non_endpoint_url_passes_through() {
        let (r, _dir) = resolver(&["indirection.example"], false);
        let url = "https://plain.example/artifact.zip";
        assert_eq!(r.resolve_download_url(url).unwrap(), url);
    }

    #[test]
    fn no_configured_hosts_means_everything_passes_through() {
        let (r, _dir) = resolver(&[], true);
        let url = "https://indirection.example/api?key={%DURL_RS_KEY}";
        assert_eq!(r.resolve_download_url(url).unwrap(), url);
    }

    #[test]
    fn endpoint_without_placeholders_passes_through_by_default() {
        let (r, _dir) = resolver(&["indirection.example"], false);
        let url = "https://indirection.example/api?key=literal";
        assert_eq!(r.resolve_download_url(url).unwrap(), url);
    }

    #[test]
    fn missing_value_aborts_before_any_fetch() {
        // The endpoint host is unroutable; a fetch attempt would surface as
        // a Fetch error (or hang), so MissingConfiguration proves the
        // pipeline stopped at value resolution.
        let (r, _dir) = resolver(&["descriptor.invalid"], false);
        let err = r
            .resolve_download_url("https://descriptor.invalid/api?key={%DURL_RS_UNSET}")
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingConfiguration(name) if name == "DURL_RS_UNSET"
        ));
    }

    #[test]
    fn pre_download_pass_through_keeps_url_and_no_headers() {
        let (r, _dir) = resolver(&["indirection.example"], false);
        let req = r.pre_download("https://plain.example/a.zip").unwrap();
        assert_eq!(req.url, "https://plain.example/a.zip");
        assert!(req.headers.is_empty());
    }
}
