//! Blocking descriptor GET via libcurl.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ResolveError;

/// Transport knobs for the descriptor GET.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Performs one GET against `url` and returns the response body.
///
/// Follows redirects. Optional extra headers are forwarded (credentials
/// normally travel inside the URL itself). Exactly one attempt: any
/// transport failure or non-2xx status maps to [`ResolveError::Fetch`].
/// Runs on the current thread; call from `spawn_blocking` in async hosts.
pub fn fetch(
    url: &str,
    extra_headers: &HashMap<String, String>,
    options: FetchOptions,
) -> Result<Vec<u8>, ResolveError> {
    let fetch_err = |reason: String| ResolveError::Fetch {
        url: url.to_string(),
        reason,
    };
    let curl_err = |e: curl::Error| fetch_err(e.to_string());

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.max_redirections(10).map_err(curl_err)?;
    easy.connect_timeout(options.connect_timeout).map_err(curl_err)?;
    easy.timeout(options.request_timeout).map_err(curl_err)?;

    let mut list = curl::easy::List::new();
    for (k, v) in extra_headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))
            .map_err(curl_err)?;
    }
    if !extra_headers.is_empty() {
        easy.http_headers(list).map_err(curl_err)?;
    }

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let code = easy.response_code().map_err(curl_err)?;
    if code < 200 || code >= 300 {
        return Err(fetch_err(format!("HTTP {}", code)));
    }
    Ok(body)
}
