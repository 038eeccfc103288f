//! Descriptor deserialization and artifact-URL extraction.

use serde_json::{Map, Value};
use url::Url;

use crate::error::ResolveError;

/// Key the indirection endpoint uses for the artifact location.
const DOWNLOAD_URL_KEY: &str = "download_url_latest";

/// Deserializes the descriptor body into a JSON object.
///
/// `url` is the endpoint the body came from, carried into the error for
/// context. Non-object documents count as malformed.
pub fn parse(url: &str, bytes: &[u8]) -> Result<Map<String, Value>, ResolveError> {
    serde_json::from_slice(bytes).map_err(|source| ResolveError::MalformedDescriptor {
        url: url.to_string(),
        source,
    })
}

/// Reads the artifact URL out of a parsed descriptor.
///
/// An absent key, an empty or non-string value, or a value that does not
/// parse as a URL all mean the endpoint rejected the request content-wise
/// (typically a bad API credential), reported as
/// [`ResolveError::MissingDownloadUrl`].
pub fn extract_download_url(
    url: &str,
    descriptor: &Map<String, Value>,
) -> Result<String, ResolveError> {
    let missing = || ResolveError::MissingDownloadUrl {
        url: url.to_string(),
    };

    let value = descriptor
        .get(DOWNLOAD_URL_KEY)
        .and_then(Value::as_str)
        .map(str::trim)
        .ok_or_else(missing)?;
    if value.is_empty() || Url::parse(value).is_err() {
        return Err(missing());
    }
    Ok(value.to_string())
}
