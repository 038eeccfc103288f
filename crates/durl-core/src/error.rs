//! Error taxonomy for URL resolution.
//!
//! Each variant carries the offending placeholder name or URL so a failure
//! is actionable from the log alone. Nothing here is retried; retry is the
//! caller's policy.

use thiserror::Error;

/// Failure of a single resolution call. The call aborts immediately; a
/// partially substituted URL is never returned.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A placeholder had no value in the live environment or the override file.
    #[error("no value for placeholder '{0}' in environment or override file")]
    MissingConfiguration(String),

    /// The descriptor endpoint could not be reached or answered with a
    /// non-success status.
    #[error("descriptor fetch failed: GET {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The descriptor body did not deserialize as a JSON object. Kept
    /// separate from [`ResolveError::Fetch`] so a broken upstream format is
    /// distinguishable from a transport failure.
    #[error("malformed descriptor from {url}: {source}")]
    MalformedDescriptor {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor parsed but carried no usable download URL. Usually an
    /// invalid API credential embedded in the template, not a transport
    /// problem.
    #[error("descriptor from {url} has no usable download URL; check the API credential embedded in the template")]
    MissingDownloadUrl { url: String },
}
