//! Descriptor handling: fetch the indirection endpoint once, parse the
//! JSON document it returns, and extract the final artifact URL.
//!
//! The fetch is a single blocking GET with no retry; transport failures,
//! malformed bodies and missing fields are distinct errors so operators can
//! tell a broken network from a broken upstream from a bad credential.

mod fetch;
mod parse;

pub use fetch::{fetch, FetchOptions};
pub use parse::{extract_download_url, parse};
