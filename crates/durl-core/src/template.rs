//! Placeholder scanning and substitution for templated URLs.
//!
//! Tokens look like `{%NAME}` with NAME limited to `[A-Za-z0-9_-]`.
//! Scanning is regex-based; substitution is plain text replacement so a
//! resolved value is never reinterpreted as a pattern.

use once_cell::sync::Lazy;
use regex::Regex;

/// `{%NAME}` with the allowed name alphabet. Empty names do not match.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%([A-Za-z0-9_-]+)\}").expect("placeholder regex"));

/// Returns the distinct placeholder names in `url`, first-seen order.
///
/// A URL without tokens yields an empty vec; this never fails. Repeated
/// tokens collapse to one entry so each name is looked up once per call.
pub fn extract_placeholders(url: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(url) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replaces every occurrence of `{%name}` in `url` with its value, for each
/// resolved pair.
///
/// Textual `str::replace`, so `$`, `\` or `{` in values pass through
/// untouched. Names come from [`extract_placeholders`]'s alphabet, which
/// keeps the tokens disjoint; replacement order across names cannot matter.
/// A no-op on URLs with no remaining tokens.
pub fn substitute(url: &str, values: &[(String, String)]) -> String {
    let mut out = url.to_string();
    for (name, value) in values {
        let token = format!("{{%{name}}}");
        out = out.replace(&token, value);
    }
    out
}
