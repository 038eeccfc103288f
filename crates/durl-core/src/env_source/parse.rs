//! Parse `KEY=VALUE` override file text into a map.

use std::collections::HashMap;

/// Parses `.env`-style text: one `KEY=VALUE` per line.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is
/// tolerated, and one pair of matching single or double quotes around the
/// value is stripped. Keys outside the placeholder alphabet are ignored.
/// The last assignment to a key wins.
pub(crate) fn parse_env_file(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() || !is_valid_key(key) {
                continue;
            }
            entries.insert(key.to_string(), unquote(value.trim()).to_string());
        }
    }
    entries
}

fn is_valid_key(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if value.len() >= 2
        && ((bytes[0] == b'"' && bytes[value.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[value.len() - 1] == b'\''))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
