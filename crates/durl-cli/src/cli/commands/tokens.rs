//! `durl tokens <url>` – list the distinct placeholders in a URL.

use durl_core::template;

pub fn run_tokens(url: &str) {
    for name in template::extract_placeholders(url) {
        println!("{name}");
    }
}
