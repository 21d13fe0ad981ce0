// src/extract/link.rs

use once_cell::sync::Lazy;
use url::Url;

const GOOGLE_REDIRECT: &str = "google.com/url";

// Resolves scheme-relative and path-relative hrefs so their query can be read.
static REDIRECT_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.google.com/").expect("redirect base should parse"));

/// Unwrap `https://www.google.com/url?q=<target>&...` to `<target>`.
/// Anything else, including redirects without a usable `q`, is returned as-is.
pub fn clean_redirect_link(href: &str) -> String {
    if href.contains(GOOGLE_REDIRECT) {
        if let Ok(url) = REDIRECT_BASE.join(href) {
            let target = url
                .query_pairs()
                .find(|(k, _)| k == "q")
                .map(|(_, v)| v.into_owned());
            if let Some(q) = target.filter(|q| !q.is_empty()) {
                return q;
            }
        }
    }
    href.to_owned()
}
