//! Session cookie handling for the CLI.

use reqwest::header::{HeaderMap, SET_COOKIE};

/// Build a `Cookie` request header value from a response's `Set-Cookie`
/// headers. Attributes (`Path`, `HttpOnly`, ...) are dropped; only the
/// `name=value` pairs are kept.
#[must_use]
pub fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let pairs: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|raw| raw.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect();

    if pairs.is_empty() { None } else { Some(pairs.join("; ")) }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
