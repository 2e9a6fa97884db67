// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan target addresses.
//!
//! Scans are labelled with the address the markup came from. Callers that
//! fetch pages normalize user input here first so the label is a canonical
//! absolute URL.

use crate::error::{ComplybotError, Result};
use url::Url;

/// Normalize user input into an absolute http(s) URL.
///
/// A bare host such as `example.com/about` gets an `https://` prefix.
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ComplybotError::InvalidUrl("URL is required".to_string()));
    }

    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if lower.contains("://") {
        return Err(ComplybotError::InvalidUrl(format!(
            "unsupported protocol in '{}'",
            trimmed
        )));
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ComplybotError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ComplybotError::InvalidUrl(format!("'{}' has no host", trimmed)));
    }

    Ok(url)
}
