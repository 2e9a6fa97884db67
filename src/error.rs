// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for complybot
//!
//! The scanning core itself never fails on markup. Errors come from the
//! surrounding plumbing: configuration, I/O, URL normalization, and the
//! check isolation policy when it is set to abort.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComplybotError>;

#[derive(Error, Debug)]
pub enum ComplybotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{}", .kind.user_message())]
    Fetch { kind: FetchErrorKind, message: String },

    #[error("Check '{rule}' failed: {message}")]
    CheckFailed { rule: String, message: String },

    #[error("Unknown rule id: {0}")]
    UnknownRule(String),

    #[error("Registry error: {0}")]
    Registry(String),
}

impl ComplybotError {
    /// Build a fetch error from a transport error message, classifying it.
    pub fn fetch(message: impl Into<String>) -> Self {
        let message = message.into();
        ComplybotError::Fetch {
            kind: FetchErrorKind::classify(&message),
            message,
        }
    }

    /// Status code a caller should report for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ComplybotError::Fetch { kind, .. } => kind.status_code(),
            ComplybotError::InvalidUrl(_) => FetchErrorKind::InvalidInput.status_code(),
            _ => FetchErrorKind::Unknown.status_code(),
        }
    }
}

/// Categories for document acquisition failures.
///
/// Fetching happens outside the core, so these kinds exist for callers that
/// need to map transport errors onto distinct user-facing outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchErrorKind {
    /// Host could not be resolved or reached
    Unreachable,
    /// The site took too long to respond
    Timeout,
    /// Malformed address or unsupported protocol
    InvalidInput,
    /// Certificate or TLS failure
    TransportSecurity,
    /// Anything not matched above
    Unknown,
}

struct KindPattern {
    regex: Regex,
    kind: FetchErrorKind,
}

// Ordered: the first matching pattern wins.
static KIND_PATTERNS: LazyLock<Vec<KindPattern>> = LazyLock::new(|| {
    vec![
        KindPattern {
            regex: Regex::new(r"(?i)fetch failed|enotfound|getaddrinfo").unwrap(),
            kind: FetchErrorKind::Unreachable,
        },
        KindPattern {
            regex: Regex::new(r"(?i)timeout|etimedout|timed out").unwrap(),
            kind: FetchErrorKind::Timeout,
        },
        KindPattern {
            regex: Regex::new(r"(?i)certificate|ssl|tls").unwrap(),
            kind: FetchErrorKind::TransportSecurity,
        },
        KindPattern {
            regex: Regex::new(r"(?i)invalid url|invalid protocol").unwrap(),
            kind: FetchErrorKind::InvalidInput,
        },
    ]
});

impl FetchErrorKind {
    /// Classify a raw transport error message.
    pub fn classify(message: &str) -> Self {
        KIND_PATTERNS
            .iter()
            .find(|p| p.regex.is_match(message))
            .map(|p| p.kind)
            .unwrap_or(FetchErrorKind::Unknown)
    }

    pub fn status_code(&self) -> u16 {
        match self {
            FetchErrorKind::Unreachable => 400,
            FetchErrorKind::Timeout => 408,
            FetchErrorKind::InvalidInput => 400,
            FetchErrorKind::TransportSecurity => 400,
            FetchErrorKind::Unknown => 500,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            FetchErrorKind::Unreachable => {
                "Unable to reach the website. Please check the URL and try again."
            }
            FetchErrorKind::Timeout => "The website took too long to respond. Please try again.",
            FetchErrorKind::InvalidInput => {
                "Invalid URL format. Please enter a valid website address."
            }
            FetchErrorKind::TransportSecurity => {
                "SSL certificate error. The website may have security issues."
            }
            FetchErrorKind::Unknown => "Scan failed",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchErrorKind::Unreachable => write!(f, "unreachable"),
            FetchErrorKind::Timeout => write!(f, "timeout"),
            FetchErrorKind::InvalidInput => write!(f, "invalid-input"),
            FetchErrorKind::TransportSecurity => write!(f, "transport-security"),
            FetchErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}
