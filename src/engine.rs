// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan engine.
//!
//! Parses one document, runs every registered check against it in order and
//! folds the outcomes into a [`ScanResult`]. An engine holds no per-scan
//! state, so one instance can be shared across threads.

use crate::checks::{self, Check, CheckContext};
use crate::config::{FailurePolicy, ScanConfig};
use crate::document::Document;
use crate::error::{ComplybotError, Result};
use crate::result::{Pass, ScanResult, SkippedCheck, Violation};
use crate::rules::{Impact, RuleRegistry};
use crate::scoring;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Page title reported when the document has none
pub const UNKNOWN_TITLE: &str = "Unknown";
/// Page language reported when the root element declares none
pub const UNKNOWN_LANGUAGE: &str = "unknown";

pub struct Engine {
    registry: Arc<RuleRegistry>,
    checks: Vec<Box<dyn Check>>,
    policy: FailurePolicy,
    ctx: CheckContext,
}

impl Engine {
    /// Engine running the built-in checks
    pub fn new(registry: Arc<RuleRegistry>, config: &ScanConfig) -> Self {
        Self {
            registry,
            checks: checks::builtin_checks(),
            policy: config.failure_policy,
            ctx: CheckContext::from(config),
        }
    }

    /// Engine running a custom check list.
    ///
    /// Every check must belong to a rule the registry knows, and no rule may
    /// be checked twice.
    pub fn with_checks(
        registry: Arc<RuleRegistry>,
        checks: Vec<Box<dyn Check>>,
        config: &ScanConfig,
    ) -> Result<Self> {
        let mut seen = Vec::with_capacity(checks.len());
        for check in &checks {
            let id = check.rule_id();
            if registry.get(id).is_none() {
                return Err(ComplybotError::Registry(format!(
                    "check '{}' targets unregistered rule '{}'",
                    check.name(),
                    id
                )));
            }
            if seen.contains(&id) {
                return Err(ComplybotError::Registry(format!(
                    "rule '{}' has more than one check",
                    id
                )));
            }
            seen.push(id);
        }

        Ok(Self {
            registry,
            checks,
            policy: config.failure_policy,
            ctx: CheckContext::from(config),
        })
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Number of registered checks
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Scan already-fetched markup.
    ///
    /// `url` only labels the result. Malformed markup never fails a scan; the
    /// only error is a panicking check under [`FailurePolicy::Abort`].
    pub fn scan(&self, url: &str, markup: &str) -> Result<ScanResult> {
        info!("Scanning {} with {} checks", url, self.checks.len());

        let document = Document::parse(markup);
        let mut violations: Vec<Violation> = Vec::new();
        let mut passes: Vec<Pass> = Vec::new();
        let mut skipped_checks: Vec<SkippedCheck> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        for check in &self.checks {
            let rule_id = check.rule_id();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                check.evaluate(&document, &self.ctx)
            }));

            match outcome {
                Ok(Some(violation)) => {
                    debug!("{}: {} offending node(s)", rule_id, violation.nodes.len());
                    violations.push(violation);
                }
                Ok(None) => {
                    debug!("{}: passed", rule_id);
                    passes.push(Pass::new(rule_id));
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    match self.policy {
                        FailurePolicy::Abort => {
                            return Err(ComplybotError::CheckFailed {
                                rule: rule_id.to_string(),
                                message,
                            });
                        }
                        FailurePolicy::Skip => {
                            debug!("{}: skipped after failure: {}", rule_id, message);
                        }
                        FailurePolicy::Warn => {
                            warn!("Check {} failed on {}: {}", rule_id, url, message);
                            warnings.push(format!(
                                "Partial result: check '{}' could not run ({})",
                                rule_id, message
                            ));
                        }
                    }
                    skipped_checks.push(SkippedCheck {
                        rule_id,
                        reason: message,
                    });
                }
            }
        }

        let evaluated = violations.len() + passes.len();
        let count = |impact: Impact| violations.iter().filter(|v| v.impact == impact).count();

        let result = ScanResult {
            url: url.to_string(),
            accessibility_score: scoring::accessibility_score(&violations, evaluated),
            critical_count: count(Impact::Critical),
            serious_count: count(Impact::Serious),
            moderate_count: count(Impact::Moderate),
            minor_count: count(Impact::Minor),
            total_violations: violations.len(),
            total_passes: passes.len(),
            wcag_breakdown: scoring::wcag_breakdown(&violations),
            violations,
            passes,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            page_title: document
                .title()
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            page_language: document
                .language()
                .unwrap_or(UNKNOWN_LANGUAGE)
                .to_string(),
            skipped_checks,
            warnings,
        };

        info!(
            "Scanned {}: score {}, {} violation(s), {} pass(es)",
            url, result.accessibility_score, result.total_violations, result.total_passes
        );

        Ok(result)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}
