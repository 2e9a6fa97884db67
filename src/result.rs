// SPDX-License-Identifier: PMPL-1.0-or-later
//! Scan output types.
//!
//! These are the serialized contract handed to persistence and reporting, so
//! field names are camelCase in JSON.

use crate::rules::{Impact, Principle, RuleId};
use serde::{Deserialize, Serialize};

/// One offending element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationNode {
    /// Truncated source markup
    pub snippet: String,
    /// Positional reference to the element
    pub locator: String,
    pub failure_summary: String,
}

impl ViolationNode {
    pub fn new(snippet: impl Into<String>, locator: impl Into<String>, failure_summary: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            locator: locator.into(),
            failure_summary: failure_summary.into(),
        }
    }
}

/// A failed rule with every offending element found for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule_id: RuleId,
    pub impact: Impact,
    pub description: String,
    pub help_text: String,
    pub help_url: String,
    pub wcag_tags: Vec<String>,
    /// Never empty
    pub nodes: Vec<ViolationNode>,
}

impl Violation {
    pub fn principle(&self) -> Principle {
        self.rule_id.principle()
    }
}

/// A rule whose check ran and found nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pass {
    pub rule_id: RuleId,
    pub description: String,
}

impl Pass {
    pub fn new(rule_id: RuleId) -> Self {
        Self {
            rule_id,
            description: format!("{} check passed", rule_id),
        }
    }
}

/// A check that failed to run under a non-fatal failure policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCheck {
    pub rule_id: RuleId,
    pub reason: String,
}

/// Sub-score for one WCAG principle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipleBreakdown {
    /// Offending nodes attributed to this principle (uncapped)
    pub violations: usize,
    pub score: u8,
}

impl Default for PrincipleBreakdown {
    fn default() -> Self {
        Self { violations: 0, score: 100 }
    }
}

/// Sub-scores for all four principles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagBreakdown {
    pub perceivable: PrincipleBreakdown,
    pub operable: PrincipleBreakdown,
    pub understandable: PrincipleBreakdown,
    pub robust: PrincipleBreakdown,
}

impl WcagBreakdown {
    pub fn get(&self, principle: Principle) -> &PrincipleBreakdown {
        match principle {
            Principle::Perceivable => &self.perceivable,
            Principle::Operable => &self.operable,
            Principle::Understandable => &self.understandable,
            Principle::Robust => &self.robust,
        }
    }

    pub fn get_mut(&mut self, principle: Principle) -> &mut PrincipleBreakdown {
        match principle {
            Principle::Perceivable => &mut self.perceivable,
            Principle::Operable => &mut self.operable,
            Principle::Understandable => &mut self.understandable,
            Principle::Robust => &mut self.robust,
        }
    }
}

/// Outcome of scanning one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub url: String,
    pub accessibility_score: u8,
    pub critical_count: usize,
    pub serious_count: usize,
    pub moderate_count: usize,
    pub minor_count: usize,
    /// Number of failed rules, not nodes
    pub total_violations: usize,
    pub total_passes: usize,
    pub violations: Vec<Violation>,
    pub passes: Vec<Pass>,
    pub wcag_breakdown: WcagBreakdown,
    pub tool_version: String,
    pub page_title: String,
    pub page_language: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_checks: Vec<SkippedCheck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ScanResult {
    /// Failed rules at one impact level
    pub fn count_for(&self, impact: Impact) -> usize {
        match impact {
            Impact::Critical => self.critical_count,
            Impact::Serious => self.serious_count,
            Impact::Moderate => self.moderate_count,
            Impact::Minor => self.minor_count,
        }
    }

    /// Whether the result covers every registered check
    pub fn is_complete(&self) -> bool {
        self.skipped_checks.is_empty()
    }

    pub fn violation(&self, rule_id: RuleId) -> Option<&Violation> {
        self.violations.iter().find(|v| v.rule_id == rule_id)
    }
}
