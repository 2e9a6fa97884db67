// SPDX-License-Identifier: PMPL-1.0-or-later
//! Self-diagnostic: how well the tool covers its target WCAG version.
//!
//! Combines the registry's coverage report and update status into one
//! document with ordered, human-readable recommendations.

use crate::config::TargetConfig;
use crate::rules::{
    CoverageReport, Impact, Rule, RuleId, RuleRegistry, UpdateStatus, VersionInfo, WcagLevel,
    WcagVersion,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serious rules named individually in a recommendation
const SERIOUS_NAMED: usize = 3;
/// Coverage below this percentage earns a recommendation
const COVERAGE_ADVISORY_PERCENT: u8 = 70;

/// Qualitative band for a coverage percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl CoverageStatus {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            90..=u8::MAX => CoverageStatus::Excellent,
            70..=89 => CoverageStatus::Good,
            50..=69 => CoverageStatus::Fair,
            _ => CoverageStatus::NeedsWork,
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageStatus::Excellent => write!(f, "excellent"),
            CoverageStatus::Good => write!(f, "good"),
            CoverageStatus::Fair => write!(f, "fair"),
            CoverageStatus::NeedsWork => write!(f, "needs-work"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerInfo {
    pub version: String,
    pub target_wcag_version: WcagVersion,
    pub target_level: WcagLevel,
    pub last_checked: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageSummary {
    /// Implemented rules inside the target set
    pub implemented: usize,
    /// Size of the target set
    pub total: usize,
    pub percentage: u8,
    pub status: CoverageStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub id: RuleId,
    pub name: &'static str,
    pub wcag_version: WcagVersion,
    pub level: WcagLevel,
    pub success_criterion: &'static str,
    pub impact: Impact,
}

impl From<&Rule> for RuleSummary {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            name: rule.name,
            wcag_version: rule.wcag_version,
            level: rule.level,
            success_criterion: rule.success_criterion,
            impact: rule.impact,
        }
    }
}

/// A missing rule with its implementation priority (1 = first)
#[derive(Debug, Clone, Serialize)]
pub struct MissingRule {
    #[serde(flatten)]
    pub rule: RuleSummary,
    pub priority: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub current_version: WcagVersion,
    pub latest_stable: WcagVersion,
    pub update_available: bool,
    pub new_rules_in_latest: usize,
    pub recommendation: String,
}

impl From<&UpdateStatus> for UpdateSummary {
    fn from(update: &UpdateStatus) -> Self {
        let recommendation = if update.update_available {
            format!(
                "Update scanner to support WCAG {}. {} new AA-level rules available.",
                update.latest_known_version, update.new_rules_count
            )
        } else {
            "Scanner is up to date with latest WCAG stable version.".to_string()
        };

        Self {
            current_version: update.current_target_version,
            latest_stable: update.latest_known_version,
            update_available: update.update_available,
            new_rules_in_latest: update.new_rules_count,
            recommendation,
        }
    }
}

/// Full diagnostic document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub scanner: ScannerInfo,
    pub coverage: CoverageSummary,
    pub implemented_rules: Vec<RuleSummary>,
    pub missing_rules: Vec<MissingRule>,
    pub update_status: UpdateSummary,
    pub wcag_versions: Vec<VersionInfo>,
    pub recommendations: Vec<String>,
}

impl Diagnostic {
    pub fn build(registry: &RuleRegistry, target: &TargetConfig) -> Self {
        Self::build_at(registry, target, Utc::now())
    }

    /// Build with an explicit timestamp
    pub fn build_at(registry: &RuleRegistry, target: &TargetConfig, now: DateTime<Utc>) -> Self {
        let latest = target
            .latest_known
            .or_else(|| registry.latest_stable_version())
            .unwrap_or(target.wcag_version);

        let coverage = registry.coverage_gaps(target.wcag_version, target.level);
        let update = registry.update_status(target.wcag_version, latest);

        Self {
            scanner: ScannerInfo {
                version: env!("CARGO_PKG_VERSION").to_string(),
                target_wcag_version: target.wcag_version,
                target_level: target.level,
                last_checked: now,
            },
            coverage: CoverageSummary {
                implemented: coverage.implemented_count,
                total: coverage.total(),
                percentage: coverage.coverage_percent,
                status: CoverageStatus::from_percent(coverage.coverage_percent),
            },
            implemented_rules: registry
                .implemented_rules()
                .into_iter()
                .map(RuleSummary::from)
                .collect(),
            missing_rules: coverage
                .missing_rules
                .iter()
                .map(|r| MissingRule {
                    rule: RuleSummary::from(r),
                    priority: r.impact.priority(),
                })
                .collect(),
            update_status: UpdateSummary::from(&update),
            wcag_versions: registry.versions().to_vec(),
            recommendations: recommendations(&coverage, &update),
        }
    }
}

/// Ordered advisories for improving coverage.
///
/// Never empty: with nothing to suggest it returns a single all-clear line.
pub fn recommendations(coverage: &CoverageReport, update: &UpdateStatus) -> Vec<String> {
    let mut recommendations = Vec::new();

    let missing_with = |impact: Impact| -> Vec<&Rule> {
        coverage
            .missing_rules
            .iter()
            .filter(|r| r.impact == impact)
            .collect()
    };

    let critical = missing_with(Impact::Critical);
    if !critical.is_empty() {
        let ids: Vec<&str> = critical.iter().map(|r| r.id.as_str()).collect();
        recommendations.push(format!(
            "HIGH PRIORITY: Implement {} critical rules: {}",
            critical.len(),
            ids.join(", ")
        ));
    }

    if update.update_available {
        recommendations.push(format!(
            "NEW VERSION: WCAG {} is available with {} new rules. Consider updating scanner.",
            update.latest_known_version, update.new_rules_count
        ));
    }

    if coverage.coverage_percent < COVERAGE_ADVISORY_PERCENT {
        recommendations.push(format!(
            "COVERAGE: Currently at {}% of WCAG {} {}. Implement {} more rules to improve.",
            coverage.coverage_percent,
            coverage.target_version,
            coverage.target_level,
            coverage.missing_count
        ));
    }

    let serious = missing_with(Impact::Serious);
    if !serious.is_empty() {
        let names: Vec<&str> = serious.iter().take(SERIOUS_NAMED).map(|r| r.name).collect();
        let mut line = format!(
            "SERIOUS: {} serious-impact rules not yet implemented: {}",
            serious.len(),
            names.join(", ")
        );
        if serious.len() > SERIOUS_NAMED {
            line.push_str(&format!(", +{} more", serious.len() - SERIOUS_NAMED));
        }
        recommendations.push(line);
    }

    if coverage.missing_rules.iter().any(|r| r.id == RuleId::ColorContrast) {
        recommendations.push(
            "COMMON REQUEST: Color contrast check (1.4.3) is not implemented. \
             This is one of the most commonly failed WCAG criteria."
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push("Scanner is well-configured. No immediate improvements needed.".to_string());
    }

    recommendations
}
