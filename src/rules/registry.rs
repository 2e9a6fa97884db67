// SPDX-License-Identifier: PMPL-1.0-or-later
//! Versioned WCAG rule catalog.
//!
//! The registry is built once and never mutated. It lists both the rules the
//! check engine implements and the ones it deliberately does not (visual and
//! computed-style criteria), so the tool can report its own coverage against
//! a target WCAG version and level.

use super::{Impact, Principle, RuleId, WcagLevel, WcagVersion};
use crate::error::{ComplybotError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    pub wcag_version: WcagVersion,
    pub level: WcagLevel,
    pub principle: Principle,
    pub success_criterion: &'static str,
    pub impact: Impact,
    pub description: &'static str,
    pub help_url: &'static str,
    pub implemented: bool,
    /// Tool version that first shipped a check for this rule
    pub added_in_version: Option<&'static str>,
}

/// Publication status of a WCAG version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionStatus {
    Recommendation,
    WorkingDraft,
}

/// Release metadata for one WCAG version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: WcagVersion,
    pub released: Option<NaiveDate>,
    pub status: VersionStatus,
}

/// Implemented vs. missing rules for a target version and level
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub target_version: WcagVersion,
    pub target_level: WcagLevel,
    pub implemented_count: usize,
    pub missing_count: usize,
    pub coverage_percent: u8,
    pub missing_rules: Vec<Rule>,
}

impl CoverageReport {
    /// Number of rules in scope for the target
    pub fn total(&self) -> usize {
        self.implemented_count + self.missing_count
    }
}

/// Whether a newer WCAG version than the configured target exists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub current_target_version: WcagVersion,
    pub latest_known_version: WcagVersion,
    pub update_available: bool,
    pub new_rules_count: usize,
    pub new_rules: Vec<Rule>,
}

/// Immutable rule catalog
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
    versions: Vec<VersionInfo>,
}

impl RuleRegistry {
    /// Build a registry from explicit parts, rejecting duplicate ids.
    pub fn new(rules: Vec<Rule>, versions: Vec<VersionInfo>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id) {
                return Err(ComplybotError::Registry(format!(
                    "duplicate rule id '{}'",
                    rule.id
                )));
            }
            if rule.implemented && rule.added_in_version.is_none() {
                return Err(ComplybotError::Registry(format!(
                    "implemented rule '{}' has no tool version",
                    rule.id
                )));
            }
        }
        Ok(Self { rules, versions })
    }

    /// The catalog shipped with this tool
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            versions: builtin_versions(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn versions(&self) -> &[VersionInfo] {
        &self.versions
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn implemented_rules(&self) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.implemented).collect()
    }

    pub fn unimplemented_rules(&self) -> Vec<&Rule> {
        self.rules.iter().filter(|r| !r.implemented).collect()
    }

    /// Rules introduced in exactly this WCAG version
    pub fn rules_by_version(&self, version: WcagVersion) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.wcag_version == version).collect()
    }

    /// Rules required at this level, including every lower level
    pub fn rules_by_level(&self, level: WcagLevel) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.level <= level).collect()
    }

    /// Rules matching every given filter, in catalog order
    pub fn select(
        &self,
        implemented: Option<bool>,
        version: Option<WcagVersion>,
        level: Option<WcagLevel>,
    ) -> Vec<&Rule> {
        let mut rules = match implemented {
            Some(true) => self.implemented_rules(),
            Some(false) => self.unimplemented_rules(),
            None => self.rules.iter().collect(),
        };
        if let Some(version) = version {
            let ids: HashSet<RuleId> = self.rules_by_version(version).iter().map(|r| r.id).collect();
            rules.retain(|r| ids.contains(&r.id));
        }
        if let Some(level) = level {
            let ids: HashSet<RuleId> = self.rules_by_level(level).iter().map(|r| r.id).collect();
            rules.retain(|r| ids.contains(&r.id));
        }
        rules
    }

    /// Newest version with recommendation status
    pub fn latest_stable_version(&self) -> Option<WcagVersion> {
        self.versions
            .iter()
            .filter(|v| v.status == VersionStatus::Recommendation)
            .map(|v| v.version)
            .max()
    }

    /// Coverage of the rules a target version and level require.
    ///
    /// An empty target set reports 0%.
    pub fn coverage_gaps(&self, target_version: WcagVersion, target_level: WcagLevel) -> CoverageReport {
        let (implemented, missing): (Vec<&Rule>, Vec<&Rule>) = self
            .rules
            .iter()
            .filter(|r| r.wcag_version <= target_version && r.level <= target_level)
            .partition(|r| r.implemented);

        let total = implemented.len() + missing.len();
        let coverage_percent = if total == 0 {
            0
        } else {
            (implemented.len() as f64 / total as f64 * 100.0).round() as u8
        };

        CoverageReport {
            target_version,
            target_level,
            implemented_count: implemented.len(),
            missing_count: missing.len(),
            coverage_percent,
            missing_rules: missing.into_iter().cloned().collect(),
        }
    }

    /// Compare the configured target against the newest known version.
    ///
    /// AAA rules are left out of the new-rule count.
    pub fn update_status(&self, target_version: WcagVersion, latest_known: WcagVersion) -> UpdateStatus {
        let new_rules: Vec<Rule> = self
            .rules
            .iter()
            .filter(|r| r.wcag_version > target_version && r.level != WcagLevel::AAA)
            .cloned()
            .collect();

        UpdateStatus {
            current_target_version: target_version,
            latest_known_version: latest_known,
            update_available: latest_known > target_version,
            new_rules_count: new_rules.len(),
            new_rules,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn rule(
    id: RuleId,
    name: &'static str,
    wcag_version: WcagVersion,
    level: WcagLevel,
    success_criterion: &'static str,
    impact: Impact,
    description: &'static str,
    help_url: &'static str,
    added_in_version: Option<&'static str>,
) -> Rule {
    Rule {
        id,
        name,
        wcag_version,
        level,
        principle: id.principle(),
        success_criterion,
        impact,
        description,
        help_url,
        implemented: added_in_version.is_some(),
        added_in_version,
    }
}

fn builtin_rules() -> Vec<Rule> {
    use Impact::*;
    use WcagLevel::{A, AA};
    use WcagVersion::{V2_0, V2_1, V2_2};

    vec![
        // WCAG 2.0, implemented
        rule(RuleId::ImageAlt, "Non-text Content", V2_0, A, "1.1.1", Critical,
            "All non-text content has a text alternative",
            "https://www.w3.org/WAI/WCAG21/Understanding/non-text-content.html", Some("1.0.0")),
        rule(RuleId::DocumentTitle, "Page Titled", V2_0, A, "2.4.2", Serious,
            "Web pages have titles that describe topic or purpose",
            "https://www.w3.org/WAI/WCAG21/Understanding/page-titled.html", Some("1.0.0")),
        rule(RuleId::LinkName, "Link Purpose (In Context)", V2_0, A, "2.4.4", Serious,
            "Purpose of each link can be determined from link text",
            "https://www.w3.org/WAI/WCAG21/Understanding/link-purpose-in-context.html", Some("1.0.0")),
        rule(RuleId::HtmlHasLang, "Language of Page", V2_0, A, "3.1.1", Serious,
            "Default language of each page can be programmatically determined",
            "https://www.w3.org/WAI/WCAG21/Understanding/language-of-page.html", Some("1.0.0")),
        rule(RuleId::ButtonName, "Name, Role, Value", V2_0, A, "4.1.2", Critical,
            "User interface components have accessible names",
            "https://www.w3.org/WAI/WCAG21/Understanding/name-role-value.html", Some("1.0.0")),
        rule(RuleId::Label, "Labels or Instructions", V2_0, A, "3.3.2", Critical,
            "Labels or instructions provided when content requires user input",
            "https://www.w3.org/WAI/WCAG21/Understanding/labels-or-instructions.html", Some("1.0.0")),
        rule(RuleId::HeadingOrder, "Info and Relationships", V2_0, A, "1.3.1", Moderate,
            "Information and relationships conveyed through presentation are programmatically determinable",
            "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html", Some("1.0.0")),
        rule(RuleId::EmptyHeading, "Info and Relationships (Empty Headings)", V2_0, A, "1.3.1", Minor,
            "Headings must not be empty",
            "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html", Some("1.0.0")),
        rule(RuleId::TableHeader, "Info and Relationships (Table Headers)", V2_0, A, "1.3.1", Serious,
            "Data tables have header cells",
            "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html", Some("1.0.0")),
        // WCAG 2.0 AA, need computed styles
        rule(RuleId::ColorContrast, "Contrast (Minimum)", V2_0, AA, "1.4.3", Serious,
            "Text has contrast ratio of at least 4.5:1",
            "https://www.w3.org/WAI/WCAG21/Understanding/contrast-minimum.html", None),
        rule(RuleId::ResizeText, "Resize Text", V2_0, AA, "1.4.4", Moderate,
            "Text can be resized without assistive technology up to 200%",
            "https://www.w3.org/WAI/WCAG21/Understanding/resize-text.html", None),
        rule(RuleId::FocusVisible, "Focus Visible", V2_0, AA, "2.4.7", Serious,
            "Keyboard focus indicator is visible",
            "https://www.w3.org/WAI/WCAG21/Understanding/focus-visible.html", None),
        // WCAG 2.1
        rule(RuleId::Orientation, "Orientation", V2_1, AA, "1.3.4", Moderate,
            "Content not restricted to single display orientation",
            "https://www.w3.org/WAI/WCAG21/Understanding/orientation.html", None),
        rule(RuleId::InputPurpose, "Identify Input Purpose", V2_1, AA, "1.3.5", Moderate,
            "Input fields collecting user info have programmatically determinable purpose",
            "https://www.w3.org/WAI/WCAG21/Understanding/identify-input-purpose.html", None),
        rule(RuleId::Reflow, "Reflow", V2_1, AA, "1.4.10", Serious,
            "Content reflows without horizontal scrolling at 320px",
            "https://www.w3.org/WAI/WCAG21/Understanding/reflow.html", None),
        rule(RuleId::TextSpacing, "Text Spacing", V2_1, AA, "1.4.12", Moderate,
            "No loss of content when text spacing is adjusted",
            "https://www.w3.org/WAI/WCAG21/Understanding/text-spacing.html", None),
        // WCAG 2.2 (October 2023)
        rule(RuleId::FocusNotObscured, "Focus Not Obscured (Minimum)", V2_2, AA, "2.4.11", Serious,
            "Focused component is not entirely hidden by author-created content",
            "https://www.w3.org/WAI/WCAG22/Understanding/focus-not-obscured-minimum.html", None),
        rule(RuleId::DraggingMovements, "Dragging Movements", V2_2, AA, "2.5.7", Moderate,
            "Dragging functionality has single-pointer alternative",
            "https://www.w3.org/WAI/WCAG22/Understanding/dragging-movements.html", None),
        rule(RuleId::TargetSize, "Target Size (Minimum)", V2_2, AA, "2.5.8", Moderate,
            "Targets are at least 24x24 CSS pixels",
            "https://www.w3.org/WAI/WCAG22/Understanding/target-size-minimum.html", None),
        rule(RuleId::ConsistentHelp, "Consistent Help", V2_2, A, "3.2.6", Minor,
            "Help mechanisms occur in same relative order on each page",
            "https://www.w3.org/WAI/WCAG22/Understanding/consistent-help.html", None),
        rule(RuleId::RedundantEntry, "Redundant Entry", V2_2, A, "3.3.7", Moderate,
            "Information previously entered is auto-populated or available for selection",
            "https://www.w3.org/WAI/WCAG22/Understanding/redundant-entry.html", None),
        rule(RuleId::AccessibleAuthentication, "Accessible Authentication (Minimum)", V2_2, AA, "3.3.8", Serious,
            "Cognitive function test not required for authentication unless alternative exists",
            "https://www.w3.org/WAI/WCAG22/Understanding/accessible-authentication-minimum.html", None),
    ]
}

fn builtin_versions() -> Vec<VersionInfo> {
    vec![
        VersionInfo {
            version: WcagVersion::V2_0,
            released: NaiveDate::from_ymd_opt(2008, 12, 11),
            status: VersionStatus::Recommendation,
        },
        VersionInfo {
            version: WcagVersion::V2_1,
            released: NaiveDate::from_ymd_opt(2018, 6, 5),
            status: VersionStatus::Recommendation,
        },
        VersionInfo {
            version: WcagVersion::V2_2,
            released: NaiveDate::from_ymd_opt(2023, 10, 5),
            status: VersionStatus::Recommendation,
        },
        VersionInfo {
            version: WcagVersion::V3_0,
            released: None,
            status: VersionStatus::WorkingDraft,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = RuleRegistry::builtin();
        let rebuilt = RuleRegistry::new(builtin.rules().to_vec(), builtin.versions().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(builtin.rules().len(), RuleId::ALL.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let builtin = RuleRegistry::builtin();
        let mut rules = builtin.rules().to_vec();
        rules.push(rules[0].clone());
        let err = RuleRegistry::new(rules, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("duplicate rule id 'image-alt'"));
    }

    #[test]
    fn test_implemented_split() {
        let registry = RuleRegistry::builtin();
        assert_eq!(registry.implemented_rules().len(), 9);
        assert_eq!(registry.unimplemented_rules().len(), 13);
        assert!(registry
            .unimplemented_rules()
            .iter()
            .all(|r| r.added_in_version.is_none()));
    }

    #[test]
    fn test_rules_by_level_is_cumulative() {
        let registry = RuleRegistry::builtin();
        let level_a = registry.rules_by_level(WcagLevel::A);
        let level_aa = registry.rules_by_level(WcagLevel::AA);
        assert_eq!(level_a.len(), 11);
        assert_eq!(level_aa.len(), 22);
        assert_eq!(registry.rules_by_level(WcagLevel::AAA).len(), 22);
        assert!(level_a.iter().all(|r| r.level == WcagLevel::A));
    }

    #[test]
    fn test_rules_by_version_is_exact() {
        let registry = RuleRegistry::builtin();
        assert_eq!(registry.rules_by_version(WcagVersion::V2_0).len(), 12);
        assert_eq!(registry.rules_by_version(WcagVersion::V2_1).len(), 4);
        assert_eq!(registry.rules_by_version(WcagVersion::V2_2).len(), 6);
        assert!(registry.rules_by_version(WcagVersion::V3_0).is_empty());
    }

    #[test]
    fn test_select_combines_filters() {
        let registry = RuleRegistry::builtin();
        assert_eq!(registry.select(None, None, None).len(), 22);
        assert_eq!(registry.select(Some(true), None, None), registry.implemented_rules());

        let selected = registry.select(Some(false), Some(WcagVersion::V2_0), Some(WcagLevel::AA));
        let expected: Vec<&Rule> = registry
            .unimplemented_rules()
            .into_iter()
            .filter(|r| r.wcag_version == WcagVersion::V2_0 && r.level <= WcagLevel::AA)
            .collect();
        assert_eq!(selected, expected);
        assert!(registry.select(None, Some(WcagVersion::V3_0), None).is_empty());
    }

    #[test]
    fn test_coverage_for_wcag20_aa() {
        // 12 rules in scope, 9 implemented
        let report = RuleRegistry::builtin().coverage_gaps(WcagVersion::V2_0, WcagLevel::AA);
        assert_eq!(report.total(), 12);
        assert_eq!(report.implemented_count, 9);
        assert_eq!(report.missing_count, 3);
        assert_eq!(report.coverage_percent, 75);
    }

    #[test]
    fn test_coverage_for_wcag21_aa() {
        let report = RuleRegistry::builtin().coverage_gaps(WcagVersion::V2_1, WcagLevel::AA);
        assert_eq!(report.total(), 16);
        assert_eq!(report.coverage_percent, 56);
        assert_eq!(report.missing_rules[0].id, RuleId::ColorContrast);
    }

    #[test]
    fn test_coverage_of_empty_target_set() {
        let registry = RuleRegistry::new(Vec::new(), Vec::new()).unwrap();
        let report = registry.coverage_gaps(WcagVersion::V2_2, WcagLevel::AAA);
        assert_eq!(report.total(), 0);
        assert_eq!(report.coverage_percent, 0);
    }

    #[test]
    fn test_update_status() {
        let registry = RuleRegistry::builtin();
        let latest = registry.latest_stable_version().unwrap();
        assert_eq!(latest, WcagVersion::V2_2);

        let status = registry.update_status(WcagVersion::V2_1, latest);
        assert!(status.update_available);
        assert_eq!(status.new_rules_count, 6);

        let current = registry.update_status(WcagVersion::V2_2, latest);
        assert!(!current.update_available);
        assert_eq!(current.new_rules_count, 0);
    }

    #[test]
    fn test_registry_principles_follow_rule_ids() {
        for rule in RuleRegistry::builtin().rules() {
            assert_eq!(rule.principle, rule.id.principle());
        }
    }
}
