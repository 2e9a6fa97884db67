// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule checks.
//!
//! Each check is an independent predicate over one parsed [`Document`]. It
//! reports every offending element it finds, and those are folded into at
//! most one [`Violation`] for its rule. Checks hold no state, so the same
//! list can serve any number of scans.

pub mod alt_text;
pub mod buttons;
pub mod forms;
pub mod headings;
pub mod language;
pub mod links;
pub mod tables;
pub mod title;

use crate::config::{ScanConfig, TableHeuristic};
use crate::document::{self, Document};
use crate::result::{Violation, ViolationNode};
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;

/// Settings a check may consult while evaluating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckContext {
    pub snippet_limit: usize,
    pub tables: TableHeuristic,
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for CheckContext {
    fn from(config: &ScanConfig) -> Self {
        Self {
            snippet_limit: config.snippet_limit,
            tables: config.tables,
        }
    }
}

impl CheckContext {
    /// Violation node for an offending element
    pub fn node(&self, element: ElementRef<'_>, index: usize, failure_summary: &str) -> ViolationNode {
        ViolationNode::new(
            document::snippet(element, self.snippet_limit),
            document::locator(element, index),
            failure_summary,
        )
    }
}

/// Static description attached to every violation of one rule
#[derive(Debug)]
pub struct ViolationTemplate {
    pub rule_id: RuleId,
    pub impact: Impact,
    pub description: &'static str,
    pub help: &'static str,
    pub help_url: &'static str,
    pub wcag_tags: &'static [&'static str],
}

impl ViolationTemplate {
    /// Fold offending nodes into a violation; `None` when there are none
    pub fn build(&self, nodes: Vec<ViolationNode>) -> Option<Violation> {
        if nodes.is_empty() {
            return None;
        }
        Some(Violation {
            rule_id: self.rule_id,
            impact: self.impact,
            description: self.description.to_string(),
            help_text: self.help.to_string(),
            help_url: self.help_url.to_string(),
            wcag_tags: self.wcag_tags.iter().map(|t| t.to_string()).collect(),
            nodes,
        })
    }
}

/// Trait implemented by all checks
pub trait Check: Send + Sync {
    /// Human-readable name of this check
    fn name(&self) -> &str;

    /// Rule metadata used for the violation record
    fn template(&self) -> &'static ViolationTemplate;

    /// Every offending element, in document order
    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode>;

    fn rule_id(&self) -> RuleId {
        self.template().rule_id
    }

    fn evaluate(&self, document: &Document, ctx: &CheckContext) -> Option<Violation> {
        self.template().build(self.offending_nodes(document, ctx))
    }
}

/// The built-in checks in declaration order.
///
/// Result lists follow this order, so reordering it changes report output.
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(alt_text::ImageAltCheck),
        Box::new(links::LinkNameCheck),
        Box::new(buttons::ButtonNameCheck),
        Box::new(forms::FormLabelCheck),
        Box::new(language::HtmlLangCheck),
        Box::new(headings::HeadingOrderCheck),
        Box::new(headings::EmptyHeadingCheck),
        Box::new(title::DocumentTitleCheck),
        Box::new(tables::TableHeaderCheck),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleRegistry;

    #[test]
    fn test_builtin_order() {
        let ids: Vec<RuleId> = builtin_checks().iter().map(|c| c.rule_id()).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::ImageAlt,
                RuleId::LinkName,
                RuleId::ButtonName,
                RuleId::Label,
                RuleId::HtmlHasLang,
                RuleId::HeadingOrder,
                RuleId::EmptyHeading,
                RuleId::DocumentTitle,
                RuleId::TableHeader,
            ]
        );
    }

    #[test]
    fn test_checks_agree_with_registry() {
        let registry = RuleRegistry::builtin();
        for check in builtin_checks() {
            let rule = registry.get(check.rule_id()).expect("rule in catalog");
            assert!(rule.implemented, "{} should be marked implemented", rule.id);
            assert_eq!(rule.impact, check.template().impact, "impact mismatch for {}", rule.id);
        }
        assert_eq!(registry.implemented_rules().len(), builtin_checks().len());
    }

    #[test]
    fn test_template_without_nodes_is_no_violation() {
        assert!(alt_text::ImageAltCheck.template().build(Vec::new()).is_none());
    }
}
