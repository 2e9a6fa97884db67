// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page language check - WCAG 3.1.1 Language of Page (Level A)

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::Document;
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::HtmlHasLang,
    impact: Impact::Serious,
    description: "<html> element must have a lang attribute",
    help: "Add lang=\"en\" (or appropriate language code) to the <html> element.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/language-of-page.html",
    wcag_tags: &["wcag2a", "wcag311"],
};

/// Document-level check for a declared page language
pub struct HtmlLangCheck;

impl Check for HtmlLangCheck {
    fn name(&self) -> &str {
        "Page Language"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, _ctx: &CheckContext) -> Vec<ViolationNode> {
        if document.language().is_some() {
            return Vec::new();
        }
        vec![ViolationNode::new(
            "<html>",
            "html",
            "The <html> element does not have a lang attribute",
        )]
    }
}
