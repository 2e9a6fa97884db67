// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page title check - WCAG 2.4.2 Page Titled (Level A)

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::Document;
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::DocumentTitle,
    impact: Impact::Serious,
    description: "Documents must have <title> element",
    help: "Add a descriptive <title> element in the <head> section.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/page-titled.html",
    wcag_tags: &["wcag2a", "wcag242"],
};

/// Document-level check for a non-empty title
pub struct DocumentTitleCheck;

impl Check for DocumentTitleCheck {
    fn name(&self) -> &str {
        "Document Title"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, _ctx: &CheckContext) -> Vec<ViolationNode> {
        if document.title().is_some() {
            return Vec::new();
        }
        vec![ViolationNode::new(
            "<head>...</head>",
            "head",
            "Document does not have a title element",
        )]
    }
}
