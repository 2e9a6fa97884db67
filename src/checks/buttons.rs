// SPDX-License-Identifier: PMPL-1.0-or-later
//! Button name check - WCAG 4.1.2 Name, Role, Value (Level A)

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::ButtonName,
    impact: Impact::Critical,
    description: "Buttons must have discernible text",
    help: "Add text content, aria-label, or title attribute to describe the button action.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/name-role-value.html",
    wcag_tags: &["wcag2a", "wcag412"],
};

const BUTTON_SELECTOR: &str =
    r#"button, [role="button" i], input[type="button"], input[type="submit"]"#;

/// Check for button-like controls without an accessible name
pub struct ButtonNameCheck;

impl Check for ButtonNameCheck {
    fn name(&self) -> &str {
        "Button Accessible Name"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        document
            .select(BUTTON_SELECTOR)
            .into_iter()
            .enumerate()
            .filter(|(_, button)| !has_accessible_name(*button))
            .map(|(idx, button)| ctx.node(button, idx, "Button has no accessible name"))
            .collect()
    }
}

fn has_accessible_name(button: ElementRef<'_>) -> bool {
    !document::text(button).is_empty()
        || ["aria-label", "title", "value"]
            .iter()
            .any(|name| document::attr(button, name).is_some())
}
