// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label check - WCAG 1.3.1 Info and Relationships, 3.3.2 Labels or Instructions (Level A)
//!
//! Every input that takes user data needs a label from one of:
//! - a `<label for="...">` matching its id
//! - a wrapping `<label>`
//! - `aria-label` or `aria-labelledby`
//!
//! A placeholder is not a label. Controls that only have one get their own
//! failure message so the report can say why.

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;
use std::collections::HashSet;

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::Label,
    impact: Impact::Critical,
    description: "Form elements must have labels",
    help: "Add a <label> element with for attribute matching the input id, or use aria-label.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html",
    wcag_tags: &["wcag2a", "wcag131", "wcag412"],
};

/// Input types that are hidden or are buttons, and so need no label
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "reset", "button", "image"];

const PLACEHOLDER_ONLY: &str =
    "Form element uses placeholder instead of label (placeholder is not accessible)";
const NO_LABEL: &str = "Form element does not have a label";

/// Check for form controls without an associated label
pub struct FormLabelCheck;

impl Check for FormLabelCheck {
    fn name(&self) -> &str {
        "Form Control Labels"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        // Collect all label[for] values
        let label_fors: HashSet<&str> = document
            .select("label[for]")
            .into_iter()
            .filter_map(|l| document::attr(l, "for"))
            .collect();

        document
            .select("input, textarea, select")
            .into_iter()
            .filter(|control| !is_exempt(*control))
            .enumerate()
            .filter(|(_, control)| !has_label(*control, &label_fors))
            .map(|(idx, control)| {
                let summary = if document::attr(control, "placeholder").is_some() {
                    PLACEHOLDER_ONLY
                } else {
                    NO_LABEL
                };
                ctx.node(control, idx, summary)
            })
            .collect()
    }
}

fn is_exempt(control: ElementRef<'_>) -> bool {
    if document::tag(control) != "input" {
        return false;
    }
    let input_type = control
        .value()
        .attr("type")
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_default();
    EXEMPT_INPUT_TYPES.contains(&input_type.as_str())
}

fn has_label(control: ElementRef<'_>, label_fors: &HashSet<&str>) -> bool {
    let labelled_by_for = document::attr(control, "id")
        .map(|id| label_fors.contains(id))
        .unwrap_or(false);

    labelled_by_for
        || document::has_ancestor(control, "label")
        || document::attr(control, "aria-label").is_some()
        || document::attr(control, "aria-labelledby").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<ViolationNode> {
        FormLabelCheck.offending_nodes(&Document::parse(html), &CheckContext::default())
    }

    #[test]
    fn test_labelled_controls() {
        let html = r#"
            <form>
                <label for="name">Name:</label>
                <input type="text" id="name">
                <label>Email <input type="email"></label>
                <input type="search" aria-label="Search">
                <span id="qty-label">Quantity</span>
                <select aria-labelledby="qty-label"><option>1</option></select>
                <label for="msg">Message</label>
                <textarea id="msg"></textarea>
            </form>
        "#;
        assert!(check(html).is_empty());
    }

    #[test]
    fn test_unlabelled_input() {
        let nodes = check(r#"<form><input type="text"></form>"#);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].failure_summary, NO_LABEL);
    }

    #[test]
    fn test_placeholder_only() {
        let nodes = check(r#"<form><input type="text" placeholder="Enter name"></form>"#);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].failure_summary, PLACEHOLDER_ONLY);
    }

    #[test]
    fn test_exempt_types() {
        let html = r#"
            <input type="hidden" name="csrf" value="token123">
            <input type="submit">
            <input type="BUTTON">
            <input type="image" src="go.png">
            <input type="reset">
        "#;
        assert!(check(html).is_empty());
    }

    #[test]
    fn test_untyped_input_needs_label() {
        assert_eq!(check("<input>").len(), 1);
    }

    #[test]
    fn test_label_for_other_id_does_not_count() {
        let html = r#"<label for="other">Name</label><input id="name"><select></select>"#;
        let nodes = check(html);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].locator, "select:nth-of-type(2)");
    }
}
