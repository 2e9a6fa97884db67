// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Every `<img>` must carry an `alt` attribute. `alt=""` is the valid marker
//! for a decorative image; only a missing attribute is a violation.

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::ImageAlt,
    impact: Impact::Critical,
    description: "Images must have alternate text",
    help: "Ensure every image has an alt attribute that describes its content or purpose. Use alt=\"\" for decorative images.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/non-text-content.html",
    wcag_tags: &["wcag2a", "wcag111"],
};

/// Check for missing image alt attributes
pub struct ImageAltCheck;

impl Check for ImageAltCheck {
    fn name(&self) -> &str {
        "Image Alt Text"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        document
            .select("img")
            .into_iter()
            .enumerate()
            .filter(|(_, img)| !document::has_attr(*img, "alt"))
            .map(|(idx, img)| ctx.node(img, idx, "Image does not have an alt attribute"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<ViolationNode> {
        ImageAltCheck.offending_nodes(&Document::parse(html), &CheckContext::default())
    }

    #[test]
    fn test_accessible_images() {
        let html = r#"
            <html>
            <body>
                <img src="logo.png" alt="Company logo">
                <img src="decorative.png" alt="">
                <img src="chart.png" alt="Bar chart showing Q4 revenue growth of 15%">
            </body>
            </html>
        "#;
        assert!(check(html).is_empty());
    }

    #[test]
    fn test_missing_alt() {
        let nodes = check(r#"<html><body><img src="photo.jpg"></body></html>"#);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].locator, "img:nth-of-type(1)");
        assert_eq!(nodes[0].failure_summary, "Image does not have an alt attribute");
        assert!(nodes[0].snippet.starts_with("<img"));
    }

    #[test]
    fn test_empty_alt_is_valid_decorative() {
        assert!(check(r#"<img src="divider.png" alt="">"#).is_empty());
    }

    #[test]
    fn test_locator_counts_all_images() {
        let html = r#"
            <img src="a.png">
            <img src="b.png" alt="fine">
            <img src="c.png">
        "#;
        let nodes = check(html);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].locator, "img:nth-of-type(3)");
    }

    #[test]
    fn test_violation_record() {
        let violation = ImageAltCheck
            .evaluate(&Document::parse("<img>"), &CheckContext::default())
            .expect("violation");
        assert_eq!(violation.rule_id, RuleId::ImageAlt);
        assert_eq!(violation.impact, Impact::Critical);
        assert_eq!(violation.wcag_tags, vec!["wcag2a", "wcag111"]);
    }
}
