// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading checks - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! - Heading levels only ever step down one at a time (h1 -> h2, not h1 -> h3)
//! - Headings are not empty

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

static ORDER_TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::HeadingOrder,
    impact: Impact::Moderate,
    description: "Heading levels should only increase by one",
    help: "Ensure heading levels are in logical order (H1 -> H2 -> H3, not H1 -> H3).",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html",
    wcag_tags: &["wcag2a", "wcag131"],
};

static EMPTY_TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::EmptyHeading,
    impact: Impact::Minor,
    description: "Headings must not be empty",
    help: "Add text content to the heading or remove the empty heading element.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html",
    wcag_tags: &["wcag2a", "wcag131"],
};

/// Check for skipped heading levels
pub struct HeadingOrderCheck;

impl Check for HeadingOrderCheck {
    fn name(&self) -> &str {
        "Heading Order"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &ORDER_TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        let mut nodes = Vec::new();
        let mut previous: Option<u8> = None;

        for (idx, heading) in document.select(HEADING_SELECTOR).into_iter().enumerate() {
            let Some(level) = heading_level(heading) else {
                continue;
            };

            if let Some(prev) = previous {
                if level > prev + 1 {
                    nodes.push(ctx.node(
                        heading,
                        idx,
                        &format!("Heading level skipped from H{} to H{}", prev, level),
                    ));
                }
            }
            previous = Some(level);
        }

        nodes
    }
}

/// Check for headings with no text
pub struct EmptyHeadingCheck;

impl Check for EmptyHeadingCheck {
    fn name(&self) -> &str {
        "Empty Headings"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &EMPTY_TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        document
            .select(HEADING_SELECTOR)
            .into_iter()
            .enumerate()
            .filter(|(_, heading)| document::text(*heading).is_empty())
            .map(|(idx, heading)| ctx.node(heading, idx, "Heading is empty"))
            .collect()
    }
}

fn heading_level(heading: ElementRef<'_>) -> Option<u8> {
    document::tag(heading)
        .strip_prefix('h')
        .and_then(|n| n.parse::<u8>().ok())
}
