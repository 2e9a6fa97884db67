// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link name check - WCAG 2.4.4 Link Purpose (In Context) (Level A)
//!
//! A link's accessible name comes from, in order: its text, `aria-label`,
//! `title`, or the alt text of an image inside it. An image with `alt=""`
//! is decorative and names nothing.

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::LinkName,
    impact: Impact::Serious,
    description: "Links must have discernible text",
    help: "Add text content, aria-label, or title attribute to describe the link destination.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/link-purpose-in-context.html",
    wcag_tags: &["wcag2a", "wcag244"],
};

/// Check for links without an accessible name
pub struct LinkNameCheck;

impl Check for LinkNameCheck {
    fn name(&self) -> &str {
        "Link Discernible Text"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        document
            .select("a[href]")
            .into_iter()
            .enumerate()
            .filter(|(_, link)| !has_discernible_text(*link))
            .map(|(idx, link)| ctx.node(link, idx, "Link has no discernible text"))
            .collect()
    }
}

fn has_discernible_text(link: ElementRef<'_>) -> bool {
    !document::text(link).is_empty()
        || document::attr(link, "aria-label").is_some()
        || document::attr(link, "title").is_some()
        || document::select_within(link, "img[alt]")
            .into_iter()
            .any(|img| document::attr(img, "alt").is_some())
}
