// SPDX-License-Identifier: PMPL-1.0-or-later
//! Table header check - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Only tables that look like data tables are checked. Tables marked
//! `role="presentation"` or `role="none"` are layout, and small tables fall
//! under the [`TableHeuristic`](crate::config::TableHeuristic) thresholds.

use super::{Check, CheckContext, ViolationTemplate};
use crate::document::{self, Document};
use crate::result::ViolationNode;
use crate::rules::{Impact, RuleId};
use scraper::ElementRef;

static TEMPLATE: ViolationTemplate = ViolationTemplate {
    rule_id: RuleId::TableHeader,
    impact: Impact::Serious,
    description: "Data tables must have headers",
    help: "Add <th> elements to identify row and column headers.",
    help_url: "https://www.w3.org/WAI/WCAG21/Understanding/info-and-relationships.html",
    wcag_tags: &["wcag2a", "wcag131"],
};

/// Check for data tables without header cells
pub struct TableHeaderCheck;

impl Check for TableHeaderCheck {
    fn name(&self) -> &str {
        "Data Table Headers"
    }

    fn template(&self) -> &'static ViolationTemplate {
        &TEMPLATE
    }

    fn offending_nodes(&self, document: &Document, ctx: &CheckContext) -> Vec<ViolationNode> {
        document
            .select("table")
            .into_iter()
            .enumerate()
            .filter(|(_, table)| !is_layout_table(*table))
            .filter(|(_, table)| {
                let rows = document::select_within(*table, "tr").len();
                let cells = document::select_within(*table, "td").len();
                ctx.tables.is_data_table(rows, cells)
            })
            .filter(|(_, table)| document::select_within(*table, "th").is_empty())
            .map(|(idx, table)| {
                ctx.node(table, idx, "Data table does not have header cells (<th>)")
            })
            .collect()
    }
}

fn is_layout_table(table: ElementRef<'_>) -> bool {
    document::attr(table, "role")
        .map(|r| {
            let role = r.trim().to_ascii_lowercase();
            role == "presentation" || role == "none"
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableHeuristic;

    const DATA_TABLE: &str = r#"
        <table>
            <tr><td>Name</td><td>Price</td></tr>
            <tr><td>Mug</td><td>12</td></tr>
        </table>
    "#;

    fn check_with(html: &str, ctx: &CheckContext) -> Vec<ViolationNode> {
        TableHeaderCheck.offending_nodes(&Document::parse(html), ctx)
    }

    fn check(html: &str) -> Vec<ViolationNode> {
        check_with(html, &CheckContext::default())
    }

    #[test]
    fn test_data_table_without_headers() {
        let nodes = check(DATA_TABLE);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].locator, "table:nth-of-type(1)");
        assert_eq!(nodes[0].failure_summary, "Data table does not have header cells (<th>)");
    }

    #[test]
    fn test_data_table_with_headers() {
        let html = r#"
            <table>
                <thead><tr><th scope="col">Name</th><th scope="col">Price</th></tr></thead>
                <tbody><tr><td>Mug</td><td>12</td></tr><tr><td>Cup</td><td>8</td></tr></tbody>
            </table>
        "#;
        assert!(check(html).is_empty());
    }

    #[test]
    fn test_layout_tables_are_skipped() {
        let html = DATA_TABLE.replace("<table>", r#"<table role="Presentation">"#);
        assert!(check(&html).is_empty());
        let html = DATA_TABLE.replace("<table>", r#"<table role="none">"#);
        assert!(check(&html).is_empty());
    }

    #[test]
    fn test_small_tables_are_incidental() {
        // one row
        assert!(check("<table><tr><td>a</td><td>b</td><td>c</td></tr></table>").is_empty());
        // two rows, two cells
        assert!(check("<table><tr><td>a</td></tr><tr><td>b</td></tr></table>").is_empty());
    }

    #[test]
    fn test_thresholds_are_tunable() {
        let ctx = CheckContext {
            tables: TableHeuristic { min_rows: 3, min_data_cells: 3 },
            ..CheckContext::default()
        };
        assert!(check_with(DATA_TABLE, &ctx).is_empty());

        let ctx = CheckContext {
            tables: TableHeuristic { min_rows: 1, min_data_cells: 1 },
            ..CheckContext::default()
        };
        assert_eq!(check_with("<table><tr><td>x</td></tr></table>", &ctx).len(), 1);
    }
}
