// SPDX-License-Identifier: PMPL-1.0-or-later
//! Score and per-principle breakdown.
//!
//! Pure aggregation over check output; nothing here touches the document.

use crate::result::{Violation, WcagBreakdown};

/// Nodes beyond this count add no further deduction for a single rule
pub const MAX_COUNTED_NODES: usize = 5;
/// Bonus points per passing check
pub const PASS_BONUS_PER_CHECK: u32 = 2;
/// Ceiling on the total pass bonus
pub const PASS_BONUS_CAP: u32 = 15;

/// Overall 0-100 score.
///
/// `total_checks` is the number of checks that produced an outcome; each one
/// without a violation earns a capped bonus.
pub fn accessibility_score(violations: &[Violation], total_checks: usize) -> u8 {
    let deductions: u32 = violations
        .iter()
        .map(|v| v.impact.weight() * v.nodes.len().min(MAX_COUNTED_NODES) as u32)
        .sum();

    let passed = total_checks.saturating_sub(violations.len()) as u32;
    let pass_bonus = (passed * PASS_BONUS_PER_CHECK).min(PASS_BONUS_CAP);

    let score = 100i64 - i64::from(deductions) + i64::from(pass_bonus);
    score.clamp(0, 100) as u8
}

/// Sub-scores for the four WCAG principles
pub fn wcag_breakdown(violations: &[Violation]) -> WcagBreakdown {
    let mut breakdown = WcagBreakdown::default();

    for v in violations {
        let entry = breakdown.get_mut(v.principle());
        entry.violations += v.nodes.len();
        entry.score = entry.score.saturating_sub(v.impact.principle_deduction());
    }

    breakdown
}
