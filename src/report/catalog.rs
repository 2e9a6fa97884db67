// SPDX-License-Identifier: PMPL-1.0-or-later
//! Text rendering for the rule catalog, the diagnostic and fix guides.

use super::{to_json, OutputFormat};
use crate::diagnostic::Diagnostic;
use crate::remediation::FixGuide;
use crate::rules::{Rule, VersionStatus};

/// Render the diagnostic. SARIF has no diagnostic form, so it falls back to JSON.
pub fn diagnostic_report(diagnostic: &Diagnostic, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => diagnostic_text(diagnostic),
        OutputFormat::Json | OutputFormat::Sarif => to_json(diagnostic, "diagnostic"),
    }
}

fn diagnostic_text(d: &Diagnostic) -> String {
    let mut output = String::new();

    output.push_str("=== Complybot Diagnostic ===\n\n");
    output.push_str(&format!(
        "Scanner {}  |  Target: WCAG {} {}  |  Checked: {}\n\n",
        d.scanner.version,
        d.scanner.target_wcag_version,
        d.scanner.target_level,
        d.scanner.last_checked.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output.push_str(&format!(
        "Coverage: {}/{} rules ({}%, {})\n\n",
        d.coverage.implemented, d.coverage.total, d.coverage.percentage, d.coverage.status
    ));

    if !d.missing_rules.is_empty() {
        output.push_str(&format!("--- Missing rules ({}) ---\n", d.missing_rules.len()));
        for missing in &d.missing_rules {
            let r = &missing.rule;
            output.push_str(&format!(
                "  P{}  {:<28} {:<7} WCAG {} {:<3} {}\n",
                missing.priority,
                r.id.as_str(),
                r.success_criterion,
                r.wcag_version,
                r.level.to_string(),
                r.name
            ));
        }
        output.push('\n');
    }

    output.push_str("--- Update status ---\n");
    output.push_str(&format!("  {}\n\n", d.update_status.recommendation));

    output.push_str("--- WCAG versions ---\n");
    for v in &d.wcag_versions {
        let released = v
            .released
            .map(|date| date.to_string())
            .unwrap_or_else(|| "unreleased".to_string());
        let status = match v.status {
            VersionStatus::Recommendation => "recommendation",
            VersionStatus::WorkingDraft => "working draft",
        };
        output.push_str(&format!("  {}  {:<10}  {}\n", v.version, released, status));
    }
    output.push('\n');

    output.push_str("--- Recommendations ---\n");
    for (i, rec) in d.recommendations.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, rec));
    }

    output
}

/// One line per rule
pub fn rules_report(rules: &[&Rule]) -> String {
    if rules.is_empty() {
        return "No rules match.\n".to_string();
    }

    let mut output = String::new();
    for rule in rules {
        let marker = if rule.implemented { "[x]" } else { "[ ]" };
        output.push_str(&format!(
            "{} {:<28} {:<7} WCAG {} {:<3} {:<9} {}\n",
            marker,
            rule.id.as_str(),
            rule.success_criterion,
            rule.wcag_version,
            rule.level.to_string(),
            rule.impact.to_string(),
            rule.name
        ));
    }
    let implemented = rules.iter().filter(|r| r.implemented).count();
    output.push_str(&format!("\n{} rule(s), {} implemented\n", rules.len(), implemented));
    output
}

/// One line per fix guide
pub fn fix_guide_list(guides: &[&FixGuide]) -> String {
    if guides.is_empty() {
        return "No fix guides match.\n".to_string();
    }

    let mut output = String::new();
    for guide in guides {
        output.push_str(&format!(
            "{:<16} {:<9} {:<7} {:<14} {}\n",
            guide.id.as_str(),
            guide.severity.to_string(),
            guide.difficulty.to_string(),
            guide.time_to_fix,
            guide.title
        ));
    }
    output
}

/// Step-by-step fix instructions
pub fn fix_guide_report(guide: &FixGuide) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== {} ({}) ===\n\n", guide.title, guide.id));
    output.push_str(&format!(
        "Severity: {}  |  Difficulty: {}  |  Time: {}\n\n",
        guide.severity, guide.difficulty, guide.time_to_fix
    ));
    output.push_str(&format!("{}\n\n", guide.summary));
    output.push_str(&format!("Why it matters: {}\n\n", guide.why_it_matters));

    for step in guide.steps {
        output.push_str(&format!("--- {} ---\n", step.location));
        for (i, instruction) in step.instructions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, instruction));
        }
        if let Some(tip) = step.tip {
            output.push_str(&format!("  Tip: {}\n", tip));
        }
        output.push('\n');
    }

    output.push_str("--- Examples ---\n");
    for example in guide.examples {
        output.push_str(&format!("  Before: {}\n", example.before));
        output.push_str(&format!("  After:  {}\n", example.after));
        output.push_str(&format!("  {}\n\n", example.explanation));
    }

    if let Some(note) = guide.cant_fix {
        output.push_str(&format!("Note: {}\n", note));
    }

    output
}
