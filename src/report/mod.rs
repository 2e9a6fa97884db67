// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for scan results.
//!
//! Supports multiple output formats:
//! - Text: human-readable violations grouped by impact
//! - JSON: the camelCase [`ScanResult`] contract
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

mod catalog;
mod sarif;

pub use catalog::{diagnostic_report, fix_guide_list, fix_guide_report, rules_report};

use crate::result::ScanResult;
use crate::rules::{Impact, Principle};
use crate::scanner::DirectoryScan;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for one scan
pub fn generate_report(result: &ScanResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(result),
        OutputFormat::Json => to_json(result, "scan result"),
        OutputFormat::Sarif => sarif::generate_sarif_report(std::slice::from_ref(result)),
    }
}

/// Generate a report for a directory scan
pub fn generate_directory_report(scan: &DirectoryScan, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_directory_text_report(scan),
        OutputFormat::Json => to_json(scan, "directory scan"),
        OutputFormat::Sarif => {
            let results: Vec<ScanResult> = scan.files.iter().map(|f| f.result.clone()).collect();
            sarif::generate_sarif_report(&results)
        }
    }
}

fn generate_text_report(result: &ScanResult) -> String {
    let mut output = String::new();

    output.push_str("=== Complybot WCAG Scan Report ===\n\n");
    output.push_str(&format!("Page: {}\n", result.url));
    output.push_str(&format!(
        "Title: {}  |  Language: {}\n",
        result.page_title, result.page_language
    ));
    output.push_str(&format!("Score: {}/100\n", result.accessibility_score));
    output.push_str(&format!(
        "Checks: {} failed, {} passed\n\n",
        result.total_violations, result.total_passes
    ));

    if result.violations.is_empty() {
        output.push_str("No accessibility issues found. All checks passed.\n");
    } else {
        // Group by impact
        for impact in Impact::ALL {
            let group: Vec<_> = result.violations.iter().filter(|v| v.impact == impact).collect();
            if group.is_empty() {
                continue;
            }

            output.push_str(&format!("--- {} ({}) ---\n", impact, group.len()));

            for violation in group {
                output.push_str(&format!("[{}] {}\n", violation.rule_id, violation.description));
                output.push_str(&format!("  WCAG: {}\n", violation.wcag_tags.join(", ")));
                output.push_str(&format!("  Fix: {}\n", violation.help_text));
                output.push_str(&format!("  Reference: {}\n", violation.help_url));
                for node in &violation.nodes {
                    output.push_str(&format!("  - {}: {}\n", node.locator, node.failure_summary));
                    output.push_str(&format!("    {}\n", node.snippet));
                }
                output.push('\n');
            }
        }
    }

    output.push_str("--- Principles ---\n");
    for principle in Principle::ALL {
        let entry = result.wcag_breakdown.get(principle);
        output.push_str(&format!(
            "  {:<15} {:>3}  ({} node(s))\n",
            principle.to_string(),
            entry.score,
            entry.violations
        ));
    }
    output.push('\n');

    if !result.skipped_checks.is_empty() {
        output.push_str("--- Skipped checks ---\n");
        for skipped in &result.skipped_checks {
            output.push_str(&format!("  {}: {}\n", skipped.rule_id, skipped.reason));
        }
        output.push('\n');
    }

    for warning in &result.warnings {
        output.push_str(&format!("WARNING: {}\n", warning));
    }

    output.push_str(result_line(result));
    output.push('\n');
    output
}

fn result_line(result: &ScanResult) -> &'static str {
    if result.critical_count > 0 {
        "RESULT: FAIL (critical violations found)"
    } else if result.total_violations > 0 {
        "RESULT: PASS WITH ISSUES"
    } else if !result.is_complete() {
        "RESULT: PASS (partial scan)"
    } else {
        "RESULT: PASS"
    }
}

fn generate_directory_text_report(scan: &DirectoryScan) -> String {
    let mut output = String::new();

    output.push_str("=== Complybot WCAG Directory Report ===\n\n");

    if scan.files.is_empty() {
        output.push_str("No HTML files found.\n");
    } else {
        output.push_str(&format!("Scanned {} file(s)\n\n", scan.files.len()));
        for file in &scan.files {
            let r = &file.result;
            output.push_str(&format!(
                "{:>3}/100  {}  ({} failed: {} critical, {} serious, {} moderate, {} minor)\n",
                r.accessibility_score,
                file.path.display(),
                r.total_violations,
                r.critical_count,
                r.serious_count,
                r.moderate_count,
                r.minor_count
            ));
        }
        output.push('\n');

        if let Some(average) = scan.average_score() {
            output.push_str(&format!("Average score: {}/100\n", average));
        }
        if let Some(lowest) = scan.lowest() {
            output.push_str(&format!(
                "Lowest score: {}/100 ({})\n",
                lowest.result.accessibility_score,
                lowest.path.display()
            ));
        }
    }

    if !scan.unreadable.is_empty() {
        output.push_str(&format!("\nSkipped {} unreadable file(s):\n", scan.unreadable.len()));
        for path in &scan.unreadable {
            output.push_str(&format!("  {}\n", path.display()));
        }
    }

    output
}

fn to_json<T: serde::Serialize>(value: &T, what: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize {}: {}\"}}", what, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::engine::Engine;
    use crate::rules::RuleRegistry;
    use crate::scanner::FileScan;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn scan(html: &str) -> ScanResult {
        Engine::new(Arc::new(RuleRegistry::builtin()), &ScanConfig::default())
            .scan("index.html", html)
            .unwrap()
    }

    const CLEAN: &str = r#"<html lang="en"><head><title>Home</title></head><body><h1>Hi</h1></body></html>"#;

    #[test]
    fn test_text_report_clean() {
        let report = generate_report(&scan(CLEAN), OutputFormat::Text);
        assert!(report.contains("No accessibility issues found"));
        assert!(report.contains("Score: 100/100"));
        assert!(report.contains("RESULT: PASS"));
    }

    #[test]
    fn test_text_report_with_violations() {
        let report = generate_report(&scan("<img src=\"a.png\">"), OutputFormat::Text);
        assert!(report.contains("--- critical (1) ---"));
        assert!(report.contains("[image-alt]"));
        assert!(report.contains("img:nth-of-type(1): Image does not have an alt attribute"));
        assert!(report.contains("RESULT: FAIL"));
    }

    #[test]
    fn test_json_report_is_scan_result() {
        let report = generate_report(&scan("<img src=\"a.png\">"), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["violations"][0]["ruleId"], "image-alt");
        assert!(parsed["accessibilityScore"].is_number());
        assert!(parsed.get("skippedChecks").is_none());

        let back: ScanResult = serde_json::from_str(&report).unwrap();
        assert_eq!(back.total_violations + back.total_passes, 9);
    }

    #[test]
    fn test_sarif_report() {
        let report = generate_report(&scan("<img src=\"a.png\"><img src=\"b.png\">"), OutputFormat::Sarif);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        let results = parsed["runs"][0]["results"].as_array().unwrap();
        let image_alt: Vec<_> = results.iter().filter(|r| r["ruleId"] == "image-alt").collect();
        assert_eq!(image_alt.len(), 2);
        assert_eq!(image_alt[0]["level"], "error");
    }

    #[test]
    fn test_directory_report() {
        let dir = DirectoryScan {
            files: vec![
                FileScan { path: PathBuf::from("a.html"), result: scan(CLEAN) },
                FileScan { path: PathBuf::from("b.html"), result: scan("<img src=x>") },
            ],
            unreadable: vec![PathBuf::from("c.html")],
        };
        let report = generate_directory_report(&dir, OutputFormat::Text);
        assert!(report.contains("Scanned 2 file(s)"));
        assert!(report.contains("Lowest score"));
        assert!(report.contains("b.html"));
        assert!(report.contains("Skipped 1 unreadable file(s)"));

        let json: serde_json::Value =
            serde_json::from_str(&generate_directory_report(&dir, OutputFormat::Json)).unwrap();
        assert_eq!(json["files"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
