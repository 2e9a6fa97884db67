// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for complybot

use complybot::config::{load_config, ScanConfig, TargetConfig};
use complybot::diagnostic::{CoverageStatus, Diagnostic};
use complybot::engine::Engine;
use complybot::report::{generate_report, OutputFormat};
use complybot::result::ScanResult;
use complybot::rules::{Impact, RuleId, RuleRegistry, WcagLevel, WcagVersion};
use complybot::scanner;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn engine() -> Engine {
    Engine::new(Arc::new(RuleRegistry::builtin()), &ScanConfig::default())
}

fn scan_fixture(name: &str) -> ScanResult {
    scanner::scan_file(&engine(), &fixture(name), Some(name)).expect("scan should succeed")
}

#[test]
fn test_scan_accessible_fixture() {
    let result = scan_fixture("accessible.html");

    assert!(
        result.violations.is_empty(),
        "Accessible fixture should have no violations, got {:?}",
        result.violations.iter().map(|v| v.rule_id).collect::<Vec<_>>()
    );
    assert_eq!(result.accessibility_score, 100);
    assert_eq!(result.total_passes, 9);
    assert_eq!(result.page_title, "Size Guide | Northwind Outfitters");
    assert_eq!(result.page_language, "en");
}

#[test]
fn test_scan_inaccessible_fixture() {
    let result = scan_fixture("inaccessible.html");

    // Every built-in rule fails
    assert_eq!(result.total_violations, 9);
    assert_eq!(result.total_passes, 0);
    assert_eq!(result.accessibility_score, 0);

    assert_eq!(result.critical_count, 3);
    assert_eq!(result.serious_count, 4);
    assert_eq!(result.moderate_count, 1);
    assert_eq!(result.minor_count, 1);
    for impact in Impact::ALL {
        assert_eq!(
            result.count_for(impact),
            result.violations.iter().filter(|v| v.impact == impact).count()
        );
    }

    assert_eq!(result.page_title, "Unknown");
    assert_eq!(result.page_language, "unknown");

    let image_alt = result.violation(RuleId::ImageAlt).unwrap();
    assert_eq!(image_alt.nodes.len(), 2);
    assert_eq!(image_alt.wcag_tags, vec!["wcag2a", "wcag111"]);

    let headings = result.violation(RuleId::HeadingOrder).unwrap();
    assert_eq!(headings.nodes.len(), 1);
    assert_eq!(headings.nodes[0].failure_summary, "Heading level skipped from H1 to H3");

    let label = result.violation(RuleId::Label).unwrap();
    assert!(label.nodes[0].failure_summary.contains("placeholder"));
}

#[test]
fn test_link_with_empty_alt_image_is_flagged() {
    let result = scan_fixture("inaccessible.html");
    let links = result.violation(RuleId::LinkName).unwrap();
    assert_eq!(links.nodes.len(), 1);
    assert!(links.nodes[0].snippet.contains("cart.svg"));
}

#[test]
fn test_inaccessible_breakdown() {
    let b = scan_fixture("inaccessible.html").wcag_breakdown;

    // image-alt (critical), heading-order (moderate), empty-heading (minor), table-header (serious)
    assert_eq!(b.perceivable.score, 100 - 20 - 6 - 3 - 12);
    assert_eq!(b.perceivable.violations, 5);
    // link-name, document-title
    assert_eq!(b.operable.score, 100 - 12 - 12);
    // label, html-has-lang
    assert_eq!(b.understandable.score, 100 - 20 - 12);
    // button-name
    assert_eq!(b.robust.score, 100 - 20);
    assert_eq!(b.robust.violations, 1);
}

#[test]
fn test_scan_partial_fixture() {
    let result = scan_fixture("partial.html");

    let failed: Vec<RuleId> = result.violations.iter().map(|v| v.rule_id).collect();
    assert_eq!(failed, vec![RuleId::ImageAlt, RuleId::HeadingOrder]);
    // 100 - 25 - 8 + 7 passes * 2
    assert_eq!(result.accessibility_score, 81);
    assert_eq!(
        result.violations[1].nodes[0].failure_summary,
        "Heading level skipped from H2 to H4"
    );
}

#[test]
fn test_violations_plus_passes_cover_every_check() {
    for name in ["accessible.html", "inaccessible.html", "partial.html"] {
        let result = scan_fixture(name);
        assert_eq!(result.total_violations + result.total_passes, 9, "{}", name);
        assert!(result.accessibility_score <= 100);
        assert!(result.violations.iter().all(|v| !v.nodes.is_empty()));
    }
}

#[test]
fn test_malformed_markup_still_scans() {
    let engine = engine();
    for markup in ["", "<<<>>>", "<html><body><div><span>", "<table><tr><td>x", "\u{0}\u{feff}"] {
        let result = engine.scan("malformed", markup).expect("malformed markup never fails");
        assert_eq!(result.total_violations + result.total_passes, 9);
    }
}

#[test]
fn test_rescan_is_byte_identical() {
    let engine = engine();
    let markup = std::fs::read_to_string(fixture("inaccessible.html")).unwrap();
    let first = generate_report(&engine.scan("page", &markup).unwrap(), OutputFormat::Json);
    let second = generate_report(&engine.scan("page", &markup).unwrap(), OutputFormat::Json);
    assert_eq!(first, second);
}

fn keys(value: &serde_json::Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_scan_result_json_keys() {
    let value = serde_json::to_value(scan_fixture("inaccessible.html")).unwrap();

    assert_eq!(
        keys(&value),
        vec![
            "accessibilityScore",
            "criticalCount",
            "minorCount",
            "moderateCount",
            "pageLanguage",
            "pageTitle",
            "passes",
            "seriousCount",
            "toolVersion",
            "totalPasses",
            "totalViolations",
            "url",
            "violations",
            "wcagBreakdown",
        ]
    );
    assert_eq!(
        keys(&value["violations"][0]),
        vec!["description", "helpText", "helpUrl", "impact", "nodes", "ruleId", "wcagTags"]
    );
    assert_eq!(
        keys(&value["violations"][0]["nodes"][0]),
        vec!["failureSummary", "locator", "snippet"]
    );
    assert_eq!(
        keys(&value["wcagBreakdown"]),
        vec!["operable", "perceivable", "robust", "understandable"]
    );
    assert_eq!(keys(&value["wcagBreakdown"]["robust"]), vec!["score", "violations"]);
}

#[test]
fn test_rule_json_keys() {
    let registry = RuleRegistry::builtin();
    let value = serde_json::to_value(registry.get(RuleId::ColorContrast).unwrap()).unwrap();

    assert_eq!(
        keys(&value),
        vec![
            "addedInVersion",
            "description",
            "helpUrl",
            "id",
            "impact",
            "implemented",
            "level",
            "name",
            "principle",
            "successCriterion",
            "wcagVersion",
        ]
    );
    assert!(value["addedInVersion"].is_null());
}

#[test]
fn test_scan_fixture_directory() {
    let dir = fixture("");
    let scan = scanner::scan_directory(&engine(), &dir, &[]).unwrap();

    let names: Vec<String> = scan
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["accessible.html", "inaccessible.html", "partial.html"]);
    assert!(scan.has_critical());
    assert_eq!(scan.average_score(), Some(60));
}

#[test]
fn test_config_file_drives_scan() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("complybot.toml");
    std::fs::write(&path, "[scan]\nsnippet_limit = 12\n\n[scan.tables]\nmin_rows = 3\n").unwrap();

    let config = load_config(&path).unwrap();
    let engine = Engine::new(Arc::new(RuleRegistry::builtin()), &config.scan);
    let result = scanner::scan_file(&engine, &fixture("inaccessible.html"), None).unwrap();

    // two-row table is no longer a data table
    assert!(result.violation(RuleId::TableHeader).is_none());
    let image_alt = result.violation(RuleId::ImageAlt).unwrap();
    assert!(image_alt.nodes.iter().all(|n| n.snippet.chars().count() <= 12));
}

#[test]
fn test_diagnostic_for_wcag20_aa() {
    let registry = RuleRegistry::builtin();
    let target = TargetConfig {
        wcag_version: WcagVersion::V2_0,
        level: WcagLevel::AA,
        latest_known: None,
    };
    let diag = Diagnostic::build(&registry, &target);

    assert_eq!(diag.coverage.total, 12);
    assert_eq!(diag.coverage.implemented, 9);
    assert_eq!(diag.coverage.percentage, 75);
    assert_eq!(diag.coverage.status, CoverageStatus::Good);
    assert!(diag.update_status.update_available);
    assert!(diag
        .recommendations
        .iter()
        .any(|r| r.starts_with("COMMON REQUEST: Color contrast")));
}
