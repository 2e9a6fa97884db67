// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running WCAG checks across a site build.
//!
//! Walks directory trees, collects HTML files and scans them in parallel.
//! Each worker parses its own document; results come back in path order.

use crate::engine::Engine;
use crate::error::Result;
use crate::result::ScanResult;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm", "xhtml"];

/// Scan result for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileScan {
    pub path: PathBuf,
    pub result: ScanResult,
}

/// Results for every HTML file under a directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectoryScan {
    /// Sorted by path
    pub files: Vec<FileScan>,
    /// Files that could not be read as UTF-8 text
    pub unreadable: Vec<PathBuf>,
}

impl DirectoryScan {
    /// Mean score, rounded; `None` when no files were scanned
    pub fn average_score(&self) -> Option<u8> {
        if self.files.is_empty() {
            return None;
        }
        let sum: u32 = self
            .files
            .iter()
            .map(|f| u32::from(f.result.accessibility_score))
            .sum();
        Some((f64::from(sum) / self.files.len() as f64).round() as u8)
    }

    /// The worst-scoring file (first by path on ties)
    pub fn lowest(&self) -> Option<&FileScan> {
        self.files
            .iter()
            .min_by_key(|f| f.result.accessibility_score)
    }

    /// Whether any file has a critical violation
    pub fn has_critical(&self) -> bool {
        self.files.iter().any(|f| f.result.critical_count > 0)
    }
}

/// Scan every HTML file under `dir`.
///
/// Directories named in `exclude` and hidden directories are skipped. A file
/// that cannot be read is logged and listed, not fatal. A check failure under
/// the abort policy fails the whole walk.
pub fn scan_directory(engine: &Engine, dir: &Path, exclude: &[String]) -> Result<DirectoryScan> {
    info!("Scanning directory: {}", dir.display());

    let mut paths = collect_html_files(dir, exclude);
    paths.sort();
    debug!("Found {} HTML file(s)", paths.len());

    let outcomes: Vec<(PathBuf, Option<Result<ScanResult>>)> = paths
        .into_par_iter()
        .map(|path| {
            let outcome = match std::fs::read_to_string(&path) {
                Ok(content) => Some(engine.scan(&path.display().to_string(), &content)),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            };
            (path, outcome)
        })
        .collect();

    let mut scan = DirectoryScan::default();
    for (path, outcome) in outcomes {
        match outcome {
            Some(result) => scan.files.push(FileScan { path, result: result? }),
            None => scan.unreadable.push(path),
        }
    }

    info!(
        "Scanned {} file(s), skipped {} unreadable",
        scan.files.len(),
        scan.unreadable.len()
    );

    Ok(scan)
}

/// Scan a single file, labelled with `label` or the file path
pub fn scan_file(engine: &Engine, path: &Path, label: Option<&str>) -> Result<ScanResult> {
    let content = std::fs::read_to_string(path)?;
    let label = label
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());
    engine.scan(&label, &content)
}

fn collect_html_files(dir: &Path, exclude: &[String]) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories below the root
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !name.starts_with('.') && !exclude.iter().any(|x| x == name)
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|ext| SCANNABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ScanConfig};
    use crate::rules::RuleRegistry;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn engine() -> Engine {
        Engine::new(Arc::new(RuleRegistry::builtin()), &ScanConfig::default())
    }

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    const CLEAN: &str = r#"<html lang="en"><head><title>Ok</title></head><body><h1>Ok</h1></body></html>"#;

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_directory(&engine(), Path::new("/nonexistent/path"), &[]).unwrap();
        assert!(result.files.is_empty());
        assert_eq!(result.average_score(), None);
    }

    #[test]
    fn test_scan_directory_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.html", CLEAN);
        write(dir.path(), "a.htm", "<img src=x>");
        write(dir.path(), "styles.css", "body {}");
        write(dir.path(), "node_modules/pkg/index.html", "<img src=x>");
        write(dir.path(), ".cache/page.html", "<img src=x>");
        write(dir.path(), "docs/guide.HTML", CLEAN);

        let exclude = Config::default().exclude;
        let scan = scan_directory(&engine(), dir.path(), &exclude).unwrap();

        let names: Vec<String> = scan
            .files
            .iter()
            .map(|f| f.path.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.htm", "b.html", "docs/guide.HTML"]);
        assert!(scan.has_critical());
        assert_eq!(scan.lowest().unwrap().path, dir.path().join("a.htm"));
        assert_eq!(scan.files[1].result.accessibility_score, 100);
    }

    #[test]
    fn test_unreadable_file_is_listed() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "ok.html", CLEAN);
        std::fs::write(dir.path().join("binary.html"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let scan = scan_directory(&engine(), dir.path(), &[]).unwrap();
        assert_eq!(scan.files.len(), 1);
        assert_eq!(scan.unreadable, vec![dir.path().join("binary.html")]);
    }

    #[test]
    fn test_scan_file_label() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "index.html", CLEAN);
        let path = dir.path().join("index.html");

        let labelled = scan_file(&engine(), &path, Some("https://example.com/")).unwrap();
        assert_eq!(labelled.url, "https://example.com/");

        let unlabelled = scan_file(&engine(), &path, None).unwrap();
        assert_eq!(unlabelled.url, path.display().to_string());
    }

    #[test]
    fn test_scan_missing_file() {
        assert!(scan_file(&engine(), Path::new("/nonexistent/index.html"), None).is_err());
    }
}
