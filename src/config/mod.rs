// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for complybot

use crate::error::{ComplybotError, Result};
use crate::rules::{WcagLevel, WcagVersion};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory names skipped by directory scans
    pub exclude: Vec<String>,
    pub target: TargetConfig,
    pub scan: ScanConfig,
}

/// The WCAG version and level the tool is measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub wcag_version: WcagVersion,
    pub level: WcagLevel,
    /// Newest version to compare against; the registry's latest stable
    /// version when unset
    pub latest_known: Option<WcagVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub failure_policy: FailurePolicy,
    /// Maximum characters of element markup kept per violation node
    pub snippet_limit: usize,
    pub tables: TableHeuristic,
}

/// What a scan does when an individual check panics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole scan
    Abort,
    /// Drop the check and note it in the result's skipped list
    Skip,
    /// Drop the check, note it, and add a partial-result warning
    #[default]
    Warn,
}

/// Thresholds separating data tables from incidental layout tables.
///
/// A table is only checked for header cells once it has at least
/// `min_rows` rows and `min_data_cells` data cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableHeuristic {
    pub min_rows: usize,
    pub min_data_cells: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "target".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "vendor".to_string(),
            ],
            target: TargetConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            wcag_version: WcagVersion::V2_1,
            level: WcagLevel::AA,
            latest_known: None,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Warn,
            snippet_limit: 200,
            tables: TableHeuristic::default(),
        }
    }
}

impl Default for TableHeuristic {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_data_cells: 3,
        }
    }
}

impl TableHeuristic {
    /// Whether a table with these counts is treated as a data table
    pub fn is_data_table(&self, rows: usize, data_cells: usize) -> bool {
        rows >= self.min_rows && data_cells >= self.min_data_cells
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("complybot")
        .join("config.yml")
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = if is_toml(path) {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    if config.scan.snippet_limit == 0 {
        return Err(ComplybotError::Config(
            "scan.snippet_limit must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config)?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}
