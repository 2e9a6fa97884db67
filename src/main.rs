// SPDX-License-Identifier: PMPL-1.0-or-later
//! Complybot CLI - WCAG Compliance Scanner
//!
//! Scans local HTML files; fetching pages is left to the caller.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use complybot::config::{self, Config};
use complybot::diagnostic::Diagnostic;
use complybot::engine::Engine;
use complybot::error::ComplybotError;
use complybot::remediation::{BuiltinRemediation, Difficulty, RemediationSource};
use complybot::report::{self, OutputFormat};
use complybot::rules::{RuleId, RuleRegistry, WcagLevel, WcagVersion};
use complybot::{scanner, target};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// WCAG compliance scanner with self-reported rule coverage
#[derive(Parser)]
#[command(name = "complybot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a single HTML file
    Scan {
        /// HTML file to scan
        file: PathBuf,

        /// Address the markup was fetched from (labels the result)
        #[arg(long)]
        url: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit non-zero when the score is below this value
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_under: Option<u8>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Scan every HTML file under a directory
    ScanDir {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: PlainFormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// List catalog rules
    Rules {
        /// Which rules to list
        #[arg(long, default_value = "all")]
        status: StatusArg,

        /// Only rules introduced in this WCAG version
        #[arg(long)]
        wcag_version: Option<WcagVersion>,

        /// Only rules required at this level (cumulative)
        #[arg(long)]
        level: Option<WcagLevel>,
    },

    /// Report rule coverage against the configured WCAG target
    Diagnostic {
        /// Output format
        #[arg(long, default_value = "text")]
        format: PlainFormatArg,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show fix instructions for a rule, or list the available guides
    Fix {
        /// Rule id, e.g. image-alt (lists guides when omitted)
        rule: Option<String>,

        /// Only list guides of this difficulty
        #[arg(long, conflicts_with = "rule")]
        difficulty: Option<DifficultyArg>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

/// Output format for commands without a SARIF form
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlainFormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<PlainFormatArg> for OutputFormat {
    fn from(arg: PlainFormatArg) -> Self {
        match arg {
            PlainFormatArg::Text => OutputFormat::Text,
            PlainFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    All,
    Implemented,
    Missing,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("complybot=debug")
    } else {
        EnvFilter::new("complybot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { file, url, format, output, config, fail_under, verbose } => {
            init_logging(verbose);
            let config = load(config.as_deref())?;
            let engine = Engine::new(Arc::new(RuleRegistry::builtin()), &config.scan);

            let label = url
                .as_deref()
                .map(target::normalize_url)
                .transpose()?
                .map(|u| u.to_string());

            let result = scanner::scan_file(&engine, &file, label.as_deref())
                .with_context(|| format!("Failed to scan {}", file.display()))?;
            let report = report::generate_report(&result, format.into());
            write_output(&report, output.as_deref())?;

            let failed = match fail_under {
                Some(threshold) => result.accessibility_score < threshold,
                None => result.critical_count > 0,
            };
            if failed {
                std::process::exit(1);
            }
        }

        Commands::ScanDir { dir, format, output, config, verbose } => {
            init_logging(verbose);
            let config = load(config.as_deref())?;
            let engine = Engine::new(Arc::new(RuleRegistry::builtin()), &config.scan);

            let scan = scanner::scan_directory(&engine, &dir, &config.exclude)?;
            let report = report::generate_directory_report(&scan, format.into());
            write_output(&report, output.as_deref())?;

            if scan.has_critical() {
                std::process::exit(1);
            }
        }

        Commands::Rules { status, wcag_version, level } => {
            let registry = RuleRegistry::builtin();
            let implemented = match status {
                StatusArg::All => None,
                StatusArg::Implemented => Some(true),
                StatusArg::Missing => Some(false),
            };
            let rules = registry.select(implemented, wcag_version, level);
            print!("{}", report::rules_report(&rules));
        }

        Commands::Diagnostic { format, config } => {
            let config = load(config.as_deref())?;
            let registry = RuleRegistry::builtin();
            let diagnostic = Diagnostic::build(&registry, &config.target);
            println!("{}", report::diagnostic_report(&diagnostic, format.into()));
        }

        Commands::Fix { rule: None, difficulty } => {
            let guides = match difficulty {
                Some(d) => BuiltinRemediation.by_difficulty(d.into()),
                None => BuiltinRemediation.all(),
            };
            print!("{}", report::fix_guide_list(&guides));
        }

        Commands::Fix { rule: Some(rule), .. } => {
            let id: RuleId = rule
                .parse()
                .map_err(|_| ComplybotError::UnknownRule(rule.clone()))?;
            match BuiltinRemediation.lookup(id) {
                Some(guide) => print!("{}", report::fix_guide_report(guide)),
                None => println!(
                    "No fix guide for '{}': the scanner does not check this rule yet.",
                    id
                ),
            }
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(config::default_config_path);
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            config::write_default_config(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

/// Load the given config file, or the default one when none is given
fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);
    config::load_config(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
