// SPDX-License-Identifier: PMPL-1.0-or-later
//! Complybot - WCAG Compliance Scanner
//!
//! Evaluates rendered HTML against a catalog of WCAG rules and produces a
//! deterministic 0-100 score, per-principle sub-scores, and a structured list
//! of violations and passes. It also reports its own rule coverage against a
//! target WCAG version, so gaps show up as the standard moves.
//!
//! ## Checks
//!
//! - **Image Alt** (1.1.1): `img` elements declare `alt`
//! - **Link Name** (2.4.4): links have discernible text
//! - **Button Name** (4.1.2): buttons have accessible names
//! - **Label** (1.3.1/3.3.2): form controls are labelled
//! - **Page Language** (3.1.1): `<html lang>` is set
//! - **Heading Order / Empty Heading** (1.3.1): heading outline is sound
//! - **Document Title** (2.4.2): the page has a title
//! - **Table Header** (1.3.1): data tables have `th` cells
//!
//! Visual criteria (contrast, reflow, focus visibility) need computed styles
//! and stay unimplemented catalog entries.
//!
//! ```no_run
//! use complybot::{config::ScanConfig, engine::Engine, rules::RuleRegistry};
//! use std::sync::Arc;
//!
//! let engine = Engine::new(Arc::new(RuleRegistry::builtin()), &ScanConfig::default());
//! let result = engine.scan("https://example.com", "<html lang=\"en\">...</html>")?;
//! println!("score: {}", result.accessibility_score);
//! # Ok::<(), complybot::error::ComplybotError>(())
//! ```

pub mod checks;
pub mod config;
pub mod diagnostic;
pub mod document;
pub mod engine;
pub mod error;
pub mod remediation;
pub mod report;
pub mod result;
pub mod rules;
pub mod scanner;
pub mod scoring;
pub mod target;
