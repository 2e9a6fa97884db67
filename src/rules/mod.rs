// SPDX-License-Identifier: PMPL-1.0-or-later
//! WCAG rule vocabulary shared by the checks, scoring, and registry.
//!
//! Every lookup keyed on a rule or impact is an exhaustive `match` here, so
//! adding a [`RuleId`] variant without deciding its principle fails to
//! compile instead of silently falling through to a default.

pub mod registry;

pub use registry::{CoverageReport, Rule, RuleRegistry, UpdateStatus, VersionInfo, VersionStatus};

use serde::{Deserialize, Serialize};

/// Severity of a single rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl Impact {
    pub const ALL: [Impact; 4] = [Impact::Critical, Impact::Serious, Impact::Moderate, Impact::Minor];

    /// Points deducted from the overall score per counted node
    pub fn weight(&self) -> u32 {
        match self {
            Impact::Critical => 25,
            Impact::Serious => 15,
            Impact::Moderate => 8,
            Impact::Minor => 3,
        }
    }

    /// Points deducted from a principle sub-score, once per failed rule
    pub fn principle_deduction(&self) -> u8 {
        match self {
            Impact::Critical => 20,
            Impact::Serious => 12,
            Impact::Moderate => 6,
            Impact::Minor => 3,
        }
    }

    /// Implementation priority for a missing rule (1 = highest)
    pub fn priority(&self) -> u8 {
        match self {
            Impact::Critical => 1,
            Impact::Serious => 2,
            Impact::Moderate => 3,
            Impact::Minor => 4,
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Critical => write!(f, "critical"),
            Impact::Serious => write!(f, "serious"),
            Impact::Moderate => write!(f, "moderate"),
            Impact::Minor => write!(f, "minor"),
        }
    }
}

/// The four WCAG principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    pub const ALL: [Principle; 4] = [
        Principle::Perceivable,
        Principle::Operable,
        Principle::Understandable,
        Principle::Robust,
    ];

    /// Principle for a raw rule id. Ids outside the catalog land in `Robust`.
    pub fn for_rule_id(id: &str) -> Principle {
        id.parse::<RuleId>().map(|r| r.principle()).unwrap_or(Principle::Robust)
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Principle::Perceivable => write!(f, "perceivable"),
            Principle::Operable => write!(f, "operable"),
            Principle::Understandable => write!(f, "understandable"),
            Principle::Robust => write!(f, "robust"),
        }
    }
}

/// WCAG standard version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagVersion {
    #[serde(rename = "2.0")]
    V2_0,
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "2.2")]
    V2_2,
    #[serde(rename = "3.0")]
    V3_0,
}

impl WcagVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagVersion::V2_0 => "2.0",
            WcagVersion::V2_1 => "2.1",
            WcagVersion::V2_2 => "2.2",
            WcagVersion::V3_0 => "3.0",
        }
    }
}

impl std::fmt::Display for WcagVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WcagVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.0" | "2" => Ok(WcagVersion::V2_0),
            "2.1" => Ok(WcagVersion::V2_1),
            "2.2" => Ok(WcagVersion::V2_2),
            "3.0" | "3" => Ok(WcagVersion::V3_0),
            other => Err(format!("Unknown WCAG version: {}", other)),
        }
    }
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(WcagLevel::A),
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            other => Err(format!("Unknown WCAG level: {}", other)),
        }
    }
}

/// Stable identifier of every rule the catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ImageAlt,
    LinkName,
    ButtonName,
    Label,
    HtmlHasLang,
    HeadingOrder,
    EmptyHeading,
    DocumentTitle,
    TableHeader,
    ColorContrast,
    ResizeText,
    FocusVisible,
    Orientation,
    InputPurpose,
    Reflow,
    TextSpacing,
    FocusNotObscured,
    DraggingMovements,
    TargetSize,
    ConsistentHelp,
    RedundantEntry,
    AccessibleAuthentication,
}

impl RuleId {
    pub const ALL: [RuleId; 22] = [
        RuleId::ImageAlt,
        RuleId::LinkName,
        RuleId::ButtonName,
        RuleId::Label,
        RuleId::HtmlHasLang,
        RuleId::HeadingOrder,
        RuleId::EmptyHeading,
        RuleId::DocumentTitle,
        RuleId::TableHeader,
        RuleId::ColorContrast,
        RuleId::ResizeText,
        RuleId::FocusVisible,
        RuleId::Orientation,
        RuleId::InputPurpose,
        RuleId::Reflow,
        RuleId::TextSpacing,
        RuleId::FocusNotObscured,
        RuleId::DraggingMovements,
        RuleId::TargetSize,
        RuleId::ConsistentHelp,
        RuleId::RedundantEntry,
        RuleId::AccessibleAuthentication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ImageAlt => "image-alt",
            RuleId::LinkName => "link-name",
            RuleId::ButtonName => "button-name",
            RuleId::Label => "label",
            RuleId::HtmlHasLang => "html-has-lang",
            RuleId::HeadingOrder => "heading-order",
            RuleId::EmptyHeading => "empty-heading",
            RuleId::DocumentTitle => "document-title",
            RuleId::TableHeader => "table-header",
            RuleId::ColorContrast => "color-contrast",
            RuleId::ResizeText => "resize-text",
            RuleId::FocusVisible => "focus-visible",
            RuleId::Orientation => "orientation",
            RuleId::InputPurpose => "input-purpose",
            RuleId::Reflow => "reflow",
            RuleId::TextSpacing => "text-spacing",
            RuleId::FocusNotObscured => "focus-not-obscured",
            RuleId::DraggingMovements => "dragging-movements",
            RuleId::TargetSize => "target-size",
            RuleId::ConsistentHelp => "consistent-help",
            RuleId::RedundantEntry => "redundant-entry",
            RuleId::AccessibleAuthentication => "accessible-authentication",
        }
    }

    /// The WCAG principle this rule's violations count against
    pub fn principle(&self) -> Principle {
        match self {
            RuleId::ImageAlt
            | RuleId::HeadingOrder
            | RuleId::EmptyHeading
            | RuleId::TableHeader
            | RuleId::ColorContrast
            | RuleId::ResizeText
            | RuleId::InputPurpose
            | RuleId::Reflow
            | RuleId::TextSpacing => Principle::Perceivable,
            RuleId::LinkName
            | RuleId::DocumentTitle
            | RuleId::FocusVisible
            | RuleId::Orientation
            | RuleId::FocusNotObscured
            | RuleId::DraggingMovements
            | RuleId::TargetSize => Principle::Operable,
            RuleId::Label
            | RuleId::HtmlHasLang
            | RuleId::ConsistentHelp
            | RuleId::RedundantEntry
            | RuleId::AccessibleAuthentication => Principle::Understandable,
            RuleId::ButtonName => Principle::Robust,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RuleId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| format!("Unknown rule id: {}", needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_and_level_ordering() {
        assert!(WcagVersion::V2_0 < WcagVersion::V2_1);
        assert!(WcagVersion::V2_2 < WcagVersion::V3_0);
        assert!(WcagLevel::A < WcagLevel::AA);
        assert!(WcagLevel::AA < WcagLevel::AAA);
    }

    #[test]
    fn test_rule_id_round_trip_through_str() {
        for id in RuleId::ALL {
            assert_eq!(id.as_str().parse::<RuleId>(), Ok(id));
        }
        assert!("not-a-rule".parse::<RuleId>().is_err());
    }

    #[test]
    fn test_principle_mapping_of_implemented_rules() {
        assert_eq!(RuleId::ImageAlt.principle(), Principle::Perceivable);
        assert_eq!(RuleId::LinkName.principle(), Principle::Operable);
        assert_eq!(RuleId::ButtonName.principle(), Principle::Robust);
        assert_eq!(RuleId::Label.principle(), Principle::Understandable);
        assert_eq!(RuleId::HtmlHasLang.principle(), Principle::Understandable);
        assert_eq!(RuleId::DocumentTitle.principle(), Principle::Operable);
        assert_eq!(RuleId::TableHeader.principle(), Principle::Perceivable);
    }

    #[test]
    fn test_unknown_rule_defaults_to_robust() {
        assert_eq!(Principle::for_rule_id("aria-valid-attr"), Principle::Robust);
        assert_eq!(Principle::for_rule_id("label"), Principle::Understandable);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RuleId::HtmlHasLang).unwrap(), "\"html-has-lang\"");
        assert_eq!(serde_json::to_string(&WcagVersion::V2_1).unwrap(), "\"2.1\"");
        assert_eq!(serde_json::to_string(&Impact::Critical).unwrap(), "\"critical\"");
    }
}
