// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fix guidance for failed rules.
//!
//! Plain-language, step-by-step instructions aimed at site owners rather than
//! developers. The built-in catalog is platform neutral; hosts that want
//! instructions for a specific CMS supply their own [`RemediationSource`].

use crate::rules::{Impact, RuleId};
use serde::Serialize;

/// How much effort a fix takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Instructions for fixing the problem in one place
#[derive(Debug, Serialize)]
pub struct FixStep {
    pub location: &'static str,
    pub instructions: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct FixExample {
    pub before: &'static str,
    pub after: &'static str,
    pub explanation: &'static str,
}

/// Complete guidance for one rule
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixGuide {
    pub id: RuleId,
    pub title: &'static str,
    pub severity: Impact,
    pub time_to_fix: &'static str,
    pub difficulty: Difficulty,
    pub summary: &'static str,
    pub why_it_matters: &'static str,
    pub steps: &'static [FixStep],
    pub examples: &'static [FixExample],
    /// When the owner needs outside help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cant_fix: Option<&'static str>,
}

/// Source of fix guidance keyed by rule
pub trait RemediationSource {
    fn lookup(&self, rule: RuleId) -> Option<&FixGuide>;

    /// Guidance for every rule this source covers, most severe first
    fn all(&self) -> Vec<&FixGuide> {
        let mut guides: Vec<&FixGuide> = RuleId::ALL.iter().filter_map(|id| self.lookup(*id)).collect();
        guides.sort_by_key(|g| g.severity);
        guides
    }

    fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&FixGuide> {
        self.all()
            .into_iter()
            .filter(|g| g.difficulty == difficulty)
            .collect()
    }
}

/// Built-in guidance for the rules the check engine implements
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRemediation;

impl RemediationSource for BuiltinRemediation {
    fn lookup(&self, rule: RuleId) -> Option<&FixGuide> {
        match rule {
            RuleId::ImageAlt => Some(&IMAGE_ALT),
            RuleId::LinkName => Some(&LINK_NAME),
            RuleId::ButtonName => Some(&BUTTON_NAME),
            RuleId::Label => Some(&LABEL),
            RuleId::HtmlHasLang => Some(&HTML_HAS_LANG),
            RuleId::HeadingOrder => Some(&HEADING_ORDER),
            RuleId::EmptyHeading => Some(&EMPTY_HEADING),
            RuleId::DocumentTitle => Some(&DOCUMENT_TITLE),
            RuleId::TableHeader => Some(&TABLE_HEADER),
            RuleId::ColorContrast
            | RuleId::ResizeText
            | RuleId::FocusVisible
            | RuleId::Orientation
            | RuleId::InputPurpose
            | RuleId::Reflow
            | RuleId::TextSpacing
            | RuleId::FocusNotObscured
            | RuleId::DraggingMovements
            | RuleId::TargetSize
            | RuleId::AccessibleAuthentication
            | RuleId::ConsistentHelp
            | RuleId::RedundantEntry => None,
        }
    }
}

static IMAGE_ALT: FixGuide = FixGuide {
    id: RuleId::ImageAlt,
    title: "Add Alt Text to Images",
    severity: Impact::Critical,
    time_to_fix: "2-5 minutes per image",
    difficulty: Difficulty::Easy,
    summary: "Every image needs a text alternative so screen readers can describe it.",
    why_it_matters: "Screen reader users hear only \"image\" when alt text is missing, so product \
        photos, banners and logos carry no meaning for them.",
    steps: &[
        FixStep {
            location: "Images in page content",
            instructions: &[
                "Open the page or product in your site editor",
                "Select the image",
                "Find the \"Alt text\" or \"Image description\" field",
                "Describe what the image shows",
                "Save the page",
            ],
            tip: Some("Describe what a sighted visitor sees: \"Red running shoes, side view\" rather than \"shoes\"."),
        },
        FixStep {
            location: "Decorative images",
            instructions: &[
                "Decide whether the image adds information",
                "If it is purely decorative, set an empty alt attribute (alt=\"\")",
            ],
            tip: Some("An empty alt tells screen readers to skip the image. Leaving alt out entirely does not."),
        },
    ],
    examples: &[
        FixExample {
            before: "<img src=\"IMG_4523.jpg\">",
            after: "<img src=\"IMG_4523.jpg\" alt=\"Handmade ceramic mug with blue glaze\">",
            explanation: "File names are not descriptions. Write what a person would see.",
        },
        FixExample {
            before: "<img src=\"divider.svg\">",
            after: "<img src=\"divider.svg\" alt=\"\">",
            explanation: "Decorative images get an empty alt so they are skipped.",
        },
    ],
    cant_fix: None,
};

static LINK_NAME: FixGuide = FixGuide {
    id: RuleId::LinkName,
    title: "Fix Links Without Text",
    severity: Impact::Serious,
    time_to_fix: "5-10 minutes",
    difficulty: Difficulty::Medium,
    summary: "Links need text that says where they go.",
    why_it_matters: "Icon-only links are announced as \"link\" with no destination, so keyboard and \
        screen reader users cannot tell social icons or logo links apart.",
    steps: &[
        FixStep {
            location: "Icon and image links",
            instructions: &[
                "Find links that contain only an icon or image",
                "If the link wraps an image, give the image alt text describing the destination",
                "Otherwise add aria-label=\"Destination\" to the <a> tag",
            ],
            tip: Some("A linked logo should read as the site name, for example alt=\"Acme home\"."),
        },
    ],
    examples: &[
        FixExample {
            before: "<a href=\"/cart\"><svg class=\"icon-cart\"></svg></a>",
            after: "<a href=\"/cart\" aria-label=\"Shopping cart\"><svg class=\"icon-cart\"></svg></a>",
            explanation: "The label gives the icon link a spoken name.",
        },
        FixExample {
            before: "<a href=\"/\"><img src=\"logo.png\" alt=\"\"></a>",
            after: "<a href=\"/\"><img src=\"logo.png\" alt=\"Acme home\"></a>",
            explanation: "An empty alt hides the only content of the link.",
        },
    ],
    cant_fix: None,
};

static BUTTON_NAME: FixGuide = FixGuide {
    id: RuleId::ButtonName,
    title: "Fix Buttons Without Names",
    severity: Impact::Critical,
    time_to_fix: "5-15 minutes",
    difficulty: Difficulty::Medium,
    summary: "Buttons need visible text or a label that says what they do.",
    why_it_matters: "A nameless button is announced as \"button\" and nothing else. Visitors who \
        rely on screen readers cannot open the menu, search, or check out.",
    steps: &[
        FixStep {
            location: "Theme or template settings",
            instructions: &[
                "Look for icon-only buttons such as cart, search and menu",
                "Check the theme settings for an accessibility label option",
                "Enter a short description of the action",
            ],
            tip: Some("Many themes already expose a label setting. Check there before editing code."),
        },
        FixStep {
            location: "Template code",
            instructions: &[
                "Open the template that renders the button",
                "Add aria-label=\"Action\" to the <button> tag",
                "Save and re-scan the page",
            ],
            tip: None,
        },
    ],
    examples: &[
        FixExample {
            before: "<button><svg class=\"icon-search\"></svg></button>",
            after: "<button aria-label=\"Search\"><svg class=\"icon-search\"></svg></button>",
            explanation: "Icon-only buttons need a label describing their purpose.",
        },
        FixExample {
            before: "<button>+</button>",
            after: "<button aria-label=\"Increase quantity\">+</button>",
            explanation: "Symbols need a label explaining what they do.",
        },
    ],
    cant_fix: Some("Buttons injected by third-party widgets must be fixed by the widget vendor."),
};

static LABEL: FixGuide = FixGuide {
    id: RuleId::Label,
    title: "Add Labels to Form Fields",
    severity: Impact::Critical,
    time_to_fix: "10-20 minutes",
    difficulty: Difficulty::Medium,
    summary: "Every form field needs a label that stays in place while the visitor types.",
    why_it_matters: "Placeholder text disappears on input and is not reliably announced. Without a \
        label, screen reader users do not know what a field is asking for.",
    steps: &[
        FixStep {
            location: "Contact, newsletter and checkout forms",
            instructions: &[
                "Find fields that only show placeholder text",
                "Add a <label> element before the field",
                "Give the field an id and set the label's for attribute to that id",
            ],
            tip: Some("If the design cannot show a visible label, use aria-label on the field."),
        },
    ],
    examples: &[
        FixExample {
            before: "<input type=\"email\" placeholder=\"Email\">",
            after: "<label for=\"email\">Email</label><input type=\"email\" id=\"email\">",
            explanation: "The label is announced when the field receives focus.",
        },
        FixExample {
            before: "<input type=\"search\">",
            after: "<input type=\"search\" aria-label=\"Search products\">",
            explanation: "aria-label names a field that has no room for visible text.",
        },
    ],
    cant_fix: Some("Forms embedded from third-party services must be fixed by that service."),
};

static HTML_HAS_LANG: FixGuide = FixGuide {
    id: RuleId::HtmlHasLang,
    title: "Set Page Language",
    severity: Impact::Serious,
    time_to_fix: "2 minutes",
    difficulty: Difficulty::Easy,
    summary: "Declare the page language so screen readers pronounce the text correctly.",
    why_it_matters: "Without a language, screen readers guess and may read English text with the \
        wrong accent and pronunciation rules.",
    steps: &[
        FixStep {
            location: "Main layout template",
            instructions: &[
                "Open the layout file that contains the <html> tag",
                "Add a lang attribute with the page's language code",
                "Save the file",
            ],
            tip: Some("Use a standard code such as \"en\", \"en-GB\" or \"fr\"."),
        },
    ],
    examples: &[FixExample {
        before: "<html>",
        after: "<html lang=\"en\">",
        explanation: "One attribute fixes every page that uses the layout.",
    }],
    cant_fix: None,
};

static HEADING_ORDER: FixGuide = FixGuide {
    id: RuleId::HeadingOrder,
    title: "Fix Heading Order",
    severity: Impact::Moderate,
    time_to_fix: "10-30 minutes",
    difficulty: Difficulty::Medium,
    summary: "Headings should form an outline without skipped levels.",
    why_it_matters: "Screen reader users jump between headings to navigate. A jump from H1 to H3 \
        suggests missing content and makes the page structure hard to follow.",
    steps: &[
        FixStep {
            location: "Page sections",
            instructions: &[
                "List the headings on the page in order",
                "Make sure each new level is only one deeper than the previous heading",
                "Change the heading level in the editor, not just its size",
            ],
            tip: Some("Pick headings for structure and use styling for size."),
        },
    ],
    examples: &[FixExample {
        before: "<h1>Shop</h1><h3>New arrivals</h3>",
        after: "<h1>Shop</h1><h2>New arrivals</h2>",
        explanation: "A section directly under the page title is an H2.",
    }],
    cant_fix: None,
};

static EMPTY_HEADING: FixGuide = FixGuide {
    id: RuleId::EmptyHeading,
    title: "Remove or Fill Empty Headings",
    severity: Impact::Minor,
    time_to_fix: "5-10 minutes",
    difficulty: Difficulty::Easy,
    summary: "Headings must contain text.",
    why_it_matters: "Empty headings are announced as headings with nothing in them, which wastes \
        navigation steps and confuses the page outline.",
    steps: &[
        FixStep {
            location: "Page editor",
            instructions: &[
                "Find heading blocks with no text",
                "Add the missing text or delete the block",
            ],
            tip: Some("Empty headings are often left behind when a section's title is cleared."),
        },
    ],
    examples: &[FixExample {
        before: "<h2></h2>",
        after: "<h2>Featured products</h2>",
        explanation: "Give the heading text or remove it.",
    }],
    cant_fix: None,
};

static DOCUMENT_TITLE: FixGuide = FixGuide {
    id: RuleId::DocumentTitle,
    title: "Add Page Titles",
    severity: Impact::Serious,
    time_to_fix: "5 minutes",
    difficulty: Difficulty::Easy,
    summary: "Every page needs a descriptive <title>.",
    why_it_matters: "The title is the first thing a screen reader announces and is what appears in \
        browser tabs and search results.",
    steps: &[
        FixStep {
            location: "Page or SEO settings",
            instructions: &[
                "Open the page settings",
                "Fill in the page title field",
                "Put the most specific part first, then the site name",
            ],
            tip: Some("\"Blue Ceramic Mug | Acme\" tells visitors more than \"Acme\"."),
        },
    ],
    examples: &[FixExample {
        before: "<head></head>",
        after: "<head><title>Contact us | Acme</title></head>",
        explanation: "Each page gets a unique, descriptive title.",
    }],
    cant_fix: None,
};

static TABLE_HEADER: FixGuide = FixGuide {
    id: RuleId::TableHeader,
    title: "Add Headers to Data Tables",
    severity: Impact::Serious,
    time_to_fix: "10-15 minutes",
    difficulty: Difficulty::Medium,
    summary: "Data tables need header cells so each value can be tied to its column or row.",
    why_it_matters: "Screen readers announce header cells with each data cell. Without them a size \
        chart is just a stream of unrelated numbers.",
    steps: &[
        FixStep {
            location: "Tables in page content",
            instructions: &[
                "Switch the editor to HTML view",
                "Change the cells in the first row from <td> to <th>",
                "Add scope=\"col\" to column headers, or scope=\"row\" to row headers",
            ],
            tip: Some("Tables used only for layout should get role=\"presentation\" instead."),
        },
    ],
    examples: &[FixExample {
        before: "<tr><td>Size</td><td>Chest</td></tr>",
        after: "<tr><th scope=\"col\">Size</th><th scope=\"col\">Chest</th></tr>",
        explanation: "Header cells label every value in their column.",
    }],
    cant_fix: Some("Tables generated by plugins need to be fixed by the plugin author."),
};
