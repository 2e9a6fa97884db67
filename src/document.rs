// SPDX-License-Identifier: PMPL-1.0-or-later
//! Parsed document adapter.
//!
//! Wraps a `scraper` tree behind the handful of queries the checks need:
//! selector matching, attribute reads, text extraction, and ancestor lookups.
//! Nothing here fails. Invalid selectors match nothing, and blank attribute
//! values read as unset.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// An immutable, queryable HTML document
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse markup. html5ever recovers from any input, so this never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Elements matching a CSS selector, in document order
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(e) => {
                debug!("Ignoring invalid selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    /// The root `<html>` element
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Language declared on the root element
    pub fn language(&self) -> Option<&str> {
        attr(self.root(), "lang")
    }

    /// Trimmed text of the first non-empty `<title>`, ignoring inline SVG titles
    pub fn title(&self) -> Option<String> {
        self.select("title")
            .into_iter()
            .filter(|el| !has_ancestor(*el, "svg"))
            .map(text)
            .find(|t| !t.is_empty())
    }
}

/// Attribute value, treating blank values as unset
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .filter(|v| !v.trim().is_empty())
}

/// Whether the attribute is present at all, even if empty
pub fn has_attr(element: ElementRef<'_>, name: &str) -> bool {
    element.value().attr(name).is_some()
}

/// Concatenated, trimmed text content of an element
pub fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Lowercase tag name
pub fn tag(element: ElementRef<'_>) -> String {
    element.value().name().to_ascii_lowercase()
}

/// Whether any ancestor element has the given tag name
pub fn has_ancestor(element: ElementRef<'_>, tag_name: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name().eq_ignore_ascii_case(tag_name))
}

/// Descendant elements of `element` matching a selector
pub fn select_within<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => element.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Outer markup of an element, cut to at most `limit` characters
pub fn snippet(element: ElementRef<'_>, limit: usize) -> String {
    element.html().chars().take(limit).collect()
}

/// Positional locator for the `index`-th (0-based) match of a check
pub fn locator(element: ElementRef<'_>, index: usize) -> String {
    format!("{}:nth-of-type({})", tag(element), index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = Document::parse("<p>hello</p>");
        assert!(doc.select("p[").is_empty());
        assert_eq!(doc.select("p").len(), 1);
    }

    #[test]
    fn test_blank_attributes_read_as_unset() {
        let doc = Document::parse(r#"<img alt="" title="  "><img alt="x">"#);
        let imgs = doc.select("img");
        assert!(has_attr(imgs[0], "alt"));
        assert_eq!(attr(imgs[0], "alt"), None);
        assert_eq!(attr(imgs[0], "title"), None);
        assert_eq!(attr(imgs[1], "alt"), Some("x"));
    }

    #[test]
    fn test_title_skips_svg_titles() {
        let doc = Document::parse(
            "<html><head></head><body><svg><title>Icon</title></svg></body></html>",
        );
        assert_eq!(doc.title(), None);

        let doc = Document::parse("<html><head><title> Shop </title></head></html>");
        assert_eq!(doc.title().as_deref(), Some("Shop"));
    }

    #[test]
    fn test_title_uses_first_non_empty() {
        let doc = Document::parse(
            "<html><head><title></title><title> Real </title></head></html>",
        );
        assert_eq!(doc.title().as_deref(), Some("Real"));
    }

    #[test]
    fn test_snippet_keeps_source_attribute_order() {
        let markup = r#"<input type="email" placeholder="x" name="e">"#;
        for _ in 0..5 {
            let doc = Document::parse(markup);
            assert_eq!(snippet(doc.select("input")[0], 200), markup);
        }
    }

    #[test]
    fn test_language() {
        assert_eq!(Document::parse(r#"<html lang="en"></html>"#).language(), Some("en"));
        assert_eq!(Document::parse("<html></html>").language(), None);
        assert_eq!(Document::parse("no markup at all").language(), None);
    }

    #[test]
    fn test_ancestor_lookup() {
        let doc = Document::parse("<label>Name <input id=n></label><input id=m>");
        let inputs = doc.select("input");
        assert!(has_ancestor(inputs[0], "label"));
        assert!(!has_ancestor(inputs[1], "label"));
    }

    #[test]
    fn test_snippet_is_char_safe() {
        let doc = Document::parse("<p>héllo wörld</p>");
        let p = doc.select("p")[0];
        assert_eq!(snippet(p, 5), "<p>hé");
        assert_eq!(locator(p, 0), "p:nth-of-type(1)");
    }
}
