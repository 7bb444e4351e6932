use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::ElementRef;

/// Collapse whitespace runs (including newlines) into single spaces.
pub fn collapse_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// The visible text of an element: every descendant text node flattened in
/// document order, whitespace collapsed, ends trimmed. An element holding
/// only icon markup yields an empty string.
pub fn element_text(element: ElementRef) -> String {
    let flattened: String = element.text().collect();
    collapse_whitespace(&flattened).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("2   für  1"), "2 für 1");
        assert_eq!(collapse_whitespace("a\n\t b"), "a b");
        assert_eq!(collapse_whitespace("plain"), "plain");
    }

    #[test]
    fn test_element_text_flattens_nested_nodes() {
        let html = scraper::Html::parse_fragment(
            "<div>\n  10% <span>auf</span>\n  <svg></svg> alles\n</div>",
        );
        assert_eq!(element_text(html.root_element()), "10% auf alles");
    }

    #[test]
    fn test_element_text_of_icon_only_element() {
        let html = scraper::Html::parse_fragment("<div><svg viewBox=\"0 0 24 24\"></svg></div>");
        assert_eq!(element_text(html.root_element()), "");
    }
}
