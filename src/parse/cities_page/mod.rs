//! The cities listing page: every city with its own restaurant listing.

mod city_meta;

pub use city_meta::CityMeta;

use scraper::ElementRef;

use crate::static_selector;

/// All cities on one parsed listing page, in document order. A page
/// without the cities container yields an empty list; anchors missing a
/// name or slug are skipped with a debug log entry.
pub fn cities(page: ElementRef) -> Vec<CityMeta> {
    static_selector!(CITY_LINK_SELECTOR <- r#"[data-sentry-component="CitiesList"] a"#);

    let mut cities = Vec::new();
    for anchor in page.select(&CITY_LINK_SELECTOR) {
        match CityMeta::from_html_element(anchor) {
            Ok(city) => cities.push(city),
            Err(e) => log::debug!("skipping city link: {e}"),
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cities_from_listing_page() {
        let html = fs::read_to_string("./src/parse/html_examples/cities_page/cities_page.html")
            .expect("fixture should exist");
        let document = scraper::Html::parse_document(&html);
        let cities = cities(document.root_element());

        // The anchor without a highlighted name span is skipped.
        let slugs: Vec<&str> = cities.iter().map(CityMeta::slug).collect();
        assert_eq!(slugs, vec!["berlin", "hamburg", "wien"]);
        assert_eq!(cities[2].name(), "Wien");
    }

    #[test]
    fn test_page_without_cities_container() {
        let document =
            scraper::Html::parse_document("<html><body><a href=\"/de\">Start</a></body></html>");
        assert!(cities(document.root_element()).is_empty());
    }
}
