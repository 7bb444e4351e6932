use std::fmt::Write;
use std::path::Path;

use tokio::fs;

use crate::fetch;
use crate::lang::Lang;
use crate::scrape::CityResults;

use super::capitalized;

/// Write the scraped deals as a standalone html page, grouped by city.
pub async fn output_html(
    results: &CityResults,
    lang: Lang,
    path: impl AsRef<Path>,
) -> crate::Result<()> {
    fs::write(path.as_ref(), render(results, lang))
        .await
        .map_err(From::from)
}

fn render(results: &CityResults, lang: Lang) -> String {
    let strings = lang.strings();
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write!(
        out,
        "<!DOCTYPE html>\n\
         <html lang=\"{}\">\n\
         <head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n\
         <body>\n<h1>{}</h1>\n",
        lang.code(),
        escape(strings.deals_title),
        escape(strings.deals_title),
    );
    if results.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", escape(strings.no_deals_found));
    }
    for (city, entries) in results.cities() {
        let _ = writeln!(out, "<section>\n<h2>{}</h2>", escape(&capitalized(city)));
        let _ = writeln!(
            out,
            "<p><a href=\"{}\">{}</a></p>",
            fetch::city_url(city, lang),
            escape(strings.city_page),
        );
        if entries.is_empty() {
            let _ = writeln!(out, "<p>{}</p>", escape(strings.no_deals_found));
        } else {
            let _ = writeln!(out, "<ul>");
            for entry in entries {
                let _ = writeln!(out, "<li>\n<h3>{}</h3>", escape(&entry.restaurant));
                if !entry.deals.is_empty() {
                    let _ = writeln!(out, "<ul>");
                    for deal in &entry.deals {
                        let _ = writeln!(out, "<li>{}</li>", escape(&deal.label));
                    }
                    let _ = writeln!(out, "</ul>");
                }
                let _ = writeln!(
                    out,
                    "<a href=\"{}\" title=\"{}\">{}</a>\n</li>",
                    escape(&entry.link),
                    escape(strings.restaurant_link_text),
                    escape(strings.view_restaurant),
                );
            }
            let _ = writeln!(out, "</ul>");
        }
        let _ = writeln!(out, "</section>");
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Escape text for both element content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{Deal, DealKind, RestaurantEntry};

    fn sample_results() -> CityResults {
        let mut results = CityResults::default();
        results.cities.insert(
            "berlin".to_string(),
            vec![RestaurantEntry {
                restaurant: "Fisch & Co".to_string(),
                deals: vec![Deal {
                    label: "⚡ 2 für 1 Pizza".to_string(),
                    kind: DealKind::Flash,
                }],
                link: "https://neotaste.com/de/restaurants/berlin/fisch-co".to_string(),
            }],
        );
        results
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("Café & Bar <Neu>"), "Café &amp; Bar &lt;Neu&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn renders_a_localized_document() {
        let html = render(&sample_results(), Lang::De);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
        assert!(html.contains("<title>NeoTaste Deals</title>"));
        assert!(html.contains("<h2>Berlin</h2>"));
        assert!(html.contains(r#"<a href="https://neotaste.com/de/restaurants/berlin">Seite der Stadt</a>"#));
        assert!(html.contains("<li>⚡ 2 für 1 Pizza</li>"));
        assert!(html.contains(r#"title="Mehr Informationen/Details zum Angebot">Restaurant ansehen</a>"#));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn restaurant_names_are_escaped() {
        let html = render(&sample_results(), Lang::De);
        assert!(html.contains("<h3>Fisch &amp; Co</h3>"));
    }

    #[test]
    fn english_strings_follow_the_lang_flag() {
        let html = render(&sample_results(), Lang::En);
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains(">City Page</a>"));
        assert!(html.contains(">View Restaurant</a>"));
        assert!(html.contains("https://neotaste.com/en/restaurants/berlin"));
    }

    #[test]
    fn empty_results_say_so() {
        let html = render(&CityResults::default(), Lang::De);
        assert!(html.contains("<p>Keine Deals gefunden.</p>"));
        assert!(!html.contains("<section>"));
    }

    #[test]
    fn city_without_entries_gets_the_empty_note() {
        let mut results = CityResults::default();
        results.cities.insert("aachen".to_string(), Vec::new());
        let html = render(&results, Lang::En);
        assert!(html.contains("<h2>Aachen</h2>"));
        assert!(html.contains("<p>No deals found.</p>"));
    }

    #[tokio::test]
    async fn writes_the_rendered_page_to_disk() {
        let path = std::env::temp_dir().join("neotaste_deals_html_output_test.html");
        output_html(&sample_results(), Lang::De, &path).await.unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html, render(&sample_results(), Lang::De));
        std::fs::remove_file(&path).ok();
    }
}
