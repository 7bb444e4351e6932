use std::fmt::Write;

use crate::lang::Lang;
use crate::scrape::CityResults;

use super::capitalized;

/// Print the deals grouped by city to stdout.
pub fn print_deals(results: &CityResults, lang: Lang) {
    print!("{}", render(results, lang));
}

fn render(results: &CityResults, lang: Lang) -> String {
    let strings = lang.strings();
    let mut out = String::new();
    for (city, entries) in results.cities() {
        // writing to a String cannot fail
        let _ = writeln!(out, "\n{} {}:", strings.deals_in, capitalized(city));
        for entry in entries {
            let _ = writeln!(out, "  {}", entry.restaurant);
            for deal in &entry.deals {
                let _ = writeln!(out, "   - {}", deal.label);
            }
            let _ = writeln!(out, "   → {}", entry.link);
        }
    }
    out
}
