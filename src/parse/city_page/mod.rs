//! The per-city restaurant listing page.

mod deal;
mod restaurant_card;

pub use deal::{Deal, DealFilter, DealKind};
pub use restaurant_card::RestaurantEntry;

use scraper::ElementRef;
use url::Url;

use crate::static_selector;

/// Attribute NeoTaste uses to name the semantic role of an element.
/// Class names on the site are build artifacts and churn between deploys;
/// this marker is the only reasonably stable structural anchor.
pub(crate) const MARKER_ATTR: &str = "data-sentry-component";

/// All restaurant entries on one parsed city page, in document order.
///
/// Cards lacking a usable name or link are skipped with a debug log entry,
/// never a failure. With a filter, deals of other kinds are removed and
/// entries left without any matching deal are dropped entirely; without
/// one, an entry with an empty deal list is kept.
pub fn restaurant_entries(
    page: ElementRef,
    base: &Url,
    filter: Option<DealFilter>,
) -> Vec<RestaurantEntry> {
    static_selector!(CARD_SELECTOR <- r#"a[href*="/restaurants/"]"#);

    let mut entries = Vec::new();
    for card in page.select(&CARD_SELECTOR) {
        let mut entry = match RestaurantEntry::from_html_element(card, base) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping restaurant card: {e}");
                continue;
            }
        };
        if let Some(filter) = filter {
            entry.deals.retain(|deal| filter.keeps(deal.kind));
            if entry.deals.is_empty() {
                continue;
            }
        }
        entries.push(entry);
    }
    entries
}
