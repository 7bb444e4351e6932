use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::parse::error::Result;
use crate::parse::text::element_text;
use crate::parse::Error;
use crate::static_selector;

use super::deal::Deal;

/// One restaurant and the deals advertised on its card, in card order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantEntry {
    pub restaurant: String,
    pub deals: Vec<Deal>,
    pub link: String,
}

impl RestaurantEntry {
    /// Assemble one entry from a restaurant card anchor. The anchor's own
    /// `href` is the outbound link, joined onto `base` when site-relative;
    /// the display name is the card's first `h4`.
    ///
    /// An error means the card lacks a usable name or link and should be
    /// skipped by the caller; it never aborts the surrounding page. A card
    /// with no badges is not an error and yields an empty deal list.
    pub fn from_html_element(card: ElementRef, base: &Url) -> Result<Self> {
        static_selector!(NAME_SELECTOR <- "h4");

        let href = card
            .attr("href")
            .filter(|href| !href.is_empty())
            .ok_or_else(|| Error::missing_field("restaurant card has no href"))?;
        let link = if href.starts_with("http") {
            Url::parse(href)
        } else {
            base.join(href)
        }
        .map_err(|_| Error::html_parse_error("restaurant link is not a valid url"))?;

        let name_element = card
            .select(&NAME_SELECTOR)
            .next()
            .ok_or_else(|| Error::missing_field("restaurant card has no name heading"))?;
        let restaurant = element_text(name_element);
        if restaurant.is_empty() {
            return Err(Error::missing_field("restaurant name is empty"));
        }

        let deals = deal_badges(card)
            .into_iter()
            .map(Deal::from_html_element)
            .collect();

        Ok(Self {
            restaurant,
            deals,
            link: link.into(),
        })
    }
}

/// Locate the deal badges on one restaurant card: descendants of the
/// card's deals container (exact marker match), themselves carrying a
/// marker that ends in the badge suffix. A card without the container, or
/// with a container holding no matching badges, simply has no deals.
fn deal_badges(card: ElementRef) -> Vec<ElementRef> {
    static_selector!(CONTAINER_SELECTOR <- r#"[data-sentry-component="RestaurantCardDeals"]"#);
    static_selector!(BADGE_SELECTOR <- r#"[data-sentry-component$="DealPreview"]"#);

    let Some(container) = card.select(&CONTAINER_SELECTOR).next() else {
        return Vec::new();
    };
    container.select(&BADGE_SELECTOR).collect()
}
