use std::collections::BTreeMap;
use std::future::Future;

use scraper::Html;
use url::Url;

use crate::fetch::{base_url, cities_url, city_url};
use crate::lang::Lang;
use crate::parse::{self, CityMeta, DealFilter, RestaurantEntry};

/// Outcome of scraping a set of cities. One city failing never aborts the
/// run; its error message is recorded in `failures` instead.
#[derive(Debug, Default)]
pub struct CityResults {
    pub(crate) cities: BTreeMap<String, Vec<RestaurantEntry>>,
    pub(crate) failures: BTreeMap<String, String>,
}

impl CityResults {
    pub fn cities(&self) -> &BTreeMap<String, Vec<RestaurantEntry>> {
        &self.cities
    }

    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failures
    }

    /// True when no city was scraped successfully.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Fetches one city's restaurant list and parses its deal entries.
///
/// `fetch` maps a url to the raw page body, so tests can substitute
/// canned documents for live requests.
pub async fn city_deals<F, Fut>(
    fetch: F,
    slug: &str,
    lang: Lang,
    filter: Option<DealFilter>,
) -> crate::Result<Vec<RestaurantEntry>>
where
    F: Fn(Url) -> Fut,
    Fut: Future<Output = crate::Result<String>>,
{
    let html = fetch(city_url(slug, lang)).await?;
    let document = Html::parse_document(&html);
    Ok(parse::restaurant_entries(
        document.root_element(),
        &base_url(),
        filter,
    ))
}

/// Fetches the city overview page and parses the city list out of it.
pub async fn discover_cities<F, Fut>(fetch: F, lang: Lang) -> crate::Result<Vec<CityMeta>>
where
    F: Fn(Url) -> Fut,
    Fut: Future<Output = crate::Result<String>>,
{
    let html = fetch(cities_url(lang)).await?;
    let document = Html::parse_document(&html);
    Ok(parse::cities(document.root_element()))
}

/// Scrapes every requested city in turn. Duplicate slugs are fetched once.
pub async fn scrape_cities<F, Fut>(
    fetch: F,
    slugs: &[String],
    lang: Lang,
    filter: Option<DealFilter>,
) -> CityResults
where
    F: Fn(Url) -> Fut,
    Fut: Future<Output = crate::Result<String>>,
{
    let mut results = CityResults::default();
    for slug in slugs {
        if results.cities.contains_key(slug) || results.failures.contains_key(slug) {
            log::debug!("Skipping duplicate city: {}", slug);
            continue;
        }
        log::info!("Fetching deals for city: {}...", slug);
        match city_deals(&fetch, slug, lang, filter).await {
            Ok(entries) => {
                results.cities.insert(slug.clone(), entries);
            }
            Err(e) => {
                log::warn!("Error fetching deals for {}: {}", slug, e);
                results.failures.insert(slug.clone(), e.to_string());
            }
        }
    }
    results
}
