use std::time::Duration;

use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::lang::Lang;

/// Root of the public site; every scraped page lives under it.
pub static BASE_URL: &str = "https://neotaste.com";

static USER_AGENT: &str = concat!("neotaste-deals/", env!("CARGO_PKG_VERSION"));
static REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn base_url() -> Url {
    Url::parse(BASE_URL).expect("base url literal should parse")
}

/// `{BASE_URL}/{lang}/restaurants`, the page listing every city.
pub fn cities_url(lang: Lang) -> Url {
    let mut url = base_url();
    url.set_path(&format!("{}/restaurants", lang.code()));
    url
}

/// `{BASE_URL}/{lang}/restaurants/{slug}`, one city's restaurant list.
pub fn city_url(slug: &str, lang: Lang) -> Url {
    let mut url = base_url();
    url.set_path(&format!("{}/restaurants/{}", lang.code(), slug));
    url
}

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("client creation should succeed")
}

#[instrument(skip(client), fields(
    // `%` serializes the url with `Display`
    url = %url,
), level = Level::TRACE)]
pub async fn page(client: &reqwest::Client, url: Url) -> crate::Result<String> {
    let res = client.get(url).send().await?;
    let start = std::time::Instant::now();
    let text = res.text().await?;
    log::trace!("Got page body in\t{:?}", start.elapsed());
    Ok(text)
}
