#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod error;
mod fetch;
mod lang;
mod output;
mod parse;
mod scrape;

use clap::{ArgGroup, Parser};

use crate::fetch::make_client;
use crate::lang::Lang;
use crate::parse::DealFilter;

pub use error::{Error, Result};

static JSON_PATH: &str = "output.json";
static HTML_PATH: &str = "output.html";

/// Scrape restaurant deals from NeoTaste's city pages.
#[derive(Debug, Parser)]
#[command(name = "neotaste-deals", about = "NeoTaste CLI Tool")]
#[command(group = ArgGroup::new("target").required(true))]
struct Args {
    /// City to scrape (e.g. 'berlin')
    #[arg(short, long, group = "target")]
    city: Option<String>,

    /// Scrape all available cities
    #[arg(short, long, group = "target")]
    all: bool,

    /// Keep only event deals (🌟)
    #[arg(short, long, group = "filter")]
    events: bool,

    /// Keep only flash deals (⚡)
    #[arg(long, group = "filter")]
    flash: bool,

    /// Keep any recognized deal, flash or event
    #[arg(long, group = "filter")]
    special: bool,

    /// Also write the deals to output.json
    #[arg(short, long)]
    json: bool,

    /// Also write the deals to output.html
    #[arg(short = 'H', long)]
    html: bool,

    /// Language of the scraped pages
    #[arg(short, long, value_enum, default_value_t = Lang::De)]
    lang: Lang,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let filter = if args.events {
        Some(DealFilter::Events)
    } else if args.flash {
        Some(DealFilter::Flash)
    } else if args.special {
        Some(DealFilter::Special)
    } else {
        None
    };
    let client = make_client();
    let fetch = |url| fetch::page(&client, url);

    let slugs: Vec<String> = if args.all {
        log::info!("Fetching deals for all cities...");
        let cities = scrape::discover_cities(&fetch, args.lang).await?;
        for city in &cities {
            log::debug!("Discovered city: {} ({})", city.name(), city.slug());
        }
        cities
            .into_iter()
            .map(|city| city.slug().to_owned())
            .collect()
    } else {
        // the "target" arg group guarantees a city was given
        args.city.into_iter().collect()
    };

    let results = scrape::scrape_cities(&fetch, &slugs, args.lang, filter).await;
    if !results.failures().is_empty() {
        log::warn!(
            "{} of {} cities could not be scraped",
            results.failures().len(),
            slugs.len()
        );
    }

    if results.is_empty() {
        println!("{}", args.lang.strings().no_deals_found);
        return Ok(());
    }

    output::print_deals(&results, args.lang);

    if args.json {
        log::info!("Outputting deals to {JSON_PATH}...");
        output::output_json(&results, JSON_PATH).await?;
    }
    if args.html {
        log::info!("Outputting deals to {HTML_PATH}...");
        output::output_html(&results, args.lang, HTML_PATH).await?;
    }
    Ok(())
}
