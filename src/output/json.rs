use std::path::Path;

use tokio::fs;

use crate::scrape::CityResults;

/// Write the scraped deals as pretty-printed json, keyed by city slug.
pub async fn output_json(results: &CityResults, path: impl AsRef<Path>) -> crate::Result<()> {
    let f = fs::File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())
        .await?;
    let mut f = f.into_std().await;
    serde_json::to_writer_pretty(&mut f, results.cities()).map_err(From::from)
}
