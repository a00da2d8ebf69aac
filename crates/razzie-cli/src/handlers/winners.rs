use anyhow::{Context, Result};
use razzie_api::ApiClient;
use tracing::debug;

use crate::args::OutputFormat;
use crate::views;

pub async fn handle(client: &ApiClient, year: i32, format: OutputFormat) -> Result<()> {
    debug!(year, "fetching winners by year");

    let winners = client
        .winners_by_year(year)
        .await
        .with_context(|| format!("failed to load winners for {}", year))?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&winners)?);
    } else {
        views::movies::print_winners(year, &winners);
    }

    Ok(())
}
