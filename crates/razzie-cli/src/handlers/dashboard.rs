use anyhow::{Context, Result};
use razzie_api::ApiClient;
use tracing::debug;

use crate::args::OutputFormat;
use crate::views;
use crate::views::dashboard::truncate_top_studios;

/// Fetch the three summary statistics concurrently and render them.
///
/// The join fails fast: if any one query rejects, nothing is rendered.
pub async fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    debug!(base_url = client.base_url(), "fetching dashboard statistics");

    let (years, studios, intervals) = tokio::try_join!(
        client.years_with_multiple_winners(),
        client.studios_with_win_count(),
        client.producer_win_intervals(),
    )
    .context("failed to load dashboard statistics")?;

    let top_studios = truncate_top_studios(studios);

    if format.is_json() {
        let payload = serde_json::json!({
            "yearsWithMultipleWinners": years,
            "studiosWithWinCount": top_studios,
            "maxMinWinIntervalForProducers": intervals,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        views::dashboard::print_dashboard(&years, &top_studios, &intervals);
    }

    Ok(())
}
