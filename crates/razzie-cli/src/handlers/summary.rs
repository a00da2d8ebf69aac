use anyhow::{Context, Result};
use razzie_api::ApiClient;
use tracing::debug;

use crate::args::OutputFormat;
use crate::views;
use crate::views::dashboard::truncate_top_studios;

/// Fetch the aggregated dashboard-summary payload (one round trip instead
/// of three) and render the same tables as `dashboard`.
pub async fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    debug!(base_url = client.base_url(), "fetching dashboard summary");

    let summary = client
        .dashboard_summary()
        .await
        .context("failed to load dashboard summary")?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let top_studios = truncate_top_studios(summary.studios_with_win_count);
    views::dashboard::print_dashboard(
        &summary.years_with_multiple_winners,
        &top_studios,
        &summary.max_min_win_interval_for_producers,
    );

    Ok(())
}
