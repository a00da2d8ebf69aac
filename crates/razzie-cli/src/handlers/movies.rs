use anyhow::{Context, Result};
use razzie_api::{ApiClient, MovieQuery};
use tracing::debug;

use crate::args::OutputFormat;
use crate::views;

pub async fn handle(client: &ApiClient, query: &MovieQuery, format: OutputFormat) -> Result<()> {
    debug!(
        page = query.page,
        size = query.size,
        year = query.year,
        winner = query.winner,
        "fetching movie page"
    );

    let page = client
        .movies(query)
        .await
        .context("failed to load movie list")?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        views::movies::print_movie_page(&page);
    }

    Ok(())
}
