use reqwest::Client;
use serde::de::DeserializeOwned;

use razzie_types::{
    DashboardSummary, Movie, Page, ProducerIntervals, StudioWinCount, StudiosResponse,
    YearWinnerCount, YearsResponse,
};

use crate::query::MovieQuery;
use crate::{ApiError, Result};

/// Canonical base URL when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/movies";

/// Thin typed wrapper over the read-only awards API.
///
/// Cheap to clone: `reqwest::Client` is an `Arc` internally, so every view
/// and background fetch can hold its own handle. The client performs no
/// retries and configures no timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client with a caller-supplied `reqwest::Client`.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, url: String, query: &[(&str, String)]) -> Result<T> {
        let response = self.http.get(&url).query(query).send().await?;
        handle_response(response).await
    }

    /// Years in which more than one movie won.
    pub async fn years_with_multiple_winners(&self) -> Result<Vec<YearWinnerCount>> {
        let response: YearsResponse = self.get(self.url("/yearsWithMultipleWinners"), &[]).await?;
        Ok(response.years)
    }

    /// Studios ranked by total win count (server-provided order).
    pub async fn studios_with_win_count(&self) -> Result<Vec<StudioWinCount>> {
        let response: StudiosResponse = self.get(self.url("/studiosWithWinCount"), &[]).await?;
        Ok(response.studios)
    }

    /// Producers with the shortest and longest gap between consecutive wins.
    pub async fn producer_win_intervals(&self) -> Result<ProducerIntervals> {
        self.get(self.url("/maxMinWinIntervalForProducers"), &[])
            .await
    }

    /// All winning movies of one year.
    pub async fn winners_by_year(&self, year: i32) -> Result<Vec<Movie>> {
        self.get(
            self.url("/winnersByYear"),
            &[("year", year.to_string())],
        )
        .await
    }

    /// One page of the movie listing, optionally server-filtered.
    pub async fn movies(&self, query: &MovieQuery) -> Result<Page<Movie>> {
        self.get(self.url(""), &query.query_pairs()).await
    }

    /// The aggregated dashboard payload (three statistics, one round trip).
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.get(self.url("/dashboard-summary"), &[]).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Api {
            status_code: status.as_u16(),
            message: body,
        });
    }
    let deserializer = &mut serde_json::Deserializer::from_str(&body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| ApiError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
