use std::sync::mpsc::Sender;

use razzie_api::{ApiClient, MovieQuery};
use tokio::runtime::Handle;
use tracing::debug;

use super::app_event::AppEvent;

// A send can only fail once the draw loop is gone; the in-flight result is
// simply discarded, which is the documented unmount behavior.

pub(crate) fn spawn_dashboard(handle: &Handle, client: ApiClient, tx: Sender<AppEvent>, request: u64) {
    debug!(request, "issuing dashboard queries");
    handle.spawn(async move {
        let result = tokio::try_join!(
            client.years_with_multiple_winners(),
            client.studios_with_win_count(),
            client.producer_win_intervals(),
        );
        let _ = tx.send(AppEvent::Dashboard { request, result });
    });
}

pub(crate) fn spawn_movies(
    handle: &Handle,
    client: ApiClient,
    tx: Sender<AppEvent>,
    request: u64,
    page_size: u32,
) {
    debug!(request, page_size, "issuing movie page query");
    handle.spawn(async move {
        let query = MovieQuery::page(0, page_size);
        let result = client.movies(&query).await;
        let _ = tx.send(AppEvent::Movies { request, result });
    });
}

pub(crate) fn spawn_winners(
    handle: &Handle,
    client: ApiClient,
    tx: Sender<AppEvent>,
    request: u64,
    year: i32,
) {
    debug!(request, year, "issuing winners-by-year query");
    handle.spawn(async move {
        let result = client.winners_by_year(year).await;
        let _ = tx.send(AppEvent::Winners { request, result });
    });
}
