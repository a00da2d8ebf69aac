use razzie_api::ApiError;
use razzie_types::{Movie, Page, ProducerIntervals, StudioWinCount, YearWinnerCount};

/// Joined payload of the three mount-time dashboard queries.
pub(crate) type DashboardPayload = (
    Vec<YearWinnerCount>,
    Vec<StudioWinCount>,
    ProducerIntervals,
);

/// Fetch results delivered from the runtime to the draw loop. Every event
/// carries the request generation it answers; the state discards stale ones.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Dashboard {
        request: u64,
        result: Result<DashboardPayload, ApiError>,
    },
    Movies {
        request: u64,
        result: Result<Page<Movie>, ApiError>,
    },
    Winners {
        request: u64,
        result: Result<Vec<Movie>, ApiError>,
    },
}
