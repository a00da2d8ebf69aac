use razzie_types::{Movie, ProducerIntervals, StudioWinCount, YearWinnerCount};
use tracing::{debug, warn};

use super::app_event::AppEvent;
use crate::views::dashboard::truncate_top_studios;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Dashboard,
    Movies,
}

impl View {
    pub fn toggle(self) -> Self {
        match self {
            View::Dashboard => View::Movies,
            View::Movies => View::Dashboard,
        }
    }
}

/// Per-view lifecycle: `Loading -> {Ready, Error}`. A `Ready` view may be
/// re-rendered with narrowed data, but never returns to `Loading` — there is
/// no refresh control.
#[derive(Debug)]
pub(crate) enum ViewState<T> {
    Loading,
    Ready(T),
    Error(String),
}

/// The dashboard's mount-time payload, joined from the three summary
/// queries. Studio ranking is server-provided; only the head is kept.
#[derive(Debug)]
pub(crate) struct DashboardData {
    pub years: Vec<YearWinnerCount>,
    pub top_studios: Vec<StudioWinCount>,
    pub intervals: ProducerIntervals,
}

impl DashboardData {
    pub fn new(
        years: Vec<YearWinnerCount>,
        studios: Vec<StudioWinCount>,
        intervals: ProducerIntervals,
    ) -> Self {
        Self {
            years,
            top_studios: truncate_top_studios(studios),
            intervals,
        }
    }
}

/// On-demand winners-by-year lookup, independent of the dashboard load.
#[derive(Debug, Default)]
pub(crate) struct WinnersLookup {
    pub input: String,
    pub searched_year: Option<i32>,
    pub winners: Vec<Movie>,
}

/// The fetched movie page plus the currently-displayed narrowed set.
/// Filtering never touches the network.
#[derive(Debug)]
pub(crate) struct MovieBrowser {
    all: Vec<Movie>,
    pub shown: Vec<Movie>,
    pub active_filter: Option<i32>,
}

impl MovieBrowser {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            shown: movies.clone(),
            all: movies,
            active_filter: None,
        }
    }

    pub fn filter_by_year(&mut self, year: i32) {
        self.shown = self
            .all
            .iter()
            .filter(|movie| movie.year == year)
            .cloned()
            .collect();
        self.active_filter = Some(year);
    }

    pub fn clear_filter(&mut self) {
        self.shown = self.all.clone();
        self.active_filter = None;
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }
}

pub(crate) struct AppState {
    pub view: View,
    pub dashboard: ViewState<DashboardData>,
    pub movies: ViewState<MovieBrowser>,
    pub lookup: WinnersLookup,
    pub filter_input: String,
    pub should_quit: bool,

    // Request generations: a response carrying a superseded generation came
    // from a fetch this state no longer waits for, and is discarded.
    dashboard_request: u64,
    movies_request: u64,
    winners_request: u64,
    last_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::Dashboard,
            dashboard: ViewState::Loading,
            movies: ViewState::Loading,
            lookup: WinnersLookup::default(),
            filter_input: String::new(),
            should_quit: false,
            dashboard_request: 0,
            movies_request: 0,
            winners_request: 0,
            last_request: 0,
        }
    }

    fn next_request(&mut self) -> u64 {
        self.last_request += 1;
        self.last_request
    }

    pub fn begin_dashboard_request(&mut self) -> u64 {
        self.dashboard_request = self.next_request();
        self.dashboard_request
    }

    pub fn begin_movies_request(&mut self) -> u64 {
        self.movies_request = self.next_request();
        self.movies_request
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggle();
    }

    /// Append a digit to the active view's year input. Anything else is
    /// ignored, so plain keys stay free for navigation.
    pub fn push_input(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        self.active_input_mut().push(c);
    }

    pub fn pop_input(&mut self) {
        self.active_input_mut().pop();
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.view {
            View::Dashboard => &mut self.lookup.input,
            View::Movies => &mut self.filter_input,
        }
    }

    /// Submit the winners-by-year input. Returns the fetch to issue, if
    /// any: empty input clears the result list, non-integer input is a
    /// no-op that leaves previous results untouched.
    pub fn submit_lookup(&mut self) -> Option<(u64, i32)> {
        if self.lookup.input.is_empty() {
            self.lookup.winners.clear();
            self.lookup.searched_year = None;
            return None;
        }

        let Ok(year) = self.lookup.input.parse::<i32>() else {
            debug!(input = %self.lookup.input, "ignoring non-integer year input");
            return None;
        };

        self.lookup.searched_year = Some(year);
        self.winners_request = self.next_request();
        Some((self.winners_request, year))
    }

    /// Narrow (or restore) the displayed movie set from already-fetched
    /// data. Never issues a network call.
    pub fn submit_filter(&mut self) {
        let ViewState::Ready(browser) = &mut self.movies else {
            return;
        };

        if self.filter_input.is_empty() {
            browser.clear_filter();
            return;
        }

        match self.filter_input.parse::<i32>() {
            Ok(year) => browser.filter_by_year(year),
            Err(_) => debug!(input = %self.filter_input, "ignoring non-integer filter input"),
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Dashboard { request, result } => {
                if request != self.dashboard_request {
                    debug!(request, "discarding stale dashboard response");
                    return;
                }
                self.dashboard = match result {
                    Ok((years, studios, intervals)) => {
                        ViewState::Ready(DashboardData::new(years, studios, intervals))
                    }
                    Err(e) => ViewState::Error(e.to_string()),
                };
            }

            AppEvent::Movies { request, result } => {
                if request != self.movies_request {
                    debug!(request, "discarding stale movies response");
                    return;
                }
                self.movies = match result {
                    Ok(page) => ViewState::Ready(MovieBrowser::new(page.content)),
                    Err(e) => ViewState::Error(e.to_string()),
                };
            }

            AppEvent::Winners { request, result } => {
                if request != self.winners_request {
                    debug!(request, "discarding stale winners response");
                    return;
                }
                match result {
                    Ok(winners) => self.lookup.winners = winners,
                    Err(e) => {
                        // Degrade to an empty result instead of erroring the view.
                        warn!(error = %e, "winners lookup failed");
                        self.lookup.winners.clear();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use razzie_api::ApiError;
    use razzie_types::Page;

    fn movie(id: i64, year: i32, title: &str) -> Movie {
        Movie {
            id,
            year,
            title: title.to_string(),
            studios: Vec::new(),
            producers: Vec::new(),
            winner: true,
        }
    }

    fn studio(name: &str, wins: u32) -> StudioWinCount {
        StudioWinCount {
            name: name.to_string(),
            win_count: wins,
        }
    }

    fn loaded_movies(state: &mut AppState, movies: Vec<Movie>) {
        let request = state.begin_movies_request();
        state.apply(AppEvent::Movies {
            request,
            result: Ok(Page {
                content: movies,
                ..Page::default()
            }),
        });
    }

    #[test]
    fn test_year_filter_keeps_exact_matches_in_order() {
        let mut state = AppState::new();
        loaded_movies(
            &mut state,
            vec![
                movie(1, 1980, "first"),
                movie(2, 1990, "second"),
                movie(3, 1990, "third"),
                movie(4, 2005, "fourth"),
            ],
        );

        state.filter_input = "1990".to_string();
        state.submit_filter();

        let ViewState::Ready(browser) = &state.movies else {
            panic!("movies view should be ready");
        };
        assert_eq!(browser.shown.len(), 2);
        assert_eq!(browser.shown[0].title, "second");
        assert_eq!(browser.shown[1].title, "third");
        assert_eq!(browser.total(), 4);
    }

    #[test]
    fn test_clearing_filter_restores_full_set() {
        let mut state = AppState::new();
        loaded_movies(&mut state, vec![movie(1, 1980, "a"), movie(2, 1990, "b")]);

        state.filter_input = "1990".to_string();
        state.submit_filter();
        state.filter_input.clear();
        state.submit_filter();

        let ViewState::Ready(browser) = &state.movies else {
            panic!("movies view should be ready");
        };
        assert_eq!(browser.shown.len(), 2);
        assert!(browser.active_filter.is_none());
    }

    #[test]
    fn test_non_integer_filter_is_a_noop() {
        let mut state = AppState::new();
        loaded_movies(&mut state, vec![movie(1, 1990, "a")]);

        state.filter_input = "1990".to_string();
        state.submit_filter();
        // Digits only, but too large for i32: the parse itself fails.
        state.filter_input = "99999999999999999999".to_string();
        state.submit_filter();

        let ViewState::Ready(browser) = &state.movies else {
            panic!("movies view should be ready");
        };
        assert_eq!(browser.active_filter, Some(1990));
        assert_eq!(browser.shown.len(), 1);
    }

    #[test]
    fn test_non_integer_lookup_issues_no_fetch_and_keeps_results() {
        let mut state = AppState::new();
        state.lookup.winners = vec![movie(1, 1985, "kept")];
        state.lookup.input = "99999999999999999999".to_string();

        assert!(state.submit_lookup().is_none());
        assert_eq!(state.lookup.winners.len(), 1);
        assert_eq!(state.lookup.winners[0].title, "kept");
    }

    #[test]
    fn test_empty_lookup_input_clears_results_without_fetch() {
        let mut state = AppState::new();
        state.lookup.winners = vec![movie(1, 1985, "stale")];
        state.lookup.searched_year = Some(1985);

        assert!(state.submit_lookup().is_none());
        assert!(state.lookup.winners.is_empty());
        assert!(state.lookup.searched_year.is_none());
    }

    #[test]
    fn test_lookup_failure_clears_results() {
        let mut state = AppState::new();
        state.lookup.winners = vec![movie(1, 1985, "stale")];
        state.lookup.input = "1990".to_string();

        let (request, _year) = state.submit_lookup().unwrap();
        state.apply(AppEvent::Winners {
            request,
            result: Err(ApiError::Api {
                status_code: 500,
                message: "boom".to_string(),
            }),
        });

        assert!(state.lookup.winners.is_empty());
    }

    #[test]
    fn test_dashboard_join_failure_leaves_no_partial_data() {
        let mut state = AppState::new();
        let request = state.begin_dashboard_request();

        // try_join! fails fast: one rejection means the whole payload is Err.
        state.apply(AppEvent::Dashboard {
            request,
            result: Err(ApiError::Api {
                status_code: 502,
                message: "bad gateway".to_string(),
            }),
        });

        assert!(matches!(state.dashboard, ViewState::Error(_)));
    }

    #[test]
    fn test_top_studios_truncated_to_three() {
        let studios: Vec<StudioWinCount> =
            (0..10).map(|i| studio(&format!("S{}", i), 10 - i)).collect();

        let data = DashboardData::new(Vec::new(), studios, ProducerIntervals::default());
        assert_eq!(data.top_studios.len(), 3);
        assert_eq!(data.top_studios[0].name, "S0");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new();
        let stale = state.begin_dashboard_request();
        let _current = state.begin_dashboard_request();

        state.apply(AppEvent::Dashboard {
            request: stale,
            result: Ok((Vec::new(), Vec::new(), ProducerIntervals::default())),
        });

        assert!(matches!(state.dashboard, ViewState::Loading));
    }

    #[test]
    fn test_digit_input_routed_to_active_view() {
        let mut state = AppState::new();
        state.push_input('1');
        state.push_input('9');
        state.push_input('x');
        assert_eq!(state.lookup.input, "19");

        state.toggle_view();
        state.push_input('2');
        assert_eq!(state.filter_input, "2");
        assert_eq!(state.lookup.input, "19");

        state.pop_input();
        assert!(state.filter_input.is_empty());
    }
}
