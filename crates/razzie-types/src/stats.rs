use serde::{Deserialize, Serialize};

/// A year in which more than one movie won the award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWinnerCount {
    pub year: i32,
    pub winner_count: u32,
}

/// Studio ranked by total win count (ranking order is server-provided).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioWinCount {
    pub name: String,
    pub win_count: u32,
}

/// Gap between two consecutive wins by the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// Gap in years between the two wins.
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// The two interval extremes: producers with the shortest and the longest
/// gap between consecutive wins. Either set may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerIntervals {
    #[serde(default)]
    pub min: Vec<ProducerInterval>,
    #[serde(default)]
    pub max: Vec<ProducerInterval>,
}

/// Envelope for `GET /yearsWithMultipleWinners`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearsResponse {
    #[serde(default)]
    pub years: Vec<YearWinnerCount>,
}

/// Envelope for `GET /studiosWithWinCount`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudiosResponse {
    #[serde(default)]
    pub studios: Vec<StudioWinCount>,
}

/// Aggregated payload from `GET /dashboard-summary`, bundling the three
/// dashboard statistics into one round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub years_with_multiple_winners: Vec<YearWinnerCount>,
    #[serde(default)]
    pub studios_with_win_count: Vec<StudioWinCount>,
    #[serde(default)]
    pub max_min_win_interval_for_producers: ProducerIntervals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_intervals_deserialize() {
        let json = r#"{
            "min": [
                {"producer": "Joel Silver", "interval": 1, "previousWin": 1990, "followingWin": 1991}
            ],
            "max": [
                {"producer": "Matthew Vaughn", "interval": 13, "previousWin": 2002, "followingWin": 2015}
            ]
        }"#;

        let intervals: ProducerIntervals = serde_json::from_str(json).unwrap();
        assert_eq!(intervals.min[0].previous_win, 1990);
        assert_eq!(intervals.max[0].interval, 13);
    }

    #[test]
    fn test_missing_interval_sets_default_to_empty() {
        let intervals: ProducerIntervals = serde_json::from_str("{}").unwrap();
        assert!(intervals.min.is_empty());
        assert!(intervals.max.is_empty());
    }

    #[test]
    fn test_dashboard_summary_tolerates_partial_payload() {
        let json = r#"{"yearsWithMultipleWinners": [{"year": 1986, "winnerCount": 2}]}"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.years_with_multiple_winners.len(), 1);
        assert!(summary.studios_with_win_count.is_empty());
        assert!(summary.max_min_win_interval_for_producers.min.is_empty());
    }
}
