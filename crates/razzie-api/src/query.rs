/// Query parameters for the paginated movie listing.
///
/// `None` filters are omitted from the query string entirely. The server
/// distinguishes an absent parameter from an empty one, so `year=` must
/// never be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub year: Option<i32>,
    pub winner: Option<bool>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            year: None,
            winner: None,
        }
    }
}

impl MovieQuery {
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn winner(mut self, winner: Option<bool>) -> Self {
        self.winner = winner;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];

        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(winner) = self.winner {
            pairs.push(("winner", winner.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_filters_are_omitted_entirely() {
        let pairs = MovieQuery::page(2, 25).query_pairs();

        assert_eq!(
            pairs,
            vec![("page", "2".to_string()), ("size", "25".to_string())]
        );
        assert!(pairs.iter().all(|(key, _)| *key != "year"));
        assert!(pairs.iter().all(|(key, _)| *key != "winner"));
    }

    #[test]
    fn test_set_filters_are_included() {
        let pairs = MovieQuery::page(0, 10)
            .year(Some(1990))
            .winner(Some(true))
            .query_pairs();

        assert!(pairs.contains(&("year", "1990".to_string())));
        assert!(pairs.contains(&("winner", "true".to_string())));
    }
}
