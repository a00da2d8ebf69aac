use serde::{Deserialize, Serialize};

/// One award entry as returned by the API.
///
/// The server owns identity and every derived number; this type only mirrors
/// the wire shape. List fields default to empty when the server omits them,
/// so downstream code never has to guard against missing arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub year: i32,
    pub title: String,
    #[serde(default)]
    pub studios: Vec<String>,
    #[serde(default)]
    pub producers: Vec<String>,
    #[serde(default)]
    pub winner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_camel_case() {
        let json = r#"{
            "id": 197,
            "year": 1990,
            "title": "The Adventures of Ford Fairlane",
            "studios": ["20th Century Fox"],
            "producers": ["Steve Perry", "Joel Silver"],
            "winner": true
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 197);
        assert_eq!(movie.year, 1990);
        assert_eq!(movie.producers.len(), 2);
        assert!(movie.winner);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let json = r#"{"id": 1, "year": 1981, "title": "Mommie Dearest"}"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.studios.is_empty());
        assert!(movie.producers.is_empty());
        assert!(!movie.winner);
    }
}
