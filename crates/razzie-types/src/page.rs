use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// Pagination metadata is defaulted: some deployments return a bare
/// Spring-style page object, others only `content`. Consumers must treat an
/// empty `content` as a valid state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Movie;

    #[test]
    fn test_page_deserializes_spring_shape() {
        let json = r#"{
            "content": [
                {"id": 1, "year": 1980, "title": "Can't Stop the Music", "winner": true}
            ],
            "totalElements": 206,
            "totalPages": 21,
            "number": 0,
            "size": 10
        }"#;

        let page: Page<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 206);
        assert_eq!(page.number, 0);
    }

    #[test]
    fn test_bare_content_defaults_metadata() {
        let json = r#"{"content": []}"#;

        let page: Page<Movie> = serde_json::from_str(json).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
