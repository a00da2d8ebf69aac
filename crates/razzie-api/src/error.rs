#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("failed to decode response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status carried by the failure, when one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status_code, .. } => Some(*status_code),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
            ApiError::Json { .. } | ApiError::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let err = ApiError::Api {
            status_code: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "API returned 503: service unavailable");
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = ApiError::Config("bad toml".to_string());
        assert_eq!(err.status(), None);
    }
}
