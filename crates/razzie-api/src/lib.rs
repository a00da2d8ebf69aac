mod client;
mod config;
mod error;
mod query;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use config::{Config, resolve_base_url};
pub use error::ApiError;
pub use query::MovieQuery;

pub type Result<T> = std::result::Result<T, ApiError>;
