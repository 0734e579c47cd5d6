//! MealDB API client
//!
//! Issues the single search request a session makes and decodes the
//! `meals` collection into [`Recipe`] values. A `null` or absent
//! collection is an empty result, not a failure.
//!
//! No retry and no caching: a failed request surfaces as [`FetchError`]
//! and the caller decides what to show.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::model::{MealsResponse, Recipe};
use crate::{Error, Result};

const USER_AGENT: &str = concat!("recipe-search/", env!("CARGO_PKG_VERSION"));

/// Query parameter carrying the search term
const SEARCH_PARAM: &str = "s";

/// Recipe loading errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network communication error (connect, timeout, body read)
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error {0}: {1}")]
    Status(u16, String),

    /// Response body was not the expected JSON document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the session's record set
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch every recipe matching the query embedded in `endpoint`
    async fn fetch_recipes(&self, endpoint: &str) -> std::result::Result<Vec<Recipe>, FetchError>;
}

/// Build a search URL from the endpoint base and a term
///
/// An empty term asks the API for all records.
pub fn search_url(base: &str, term: &str) -> Result<String> {
    let mut url = Url::parse(base)
        .map_err(|e| Error::Config(format!("Invalid endpoint {base:?}: {e}")))?;

    url.query_pairs_mut().append_pair(SEARCH_PARAM, term);

    Ok(url.into())
}

/// Decode a `search.php` response body
pub fn parse_meals(body: &[u8]) -> std::result::Result<Vec<Recipe>, FetchError> {
    let response: MealsResponse = serde_json::from_slice(body)?;
    Ok(response.into_recipes())
}

/// MealDB HTTP client
pub struct MealDbClient {
    http_client: reqwest::Client,
}

impl MealDbClient {
    /// Create new client with the given request timeout
    pub fn new(timeout: Duration) -> std::result::Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn fetch_recipes(&self, endpoint: &str) -> std::result::Result<Vec<Recipe>, FetchError> {
        debug!(url = %endpoint, "Querying recipe API");

        let response = self.http_client.get(endpoint).send().await.map_err(|e| {
            error!(url = %endpoint, error = %e, "Recipe request failed");
            FetchError::Request(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(url = %endpoint, status = status.as_u16(), "Recipe API returned error status");
            return Err(FetchError::Status(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        let recipes = parse_meals(&body).inspect_err(|e| {
            error!(url = %endpoint, error = %e, "Recipe response could not be parsed");
        })?;

        info!(count = recipes.len(), "Recipe lookup successful");
        if let Some(sample) = recipes.first() {
            debug!(?sample, "Sample recipe");
        }

        Ok(recipes)
    }
}
