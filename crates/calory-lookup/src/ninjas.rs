//! CalorieNinjas Client Implementation
//!
//! Resolves a free-text food name through the CalorieNinjas nutrition API.
//!
//! # Protocol
//!
//! - `GET <endpoint>?query=<url-encoded food name>`
//! - Header `X-Api-Key: <key>`
//! - Body `{"items": [{"name": "apple", "calories": 94.6, ...}, ...]}`
//!
//! One request per lookup: no retries, no backoff, and no timeout unless
//! one is configured with [`CalorieNinjasClient::with_timeout`].

use crate::LookupError;
use calory_domain::{NutritionItem, NutritionLookup};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Default CalorieNinjas nutrition endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.calorieninjas.com/v1/nutrition";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for the CalorieNinjas nutrition API
#[derive(Debug, Clone)]
pub struct CalorieNinjasClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Response from the nutrition endpoint
#[derive(Deserialize)]
struct NutritionResponse {
    #[serde(default)]
    items: Vec<NutritionResponseItem>,
}

#[derive(Deserialize)]
struct NutritionResponseItem {
    name: String,
    calories: f64,
}

impl CalorieNinjasClient {
    /// Create a new client
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Full nutrition endpoint URL, without query string
    /// - `api_key`: Key sent in the `X-Api-Key` header
    ///
    /// # Examples
    ///
    /// ```
    /// use calory_lookup::CalorieNinjasClient;
    /// use calory_lookup::ninjas::DEFAULT_ENDPOINT;
    ///
    /// let client = CalorieNinjasClient::new(DEFAULT_ENDPOINT, "secret");
    /// assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    /// ```
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LookupError> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Communication(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Endpoint this client queries
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Look up nutrition candidates for a food name
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured (no request is sent)
    /// - The request cannot be sent or the connection fails
    /// - The service answers with a non-success status
    /// - The body is not the expected JSON
    pub async fn fetch(&self, query: &str) -> Result<Vec<NutritionItem>, LookupError> {
        if self.api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }

        debug!(endpoint = %self.endpoint, query, "requesting nutrition data");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", query)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| LookupError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %body, "nutrition request rejected");
            return Err(LookupError::Status(status.as_u16()));
        }

        let parsed: NutritionResponse = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(count = parsed.items.len(), "nutrition items received");

        Ok(parsed
            .items
            .into_iter()
            .map(|item| NutritionItem::new(item.name, item.calories))
            .collect())
    }
}

impl NutritionLookup for CalorieNinjasClient {
    type Error = LookupError;

    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<NutritionItem>, Self::Error>> + Send {
        self.fetch(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CalorieNinjasClient::new("http://localhost:9000/v1/nutrition", "key");
        assert_eq!(client.endpoint, "http://localhost:9000/v1/nutrition");
        assert_eq!(client.api_key, "key");
    }

    #[test]
    fn test_with_timeout() {
        let client = CalorieNinjasClient::new(DEFAULT_ENDPOINT, "key")
            .with_timeout(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_response_missing_items_is_empty() {
        let parsed: NutritionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        // Unroutable endpoint: reaching the network would yield Communication
        let client = CalorieNinjasClient::new("http://localhost:1/v1/nutrition", "  ");
        let result = client.fetch("apple").await;
        assert!(matches!(result, Err(LookupError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_connection_error_handling() {
        let client = CalorieNinjasClient::new("http://127.0.0.1:1/v1/nutrition", "key");

        match client.fetch("apple").await {
            Err(LookupError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }
}
