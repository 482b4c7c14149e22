//! Calory Nutrition Lookup Layer
//!
//! Implementations of the `NutritionLookup` trait from `calory-domain`.
//!
//! # Providers
//!
//! - `MockLookup`: Deterministic mock for testing
//! - `CalorieNinjasClient`: HTTP client for the CalorieNinjas nutrition API
//!
//! # Examples
//!
//! ```
//! use calory_domain::{NutritionItem, NutritionLookup};
//! use calory_lookup::MockLookup;
//!
//! let lookup = MockLookup::new(vec![NutritionItem::new("apple", 94.6)]);
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let items = rt.block_on(lookup.lookup("apple")).unwrap();
//! assert_eq!(items[0].name, "apple");
//! ```

#![warn(missing_docs)]

pub mod ninjas;

use calory_domain::{NutritionItem, NutritionLookup};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ninjas::CalorieNinjasClient;

/// Errors that can occur during a nutrition lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-success status
    #[error("Lookup failed with HTTP status {0}")]
    Status(u16),

    /// Body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No API key configured
    #[error("No API key configured for the nutrition service")]
    MissingApiKey,
}

/// Canned outcome for one query
#[derive(Debug, Clone)]
enum MockOutcome {
    Items(Vec<NutritionItem>),
    Status(u16),
}

/// Mock nutrition lookup for deterministic testing
///
/// Returns pre-configured items without making any network calls. Clones
/// share the call log, so a test can keep a handle after handing the mock
/// to the code under test.
///
/// # Examples
///
/// ```
/// use calory_domain::NutritionItem;
/// use calory_lookup::MockLookup;
///
/// let mut lookup = MockLookup::default();
/// lookup.add_response("banana", vec![NutritionItem::new("banana", 105.2)]);
/// lookup.add_error("xyzzy", 404);
/// assert_eq!(lookup.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    default_items: Vec<NutritionItem>,
    responses: Arc<Mutex<HashMap<String, MockOutcome>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockLookup {
    /// Create a mock returning `items` for every query
    pub fn new(items: Vec<NutritionItem>) -> Self {
        Self {
            default_items: items,
            ..Self::default()
        }
    }

    /// Return `items` for an exact query string
    pub fn add_response(&mut self, query: impl Into<String>, items: Vec<NutritionItem>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), MockOutcome::Items(items));
    }

    /// Fail an exact query string with the given HTTP status
    pub fn add_error(&mut self, query: impl Into<String>, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), MockOutcome::Status(status));
    }

    /// Number of lookups performed
    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    /// Queries received, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn respond(&self, query: &str) -> Result<Vec<NutritionItem>, LookupError> {
        self.queries.lock().unwrap().push(query.to_string());

        match self.responses.lock().unwrap().get(query) {
            Some(MockOutcome::Items(items)) => Ok(items.clone()),
            Some(MockOutcome::Status(status)) => Err(LookupError::Status(*status)),
            None => Ok(self.default_items.clone()),
        }
    }
}

impl NutritionLookup for MockLookup {
    type Error = LookupError;

    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<NutritionItem>, Self::Error>> + Send {
        std::future::ready(self.respond(query))
    }
}
