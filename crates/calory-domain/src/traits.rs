//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain and infrastructure.
//! Implementations live in `calory-store` and `calory-lookup`.

use crate::FoodEntry;
use std::future::Future;

/// Trait for durable storage of the food log
///
/// The whole collection is written on every mutation and read once at
/// startup. Implemented by the infrastructure layer (calory-store).
pub trait EntryStore {
    /// Error type for store operations
    type Error;

    /// Load the stored collection
    ///
    /// An absent or unreadable value yields an empty collection rather than
    /// an error; only failures of the storage medium itself are errors.
    fn load(&self) -> Result<Vec<FoodEntry>, Self::Error>;

    /// Replace the stored collection
    fn save(&mut self, entries: &[FoodEntry]) -> Result<(), Self::Error>;
}

/// One candidate returned by the nutrition lookup service
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionItem {
    /// Name the service resolved the query to
    pub name: String,

    /// Calories as reported, not yet rounded
    pub calories: f64,
}

impl NutritionItem {
    /// Create a new item
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}

/// Trait for resolving a food name to nutrition candidates
///
/// Implemented by the infrastructure layer (calory-lookup)
pub trait NutritionLookup {
    /// Error type for lookup operations
    type Error;

    /// Query the service for a food name
    ///
    /// Returns the candidate list as reported, possibly empty.
    fn lookup(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<NutritionItem>, Self::Error>> + Send;
}
