//! Calory Domain Layer
//!
//! Core data model for the calorie tracker. Like every domain crate in this
//! workspace it has no runtime dependencies: it defines the entry type, the
//! ordered collection and the trait seams that the store and lookup crates
//! implement.
//!
//! ## Key Concepts
//!
//! - **FoodEntry**: one food name with its rounded calorie count
//! - **FoodLog**: the ordered collection, insertion order is display order
//! - **EntryStore**: durable write-through storage for the whole collection
//! - **NutritionLookup**: the remote service resolving a food name to calories

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod log;
pub mod traits;

// Re-exports for convenience
pub use entry::{round_calories, EntryId, FoodEntry};
pub use log::FoodLog;
pub use traits::{EntryStore, NutritionItem, NutritionLookup};
