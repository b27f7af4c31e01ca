//! Repository seams over the catalog and patient collections.
//!
//! The traits are the storage contract; the in-memory implementations back
//! the demo data set and the test suite. A real store would be another
//! implementation of the same traits.

mod memory;

pub use memory::*;

use thiserror::Error;

use crate::models::{FoodItem, Patient, Recipe};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read/write access to the food catalog.
pub trait CatalogRepository {
    /// All foods, insertion order preserved.
    fn list(&self) -> Vec<FoodItem>;
    fn get(&self, id: &str) -> Option<FoodItem>;
    /// Insert or replace by id.
    fn upsert(&mut self, item: FoodItem);
    fn delete(&mut self, id: &str) -> StoreResult<()>;
}

/// Read/write access to recipes.
pub trait RecipeRepository {
    fn list(&self) -> Vec<Recipe>;
    fn get(&self, id: &str) -> Option<Recipe>;
    fn upsert(&mut self, recipe: Recipe);
    fn delete(&mut self, id: &str) -> StoreResult<()>;
}

/// Read/write access to patient records.
pub trait PatientRepository {
    fn list(&self) -> Vec<Patient>;
    fn get(&self, id: &str) -> Option<Patient>;
    fn upsert(&mut self, patient: Patient);
    fn delete(&mut self, id: &str) -> StoreResult<()>;
    /// Case-insensitive name prefix search.
    fn search(&self, query: &str, limit: usize) -> Vec<Patient>;
}
