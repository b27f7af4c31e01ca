//! In-memory repository implementations.

use tracing::debug;

use crate::models::{FoodItem, Patient, Recipe};

use super::{CatalogRepository, PatientRepository, RecipeRepository, StoreError, StoreResult};

/// Vec-backed food catalog, insertion order preserved.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: Vec<FoodItem>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an existing collection.
    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn list(&self) -> Vec<FoodItem> {
        self.items.clone()
    }

    fn get(&self, id: &str) -> Option<FoodItem> {
        self.items.iter().find(|i| i.id == id).cloned()
    }

    fn upsert(&mut self, item: FoodItem) {
        debug!(id = %item.id, "upserting catalog item");
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Vec-backed recipe store.
#[derive(Debug, Default)]
pub struct InMemoryRecipes {
    recipes: Vec<Recipe>,
}

impl InMemoryRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl RecipeRepository for InMemoryRecipes {
    fn list(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }

    fn upsert(&mut self, recipe: Recipe) {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => self.recipes.push(recipe),
        }
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Vec-backed patient store.
#[derive(Debug, Default)]
pub struct InMemoryPatients {
    patients: Vec<Patient>,
}

impl InMemoryPatients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients }
    }
}

impl PatientRepository for InMemoryPatients {
    fn list(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    fn get(&self, id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    fn upsert(&mut self, patient: Patient) {
        debug!(id = %patient.id, "upserting patient");
        match self.patients.iter_mut().find(|p| p.id == patient.id) {
            Some(existing) => *existing = patient,
            None => self.patients.push(patient),
        }
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.patients.len();
        self.patients.retain(|p| p.id != id);
        if self.patients.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn search(&self, query: &str, limit: usize) -> Vec<Patient> {
        let needle = query.to_lowercase();
        self.patients
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}
