//! NutriVeda Core Library
//!
//! Clinical-nutrition core for Ayurvedic diet practice: constitutional
//! assessment scoring, catalog filtering, and diet-plan generation.
//!
//! # Architecture
//!
//! ```text
//! Intake steps → AssessmentData ──► Assessment Engine
//!                                   (dominance, classification)
//!                                          │
//!                                          ▼
//!                              Patient.constitutional_analysis
//!
//! Catalog store ──► Filter & Impact Classifier ──► browsing surfaces
//!        │
//!        └───────► Diet-Plan Builder ──► DietPlan ──► PlanReport (export)
//! ```
//!
//! Every computation is a pure function over immutable inputs; the only
//! stateful pieces are the repositories and the cosmetic progress
//! simulation.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DoshaVector, FoodItem, Patient, DietPlan, etc.)
//! - [`assessment`]: Scoring engine and the six-step intake flow
//! - [`catalog`]: Text/facet/dosha filtering and impact labels
//! - [`plan`]: Day/meal skeleton builder with nutrition roll-ups
//! - [`store`]: Repository traits with in-memory implementations
//! - [`export`]: Renderer-facing report bundles (JSON/CSV)
//! - [`progress`]: Timer-driven progress simulation state machine

pub mod assessment;
pub mod catalog;
pub mod export;
pub mod models;
pub mod plan;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use assessment::{
    classify_level, dominant_dosha, dosha_dominance, summarize, AssessmentFlow, AssessmentStep,
    AssessmentUpdate, ConstitutionSummary, DominanceLevel,
};
pub use catalog::{filter_catalog, group_facets, DoshaFilter, GroupFilter, ImpactLabel};
pub use export::{ExportFormat, ExportOptions, PlanReport};
pub use models::{
    AssessmentData, AyurvedicProperties, DailyMeal, DietPlan, Dosha, DoshaVector, FoodItem, Meal,
    Patient, PlanDuration, PrakritiLabel, Recipe, Taste, Virya,
};
pub use plan::{build_daily_meal, build_diet_plan, sum_meal};
pub use progress::{ProgressSimulation, ProgressState};
pub use store::{
    CatalogRepository, InMemoryCatalog, InMemoryPatients, InMemoryRecipes, PatientRepository,
    RecipeRepository, StoreError,
};
