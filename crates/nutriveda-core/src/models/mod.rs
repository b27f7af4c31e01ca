//! Domain models for the NutriVeda system.

mod assessment;
mod dosha;
mod food;
mod patient;
mod plan;
mod prescription;
mod recipe;

pub use assessment::*;
pub use dosha::*;
pub use food::*;
pub use patient::*;
pub use plan::*;
pub use prescription::*;
pub use recipe::*;
