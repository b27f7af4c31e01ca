//! Report export for diet plans.

mod report;

pub use report::*;

use serde::{Deserialize, Serialize};

/// Target document format. Rendering to either format is an external
/// concern; the core assembles the data bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

/// Options controlling what a rendered report includes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_nutrition_facts: bool,
    pub include_ayurvedic_properties: bool,
    pub include_instructions: bool,
    pub clinic_branding: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Pdf,
            include_nutrition_facts: true,
            include_ayurvedic_properties: true,
            include_instructions: true,
            clinic_branding: false,
        }
    }
}
