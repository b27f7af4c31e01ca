//! Prescription intake models.

use serde::{Deserialize, Serialize};

/// Structured data extracted from an uploaded prescription document.
///
/// Extraction is simulated in this build; see [`crate::progress`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionData {
    pub id: String,
    pub patient_id: String,
    /// Original upload file name
    pub file_name: String,
    /// Raw extracted text
    pub extracted_text: String,
    /// Food names recognized in the prescription
    pub foods: Vec<String>,
    pub instructions: String,
    /// Duration phrase as written (e.g., "2 weeks")
    pub duration: String,
    pub special_notes: String,
    /// Extraction timestamp, RFC 3339
    pub processed_at: String,
}

impl PrescriptionData {
    /// Create an empty record for a freshly uploaded file.
    pub fn new(patient_id: String, file_name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            file_name,
            extracted_text: String::new(),
            foods: Vec::new(),
            instructions: String::new(),
            duration: String::new(),
            special_notes: String::new(),
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
