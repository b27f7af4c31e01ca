//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient gender as recorded at intake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Dominant constitution label stored on the patient record.
///
/// This is the *output* of the assessment engine reduced to a single tag;
/// the full score vectors live on the assessment record, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrakritiLabel {
    Vata,
    Pitta,
    Kapha,
    /// Two or more doshas shared the top dominance score
    Mixed,
}

/// Constitutional analysis block on the patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstitutionalAnalysis {
    /// Dominant baseline constitution
    pub prakriti: PrakritiLabel,
    /// Current imbalance tags
    pub vikriti: Vec<String>,
    /// Observed dosha imbalance notes
    pub dosha_imbalance: Vec<String>,
}

/// Clinical health parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthParameters {
    /// Weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    /// Blood pressure reading (e.g., "120/80")
    pub blood_pressure: String,
    pub diabetes: bool,
    pub heart_condition: bool,
    pub other_conditions: Vec<String>,
}

/// A consultation entry; the prescribed plan is referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    pub id: String,
    /// Consultation date, RFC 3339
    pub date: String,
    pub practitioner: String,
    pub diagnosis: String,
    /// Diet plan prescribed during this consultation
    pub diet_plan_id: String,
    pub notes: String,
    /// Scheduled follow-up date, RFC 3339
    pub follow_up_date: Option<String>,
}

/// A patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique identifier
    pub id: String,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Known conditions
    pub medical_history: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    /// Assessment output; None until the first assessment is saved
    pub constitutional_analysis: Option<ConstitutionalAnalysis>,
    pub health_parameters: HealthParameters,
    /// Past consultations, newest last
    pub consultation_history: Vec<Consultation>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(name: String, age: u32, gender: Gender) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            age,
            gender,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            medical_history: Vec::new(),
            allergies: Vec::new(),
            dietary_restrictions: Vec::new(),
            constitutional_analysis: None,
            health_parameters: HealthParameters {
                weight: 0.0,
                height: 0.0,
                blood_pressure: String::new(),
                diabetes: false,
                heart_condition: false,
                other_conditions: Vec::new(),
            },
            consultation_history: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Whether the patient has a saved constitutional assessment.
    pub fn is_assessed(&self) -> bool {
        self.constitutional_analysis.is_some()
    }

    /// Touch the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = Patient::new("Asha Rao".into(), 42, Gender::Female);
        assert_eq!(patient.name, "Asha Rao");
        assert_eq!(patient.age, 42);
        assert!(!patient.is_assessed());
        assert_eq!(patient.id.len(), 36); // UUID format
    }

    #[test]
    fn test_assessed_after_analysis() {
        let mut patient = Patient::new("Asha Rao".into(), 42, Gender::Female);
        patient.constitutional_analysis = Some(ConstitutionalAnalysis {
            prakriti: PrakritiLabel::Pitta,
            vikriti: vec!["Pitta elevated".into()],
            dosha_imbalance: Vec::new(),
        });
        assert!(patient.is_assessed());
    }
}
