//! Assessment intake record.

use serde::{Deserialize, Serialize};

use super::dosha::DoshaVector;
use super::patient::Gender;

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// One in-progress assessment record per patient.
///
/// Mutated incrementally as the practitioner advances through the six intake
/// steps; handed to the patient store only on explicit save. The prakriti and
/// vikriti components are expected pre-clamped to 0-10 by the intake surface;
/// the scoring engine neither validates nor clamps them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentData {
    // Basic information
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    pub blood_pressure: String,

    // Lifestyle
    pub activity_level: ActivityLevel,
    pub sleep_hours: f64,
    /// Liters per day
    pub water_intake: f64,
    /// Meals per day
    pub meal_frequency: u32,
    /// Per day
    pub bowel_movements: u32,

    // Medical history
    pub medical_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,

    // Ayurvedic assessment
    /// Baseline constitution, each component 0-10
    pub prakriti: DoshaVector,
    /// Current imbalance, each component 0-10
    pub vikriti: DoshaVector,
    pub vata_symptoms: Vec<String>,
    pub pitta_symptoms: Vec<String>,
    pub kapha_symptoms: Vec<String>,

    // Dietary preferences
    pub dietary_restrictions: Vec<String>,
    pub food_preferences: Vec<String>,
    pub cooking_methods: Vec<String>,

    // Goals
    pub primary_goal: String,
    pub secondary_goals: Vec<String>,
    pub timeline: String,

    pub notes: String,
}

impl Default for AssessmentData {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            gender: Gender::Other,
            weight: 70.0,
            height: 170.0,
            blood_pressure: String::new(),
            activity_level: ActivityLevel::Moderate,
            sleep_hours: 8.0,
            water_intake: 2.5,
            meal_frequency: 3,
            bowel_movements: 1,
            medical_conditions: Vec::new(),
            allergies: Vec::new(),
            medications: Vec::new(),
            surgeries: Vec::new(),
            prakriti: DoshaVector::default(),
            vikriti: DoshaVector::default(),
            vata_symptoms: Vec::new(),
            pitta_symptoms: Vec::new(),
            kapha_symptoms: Vec::new(),
            dietary_restrictions: Vec::new(),
            food_preferences: Vec::new(),
            cooking_methods: Vec::new(),
            primary_goal: String::new(),
            secondary_goals: Vec::new(),
            timeline: String::new(),
            notes: String::new(),
        }
    }
}
