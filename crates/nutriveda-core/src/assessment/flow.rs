//! Six-step assessment intake flow.
//!
//! Linear forward/back navigation with no skipping. Field edits are explicit
//! update commands applied to an immutable [`AssessmentData`] value, so each
//! transition can be tested without any rendering layer.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityLevel, AssessmentData, ConstitutionalAnalysis, Dosha, Gender};

use super::{summarize, ConstitutionSummary, DominanceLevel};

/// The six ordered intake steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssessmentStep {
    BasicInfo,
    Lifestyle,
    MedicalHistory,
    AyurvedicAssessment,
    DietaryPreferences,
    Goals,
}

impl AssessmentStep {
    pub const ALL: [AssessmentStep; 6] = [
        AssessmentStep::BasicInfo,
        AssessmentStep::Lifestyle,
        AssessmentStep::MedicalHistory,
        AssessmentStep::AyurvedicAssessment,
        AssessmentStep::DietaryPreferences,
        AssessmentStep::Goals,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<AssessmentStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The step before this one, if any.
    pub fn previous(&self) -> Option<AssessmentStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Checklist fields edited as add/remove tag sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TagField {
    MedicalConditions,
    Allergies,
    Medications,
    Surgeries,
    VataSymptoms,
    PittaSymptoms,
    KaphaSymptoms,
    DietaryRestrictions,
    FoodPreferences,
    CookingMethods,
    SecondaryGoals,
}

/// A single field edit against the assessment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AssessmentUpdate {
    Name(String),
    Age(u32),
    Gender(Gender),
    Weight(f64),
    Height(f64),
    BloodPressure(String),
    ActivityLevel(ActivityLevel),
    SleepHours(f64),
    WaterIntake(f64),
    MealFrequency(u32),
    BowelMovements(u32),
    /// Set a prakriti slider; the intake surface clamps to 0-10
    Prakriti(Dosha, i32),
    /// Set a vikriti slider; the intake surface clamps to 0-10
    Vikriti(Dosha, i32),
    /// Check or uncheck one entry of a checklist field
    Tag {
        field: TagField,
        value: String,
        checked: bool,
    },
    PrimaryGoal(String),
    Timeline(String),
    Notes(String),
}

fn toggle(list: &mut Vec<String>, value: String, checked: bool) {
    if checked {
        if !list.contains(&value) {
            list.push(value);
        }
    } else {
        list.retain(|v| v != &value);
    }
}

/// Apply an update, producing the next assessment value.
pub fn apply_update(mut data: AssessmentData, update: AssessmentUpdate) -> AssessmentData {
    match update {
        AssessmentUpdate::Name(v) => data.name = v,
        AssessmentUpdate::Age(v) => data.age = v,
        AssessmentUpdate::Gender(v) => data.gender = v,
        AssessmentUpdate::Weight(v) => data.weight = v,
        AssessmentUpdate::Height(v) => data.height = v,
        AssessmentUpdate::BloodPressure(v) => data.blood_pressure = v,
        AssessmentUpdate::ActivityLevel(v) => data.activity_level = v,
        AssessmentUpdate::SleepHours(v) => data.sleep_hours = v,
        AssessmentUpdate::WaterIntake(v) => data.water_intake = v,
        AssessmentUpdate::MealFrequency(v) => data.meal_frequency = v,
        AssessmentUpdate::BowelMovements(v) => data.bowel_movements = v,
        AssessmentUpdate::Prakriti(dosha, value) => {
            data.prakriti = data.prakriti.with_component(dosha, value)
        }
        AssessmentUpdate::Vikriti(dosha, value) => {
            data.vikriti = data.vikriti.with_component(dosha, value)
        }
        AssessmentUpdate::Tag {
            field,
            value,
            checked,
        } => {
            let list = match field {
                TagField::MedicalConditions => &mut data.medical_conditions,
                TagField::Allergies => &mut data.allergies,
                TagField::Medications => &mut data.medications,
                TagField::Surgeries => &mut data.surgeries,
                TagField::VataSymptoms => &mut data.vata_symptoms,
                TagField::PittaSymptoms => &mut data.pitta_symptoms,
                TagField::KaphaSymptoms => &mut data.kapha_symptoms,
                TagField::DietaryRestrictions => &mut data.dietary_restrictions,
                TagField::FoodPreferences => &mut data.food_preferences,
                TagField::CookingMethods => &mut data.cooking_methods,
                TagField::SecondaryGoals => &mut data.secondary_goals,
            };
            toggle(list, value, checked);
        }
        AssessmentUpdate::PrimaryGoal(v) => data.primary_goal = v,
        AssessmentUpdate::Timeline(v) => data.timeline = v,
        AssessmentUpdate::Notes(v) => data.notes = v,
    }
    data
}

/// Driver for one assessment session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentFlow {
    pub step: AssessmentStep,
    pub data: AssessmentData,
    completed: Vec<AssessmentStep>,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            step: AssessmentStep::BasicInfo,
            data: AssessmentData::default(),
            completed: Vec::new(),
        }
    }

    /// Apply a field edit to the current assessment value.
    pub fn apply(&mut self, update: AssessmentUpdate) {
        self.data = apply_update(self.data.clone(), update);
    }

    /// Move forward one step, marking the current one complete.
    /// Returns false when already on the last step.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                if !self.completed.contains(&self.step) {
                    self.completed.push(self.step);
                }
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns false when already on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == AssessmentStep::Goals
    }

    pub fn completed_steps(&self) -> &[AssessmentStep] {
        &self.completed
    }

    /// Classification summary, computed on demand when the review surface
    /// renders. Recomputation is idempotent, so timing does not matter.
    pub fn summary(&self) -> ConstitutionSummary {
        summarize(&self.data.prakriti, &self.data.vikriti)
    }

    /// Reduce the assessment to the analysis block stored on the patient
    /// record. Vikriti tags list doshas with any reported imbalance; the
    /// imbalance list names doshas classified High.
    pub fn to_analysis(&self) -> ConstitutionalAnalysis {
        let summary = self.summary();
        let vikriti = Dosha::ALL
            .iter()
            .filter(|&&d| self.data.vikriti.component(d) > 0)
            .map(|d| format!("{} elevated", d.name()))
            .collect();
        let dosha_imbalance = summary
            .scores
            .iter()
            .filter(|s| s.level == DominanceLevel::High)
            .map(|s| s.dosha.name().to_string())
            .collect();

        ConstitutionalAnalysis {
            prakriti: summary.label,
            vikriti,
            dosha_imbalance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DoshaVector, PrakritiLabel};

    #[test]
    fn test_linear_navigation() {
        let mut flow = AssessmentFlow::new();
        assert_eq!(flow.step, AssessmentStep::BasicInfo);
        assert!(!flow.back());

        let mut advanced = 0;
        while flow.advance() {
            advanced += 1;
        }
        assert_eq!(advanced, 5);
        assert_eq!(flow.step, AssessmentStep::Goals);
        assert!(flow.is_complete());
        assert!(!flow.advance());
        assert_eq!(flow.completed_steps().len(), 5);
    }

    #[test]
    fn test_back_does_not_unmark_completion() {
        let mut flow = AssessmentFlow::new();
        flow.advance();
        flow.back();
        assert_eq!(flow.step, AssessmentStep::BasicInfo);
        assert_eq!(flow.completed_steps(), &[AssessmentStep::BasicInfo]);
    }

    #[test]
    fn test_apply_scalar_and_slider_updates() {
        let mut flow = AssessmentFlow::new();
        flow.apply(AssessmentUpdate::Name("Ravi".into()));
        flow.apply(AssessmentUpdate::Prakriti(Dosha::Vata, 6));
        flow.apply(AssessmentUpdate::Vikriti(Dosha::Vata, 4));
        assert_eq!(flow.data.name, "Ravi");
        assert_eq!(flow.data.prakriti, DoshaVector::new(6, 0, 0));
        assert_eq!(flow.data.vikriti.vata, 4);
    }

    #[test]
    fn test_tag_toggle() {
        let mut flow = AssessmentFlow::new();
        flow.apply(AssessmentUpdate::Tag {
            field: TagField::VataSymptoms,
            value: "Dry skin".into(),
            checked: true,
        });
        // Checking twice does not duplicate
        flow.apply(AssessmentUpdate::Tag {
            field: TagField::VataSymptoms,
            value: "Dry skin".into(),
            checked: true,
        });
        assert_eq!(flow.data.vata_symptoms, vec!["Dry skin".to_string()]);

        flow.apply(AssessmentUpdate::Tag {
            field: TagField::VataSymptoms,
            value: "Dry skin".into(),
            checked: false,
        });
        assert!(flow.data.vata_symptoms.is_empty());
    }

    #[test]
    fn test_to_analysis() {
        let mut flow = AssessmentFlow::new();
        flow.apply(AssessmentUpdate::Prakriti(Dosha::Pitta, 8));
        flow.apply(AssessmentUpdate::Vikriti(Dosha::Pitta, 6));
        flow.apply(AssessmentUpdate::Vikriti(Dosha::Vata, 2));

        let analysis = flow.to_analysis();
        assert_eq!(analysis.prakriti, PrakritiLabel::Pitta);
        assert_eq!(
            analysis.vikriti,
            vec!["Vata elevated".to_string(), "Pitta elevated".to_string()]
        );
        assert_eq!(analysis.dosha_imbalance, vec!["Pitta".to_string()]);
    }
}
