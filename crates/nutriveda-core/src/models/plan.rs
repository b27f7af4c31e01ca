//! Diet plan models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::{AyurvedicProperties, FoodItem};

/// Plan duration. Closed enum so the day-count mapping is exhaustive; an
/// unrecognized duration cannot reach `days()` at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanDuration {
    Weekly,
    Monthly,
    Quarterly,
}

impl PlanDuration {
    /// Number of calendar days covered by the plan.
    pub fn days(&self) -> u32 {
        match self {
            PlanDuration::Weekly => 7,
            PlanDuration::Monthly => 30,
            PlanDuration::Quarterly => 90,
        }
    }

    /// Display name used in generated plan titles.
    pub fn name(&self) -> &'static str {
        match self {
            PlanDuration::Weekly => "Weekly",
            PlanDuration::Monthly => "Monthly",
            PlanDuration::Quarterly => "Quarterly",
        }
    }
}

/// Cached nutrition sums for one meal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealTotals {
    /// Rounded to the nearest whole kcal
    pub calories: f64,
    /// Grams, one decimal place
    pub protein: f64,
    /// Grams, one decimal place
    pub carbs: f64,
    /// Grams, one decimal place
    pub fats: f64,
}

/// A single meal: its foods plus cached sums and one synthesized
/// Ayurvedic property block for the whole meal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: String,
    /// Meal name (e.g., "Breakfast")
    pub name: String,
    /// Foods carried by value within this scope
    pub foods: Vec<FoodItem>,
    pub totals: MealTotals,
    /// Property block synthesized from the foods
    pub ayurvedic_properties: AyurvedicProperties,
    /// Day-part tag (e.g., "morning")
    pub timing: String,
    pub instructions: String,
}

/// One calendar day of a plan: three named meals plus snacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMeal {
    pub date: NaiveDate,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snacks: Vec<Meal>,
    /// Liters
    pub water_intake: f64,
    pub notes: String,
}

impl DailyMeal {
    /// Total calories for the day across all meals and snacks.
    pub fn total_calories(&self) -> f64 {
        self.breakfast.totals.calories
            + self.lunch.totals.calories
            + self.dinner.totals.calories
            + self.snacks.iter().map(|m| m.totals.calories).sum::<f64>()
    }
}

/// A generated diet plan covering one `DailyMeal` per day of its duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub duration: PlanDuration,
    pub start_date: NaiveDate,
    /// start_date + duration days
    pub end_date: NaiveDate,
    /// Ordered, one entry per day in the duration
    pub meals: Vec<DailyMeal>,
    /// Mean daily calories across the plan, rounded to a whole number
    pub total_calories: f64,
    /// Percentage, 0-100
    pub ayurvedic_compliance: f64,
    /// Percentage, 0-100
    pub modern_nutrition_compliance: f64,
    pub created_at: String,
    pub updated_at: String,
}
