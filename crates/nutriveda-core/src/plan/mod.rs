//! Diet-plan builder.
//!
//! Materializes the day/meal skeleton for a requested duration and rolls up
//! nutrition sums. Meal composition uses a fixed first-N slice of the food
//! source per slot, chosen over randomized counts so generated plans are
//! reproducible.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{
    AyurvedicProperties, DailyMeal, DietPlan, DoshaVector, FoodItem, Meal, MealTotals,
    PlanDuration, Taste, Virya,
};

/// Foods per main meal slot.
const MAIN_MEAL_FOODS: usize = 3;
/// Foods per snack slot.
const SNACK_FOODS: usize = 2;
/// Default daily water intake in liters.
const DAILY_WATER_LITERS: f64 = 2.5;

/// Round to one decimal place, half up.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Component-wise nutrition sums across the foods of one meal.
///
/// Calories round to the nearest whole number; protein, carbs, and fats
/// round to one decimal place.
pub fn sum_meal(foods: &[FoodItem]) -> MealTotals {
    let mut totals = MealTotals::default();
    for food in foods {
        totals.calories += food.calories;
        totals.protein += food.protein;
        totals.carbs += food.carbs;
        totals.fats += food.fats;
    }
    MealTotals {
        calories: totals.calories.round(),
        protein: round1(totals.protein),
        carbs: round1(totals.carbs),
        fats: round1(totals.fats),
    }
}

/// Synthesize one Ayurvedic property block for a whole meal.
///
/// Rasa and guna are ordered unions over the foods. Virya is Hot when hot
/// foods strictly outnumber cool ones. Vipaka is the most frequent value,
/// first seen wins ties. Impact is the component-wise sum.
pub fn synthesize_properties(foods: &[FoodItem]) -> AyurvedicProperties {
    let mut rasa: Vec<Taste> = Vec::new();
    let mut guna: Vec<String> = Vec::new();
    let mut impact = DoshaVector::default();
    let mut hot = 0usize;
    let mut vipaka_order: Vec<(Taste, usize)> = Vec::new();

    for food in foods {
        let props = &food.ayurvedic_properties;
        for &taste in &props.rasa {
            if !rasa.contains(&taste) {
                rasa.push(taste);
            }
        }
        for quality in &props.guna {
            if !guna.contains(quality) {
                guna.push(quality.clone());
            }
        }
        if props.virya == Virya::Hot {
            hot += 1;
        }
        impact = impact.add(&props.dosha_impact);
        match vipaka_order.iter_mut().find(|(t, _)| *t == props.vipaka) {
            Some((_, count)) => *count += 1,
            None => vipaka_order.push((props.vipaka, 1)),
        }
    }

    let virya = if hot * 2 > foods.len() {
        Virya::Hot
    } else {
        Virya::Cool
    };
    let vipaka = vipaka_order
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(taste, _)| *taste)
        .unwrap_or(Taste::Sweet);

    AyurvedicProperties {
        rasa,
        guna,
        virya,
        vipaka,
        dosha_impact: impact,
    }
}

fn build_meal(name: &str, timing: &str, foods: &[FoodItem], count: usize) -> Meal {
    let selected: Vec<FoodItem> = foods.iter().take(count).cloned().collect();
    let totals = sum_meal(&selected);
    let ayurvedic_properties = synthesize_properties(&selected);
    Meal {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        instructions: format!(
            "Consume {} at {} for optimal digestion",
            name.to_lowercase(),
            timing
        ),
        foods: selected,
        totals,
        ayurvedic_properties,
        timing: timing.to_string(),
    }
}

/// Build one calendar day: three named meals plus one snack slot.
pub fn build_daily_meal(date: NaiveDate, day: u32, foods: &[FoodItem]) -> DailyMeal {
    DailyMeal {
        date,
        breakfast: build_meal("Breakfast", "morning", foods, MAIN_MEAL_FOODS),
        lunch: build_meal("Lunch", "afternoon", foods, MAIN_MEAL_FOODS),
        dinner: build_meal("Dinner", "evening", foods, MAIN_MEAL_FOODS),
        snacks: vec![build_meal("Evening Snack", "evening", foods, SNACK_FOODS)],
        water_intake: DAILY_WATER_LITERS,
        notes: format!("Day {} - Follow Ayurvedic principles", day),
    }
}

/// Build a full diet plan for the requested duration.
///
/// The end date is `start_date` plus the duration's day count, and exactly
/// one `DailyMeal` is produced per day in that range. The plan-level calorie
/// figure is the rounded mean of the daily sums rather than an independent
/// target.
pub fn build_diet_plan(
    patient_id: &str,
    duration: PlanDuration,
    start_date: NaiveDate,
    foods: &[FoodItem],
) -> DietPlan {
    let days = duration.days();
    debug!(patient_id, days, "generating diet plan");

    let meals: Vec<DailyMeal> = (0..days)
        .map(|i| {
            let date = start_date + Duration::days(i as i64);
            build_daily_meal(date, i + 1, foods)
        })
        .collect();

    let total_calories = if meals.is_empty() {
        0.0
    } else {
        let sum: f64 = meals.iter().map(|m| m.total_calories()).sum();
        (sum / meals.len() as f64).round()
    };

    let now = chrono::Utc::now().to_rfc3339();
    DietPlan {
        id: uuid::Uuid::new_v4().to_string(),
        patient_id: patient_id.to_string(),
        name: format!("{} Diet Plan", duration.name()),
        duration,
        start_date,
        end_date: start_date + Duration::days(days as i64),
        meals,
        total_calories,
        ayurvedic_compliance: 92.0,
        modern_nutrition_compliance: 88.0,
        created_at: now.clone(),
        updated_at: now,
    }
}
