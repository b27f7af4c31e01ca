//! Renderer-facing plan report bundle.

use serde::{Deserialize, Serialize};

use crate::models::{AyurvedicProperties, DietPlan, Meal, MealTotals};

use super::ExportOptions;

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub plan_id: String,
    pub patient_id: String,
    pub plan_name: String,
    /// ISO dates
    pub start_date: String,
    pub end_date: String,
    /// Export timestamp
    pub exported_at: String,
    /// Whether the renderer should apply clinic branding
    pub clinic_branding: bool,
}

/// One meal row in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRow {
    /// ISO date of the day this meal belongs to
    pub date: String,
    /// Slot name (e.g., "Breakfast")
    pub slot: String,
    /// Food names, display order preserved
    pub foods: Vec<String>,
    /// Present when nutrition facts are included
    pub totals: Option<MealTotals>,
    /// Present when Ayurvedic properties are included
    pub ayurvedic_properties: Option<AyurvedicProperties>,
    /// Present when instructions are included
    pub instructions: Option<String>,
}

/// The full data bundle handed to a PDF/Excel renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub metadata: ReportMetadata,
    pub rows: Vec<MealRow>,
    /// Mean daily calories, carried from the plan
    pub total_calories: f64,
}

fn meal_row(date: &str, meal: &Meal, options: &ExportOptions) -> MealRow {
    MealRow {
        date: date.to_string(),
        slot: meal.name.clone(),
        foods: meal.foods.iter().map(|f| f.name.clone()).collect(),
        totals: options.include_nutrition_facts.then_some(meal.totals),
        ayurvedic_properties: options
            .include_ayurvedic_properties
            .then(|| meal.ayurvedic_properties.clone()),
        instructions: options
            .include_instructions
            .then(|| meal.instructions.clone()),
    }
}

impl PlanReport {
    /// Assemble a report from a plan, honoring the include flags.
    pub fn from_plan(plan: &DietPlan, options: &ExportOptions) -> Self {
        let mut rows = Vec::new();
        for day in &plan.meals {
            let date = day.date.to_string();
            rows.push(meal_row(&date, &day.breakfast, options));
            rows.push(meal_row(&date, &day.lunch, options));
            rows.push(meal_row(&date, &day.dinner, options));
            for snack in &day.snacks {
                rows.push(meal_row(&date, snack, options));
            }
        }

        Self {
            metadata: ReportMetadata {
                plan_id: plan.id.clone(),
                patient_id: plan.patient_id.clone(),
                plan_name: plan.name.clone(),
                start_date: plan.start_date.to_string(),
                end_date: plan.end_date.to_string(),
                exported_at: chrono::Utc::now().to_rfc3339(),
                clinic_branding: options.clinic_branding,
            },
            rows,
            total_calories: plan.total_calories,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV: header plus one row per meal.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("date,slot,foods,calories,protein,carbs,fats,instructions\n");

        for row in &self.rows {
            let totals = row.totals.unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                escape_csv(&row.date),
                escape_csv(&row.slot),
                escape_csv(&row.foods.join("; ")),
                totals.calories,
                totals.protein,
                totals.carbs,
                totals.fats,
                escape_csv(row.instructions.as_deref().unwrap_or("")),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AyurvedicProperties, DoshaVector, FoodItem, PlanDuration, Taste, Virya};
    use crate::plan::build_diet_plan;
    use chrono::NaiveDate;

    fn sample_plan() -> DietPlan {
        let mut rice = FoodItem::new(
            "f1".into(),
            "Rice".into(),
            "Grains".into(),
            AyurvedicProperties {
                rasa: vec![Taste::Sweet],
                guna: vec!["Light".into()],
                virya: Virya::Cool,
                vipaka: Taste::Sweet,
                dosha_impact: DoshaVector::new(-1, -1, 1),
            },
        );
        rice.calories = 130.0;
        rice.protein = 2.7;
        build_diet_plan(
            "p1",
            PlanDuration::Weekly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            &[rice],
        )
    }

    #[test]
    fn test_report_rows_cover_all_slots() {
        let plan = sample_plan();
        let report = PlanReport::from_plan(&plan, &ExportOptions::default());
        // 7 days x (3 main meals + 1 snack)
        assert_eq!(report.rows.len(), 28);
        assert_eq!(report.rows[0].slot, "Breakfast");
        assert_eq!(report.rows[3].slot, "Evening Snack");
        assert_eq!(report.metadata.start_date, "2024-01-01");
        assert_eq!(report.metadata.end_date, "2024-01-08");
    }

    #[test]
    fn test_include_flags_drop_sections() {
        let plan = sample_plan();
        let options = ExportOptions {
            include_nutrition_facts: false,
            include_ayurvedic_properties: false,
            include_instructions: false,
            ..ExportOptions::default()
        };
        let report = PlanReport::from_plan(&plan, &options);
        assert!(report.rows[0].totals.is_none());
        assert!(report.rows[0].ayurvedic_properties.is_none());
        assert!(report.rows[0].instructions.is_none());
    }

    #[test]
    fn test_report_json() {
        let plan = sample_plan();
        let report = PlanReport::from_plan(&plan, &ExportOptions::default());
        let json = report.to_json().unwrap();
        assert!(json.contains("Breakfast"));
        assert!(json.contains("2024-01-01"));
    }

    #[test]
    fn test_report_csv() {
        let plan = sample_plan();
        let report = PlanReport::from_plan(&plan, &ExportOptions::default());
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 29); // Header + 28 rows
        assert!(lines[0].starts_with("date,slot"));
        assert!(lines[1].contains("Breakfast"));
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
