//! End-to-end diet-plan generation and export tests.

use chrono::NaiveDate;

use nutriveda_core::export::{ExportFormat, ExportOptions, PlanReport};
use nutriveda_core::models::{
    AyurvedicProperties, DoshaVector, FoodItem, PlanDuration, Taste, Virya,
};
use nutriveda_core::plan::build_diet_plan;
use nutriveda_core::store::{CatalogRepository, InMemoryCatalog};

fn food(id: &str, name: &str, calories: f64, protein: f64) -> FoodItem {
    let mut item = FoodItem::new(
        id.into(),
        name.into(),
        "Grains".into(),
        AyurvedicProperties {
            rasa: vec![Taste::Sweet],
            guna: vec!["Light".into()],
            virya: Virya::Cool,
            vipaka: Taste::Sweet,
            dosha_impact: DoshaVector::new(-1, 0, 1),
        },
    );
    item.calories = calories;
    item.protein = protein;
    item
}

fn seeded_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    catalog.upsert(food("f1", "Basmati Rice", 130.0, 2.7));
    catalog.upsert(food("f2", "Moong Dal", 111.0, 2.6));
    catalog.upsert(food("f3", "Oats", 120.0, 4.4));
    catalog.upsert(food("f4", "Ghee", 112.0, 0.0));
    catalog
}

#[test]
fn test_weekly_plan_shape() {
    let catalog = seeded_catalog();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plan = build_diet_plan("p1", PlanDuration::Weekly, start, &catalog.list());

    assert_eq!(plan.patient_id, "p1");
    assert_eq!(plan.meals.len(), 7);
    assert_eq!(plan.end_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

    // Consecutive calendar days
    for (i, day) in plan.meals.iter().enumerate() {
        assert_eq!(day.date, start + chrono::Duration::days(i as i64));
    }
}

#[test]
fn test_monthly_and_quarterly_day_counts() {
    let catalog = seeded_catalog();
    let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let monthly = build_diet_plan("p1", PlanDuration::Monthly, start, &catalog.list());
    assert_eq!(monthly.meals.len(), 30);
    assert_eq!(monthly.end_date, start + chrono::Duration::days(30));

    let quarterly = build_diet_plan("p1", PlanDuration::Quarterly, start, &catalog.list());
    assert_eq!(quarterly.meals.len(), 90);
}

#[test]
fn test_meal_sums_flow_through_plan() {
    let catalog = seeded_catalog();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plan = build_diet_plan("p1", PlanDuration::Weekly, start, &catalog.list());

    let breakfast = &plan.meals[0].breakfast;
    assert_eq!(breakfast.foods.len(), 3);
    assert_eq!(breakfast.totals.calories, 361.0);
    assert_eq!(breakfast.totals.protein, 9.7);

    // Meal impact is the component-wise sum of its foods
    assert_eq!(
        breakfast.ayurvedic_properties.dosha_impact,
        DoshaVector::new(-3, 0, 3)
    );
}

#[test]
fn test_plan_report_round_trip_to_csv() {
    let catalog = seeded_catalog();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let plan = build_diet_plan("p1", PlanDuration::Weekly, start, &catalog.list());

    let options = ExportOptions {
        format: ExportFormat::Excel,
        ..ExportOptions::default()
    };
    let report = PlanReport::from_plan(&plan, &options);
    assert_eq!(report.metadata.plan_id, plan.id);

    let csv = report.to_csv();
    // Header + 7 days x 4 slots
    assert_eq!(csv.lines().count(), 29);
    assert!(csv.contains("Basmati Rice; Moong Dal; Oats"));
}
