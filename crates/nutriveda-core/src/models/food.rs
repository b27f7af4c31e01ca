//! Food catalog models.

use serde::{Deserialize, Serialize};

use super::dosha::{DoshaVector, Taste, Virya};

/// Ayurvedic property block attached to foods, recipes, and whole meals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AyurvedicProperties {
    /// Taste tags, display order preserved from the source list
    pub rasa: Vec<Taste>,
    /// Quality tags (e.g., "Heavy", "Light", "Dry")
    pub guna: Vec<String>,
    /// Potency
    pub virya: Virya,
    /// Post-digestive taste effect
    pub vipaka: Taste,
    /// Signed per-dosha impact: negative pacifies, positive aggravates
    pub dosha_impact: DoshaVector,
}

/// A single item in the food catalog.
///
/// Defined at load time and immutable for the lifetime of the process; a
/// backing store would own mutation in a full deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form group key (e.g., "Grains", "Spices")
    pub category: String,
    /// Energy per serving, kcal
    pub calories: f64,
    /// Protein per serving, grams
    pub protein: f64,
    /// Carbohydrates per serving, grams
    pub carbs: f64,
    /// Fats per serving, grams
    pub fats: f64,
    /// Fiber per serving, grams
    pub fiber: f64,
    /// Sugar per serving, grams
    pub sugar: f64,
    /// Sodium per serving, milligrams
    pub sodium: f64,
    /// Ayurvedic property block
    pub ayurvedic_properties: AyurvedicProperties,
    /// Health benefit notes, searched by the catalog text filter
    pub benefits: Vec<String>,
    /// Conditions under which the food should be avoided
    pub contraindications: Vec<String>,
    /// Day-part tags (e.g., "morning", "evening")
    pub best_time_to_eat: Vec<String>,
    /// Preparation notes, free text
    pub preparation: String,
}

impl FoodItem {
    /// Create a food item with required identity fields; macros default to
    /// zero and the property block must be supplied.
    pub fn new(id: String, name: String, category: String, properties: AyurvedicProperties) -> Self {
        Self {
            id,
            name,
            category,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
            ayurvedic_properties: properties,
            benefits: Vec::new(),
            contraindications: Vec::new(),
            best_time_to_eat: Vec::new(),
            preparation: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dosha::Dosha;

    fn props() -> AyurvedicProperties {
        AyurvedicProperties {
            rasa: vec![Taste::Sweet, Taste::Astringent],
            guna: vec!["Light".into()],
            virya: Virya::Cool,
            vipaka: Taste::Sweet,
            dosha_impact: DoshaVector::new(-1, 0, 1),
        }
    }

    #[test]
    fn test_new_food_item() {
        let food = FoodItem::new("f1".into(), "Basmati Rice".into(), "Grains".into(), props());
        assert_eq!(food.name, "Basmati Rice");
        assert_eq!(food.calories, 0.0);
        assert_eq!(
            food.ayurvedic_properties.dosha_impact.component(Dosha::Vata),
            -1
        );
    }

    #[test]
    fn test_rasa_order_preserved() {
        let food = FoodItem::new("f1".into(), "Rice".into(), "Grains".into(), props());
        assert_eq!(
            food.ayurvedic_properties.rasa,
            vec![Taste::Sweet, Taste::Astringent]
        );
    }
}
