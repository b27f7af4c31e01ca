//! Compound filtering over foods and recipes.
//!
//! Filtering is a stable AND of three predicates: free-text search, group
//! (category or cuisine) equality, and dosha pacification. Input order is
//! preserved; nothing is re-sorted.

use serde::{Deserialize, Serialize};

use crate::models::{Dosha, DoshaVector, FoodItem, Recipe};

/// Anything browsable through the catalog surface.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    /// Group key: a food's category or a recipe's cuisine.
    fn group(&self) -> &str;
    fn benefits(&self) -> &[String];
    fn dosha_impact(&self) -> &DoshaVector;
}

impl CatalogEntry for FoodItem {
    fn name(&self) -> &str {
        &self.name
    }
    fn group(&self) -> &str {
        &self.category
    }
    fn benefits(&self) -> &[String] {
        &self.benefits
    }
    fn dosha_impact(&self) -> &DoshaVector {
        &self.ayurvedic_properties.dosha_impact
    }
}

impl CatalogEntry for Recipe {
    fn name(&self) -> &str {
        &self.name
    }
    fn group(&self) -> &str {
        &self.cuisine
    }
    fn benefits(&self) -> &[String] {
        &self.benefits
    }
    fn dosha_impact(&self) -> &DoshaVector {
        &self.ayurvedic_properties.dosha_impact
    }
}

/// Group facet filter. `All` is the wildcard offered first in filter controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupFilter {
    All,
    Named(String),
}

/// Dosha facet filter.
///
/// Deliberately asymmetric with [`super::ImpactLabel`]: the browsing surface
/// only ever offers a pacification filter, so `Pacifying(d)` matches entries
/// whose impact on `d` is strictly negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoshaFilter {
    All,
    Pacifying(Dosha),
}

/// Case-insensitive substring match over name, group, and every benefit
/// entry. The empty query matches everything.
pub fn matches_query<T: CatalogEntry>(entry: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    entry.name().to_lowercase().contains(&needle)
        || entry.group().to_lowercase().contains(&needle)
        || entry
            .benefits()
            .iter()
            .any(|b| b.to_lowercase().contains(&needle))
}

/// Exact group match; `All` is a wildcard.
pub fn matches_group<T: CatalogEntry>(entry: &T, filter: &GroupFilter) -> bool {
    match filter {
        GroupFilter::All => true,
        GroupFilter::Named(group) => entry.group() == group,
    }
}

/// True when the entry pacifies the selected dosha (impact strictly negative).
pub fn matches_dosha<T: CatalogEntry>(entry: &T, filter: DoshaFilter) -> bool {
    match filter {
        DoshaFilter::All => true,
        DoshaFilter::Pacifying(dosha) => entry.dosha_impact().component(dosha) < 0,
    }
}

/// Logical AND of the three predicates, preserving input order.
pub fn filter_catalog<T: CatalogEntry + Clone>(
    entries: &[T],
    query: &str,
    group: &GroupFilter,
    dosha: DoshaFilter,
) -> Vec<T> {
    entries
        .iter()
        .filter(|e| matches_query(*e, query) && matches_group(*e, group) && matches_dosha(*e, dosha))
        .cloned()
        .collect()
}

/// Discoverable group facets: the wildcard followed by the distinct group
/// values present in the catalog, first-seen order preserved.
pub fn group_facets<T: CatalogEntry>(entries: &[T]) -> Vec<GroupFilter> {
    let mut facets = vec![GroupFilter::All];
    for entry in entries {
        let named = GroupFilter::Named(entry.group().to_string());
        if !facets.contains(&named) {
            facets.push(named);
        }
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AyurvedicProperties, Taste, Virya};

    fn food(id: &str, name: &str, category: &str, impact: DoshaVector, benefits: &[&str]) -> FoodItem {
        let mut item = FoodItem::new(
            id.into(),
            name.into(),
            category.into(),
            AyurvedicProperties {
                rasa: vec![Taste::Sweet],
                guna: vec!["Light".into()],
                virya: Virya::Cool,
                vipaka: Taste::Sweet,
                dosha_impact: impact,
            },
        );
        item.benefits = benefits.iter().map(|b| b.to_string()).collect();
        item
    }

    fn sample_catalog() -> Vec<FoodItem> {
        vec![
            food("f1", "Basmati Rice", "Grains", DoshaVector::new(-1, -1, 1), &["Easy to digest"]),
            food("f2", "Ginger", "Spices", DoshaVector::new(-1, 1, -1), &["Aids digestion"]),
            food("f3", "Ghee", "Dairy", DoshaVector::new(-1, -1, 1), &["Nourishing"]),
            food("f4", "Chili", "Spices", DoshaVector::new(0, 2, -1), &["Stimulating"]),
        ]
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let catalog = sample_catalog();
        let out = filter_catalog(&catalog, "", &GroupFilter::All, DoshaFilter::All);
        assert_eq!(out, catalog);
    }

    #[test]
    fn test_query_matches_name_group_and_benefits() {
        let catalog = sample_catalog();
        // Name hit
        let by_name = filter_catalog(&catalog, "ginger", &GroupFilter::All, DoshaFilter::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ginger");
        // Group hit
        let by_group = filter_catalog(&catalog, "spice", &GroupFilter::All, DoshaFilter::All);
        assert_eq!(by_group.len(), 2);
        // Benefit hit, case-insensitive
        let by_benefit = filter_catalog(&catalog, "DIGEST", &GroupFilter::All, DoshaFilter::All);
        assert_eq!(by_benefit.len(), 2);
    }

    #[test]
    fn test_group_filter_is_exact() {
        let catalog = sample_catalog();
        let spices = filter_catalog(
            &catalog,
            "",
            &GroupFilter::Named("Spices".into()),
            DoshaFilter::All,
        );
        assert_eq!(spices.len(), 2);
        // Exact match only; no substring semantics on the facet
        let none = filter_catalog(
            &catalog,
            "",
            &GroupFilter::Named("Spice".into()),
            DoshaFilter::All,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_dosha_filter_means_pacifies() {
        let catalog = sample_catalog();
        let pacify_pitta = filter_catalog(
            &catalog,
            "",
            &GroupFilter::All,
            DoshaFilter::Pacifying(Dosha::Pitta),
        );
        // Ginger aggravates pitta (+1) and chili aggravates (+2); only rice
        // and ghee pacify
        assert_eq!(pacify_pitta.len(), 2);
        assert!(pacify_pitta.iter().all(|f| f.ayurvedic_properties.dosha_impact.pitta < 0));

        // Neutral (0) does not match: chili is neutral on vata
        let pacify_vata = filter_catalog(
            &catalog,
            "",
            &GroupFilter::All,
            DoshaFilter::Pacifying(Dosha::Vata),
        );
        assert!(!pacify_vata.iter().any(|f| f.name == "Chili"));
        assert_eq!(pacify_vata.len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample_catalog();
        let group = GroupFilter::Named("Spices".into());
        let once = filter_catalog(&catalog, "digest", &group, DoshaFilter::Pacifying(Dosha::Kapha));
        let twice = filter_catalog(&once, "digest", &group, DoshaFilter::Pacifying(Dosha::Kapha));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_group_facets_first_seen_order() {
        let catalog = sample_catalog();
        let facets = group_facets(&catalog);
        assert_eq!(
            facets,
            vec![
                GroupFilter::All,
                GroupFilter::Named("Grains".into()),
                GroupFilter::Named("Spices".into()),
                GroupFilter::Named("Dairy".into()),
            ]
        );
    }
}
