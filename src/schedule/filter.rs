use std::collections::HashMap;

use lazy_static::lazy_static;

use super::model::MealCatalogEntry;

lazy_static! {
    /// Canonical allergen → ingredient phrasings that betray it.
    static ref ALLERGEN_SYNONYMS: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("eggs", &["egg", "eggs", "egg white", "egg yolk", "mayonnaise", "albumin", "meringue"]);
        m.insert("dairy", &["milk", "cheese", "butter", "cream", "yogurt", "yoghurt", "whey", "casein", "lactose", "ghee"]);
        m.insert("nuts", &["nut", "almond", "walnut", "cashew", "pecan", "pistachio", "hazelnut", "peanut", "macadamia"]);
        m.insert("gluten", &["wheat", "flour", "bread", "pasta", "barley", "rye", "couscous", "seitan", "semolina"]);
        m.insert("shellfish", &["shrimp", "prawn", "crab", "lobster", "clam", "mussel", "oyster", "scallop"]);
        m.insert("soy", &["soy", "soya", "tofu", "tempeh", "edamame", "miso"]);
        m
    };

    /// Dietary plan (lowercased) → tags a meal must carry at least one of.
    static ref PLAN_TAGS: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("low carb", &["low carb"]);
        m.insert("keto", &["keto"]);
        m.insert("high protein", &["high protein"]);
        m.insert("vegetarian", &["vegetarian"]);
        m.insert("vegan", &["vegan"]);
        m.insert("chef's choice", &["high protein", "low carb", "keto"]);
        m
    };
}

/// Keeps the meals that are safe for `allergies` and fit `dietary_plan`.
///
/// An empty allergy list skips the allergy check; a plan with no entry in
/// the plan table skips tag filtering. The catalog is never touched, the
/// result borrows from it.
pub fn filter_catalog<'a>(
    catalog: &'a [MealCatalogEntry],
    allergies: &[String],
    dietary_plan: &str,
) -> Vec<&'a MealCatalogEntry> {
    let allergies: Vec<String> = allergies
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();
    let plan_tags = plan_target_tags(dietary_plan);

    catalog
        .iter()
        .filter(|meal| allergies.is_empty() || !has_allergen(meal, &allergies))
        .filter(|meal| plan_tags.map_or(true, |tags| carries_any_tag(meal, tags)))
        .collect()
}

/// Tags required by `plan`, or `None` when the plan is not in the table.
pub fn plan_target_tags(plan: &str) -> Option<&'static [&'static str]> {
    PLAN_TAGS.get(plan.trim().to_lowercase().as_str()).copied()
}

/// True when any ingredient of `meal` matches any of `allergies`.
pub fn conflicts_with_allergies(meal: &MealCatalogEntry, allergies: &[String]) -> bool {
    let allergies: Vec<String> = allergies
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();
    has_allergen(meal, &allergies)
}

// `allergies` are already trimmed and lowercased.
fn has_allergen(meal: &MealCatalogEntry, allergies: &[String]) -> bool {
    let ingredients: Vec<String> = meal
        .ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();

    allergies.iter().any(|allergy| {
        let synonyms = ALLERGEN_SYNONYMS.get(allergy.as_str()).copied().unwrap_or(&[]);
        ingredients.iter().any(|ingredient| {
            ingredient.contains(allergy.as_str())
                || allergy.contains(ingredient.as_str())
                || synonyms.iter().any(|s| ingredient.contains(s))
        })
    })
}

fn carries_any_tag(meal: &MealCatalogEntry, targets: &[&str]) -> bool {
    meal.dietary_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .any(|t| targets.contains(&t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::model::MealCategory;
    use crate::schedule::test_support::{meal, with_ingredients, with_tags};

    fn names(meals: &[&MealCatalogEntry]) -> Vec<String> {
        meals.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn no_allergies_and_unmapped_plan_keeps_everything() {
        let catalog = vec![
            with_ingredients(meal("Omelette", MealCategory::Breakfast, Some(4.0)), &["Eggs", "Milk"]),
            meal("Salad", MealCategory::Lunch, None),
        ];
        let kept = filter_catalog(&catalog, &[], "Something Custom");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn synonym_match_is_case_insensitive() {
        let catalog = vec![
            with_ingredients(meal("Mac and Cheese", MealCategory::Dinner, None), &["Pasta", "Cheddar CHEESE"]),
            with_ingredients(meal("Rice Bowl", MealCategory::Dinner, None), &["rice", "chicken"]),
        ];
        let kept = filter_catalog(&catalog, &["Dairy".to_string()], "");
        assert_eq!(names(&kept), vec!["Rice Bowl"]);
    }

    #[test]
    fn raw_allergy_text_matches_both_directions() {
        let catalog = vec![
            with_ingredients(meal("Kiwi Cup", MealCategory::Snacks, None), &["golden kiwi slices"]),
            with_ingredients(meal("Sesame Bar", MealCategory::Snacks, None), &["sesame"]),
            with_ingredients(meal("Apple", MealCategory::Snacks, None), &["apple"]),
        ];
        let kept = filter_catalog(&catalog, &["kiwi".to_string(), "toasted sesame".to_string()], "");
        assert_eq!(names(&kept), vec!["Apple"]);
    }

    #[test]
    fn blank_ingredients_and_allergies_never_match() {
        let catalog = vec![with_ingredients(meal("Toast", MealCategory::Breakfast, None), &["", "  "])];
        let kept = filter_catalog(&catalog, &["  ".to_string(), "shellfish".to_string()], "");
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn mapped_plan_requires_a_matching_tag() {
        let catalog = vec![
            with_tags(meal("Steak", MealCategory::Dinner, None), &["Keto", "High Protein"]),
            with_tags(meal("Pancakes", MealCategory::Breakfast, None), &["Vegetarian"]),
            meal("Untagged", MealCategory::Lunch, None),
        ];
        let kept = filter_catalog(&catalog, &[], "keto");
        assert_eq!(names(&kept), vec!["Steak"]);

        let kept = filter_catalog(&catalog, &[], "Chef's Choice");
        assert_eq!(names(&kept), vec!["Steak"]);
    }

    #[test]
    fn allergy_and_plan_checks_are_conjunctive() {
        let catalog = vec![
            with_ingredients(
                with_tags(meal("Shrimp Zoodles", MealCategory::Dinner, None), &["Low Carb"]),
                &["shrimp", "zucchini"],
            ),
            with_tags(meal("Chicken Zoodles", MealCategory::Dinner, None), &["Low Carb"]),
            meal("Burger", MealCategory::Dinner, None),
        ];
        let kept = filter_catalog(&catalog, &["shellfish".to_string()], "Low Carb");
        assert_eq!(names(&kept), vec!["Chicken Zoodles"]);
    }

    #[test]
    fn conflicts_helper_agrees_with_filter() {
        let m = with_ingredients(meal("Pad Thai", MealCategory::Dinner, None), &["rice noodles", "Peanuts"]);
        assert!(conflicts_with_allergies(&m, &["nuts".to_string()]));
        assert!(!conflicts_with_allergies(&m, &["gluten".to_string()]));
        assert!(!conflicts_with_allergies(&m, &[]));
    }

    #[test]
    fn unknown_plan_has_no_target_tags() {
        assert!(plan_target_tags("Mediterranean").is_none());
        assert_eq!(plan_target_tags(" KETO "), Some(&["keto"][..]));
    }
}
