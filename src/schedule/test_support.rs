use uuid::Uuid;

use super::model::{Goal, MealCatalogEntry, MealCategory, SubscriptionTier, UserProfile};

pub fn meal(name: &str, category: MealCategory, rating: Option<f64>) -> MealCatalogEntry {
    MealCatalogEntry {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        rating,
        calories: 500.0,
        protein: 30.0,
        carbs: 40.0,
        fat: 15.0,
        fiber: 5.0,
        price: None,
        dietary_tags: Vec::new(),
        ingredients: Vec::new(),
    }
}

pub fn with_ingredients(mut meal: MealCatalogEntry, ingredients: &[&str]) -> MealCatalogEntry {
    meal.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    meal
}

pub fn with_tags(mut meal: MealCatalogEntry, tags: &[&str]) -> MealCatalogEntry {
    meal.dietary_tags = tags.iter().map(|s| s.to_string()).collect();
    meal
}

pub fn profile(tier: SubscriptionTier, meal_types: &[MealCategory], meal_count: u32) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        subscription_tier: tier,
        dietary_plan: String::new(),
        goal: Goal::Unspecified,
        meal_count,
        meal_types: meal_types.to_vec(),
        allergies: Vec::new(),
    }
}

/// `per_tier` meals of every rating tier for each category.
pub fn rich_catalog(per_tier: usize) -> Vec<MealCatalogEntry> {
    let categories = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snacks,
    ];
    let mut out = Vec::new();
    for category in categories {
        for rating in [5.0, 4.5, 3.5, 2.5, 1.5] {
            for i in 0..per_tier {
                let mut m = meal(&format!("{:?} {} #{}", category, rating, i), category, Some(rating));
                m.calories = 300.0 + (i as f64) * 40.0;
                m.protein = 10.0 + (i as f64) * 3.0;
                out.push(m);
            }
        }
    }
    out
}
