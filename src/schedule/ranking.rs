use std::cmp::Ordering;

use super::model::{Goal, MealCatalogEntry};

/// Stable sort of `candidates` so the best fit for `goal` comes first.
/// Equal keys keep their incoming order.
pub fn rank_by_goal(candidates: &mut [&MealCatalogEntry], goal: Goal) {
    candidates.sort_by(|a, b| compare_for_goal(goal, a, b));
}

pub fn compare_for_goal(goal: Goal, a: &MealCatalogEntry, b: &MealCatalogEntry) -> Ordering {
    match goal {
        Goal::WeightLoss => a.calories.total_cmp(&b.calories),
        Goal::WeightGain => b.calories.total_cmp(&a.calories),
        Goal::EatingHealthy => b.fiber.total_cmp(&a.fiber),
        Goal::KetoDiet => a.carbs.total_cmp(&b.carbs),
        Goal::StayingFit | Goal::Unspecified => b.protein.total_cmp(&a.protein),
    }
}
