use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

use super::categorize::{CategorizedPools, RatingTier};
use super::model::{DayMeals, Goal, MealCatalogEntry, MealCategory, UserProfile};
use super::ranking::rank_by_goal;

/// How many of the best-ranked candidates a slot picks from.
pub const TOP_CANDIDATES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledDay {
    pub meals: DayMeals,
    pub five_star_meals: u32,
}

/// Slot order for one day: `meal_types` shuffled, then tiled end to end and
/// cut to `meal_count` entries.
pub fn slot_plan<R: Rng + ?Sized>(
    meal_types: &[MealCategory],
    meal_count: u32,
    rng: &mut R,
) -> Vec<MealCategory> {
    let mut shuffled = meal_types.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .iter()
        .copied()
        .cycle()
        .take(meal_count as usize)
        .collect()
}

/// Picks a meal for one slot, or `None` when nothing eligible is left.
///
/// Premium requests draw from the five-star pool of `category`, or the
/// four-star pool when there are no five-star meals at all; once those are
/// used up the slot stays empty. Regular requests draw from every tier
/// except five-star, which stays reserved for the quota.
pub fn select_meal_for_slot<'a, R: Rng + ?Sized>(
    pools: &CategorizedPools<'a>,
    category: MealCategory,
    wants_five_star: bool,
    goal: Goal,
    used_ids: &HashSet<Uuid>,
    rng: &mut R,
) -> Option<&'a MealCatalogEntry> {
    let candidates: Vec<&'a MealCatalogEntry> = if wants_five_star {
        let premium = pools.pool(RatingTier::FiveStar, category);
        if premium.is_empty() {
            pools.pool(RatingTier::FourStar, category).to_vec()
        } else {
            premium.to_vec()
        }
    } else {
        RatingTier::REGULAR
            .iter()
            .flat_map(|tier| pools.pool(*tier, category).iter().copied())
            .collect()
    };
    pick_ranked(candidates, goal, used_ids, rng)
}

fn pick_ranked<'a, R: Rng + ?Sized>(
    mut candidates: Vec<&'a MealCatalogEntry>,
    goal: Goal,
    used_ids: &HashSet<Uuid>,
    rng: &mut R,
) -> Option<&'a MealCatalogEntry> {
    candidates.retain(|m| !used_ids.contains(&m.id));
    if candidates.is_empty() {
        return None;
    }
    rank_by_goal(&mut candidates, goal);
    candidates.truncate(TOP_CANDIDATES);
    candidates.choose(rng).copied()
}

/// Fills one day for `profile`.
///
/// `remaining_five_star` is the week's premium budget and `used_ids` the
/// meals already served this week; both are updated in place. A category
/// is filled at most once per day, so repeated entries in the slot plan
/// are skipped and `meal_count` acts as an upper bound.
pub fn assemble_day<R: Rng + ?Sized>(
    pools: &CategorizedPools<'_>,
    profile: &UserProfile,
    remaining_five_star: &mut u32,
    used_ids: &mut HashSet<Uuid>,
    rng: &mut R,
) -> AssembledDay {
    let mut day = AssembledDay::default();

    for category in slot_plan(&profile.meal_types, profile.meal_count, rng) {
        if day.meals.contains_key(&category) {
            continue;
        }

        let wants_five_star = *remaining_five_star > 0;
        let Some(meal) = select_meal_for_slot(pools, category, wants_five_star, profile.goal, used_ids, rng)
        else {
            continue;
        };

        used_ids.insert(meal.id);
        if RatingTier::of(meal) == RatingTier::FiveStar {
            *remaining_five_star = remaining_five_star.saturating_sub(1);
            day.five_star_meals += 1;
        }
        day.meals.insert(category, meal.clone());
    }

    day
}
