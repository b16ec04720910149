use std::collections::BTreeMap;

use super::model::{MealCatalogEntry, MealCategory};

/// Rating assumed for meals that have never been rated.
pub const DEFAULT_RATING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingTier {
    OneStar,
    TwoStar,
    ThreeStar,
    FourStar,
    FiveStar,
}

impl RatingTier {
    /// Tiers below the premium one, best first.
    pub const REGULAR: [RatingTier; 4] = [
        RatingTier::FourStar,
        RatingTier::ThreeStar,
        RatingTier::TwoStar,
        RatingTier::OneStar,
    ];

    pub fn from_rating(rating: Option<f64>) -> Self {
        let r = rating.filter(|r| r.is_finite()).unwrap_or(DEFAULT_RATING).floor();
        if r >= 5.0 {
            RatingTier::FiveStar
        } else if r >= 4.0 {
            RatingTier::FourStar
        } else if r >= 3.0 {
            RatingTier::ThreeStar
        } else if r >= 2.0 {
            RatingTier::TwoStar
        } else {
            RatingTier::OneStar
        }
    }

    pub fn of(meal: &MealCatalogEntry) -> Self {
        Self::from_rating(meal.rating)
    }
}

/// Eligible meals grouped by rating tier and category, catalog order kept
/// inside every group.
#[derive(Debug, Clone, Default)]
pub struct CategorizedPools<'a> {
    groups: BTreeMap<(RatingTier, MealCategory), Vec<&'a MealCatalogEntry>>,
}

impl<'a> CategorizedPools<'a> {
    pub fn pool(&self, tier: RatingTier, category: MealCategory) -> &[&'a MealCatalogEntry] {
        self.groups
            .get(&(tier, category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn categorize<'a>(meals: &[&'a MealCatalogEntry]) -> CategorizedPools<'a> {
    let mut pools = CategorizedPools::default();
    for meal in meals {
        pools
            .groups
            .entry((RatingTier::of(meal), meal.category))
            .or_default()
            .push(*meal);
    }
    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::test_support::meal;

    #[test]
    fn ratings_floor_into_tiers() {
        assert_eq!(RatingTier::from_rating(Some(5.0)), RatingTier::FiveStar);
        assert_eq!(RatingTier::from_rating(Some(4.99)), RatingTier::FourStar);
        assert_eq!(RatingTier::from_rating(Some(4.0)), RatingTier::FourStar);
        assert_eq!(RatingTier::from_rating(Some(3.7)), RatingTier::ThreeStar);
        assert_eq!(RatingTier::from_rating(Some(2.1)), RatingTier::TwoStar);
        assert_eq!(RatingTier::from_rating(Some(1.0)), RatingTier::OneStar);
        assert_eq!(RatingTier::from_rating(Some(0.4)), RatingTier::OneStar);
    }

    #[test]
    fn missing_or_invalid_rating_is_three_star() {
        assert_eq!(RatingTier::from_rating(None), RatingTier::ThreeStar);
        assert_eq!(RatingTier::from_rating(Some(f64::NAN)), RatingTier::ThreeStar);
    }

    #[test]
    fn groups_by_tier_and_category_in_catalog_order() {
        let catalog = vec![
            meal("A", MealCategory::Lunch, Some(5.0)),
            meal("B", MealCategory::Lunch, None),
            meal("C", MealCategory::Dinner, Some(4.2)),
            meal("D", MealCategory::Lunch, Some(3.1)),
        ];
        let refs: Vec<&MealCatalogEntry> = catalog.iter().collect();
        let pools = categorize(&refs);

        assert_eq!(pools.len(), 4);
        assert_eq!(pools.pool(RatingTier::FiveStar, MealCategory::Lunch)[0].name, "A");
        let three: Vec<&str> = pools
            .pool(RatingTier::ThreeStar, MealCategory::Lunch)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(three, vec!["B", "D"]);
        assert_eq!(pools.pool(RatingTier::FourStar, MealCategory::Dinner)[0].name, "C");
        assert!(pools.pool(RatingTier::FiveStar, MealCategory::Breakfast).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_pools() {
        let pools = categorize(&[]);
        assert!(pools.is_empty());
    }
}
