use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Meal slot category. Catalog entries without one are treated as lunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    #[serde(alias = "Breakfast")]
    Breakfast,
    #[default]
    #[serde(alias = "Lunch")]
    Lunch,
    #[serde(alias = "Dinner")]
    Dinner,
    #[serde(alias = "Snacks", alias = "snack")]
    Snacks,
}

/// One meal as decoded from the catalog. Read-only for a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCatalogEntry {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: MealCategory,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[serde(alias = "Weekly")]
    Weekly,
    #[serde(alias = "Monthly")]
    Monthly,
    #[serde(alias = "Quarterly")]
    Quarterly,
}

impl SubscriptionTier {
    /// Number of weeks generated when the caller does not ask for a horizon.
    pub fn default_weeks(self) -> u32 {
        match self {
            SubscriptionTier::Weekly | SubscriptionTier::Monthly => 4,
            SubscriptionTier::Quarterly => 12,
        }
    }
}

/// Fitness goal used to rank otherwise-equal candidates.
///
/// Anything the decoder does not recognise lands in `Unspecified`, which
/// ranks by descending protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Goal {
    #[serde(alias = "Weight Loss", alias = "weight_loss")]
    WeightLoss,
    #[serde(alias = "Weight Gain", alias = "weight_gain")]
    WeightGain,
    #[serde(alias = "Staying Fit", alias = "staying_fit")]
    StayingFit,
    #[serde(alias = "Eating Healthy", alias = "eating_healthy")]
    EatingHealthy,
    #[serde(alias = "Keto Diet", alias = "keto_diet")]
    KetoDiet,
    #[default]
    #[serde(other)]
    Unspecified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(alias = "subscriptionTier")]
    pub subscription_tier: SubscriptionTier,
    #[serde(default, alias = "dietaryPlan")]
    pub dietary_plan: String,
    #[serde(default)]
    pub goal: Goal,
    #[serde(alias = "mealCount")]
    pub meal_count: u32,
    #[serde(alias = "mealTypes")]
    pub meal_types: Vec<MealCategory>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Days since Monday.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Meals of one day, at most one per category. A missing key means no meal
/// could be assigned to that slot.
pub type DayMeals = BTreeMap<MealCategory, MealCatalogEntry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub week_number: u32,
    pub days: BTreeMap<Weekday, DayMeals>,
    pub total_meals: u32,
    pub five_star_meals: u32,
}

impl WeekSchedule {
    /// Every assigned meal of the week in day order.
    pub fn meals(&self) -> impl Iterator<Item = (Weekday, MealCategory, &MealCatalogEntry)> + '_ {
        self.days
            .iter()
            .flat_map(|(day, meals)| meals.iter().map(move |(cat, meal)| (*day, *cat, meal)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub user_id: Uuid,
    pub subscription_tier: SubscriptionTier,
    pub weeks: Vec<WeekSchedule>,
    pub total_meals: u32,
    pub five_star_meals: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}
