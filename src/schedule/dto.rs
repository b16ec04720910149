use serde::{Deserialize, Serialize};
use time::Date;

use super::assignments::MealAssignment;
use super::model::{MealCatalogEntry, Schedule, UserProfile};

/// Request body for schedule generation. Catalog and profile arrive already
/// decoded by the caller.
#[derive(Debug, Deserialize)]
pub struct GenerateScheduleRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub catalog: Vec<MealCatalogEntry>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub weeks: Option<u32>,
    #[serde(default)]
    pub start_date: Option<Date>, // Monday of week 1; next Monday when absent
}

#[derive(Debug, Serialize)]
pub struct GenerateScheduleResponse {
    pub seed: u64,
    pub schedule: Schedule,
    pub assignments: Vec<MealAssignment>,
}
