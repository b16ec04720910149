use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use super::categorize::categorize;
use super::daily::assemble_day;
use super::error::ScheduleError;
use super::filter::filter_catalog;
use super::model::{MealCatalogEntry, Schedule, UserProfile, WeekSchedule, Weekday};
use super::quota::QuotaPolicy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Horizon override; the tier default applies when `None`.
    pub weeks: Option<u32>,
    pub generated_at: OffsetDateTime,
}

impl GenerateOptions {
    pub fn at(generated_at: OffsetDateTime) -> Self {
        Self {
            weeks: None,
            generated_at,
        }
    }

    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = Some(weeks);
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::at(OffsetDateTime::now_utc())
    }
}

/// Builds a fresh schedule for `profile` from `catalog`, stamped now.
pub fn generate<R: Rng + ?Sized>(
    profile: Option<&UserProfile>,
    catalog: &[MealCatalogEntry],
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    generate_at(profile, catalog, rng, GenerateOptions::default())
}

/// Same as [`generate`] with an explicit horizon and timestamp. Equal seeds
/// and options give equal schedules.
///
/// Only a missing profile or an empty catalog is an error. A profile with
/// no meal types or a zero meal count gets a schedule with empty days.
pub fn generate_at<R: Rng + ?Sized>(
    profile: Option<&UserProfile>,
    catalog: &[MealCatalogEntry],
    rng: &mut R,
    options: GenerateOptions,
) -> Result<Schedule, ScheduleError> {
    let profile = validate(profile, catalog)?;
    Ok(assemble_schedule(profile, catalog, rng, options))
}

fn validate<'p>(
    profile: Option<&'p UserProfile>,
    catalog: &[MealCatalogEntry],
) -> Result<&'p UserProfile, ScheduleError> {
    let profile = profile.ok_or(ScheduleError::MissingProfile)?;
    if catalog.is_empty() {
        return Err(ScheduleError::EmptyCatalog);
    }
    Ok(profile)
}

#[instrument(
    level = "debug",
    skip_all,
    fields(user_id = %profile.id, tier = ?profile.subscription_tier)
)]
fn assemble_schedule<R: Rng + ?Sized>(
    profile: &UserProfile,
    catalog: &[MealCatalogEntry],
    rng: &mut R,
    options: GenerateOptions,
) -> Schedule {
    let eligible = filter_catalog(catalog, &profile.allergies, &profile.dietary_plan);
    debug!(
        kept = eligible.len(),
        removed = catalog.len() - eligible.len(),
        "catalog filtered"
    );
    let pools = categorize(&eligible);

    let policy = QuotaPolicy::for_tier(profile.subscription_tier);
    let week_count = options
        .weeks
        .unwrap_or_else(|| profile.subscription_tier.default_weeks());

    let mut weeks = Vec::with_capacity(week_count as usize);
    let mut total_meals = 0;
    let mut five_star_meals = 0;

    for week_number in 1..=week_count {
        let mut budget = policy.five_star_budget(week_number);
        let mut used_ids = HashSet::new();
        let mut week = WeekSchedule {
            week_number,
            days: BTreeMap::new(),
            total_meals: 0,
            five_star_meals: 0,
        };

        for day in Weekday::ALL {
            let assembled = assemble_day(&pools, profile, &mut budget, &mut used_ids, rng);
            week.total_meals += assembled.meals.len() as u32;
            week.five_star_meals += assembled.five_star_meals;
            week.days.insert(day, assembled.meals);
        }

        debug!(
            week = week_number,
            total_meals = week.total_meals,
            five_star_meals = week.five_star_meals,
            "week assembled"
        );
        total_meals += week.total_meals;
        five_star_meals += week.five_star_meals;
        weeks.push(week);
    }

    info!(weeks = week_count, total_meals, five_star_meals, "schedule generated");

    Schedule {
        user_id: profile.id,
        subscription_tier: profile.subscription_tier,
        weeks,
        total_meals,
        five_star_meals,
        generated_at: options.generated_at,
    }
}
