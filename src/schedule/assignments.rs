use serde::Serialize;
use time::{Date, Duration};
use uuid::Uuid;

use super::model::{MealCategory, Schedule};

/// One delivered meal, flattened out of a schedule for delivery tracking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAssignment {
    pub user_id: Uuid,
    pub meal_id: Uuid,
    pub meal_name: String,
    pub date: Date,
    pub category: MealCategory,
    pub week_number: u32,
}

/// Flattens `schedule` into dated rows. Monday of week 1 is `start_date`,
/// which callers normally align to a Monday.
pub fn flatten_assignments(schedule: &Schedule, start_date: Date) -> Vec<MealAssignment> {
    let mut rows = Vec::with_capacity(schedule.total_meals as usize);
    for week in &schedule.weeks {
        let week_offset = 7 * i64::from(week.week_number.saturating_sub(1));
        for (day, category, meal) in week.meals() {
            let Some(date) = start_date.checked_add(Duration::days(week_offset + i64::from(day.index())))
            else {
                continue;
            };
            rows.push(MealAssignment {
                user_id: schedule.user_id,
                meal_id: meal.id,
                meal_name: meal.name.clone(),
                date,
                category,
                week_number: week.week_number,
            });
        }
    }
    rows
}

/// `today` when it is a Monday, otherwise the Monday after it.
pub fn next_monday(today: Date) -> Date {
    let days_ahead = (7 - i64::from(today.weekday().number_days_from_monday())) % 7;
    today.checked_add(Duration::days(days_ahead)).unwrap_or(today)
}
