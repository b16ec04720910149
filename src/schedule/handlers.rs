use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{auth::AuthUser, state::AppState};

use super::assignments::{flatten_assignments, next_monday};
use super::dto::{GenerateScheduleRequest, GenerateScheduleResponse};
use super::generator::{generate_at, GenerateOptions};

pub fn schedule_routes() -> Router<AppState> {
    Router::new().route("/schedules/generate", post(generate_schedule))
}

/// POST /schedules/generate { profile, catalog, seed?, weeks?, start_date? }
#[instrument(skip(state, body))]
pub async fn generate_schedule(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<GenerateScheduleRequest>,
) -> Result<Json<GenerateScheduleResponse>, (StatusCode, String)> {
    if let Some(profile) = &body.profile {
        if profile.id != user_id {
            warn!(%user_id, profile_id = %profile.id, "profile does not belong to caller");
            return Err((StatusCode::FORBIDDEN, "Profile does not belong to caller".into()));
        }
    }

    let max_weeks = state.config.schedule.max_weeks;
    if let Some(weeks) = body.weeks {
        if weeks > max_weeks {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("weeks must be at most {}", max_weeks),
            ));
        }
    }

    let seed = body
        .seed
        .or(state.config.schedule.seed)
        .unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let now = OffsetDateTime::now_utc();
    let options = GenerateOptions {
        weeks: body.weeks,
        generated_at: now,
    };
    let schedule = generate_at(body.profile.as_ref(), &body.catalog, &mut rng, options).map_err(|e| {
        warn!(error = %e, %user_id, "schedule generation rejected");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let start_date = body.start_date.unwrap_or_else(|| next_monday(now.date()));
    let assignments = flatten_assignments(&schedule, start_date);

    info!(
        %user_id,
        seed,
        weeks = schedule.weeks.len(),
        total_meals = schedule.total_meals,
        "schedule generated"
    );
    Ok(Json(GenerateScheduleResponse {
        seed,
        schedule,
        assignments,
    }))
}
