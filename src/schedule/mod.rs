pub mod assignments;
pub mod categorize;
pub mod daily;
pub mod dto;
pub mod error;
pub mod filter;
pub mod generator;
pub mod handlers;
pub mod model;
pub mod quota;
pub mod ranking;

#[cfg(test)]
mod test_support;

use crate::state::AppState;
use axum::Router;

pub use error::ScheduleError;
pub use generator::{generate, generate_at, GenerateOptions};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::schedule_routes())
}
