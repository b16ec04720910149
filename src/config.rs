use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Largest horizon a request may ask for.
    pub max_weeks: u32,
    /// Seed used when a request brings none. Entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_weeks: 12,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub jwt: JwtConfig,
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "mealmind".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "mealmind-users".into()),
        };
        let defaults = ScheduleConfig::default();
        let schedule = ScheduleConfig {
            max_weeks: std::env::var("SCHEDULE_MAX_WEEKS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(defaults.max_weeks),
            seed: std::env::var("SCHEDULE_SEED")
                .ok()
                .and_then(|v| v.parse::<u64>().ok()),
        };
        Ok(Self { jwt, schedule })
    }
}
