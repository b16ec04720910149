use crate::auth::jwt::JwtKeys;
use crate::config::{AppConfig, JwtConfig, ScheduleConfig};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self { config })
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn fake() -> Self {
        Self::from_config(AppConfig {
            jwt: JwtConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
            },
            schedule: ScheduleConfig::default(),
        })
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        JwtKeys::from_config(&state.config.jwt)
    }
}
