use axum::extract::FromRef;

use crate::{
    config::AppConfig,
    db::{DbPool, OrmConn},
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub config: AppConfig,
}

// Lets extractors that only need configuration (the bearer-token check)
// take it from the shared state instead of ambient environment variables.
impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
