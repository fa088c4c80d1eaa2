use std::env;

/// Immutable runtime configuration, built once in `main` and carried in
/// `AppState`. Nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "este-es-el-seed-desarrollo".to_string());
        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .unwrap_or(48);
        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            token_ttl_hours,
        })
    }
}
