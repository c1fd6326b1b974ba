use anyhow::Context;
use std::env;

/// Application configuration, read once at startup and passed into
/// construction. Services never read ambient environment state themselves.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Symmetric signing secret shared by token encode and decode.
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expiry: i64,
    pub db_max_connections: u32,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let jwt_secret = env::var("JWT_SECRET_KEY").context("JWT_SECRET_KEY must be set")?;

        let access_token_expiry = env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "1500".to_string())
            .parse()
            .context("JWT_ACCESS_TOKEN_EXPIRY must be an integer number of seconds")?;

        let refresh_token_expiry = env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "172800".to_string())
            .parse()
            .context("JWT_REFRESH_TOKEN_EXPIRY must be an integer number of seconds")?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .context("DB_MAX_CONNECTIONS must be an integer")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            database_url,
            jwt_secret,
            access_token_expiry,
            refresh_token_expiry,
            db_max_connections,
            port,
        })
    }
}
