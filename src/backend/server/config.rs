/**
 * Server Configuration
 *
 * Environment-driven configuration for the HTTP server. Every value has a
 * development default so the server starts with nothing configured; the
 * defaults are logged as warnings where they matter.
 *
 * # Variables
 *
 * - `SERVER_PORT`     - listen port (default 8080)
 * - `DATABASE_URL`    - Postgres connection string; unset falls back to
 *   the in-memory store
 * - `JWT_SECRET`      - token signing secret; the development fallback is
 *   not suitable for any real deployment
 * - `TOKEN_TTL_DAYS`  - token lifetime in days (default 30). `0` disables
 *   expiry entirely, making every issued token valid until the secret
 *   changes; acceptable for local development, a real liability anywhere
 *   else since a leaked token can never age out.
 */

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TTL_DAYS: u64 = 30;
const DEV_SECRET: &str = "blogit-dev-secret-change-in-production";

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub token_secret: String,
    /// Token lifetime in days; `None` disables expiry
    pub token_ttl_days: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL").ok();

        let token_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            DEV_SECRET.to_string()
        });

        let token_ttl_days = match std::env::var("TOKEN_TTL_DAYS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    tracing::warn!("token expiry disabled; issued tokens never age out");
                    None
                }
                Ok(days) => Some(days),
                Err(_) => {
                    tracing::warn!("invalid TOKEN_TTL_DAYS {raw:?}, using default");
                    Some(DEFAULT_TTL_DAYS)
                }
            },
            Err(_) => Some(DEFAULT_TTL_DAYS),
        };

        Self { port, database_url, token_secret, token_ttl_days }
    }

    /// Token lifetime in seconds, for the token service
    pub fn token_ttl_secs(&self) -> Option<u64> {
        self.token_ttl_days.map(|days| days * 24 * 60 * 60)
    }
}
