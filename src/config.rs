use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    /// Clock skew tolerated when checking `exp`.
    pub leeway_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

/// Longest token lifetime accepted from configuration (one year).
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;
        let ttl_minutes = parse_or(&get, "JWT_TTL_MINUTES", 60 * 24)?;
        anyhow::ensure!(
            (1..=MAX_TTL_MINUTES).contains(&ttl_minutes),
            "JWT_TTL_MINUTES must be between 1 and {MAX_TTL_MINUTES}, got {ttl_minutes}"
        );
        let jwt = JwtConfig {
            secret: get("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: get("JWT_ISSUER").unwrap_or_else(|| "textpost".into()),
            audience: get("JWT_AUDIENCE").unwrap_or_else(|| "textpost-users".into()),
            ttl_minutes,
            leeway_seconds: parse_or(&get, "JWT_LEEWAY_SECONDS", 60)?,
        };
        let port = match get("PORT") {
            Some(_) => parse_or(&get, "PORT", 8080)?,
            None => parse_or(&get, "APP_PORT", 8080)?,
        };
        Ok(Self {
            database_url,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 10)?,
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            jwt,
        })
    }
}

/// Parses `key` when it is set; an unset key gives `default`, a malformed one an error.
fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid {key} value {raw:?}")),
        None => Ok(default),
    }
}
