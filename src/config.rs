use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Connection settings for the student store; all the seed tool needs.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    /// Upper bound on a single student lookup before it counts as failed.
    pub lookup_timeout_ms: u64,
    /// Meeting link handed out once the classroom unlocks.
    pub classroom_url: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: parse(&var, "DB_MAX_CONNECTIONS").unwrap_or(10),
        })
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database = DatabaseConfig::from_vars(&var)?;
        let jwt = JwtConfig {
            secret: var("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: var("JWT_ISSUER").unwrap_or_else(|| "studentportal".into()),
            audience: var("JWT_AUDIENCE").unwrap_or_else(|| "studentportal-students".into()),
            ttl_minutes: parse(&var, "JWT_TTL_MINUTES").unwrap_or(60),
        };
        Ok(Self {
            database,
            jwt,
            lookup_timeout_ms: parse(&var, "LOOKUP_TIMEOUT_MS").unwrap_or(5_000),
            classroom_url: var("CLASSROOM_URL").filter(|v| !v.is_empty()),
        })
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

fn parse<T: std::str::FromStr>(var: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|v| v.parse::<T>().ok())
}
