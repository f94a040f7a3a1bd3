use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Neither JWT_SECRET_KEY nor SECRET_KEY is set")]
    MissingSecret,
    #[error("Invalid {key} value: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// `SECRET_KEY`. Nothing reads it directly; it only backs `jwt_secret`
    /// when `JWT_SECRET_KEY` is unset.
    pub secret_key: Option<String>,
    pub jwt_secret: String,
    pub jwt_expires_minutes: i64,
    pub db_pool_size: u32,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first so a
    /// local `.env` file is honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY").filter(|s| !s.is_empty());
        // The signing secret falls back to the application secret.
        let jwt_secret = lookup("JWT_SECRET_KEY")
            .filter(|s| !s.is_empty())
            .or_else(|| secret_key.clone())
            .ok_or(ConfigError::MissingSecret)?;

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                reason: format!("{bcrypt_cost} is outside 4..=31"),
            });
        }

        let jwt_expires_minutes = parse_or(&lookup, "JWT_EXPIRES_MINUTES", 15)?;
        if jwt_expires_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRES_MINUTES",
                reason: "must be positive".into(),
            });
        }

        let db_pool_size = parse_or(&lookup, "DB_POOL_SIZE", 10)?;
        if db_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_POOL_SIZE",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "fitcooker.db".into()),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:5000".into()),
            secret_key,
            jwt_secret,
            jwt_expires_minutes,
            db_pool_size,
            bcrypt_cost,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
        }),
        None => {
            log::info!("{key} not set, using default");
            Ok(default)
        }
    }
}
