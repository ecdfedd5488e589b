use std::env;
use std::str::FromStr;

use crate::utils::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub demo_password: String,
    pub search_debounce_ms: u64,
    pub seed_demo_users: bool,
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3002,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            demo_password: "password".to_string(),
            search_debounce_ms: 250,
            seed_demo_users: true,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

fn parsed<T: FromStr>(key: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has an invalid value '{}': {}", key, raw, e))),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Reads `.env` (if present) and then the process environment
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let bcrypt_cost = parsed("BCRYPT_COST", defaults.bcrypt_cost)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(AppError::Config(format!("BCRYPT_COST must be between 4 and 31, got {}", bcrypt_cost)));
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT", defaults.port)?,
            bcrypt_cost,
            demo_password: env::var("DEMO_PASSWORD").unwrap_or(defaults.demo_password),
            search_debounce_ms: parsed("SEARCH_DEBOUNCE_MS", defaults.search_debounce_ms)?,
            seed_demo_users: parsed("SEED_DEMO_USERS", defaults.seed_demo_users)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
