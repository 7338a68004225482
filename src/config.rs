use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the process environment; call after `dotenvy::dotenv()`.
    pub fn load() -> Self {
        Self {
            database_url: try_load(
                "DATABASE_URL",
                "sqlite://codeconnect.db?mode=rwc".to_string(),
            ),
            database_max_connections: try_load("DATABASE_MAX_CONNECTIONS", 5),
            host: try_load("HOST", "127.0.0.1".to_string()),
            port: try_load("PORT", 3000),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_or_default(key, &raw, default),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw.trim().parse() {
        Ok(v) => v,
        Err(e) => {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }
    }
}
