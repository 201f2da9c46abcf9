use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://bus_booking.db?mode=rwc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings, read once at startup and handed to Rocket as managed state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub cors_origin: String,
    pub tax_rate: Decimal,
    pub bcrypt_cost: u32,
    pub session_ttl: Duration,
}

impl AppConfig {
    // Load from the process environment (and .env when present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let tax_rate: Decimal = parse_var("TAX_RATE", Decimal::new(5, 2))?;
        if tax_rate.is_sign_negative() {
            return Err(ConfigError::Invalid {
                key: "TAX_RATE",
                value: tax_rate.to_string(),
            });
        }

        Ok(AppConfig {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            jwt_secret,
            port: parse_var("PORT", DEFAULT_PORT)?,
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".into()),
            tax_rate,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            session_ttl: Duration::from_secs(parse_var("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?),
        })
    }

    // Settings for tests: in-memory database, cheap hashing
    pub fn for_tests() -> Self {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            jwt_secret: "test-secret".into(),
            port: DEFAULT_PORT,
            cors_origin: "*".into(),
            tax_rate: Decimal::new(5, 2),
            bcrypt_cost: 4,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
