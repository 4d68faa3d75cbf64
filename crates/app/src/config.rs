use std::time::Duration;

use appshop_auth::password::DEFAULT_COST;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://appshop.db";
pub const DEFAULT_CATALOG_URL: &str = "http://34.204.118.73/api/v1/";
pub const DEFAULT_RECIPES_URL: &str = "https://api.spoonacular.com/";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Runtime settings, read from `APPSHOP_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub catalog_url: String,
    pub recipes_url: String,
    pub recipes_api_key: Option<String>,
    /// Search run once at startup; none means no recipe request is made.
    pub recipes_query: Option<String>,
    pub bcrypt_cost: u32,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            recipes_url: DEFAULT_RECIPES_URL.to_string(),
            recipes_api_key: None,
            recipes_query: None,
            bcrypt_cost: DEFAULT_COST,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let recipes_api_key = get("APPSHOP_RECIPES_API_KEY");
        if recipes_api_key.is_none() {
            tracing::warn!("APPSHOP_RECIPES_API_KEY not set; recipe search will fail");
        }

        let bcrypt_cost = match get("APPSHOP_BCRYPT_COST") {
            Some(raw) => {
                parse_in_range("APPSHOP_BCRYPT_COST", &raw, 4..=31, "an integer in 4..=31")?
            }
            None => defaults.bcrypt_cost,
        };
        let http_timeout = match get("APPSHOP_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_in_range(
                "APPSHOP_HTTP_TIMEOUT_SECS",
                &raw,
                1..=u64::MAX,
                "a positive number of seconds",
            )?),
            None => defaults.http_timeout,
        };

        Ok(Self {
            database_url: get("APPSHOP_DATABASE_URL").unwrap_or(defaults.database_url),
            catalog_url: get("APPSHOP_CATALOG_URL").unwrap_or(defaults.catalog_url),
            recipes_url: get("APPSHOP_RECIPES_URL").unwrap_or(defaults.recipes_url),
            recipes_api_key,
            recipes_query: get("APPSHOP_RECIPES_QUERY"),
            bcrypt_cost,
            http_timeout,
        })
    }
}

fn parse_in_range<T>(
    var: &'static str,
    raw: &str,
    range: std::ops::RangeInclusive<T>,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd,
{
    raw.parse::<T>()
        .ok()
        .filter(|value| range.contains(value))
        .ok_or_else(|| ConfigError::Invalid {
            var,
            value: raw.to_string(),
            expected,
        })
}
