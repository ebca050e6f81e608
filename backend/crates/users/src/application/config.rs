//! Application Configuration
//!
//! Configuration for the Users application layer.

use std::env;

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;

/// Environment variable names
pub const ENV_DEFAULT_PAGE_LIMIT: &str = "USERS_DEFAULT_PAGE_LIMIT";
pub const ENV_MAX_PAGE_LIMIT: &str = "USERS_MAX_PAGE_LIMIT";
pub const ENV_MAX_ENTRIES: &str = "USERS_MAX_ENTRIES";

/// Users application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersConfig {
    /// Page size used when a list request gives none
    pub default_page_limit: u32,
    /// Upper bound for a requested page size
    pub max_page_limit: u32,
    /// Capacity of the in-memory store (`None` = unbounded)
    pub max_entries: Option<usize>,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_page_limit: 20,
            max_page_limit: 100,
            max_entries: None,
        }
    }
}

impl UsersConfig {
    /// Load from environment, falling back to defaults for unset variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let default_page_limit = match lookup(ENV_DEFAULT_PAGE_LIMIT) {
            Some(raw) => parse_var(ENV_DEFAULT_PAGE_LIMIT, &raw)?,
            None => defaults.default_page_limit,
        };
        let max_page_limit = match lookup(ENV_MAX_PAGE_LIMIT) {
            Some(raw) => parse_var(ENV_MAX_PAGE_LIMIT, &raw)?,
            None => defaults.max_page_limit,
        };
        let max_entries = match lookup(ENV_MAX_ENTRIES) {
            Some(raw) => Some(parse_var(ENV_MAX_ENTRIES, &raw)?),
            None => defaults.max_entries,
        };

        let config = Self {
            default_page_limit,
            max_page_limit,
            max_entries,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency
    pub fn validate(&self) -> AppResult<()> {
        if self.default_page_limit == 0 || self.max_page_limit == 0 {
            return Err(AppError::bad_request("Page limits must be at least 1"));
        }
        if self.default_page_limit > self.max_page_limit {
            return Err(AppError::bad_request(format!(
                "{} ({}) must not exceed {} ({})",
                ENV_DEFAULT_PAGE_LIMIT,
                self.default_page_limit,
                ENV_MAX_PAGE_LIMIT,
                self.max_page_limit
            )));
        }
        Ok(())
    }
}

fn parse_var<T>(key: &'static str, raw: &str) -> AppResult<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.trim()
        .parse::<T>()
        .map_app_err(ErrorKind::BadRequest, format!("Invalid value for {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = UsersConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, UsersConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = UsersConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_PAGE_LIMIT, "5"),
            (ENV_MAX_PAGE_LIMIT, " 50 "),
            (ENV_MAX_ENTRIES, "1000"),
        ]))
        .unwrap();
        assert_eq!(config.default_page_limit, 5);
        assert_eq!(config.max_page_limit, 50);
        assert_eq!(config.max_entries, Some(1000));
    }

    #[test]
    fn test_invalid_number() {
        let err = UsersConfig::from_lookup(lookup(&[(ENV_MAX_ENTRIES, "lots")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.message().contains(ENV_MAX_ENTRIES));
    }

    #[test]
    fn test_default_above_max_rejected() {
        let err = UsersConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_PAGE_LIMIT, "200"),
            (ENV_MAX_PAGE_LIMIT, "100"),
        ]))
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
