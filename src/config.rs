use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env` via dotenvy).
///
/// - `DATABASE_URL` (required)
/// - `HOST`, default `0.0.0.0`
/// - `PORT`, default `8080`
/// - `DEFAULT_PAGE_SIZE`, default `5`
/// - `MAX_PAGE_SIZE`, default `100`
/// - `DB_POOL_SIZE`, default `10`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub db_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let config = Config {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", 5)?,
            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", 100)?,
            db_pool_size: parse_or(&lookup, "DB_POOL_SIZE", 10)?,
        };

        if config.max_page_size < 1 {
            return Err(ConfigError::Invalid {
                name: "MAX_PAGE_SIZE",
                value: config.max_page_size.to_string(),
            });
        }
        if config.default_page_size < 1 || config.default_page_size > config.max_page_size {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_PAGE_SIZE",
                value: config.default_page_size.to_string(),
            });
        }
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply() {
        let c = config(&[("DATABASE_URL", "postgres://localhost/northwind")]).unwrap();
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 8080);
        assert_eq!(c.default_page_size, 5);
        assert_eq!(c.max_page_size, 100);
        assert_eq!(c.db_pool_size, 10);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(config(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn default_page_size_must_fit_maximum() {
        let err = config(&[
            ("DATABASE_URL", "x"),
            ("DEFAULT_PAGE_SIZE", "50"),
            ("MAX_PAGE_SIZE", "20"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "DEFAULT_PAGE_SIZE", .. }));
    }
}
