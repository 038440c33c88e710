//! Server configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_TEMPLATE_DIR: &str = "./templates";
const DEFAULT_CACHE_TTL_SECS: u64 = 600;
const DEFAULT_CACHE_SWEEP_SECS: u64 = 300;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub template_dir: PathBuf,
    pub cache_ttl_secs: u64,
    pub cache_sweep_secs: u64,
    pub host: String,
    pub port: u16,
    /// Prefix for view links; built from the request when absent.
    pub public_base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_sweep_secs: DEFAULT_CACHE_SWEEP_SECS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_base_url: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            template_dir: text("PDF_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            cache_ttl_secs: parse_or("PDF_CACHE_TTL_SECS", text("PDF_CACHE_TTL_SECS"), defaults.cache_ttl_secs),
            cache_sweep_secs: parse_or(
                "PDF_CACHE_SWEEP_SECS",
                text("PDF_CACHE_SWEEP_SECS"),
                defaults.cache_sweep_secs,
            ),
            host: text("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or("SERVER_PORT", text("SERVER_PORT"), defaults.port),
            public_base_url: text("PUBLIC_BASE_URL").map(|url| url.trim_end_matches('/').to_string()),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + PartialOrd + Default + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            log::warn!("Invalid {key}={raw:?}, using default {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().cache_ttl_secs, 600);
        assert_eq!(ServerConfig::default().cache_sweep_secs, 300);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PDF_TEMPLATE_DIR", "/srv/templates"),
            ("PDF_CACHE_TTL_SECS", "120"),
            ("SERVER_PORT", "9000"),
            ("PUBLIC_BASE_URL", "https://docs.example.com/"),
        ]);
        assert_eq!(config.template_dir, PathBuf::from("/srv/templates"));
        assert_eq!(config.cache_ttl_secs, 120);
        assert_eq!(config.port, 9000);
        assert_eq!(config.public_base_url.as_deref(), Some("https://docs.example.com"));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config(&[
            ("PDF_CACHE_TTL_SECS", "ten minutes"),
            ("PDF_CACHE_SWEEP_SECS", "0"),
            ("SERVER_PORT", "70000"),
        ]);
        assert_eq!(config.cache_ttl_secs, 600);
        assert_eq!(config.cache_sweep_secs, 300);
        assert_eq!(config.port, 8080);
    }
}
