//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,spa_shell=debug";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got `{value}`")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// tracing-subscriber filter directive
    /// Example: info,tower_http=debug
    pub log_filter: Option<String>,

    /// Whether `GET /` redirects to the application mount path
    pub redirect_root: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redirect_root = match lookup("REDIRECT_ROOT") {
            Some(value) => parse_bool("REDIRECT_ROOT", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter: lookup("RUST_LOG").filter(|v| !v.trim().is_empty()),
            redirect_root,
        })
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            redirect_root: true,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.redirect_root);
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_reads_log_filter() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "debug,hyper=warn")])).unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("debug,hyper=warn"));
        assert_eq!(config.log_filter(), "debug,hyper=warn");
    }

    #[test]
    fn test_blank_log_filter_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "   ")])).unwrap();

        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_redirect_root_accepts_common_spellings() {
        for value in ["0", "false", "FALSE", "no", "off", " Off "] {
            let config = Config::from_lookup(lookup_from(&[("REDIRECT_ROOT", value)])).unwrap();
            assert!(!config.redirect_root, "{value} should disable redirect");
        }
        for value in ["1", "true", "Yes", "on"] {
            let config = Config::from_lookup(lookup_from(&[("REDIRECT_ROOT", value)])).unwrap();
            assert!(config.redirect_root, "{value} should enable redirect");
        }
    }

    #[test]
    fn test_redirect_root_rejects_garbage() {
        let result = Config::from_lookup(lookup_from(&[("REDIRECT_ROOT", "maybe")]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidBool {
                var: "REDIRECT_ROOT",
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn test_config_error_message_names_variable() {
        let err = parse_bool("REDIRECT_ROOT", "2").unwrap_err();
        assert!(err.to_string().starts_with("REDIRECT_ROOT must be a boolean"));
    }
}
