//! Process-wide application configuration (Singleton)
//!
//! There is exactly one [`AppConfig`] per process, created lazily on first
//! access. Its defaults can be overridden through environment variables
//! read at that moment.

use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Environment variable overriding the initial environment name
pub const ENVIRONMENT_ENV: &str = "CREATIONAL_ENV";

/// Environment variable overriding the initial base URL
pub const BASE_URL_ENV: &str = "CREATIONAL_BASE_URL";

const DEFAULT_ENVIRONMENT: &str = "Development";
const DEFAULT_BASE_URL: &str = "https://localhost";

static INSTANCE: OnceLock<AppConfig> = OnceLock::new();

/// Snapshot of the configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment_name: String,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment_name: DEFAULT_ENVIRONMENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, with any non-empty value returned by `lookup` taking precedence
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |var: &str, default: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            environment_name: pick(ENVIRONMENT_ENV, DEFAULT_ENVIRONMENT),
            base_url: pick(BASE_URL_ENV, DEFAULT_BASE_URL),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
}

/// The single configuration holder
#[derive(Debug)]
pub struct AppConfig {
    settings: RwLock<Settings>,
}

impl AppConfig {
    /// The process-wide instance
    pub fn instance() -> &'static AppConfig {
        INSTANCE.get_or_init(|| {
            let settings = Settings::from_env();
            debug!(
                environment = %settings.environment_name,
                base_url = %settings.base_url,
                "initialized app config"
            );
            AppConfig {
                settings: RwLock::new(settings),
            }
        })
    }

    /// Overwrite both values
    pub fn initialize(&self, environment_name: impl Into<String>, base_url: impl Into<String>) {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        settings.environment_name = environment_name.into();
        settings.base_url = base_url.into();
        debug!(environment = %settings.environment_name, "re-initialized app config");
    }

    pub fn snapshot(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn environment_name(&self) -> String {
        self.snapshot().environment_name
    }

    pub fn base_url(&self) -> String {
        self.snapshot().base_url
    }

    /// Whether `other` is this very instance
    pub fn is_same_instance(&self, other: &AppConfig) -> bool {
        std::ptr::eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
    }

    #[test]
    fn test_overrides_apply_and_blank_is_ignored() {
        let settings = Settings::from_lookup(|var| match var {
            ENVIRONMENT_ENV => Some("Staging".to_string()),
            BASE_URL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(settings.environment_name, "Staging");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    // The only test touching the global instance, so no other test races it
    #[test]
    fn test_single_instance_shares_state() {
        let first = AppConfig::instance();
        let second = AppConfig::instance();
        assert!(first.is_same_instance(second));

        first.initialize("Production", "https://api.my-saas.com");
        assert_eq!(second.environment_name(), "Production");
        assert_eq!(second.base_url(), "https://api.my-saas.com");
    }
}
