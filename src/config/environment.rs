use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Deployment environment the suite runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Parse an environment name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dev" => Some(Environment::Dev),
            "staging" => Some(Environment::Staging),
            "prod" => Some(Environment::Prod),
            _ => None,
        }
    }

    /// The embedded JSON settings document for this environment.
    fn settings_source(self) -> &'static str {
        match self {
            Environment::Dev => include_str!("dev.json"),
            Environment::Staging => include_str!("staging.json"),
            Environment::Prod => include_str!("prod.json"),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-environment settings, read-only after load.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvConfig {
    webdriver: WebDriverSettings,
    application: ApplicationSettings,
    performance: PerformanceSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct WebDriverSettings {
    explicit_wait: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ApplicationSettings {
    base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PerformanceSettings {
    performance_threshold: f64,
}

impl EnvConfig {
    /// Load and validate the settings for the given environment.
    pub fn load(environment: Environment) -> Result<Self> {
        Self::from_json(environment.settings_source())
            .map_err(|e| Error::ConfigValidation(format!("{environment} settings: {e}")))
    }

    /// Parse settings from a JSON document and validate them.
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)
            .map_err(|e| Error::ConfigValidation(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.webdriver.explicit_wait <= 0.0 {
            return Err(Error::ConfigValidation(
                "webdriver.explicit_wait must be a positive number of seconds".to_string(),
            ));
        }
        if self.performance.performance_threshold <= 0.0 {
            return Err(Error::ConfigValidation(
                "performance.performance_threshold must be a positive number of seconds".to_string(),
            ));
        }
        if self.application.base_url.trim().is_empty() {
            return Err(Error::ConfigValidation(
                "application.base_url must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum time to wait for an element interaction.
    pub fn explicit_wait(&self) -> Duration {
        Duration::from_secs_f64(self.webdriver.explicit_wait)
    }

    /// Duration above which an interaction is logged as slow.
    pub fn performance_threshold(&self) -> Duration {
        Duration::from_secs_f64(self.performance.performance_threshold)
    }

    /// Base URL of the application under test, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.application.base_url.trim_end_matches('/')
    }
}
