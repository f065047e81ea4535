use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Address of the local `s2d3` folder server that hosts the demo models.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3333/";

pub const BASE_URL_ENV: &str = "NUE_MODELS_BASE_URL";
pub const TIMEOUT_ENV: &str = "NUE_MODELS_TIMEOUT_SECONDS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No timeout unless set; a silent host keeps the caller waiting.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

impl FetcherConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FetchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Defaults overlaid with `NUE_MODELS_BASE_URL` and `NUE_MODELS_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| FetchError::InvalidConfigValueError {
                    field: TIMEOUT_ENV.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.timeout_seconds = Some(seconds);
        }

        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            FetchError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: format!("Invalid substitution pattern: {}", e),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn parsed_base_url(&self) -> Result<Url> {
        validation::validate_url("base_url", &self.base_url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for FetcherConfig {
    fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;

        if let Some(seconds) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", seconds, 1)?;
        }

        for name in self.headers.keys() {
            validation::validate_non_empty_string("headers", name)?;
        }

        Ok(())
    }
}
