use crate::error::{ConfigError, CoreError};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "http://www.reddit.com";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Timezone used to place post timestamps on a local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeZoneSetting {
    /// Whatever the host system reports.
    #[default]
    Local,
    Named(Tz),
}

impl FromStr for TimeZoneSetting {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(TimeZoneSetting::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(TimeZoneSetting::Named)
            .map_err(|_| ConfigError::UnknownTimezone {
                name: trimmed.to_string(),
            })
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Named(tz) => f.write_str(tz.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Scheme and host the listing is requested from.
    pub api_base: String,
    pub timezone: TimeZoneSetting,
    /// No timeout at all when unset.
    pub request_timeout_secs: Option<u64>,
    /// Sent only when set; the request carries no extra headers otherwise.
    pub user_agent: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timezone: TimeZoneSetting::Local,
            request_timeout_secs: None,
            user_agent: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub timezone: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Reads the TOML file at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let Some(path) = path else {
            debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                CoreError::Io(e)
            }
        })?;

        let config = Self::from_toml_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CoreError> {
        let config: AppConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<(), CoreError> {
        if let Some(api_base) = overrides.api_base {
            self.api_base = api_base;
        }
        if let Some(timezone) = overrides.timezone {
            self.timezone = timezone.parse()?;
        }
        if let Some(seconds) = overrides.request_timeout_secs {
            self.request_timeout_secs = Some(seconds);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let parsed = url::Url::parse(&self.api_base).map_err(|_| ConfigError::InvalidValue {
            field: "api_base".to_string(),
            value: self.api_base.clone(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "api_base".to_string(),
                value: self.api_base.clone(),
            }
            .into());
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
