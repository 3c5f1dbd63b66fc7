use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "MedApp";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the clock style for row times.
pub const CLOCK_ENV: &str = "MEDAPP_CLOCK";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medapp_lib=info,medapp_preview=info"
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value} (expected {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How intake times are written in the time column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `08:05`, `21:30`
    #[default]
    TwentyFourHour,
    /// `8:05 AM`, `9:30 PM`
    TwelveHour,
}

impl ClockStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwentyFourHour => "24h",
            Self::TwelveHour => "12h",
        }
    }
}

impl FromStr for ClockStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24" => Ok(Self::TwentyFourHour),
            "12h" | "12" => Ok(Self::TwelveHour),
            other => Err(ConfigError::InvalidValue {
                var: CLOCK_ENV,
                value: other.to_string(),
                expected: "24h or 12h",
            }),
        }
    }
}

/// Settings consumed by the default row formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    pub clock: ClockStyle,
}

impl FormatterConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup. Unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let clock = match lookup(CLOCK_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => ClockStyle::default(),
        };
        Ok(Self { clock })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_medapp() {
        assert_eq!(APP_NAME, "MedApp");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.4.0");
    }

    #[test]
    fn default_filter_targets_crate() {
        assert!(default_log_filter().contains("medapp_lib"));
    }

    #[test]
    fn clock_defaults_to_24h_when_unset() {
        let config = FormatterConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.clock, ClockStyle::TwentyFourHour);

        let config = FormatterConfig::from_lookup(|_| Some("  ".into())).unwrap();
        assert_eq!(config.clock, ClockStyle::TwentyFourHour);
    }

    #[test]
    fn clock_parses_12h() {
        let config = FormatterConfig::from_lookup(|key| {
            (key == CLOCK_ENV).then(|| "12H".to_string())
        })
        .unwrap();
        assert_eq!(config.clock, ClockStyle::TwelveHour);
    }

    #[test]
    fn clock_rejects_unknown_value() {
        let result = FormatterConfig::from_lookup(|_| Some("sundial".into()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var: CLOCK_ENV, .. })
        ));
    }

    #[test]
    fn clock_style_round_trips_through_str() {
        for style in [ClockStyle::TwentyFourHour, ClockStyle::TwelveHour] {
            assert_eq!(style.as_str().parse::<ClockStyle>().unwrap(), style);
        }
    }
}
