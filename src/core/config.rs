//! Logger configuration
//!
//! A [`LoggerConfig`] can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "main_color": "cyan",
//!   "levels": { "info": "blue", "error": "red" },
//!   "color_mode": "auto",
//!   "timezone": "local"
//! }
//! ```
//!
//! Every field is optional. `mainColor` and `colorMode` are accepted as
//! aliases.

use super::color::{ColorId, ColorMode};
use super::error::Result;
use super::level::LevelSpec;
use super::timestamp::TimeZoneSpec;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Color of the `[timestamp]` segment, green unless set
    #[serde(default, alias = "mainColor")]
    pub main_color: ColorId,
    /// Declared levels, in declaration order
    #[serde(default)]
    pub levels: LevelSpec,
    #[serde(default, alias = "colorMode")]
    pub color_mode: ColorMode,
    /// An unusable timezone falls back to UTC instead of failing the load
    #[serde(default, deserialize_with = "deserialize_timezone")]
    pub timezone: TimeZoneSpec,
}

fn deserialize_timezone<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<TimeZoneSpec, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(TimeZoneSpec::resolve_or_utc(&raw))
}

impl LoggerConfig {
    #[must_use]
    pub fn new(main_color: ColorId, levels: LevelSpec) -> Self {
        Self {
            main_color,
            levels,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON text
    ///
    /// # Examples
    ///
    /// ```
    /// use relogger::{ColorId, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_json_str(
    ///     r#"{"mainColor": "cyan", "levels": {"info": "blue", "error": "red"}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.main_color, ColorId::Cyan);
    /// assert_eq!(config.levels.len(), 2);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, zone: TimeZoneSpec) -> Self {
        self.timezone = zone;
        self
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.main_color, ColorId::Green);
        assert!(config.levels.is_empty());
        assert_eq!(config.color_mode, ColorMode::Auto);
        assert_eq!(config.timezone, TimeZoneSpec::Local);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = LoggerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config = LoggerConfig::from_json_str(
            r#"{
                "main_color": "cyan",
                "levels": {"info": "blue", "debug": "gray"},
                "color_mode": "never",
                "timezone": "+03:00"
            }"#,
        )
        .unwrap();

        assert_eq!(config.main_color, ColorId::Cyan);
        assert_eq!(config.levels.color_of("debug"), Some(ColorId::Gray));
        assert_eq!(config.color_mode, ColorMode::Never);
        assert!(matches!(config.timezone, TimeZoneSpec::Fixed(_)));
    }

    #[test]
    fn test_unknown_main_color_fails_load() {
        let err = LoggerConfig::from_json_str(r#"{"mainColor": "teal"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn test_unknown_level_color_fails_load() {
        let err = LoggerConfig::from_json_str(r#"{"levels": {"info": "teal"}}"#).unwrap_err();
        assert!(err.to_string().contains("teal"));
    }

    #[test]
    fn test_bad_timezone_falls_back_to_utc() {
        let config = LoggerConfig::from_json_str(r#"{"timezone": "Atlantis/Capital"}"#).unwrap();
        assert_eq!(config.timezone, TimeZoneSpec::Utc);
    }

    #[test]
    fn test_json_roundtrip() {
        let levels = LevelSpec::from_pairs([("warn", "yellow"), ("error", "red")]).unwrap();
        let config = LoggerConfig::new(ColorId::Magenta, levels).with_timezone(TimeZoneSpec::Utc);

        let json = config.to_json_string().unwrap();
        let parsed = LoggerConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relogger.json");
        std::fs::write(&path, r#"{"levels": {"success": "green"}}"#).unwrap();

        let config = LoggerConfig::from_json_file(&path).unwrap();
        assert!(config.levels.contains("success"));

        let missing = LoggerConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(LoggerError::IoError(_))));
    }
}
