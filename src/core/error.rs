//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The level name was never declared on this logger
    #[error("Unknown log level: '{level}'")]
    UnknownLevel { level: String },

    /// The color identifier is not part of the supported palette
    #[error("Color not found: '{color}'")]
    ColorNotFound { color: String },

    /// Level names must be non-empty and free of whitespace
    #[error("Invalid level name '{name}': {reason}")]
    InvalidLevelName { name: String, reason: String },

    /// A level name was declared more than once
    #[error("Level '{level}' is declared more than once")]
    DuplicateLevel { level: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Sink failure that is not an IO error
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an unknown level error
    pub fn unknown_level(level: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            level: level.into(),
        }
    }

    /// Create a color not found error
    pub fn color_not_found(color: impl Into<String>) -> Self {
        LoggerError::ColorNotFound {
            color: color.into(),
        }
    }

    pub fn invalid_level_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::InvalidLevelName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_level(level: impl Into<String>) -> Self {
        LoggerError::DuplicateLevel {
            level: level.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Whether this error reports an undeclared level
    #[must_use]
    pub fn is_unknown_level(&self) -> bool {
        matches!(self, LoggerError::UnknownLevel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_level("debug");
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));
        assert!(err.is_unknown_level());

        let err = LoggerError::color_not_found("chartreuse");
        assert!(matches!(err, LoggerError::ColorNotFound { .. }));
        assert!(!err.is_unknown_level());

        let err = LoggerError::config("timezone", "bad offset");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::unknown_level("debug").to_string(),
            "Unknown log level: 'debug'"
        );
        assert_eq!(
            LoggerError::color_not_found("chartreuse").to_string(),
            "Color not found: 'chartreuse'"
        );
        assert_eq!(
            LoggerError::duplicate_level("info").to_string(),
            "Level 'info' is declared more than once"
        );
        assert_eq!(
            LoggerError::invalid_level_name("", "name is empty").to_string(),
            "Invalid level name '': name is empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
