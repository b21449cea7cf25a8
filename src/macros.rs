//! Logging macros for ergonomic log message formatting.
//!
//! # Examples
//!
//! ```
//! use relogger::prelude::*;
//! use relogger::{levels, log};
//! use serde_json::json;
//!
//! let logger = Logger::builder()
//!     .levels(levels! { "info" => "blue", "debug" => "gray" }?)
//!     .build()?;
//!
//! // Basic logging
//! log!(logger, "info", "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! log!(logger, "info", "Server listening on port {}", port)?;
//!
//! // With extra arguments handed to the sink
//! log!(logger, "debug", [json!({"name": "John", "age": 30})], "Object:")?;
//! # Ok::<(), relogger::LoggerError>(())
//! ```

/// Log a message under a declared level with automatic formatting.
///
/// Values in an optional `[...]` group are converted to
/// [`serde_json::Value`] and passed to the sink as extra arguments.
/// Expands to [`Logger::log`](crate::Logger::log), so the result is the
/// formatted line or an unknown-level error.
///
/// # Examples
///
/// ```
/// # use relogger::prelude::*;
/// # let logger = Logger::builder().level("error", "red").build().unwrap();
/// use relogger::log;
/// log!(logger, "error", "Simple message").unwrap();
/// log!(logger, "error", "Error code: {}", 500).unwrap();
/// log!(logger, "error", [1, 2, 3], "Array spread:").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, [$($extra:expr),* $(,)?], $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), &[$($crate::Value::from($extra)),*])
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), &[])
    };
}

/// Build a [`LevelSpec`](crate::LevelSpec) from `name => color` pairs.
///
/// Evaluates to `Result<LevelSpec>`; unknown colors and repeated names are
/// reported as errors.
///
/// # Examples
///
/// ```
/// use relogger::{levels, ColorId};
///
/// let spec = levels! {
///     "info" => "blue",
///     "error" => "red",
///     "warn" => "yellow",
/// }
/// .unwrap();
/// assert_eq!(spec.color_of("warn"), Some(ColorId::Yellow));
/// ```
#[macro_export]
macro_rules! levels {
    () => {
        ::std::result::Result::<$crate::LevelSpec, $crate::LoggerError>::Ok($crate::LevelSpec::new())
    };
    ($($name:expr => $color:expr),+ $(,)?) => {
        $crate::LevelSpec::from_pairs([$(($name, $color)),+])
    };
}
