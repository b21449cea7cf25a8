//! Core logger types and traits

pub mod color;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use color::{ColorId, ColorMode, Palette};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use level::{LevelName, LevelSpec};
pub use logger::{LevelHandle, Logger, LoggerBuilder};
pub use sink::Sink;
pub use timestamp::{Clock, FixedClock, SystemClock, TimeZoneSpec, TimestampProvider};
