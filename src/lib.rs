//! # reLogger
//!
//! A small colored console logger whose levels are declared by the caller.
//!
//! Every declared level gets its own color; every line gets a timestamp
//! painted in the logger's main color:
//!
//! ```text
//! [12.05.2023 | 14:30:45] INFO : System initialized
//! ```
//!
//! ## Features
//!
//! - **Custom Levels**: any set of level names, each with its own color
//! - **Validated Up Front**: unknown colors and duplicate levels fail at construction
//! - **Pass-Through Arguments**: extra values reach the sink untouched
//! - **Thread Safe**: a `Logger` can be shared across threads
//!
//! ```
//! use relogger::prelude::*;
//! use serde_json::json;
//!
//! let logger = Logger::builder()
//!     .main_color("cyan")
//!     .level("info", "blue")
//!     .level("success", "green")
//!     .build()?;
//!
//! logger.log("info", "System initialized", &[])?;
//! logger.log("success", "Parsed JSON:", &[json!({"id": 1, "value": "test"})])?;
//! assert!(logger.log("debug", "undeclared", &[]).is_err());
//! # Ok::<(), relogger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

#[cfg(feature = "log-bridge")]
pub mod bridge;

pub mod prelude {
    pub use crate::core::{
        Clock, ColorId, ColorMode, FixedClock, LevelHandle, LevelName, LevelSpec, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, Palette, Result, Sink, SystemClock,
        TimeZoneSpec, TimestampProvider,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
}

pub use core::{
    Clock, ColorId, ColorMode, FixedClock, LevelHandle, LevelName, LevelSpec, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, Palette, Result, Sink, SystemClock, TimeZoneSpec,
    TimestampProvider,
};
pub use serde_json::Value;
pub use sinks::{ConsoleSink, MemorySink, WriterSink};

#[cfg(feature = "log-bridge")]
pub use bridge::LogBridge;
