//! Main logger implementation
//!
//! Levels are resolved through a fixed dispatch table keyed by level name.
//! [`Logger::log`] looks the name up on every call, while
//! [`Logger::level`] hands out a [`LevelHandle`] that has already done the
//! lookup. Both end in the same formatting routine.

use super::{
    color::{ColorId, ColorMode, Palette},
    config::LoggerConfig,
    error::{LoggerError, Result},
    level::{LevelName, LevelSpec},
    sink::Sink,
    timestamp::{Clock, SystemClock, TimeZoneSpec, TimestampProvider},
};
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub struct Logger {
    main_color: ColorId,
    levels: LevelSpec,
    palette: Palette,
    timestamps: TimestampProvider,
    sink: Mutex<Box<dyn Sink>>,
}

impl Logger {
    /// Console logger with automatic color detection and local timestamps
    ///
    /// # Example
    ///
    /// ```
    /// use relogger::{ColorId, LevelSpec, Logger};
    ///
    /// let levels = LevelSpec::from_pairs([("info", "blue"), ("error", "red")]).unwrap();
    /// let logger = Logger::new(ColorId::Cyan, levels);
    ///
    /// let line = logger.log("info", "System initialized", &[]).unwrap();
    /// assert!(line.contains("INFO"));
    /// assert!(logger.log("debug", "not declared", &[]).is_err());
    /// ```
    #[must_use]
    pub fn new(main_color: ColorId, levels: LevelSpec) -> Self {
        Self::from_config(LoggerConfig::new(main_color, levels))
    }

    /// Console logger built from a loaded configuration
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        let sink = ConsoleSink::new();
        Self {
            main_color: config.main_color,
            levels: config.levels,
            palette: Palette::for_sink(config.color_mode, sink.supports_color()),
            timestamps: TimestampProvider::new(config.timezone, Arc::new(SystemClock)),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use relogger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .main_color("cyan")
    ///     .level("info", "blue")
    ///     .level("error", "red")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.levels().collect::<Vec<_>>(), vec!["info", "error"]);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn main_color(&self) -> ColorId {
        self.main_color
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn timezone(&self) -> TimeZoneSpec {
        self.timestamps.zone()
    }

    pub fn level_spec(&self) -> &LevelSpec {
        &self.levels
    }

    /// Declared level names, in declaration order
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.names()
    }

    pub fn has_level(&self, name: &str) -> bool {
        self.levels.contains(name)
    }

    /// Resolve a level name once and keep the result
    ///
    /// Fails with [`LoggerError::UnknownLevel`] for names that were not
    /// declared.
    pub fn level(&self, name: &str) -> Result<LevelHandle<'_>> {
        let (name, color) = self
            .levels
            .get(name)
            .ok_or_else(|| LoggerError::unknown_level(name))?;
        Ok(LevelHandle {
            logger: self,
            name,
            color,
        })
    }

    /// One handle per declared level, in declaration order
    pub fn handles(&self) -> impl Iterator<Item = LevelHandle<'_>> {
        self.levels.iter().map(move |(name, color)| LevelHandle {
            logger: self,
            name,
            color,
        })
    }

    /// Format `message` under `level`, write it with `args` and return the line
    ///
    /// The returned line is `"<[timestamp]> <LEVEL> : <message>"` with both
    /// leading segments colored. `args` go to the sink unmodified and are not
    /// part of the returned string. An undeclared level writes nothing.
    pub fn log(&self, level: &str, message: impl AsRef<str>, args: &[Value]) -> Result<String> {
        self.level(level)?.log(message, args)
    }

    /// Compose the line for `level` without writing it
    pub fn format_line(&self, level: &str, message: impl AsRef<str>) -> Result<String> {
        Ok(self.level(level)?.format(message))
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    fn compose(&self, name: &LevelName, color: ColorId, message: &str) -> String {
        let timestamp = format!("[{}]", self.timestamps.now());
        format!(
            "{} {} : {}",
            self.palette.paint(&timestamp, self.main_color),
            self.palette.paint(name.label(), color),
            message
        )
    }

    /// Compose and write while holding the sink, so sink order is timestamp order
    fn emit(
        &self,
        name: &LevelName,
        color: ColorId,
        message: &str,
        args: &[Value],
    ) -> Result<String> {
        let mut sink = self.sink.lock();
        let line = self.compose(name, color, message);
        sink.write(&line, args)?;
        Ok(line)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("main_color", &self.main_color)
            .field("levels", &self.levels)
            .field("palette", &self.palette)
            .field("timestamps", &self.timestamps)
            .field("sink", &self.sink.lock().name())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.sink.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// A declared level bound to its logger
///
/// Handles are cheap to copy and can be stored for repeated use:
///
/// ```
/// use relogger::prelude::*;
///
/// let logger = Logger::builder().level("success", "green").build().unwrap();
/// let success = logger.level("success").unwrap();
/// success.log("Operation complete", &[]).unwrap();
/// assert_eq!(success.label(), "SUCCESS");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelHandle<'a> {
    logger: &'a Logger,
    name: &'a LevelName,
    color: ColorId,
}

impl<'a> LevelHandle<'a> {
    pub fn name(&self) -> &'a str {
        self.name.as_str()
    }

    pub fn label(&self) -> &'a str {
        self.name.label()
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    pub fn format(&self, message: impl AsRef<str>) -> String {
        self.logger.compose(self.name, self.color, message.as_ref())
    }

    pub fn log(&self, message: impl AsRef<str>, args: &[Value]) -> Result<String> {
        self.logger.emit(self.name, self.color, message.as_ref(), args)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Colors are given by name and checked in [`LoggerBuilder::build`], so a
/// misspelled color fails construction rather than a later log call.
///
/// # Example
/// ```
/// use relogger::prelude::*;
/// use relogger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .main_color(ColorId::Cyan)
///     .level("warn", "yellow")
///     .color_mode(ColorMode::Never)
///     .timezone(TimeZoneSpec::Utc)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.log("warn", "Disk space low", &[]).unwrap();
/// assert_eq!(sink.len(), 1);
/// ```
pub struct LoggerBuilder {
    main_color: Option<String>,
    base_levels: LevelSpec,
    pending_levels: Vec<(String, String)>,
    color_mode: ColorMode,
    timezone: TimeZoneSpec,
    clock: Arc<dyn Clock>,
    sink: Box<dyn Sink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            main_color: None,
            base_levels: LevelSpec::new(),
            pending_levels: Vec::new(),
            color_mode: ColorMode::Auto,
            timezone: TimeZoneSpec::Local,
            clock: Arc::new(SystemClock),
            sink: Box::new(ConsoleSink::new()),
        }
    }

    /// Start from a loaded configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.main_color = Some(config.main_color.into());
        self.base_levels = config.levels;
        self.color_mode = config.color_mode;
        self.timezone = config.timezone;
        self
    }

    /// Set the timestamp color (green when unset)
    #[must_use = "builder methods return a new value"]
    pub fn main_color(mut self, color: impl Into<String>) -> Self {
        self.main_color = Some(color.into());
        self
    }

    /// Declare a level and its color
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.pending_levels.push((name.into(), color.into()));
        self
    }

    /// Declare every level of an already validated table
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: LevelSpec) -> Self {
        self.pending_levels.extend(
            levels
                .iter()
                .map(|(name, color)| (name.as_str().to_string(), String::from(color))),
        );
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, zone: TimeZoneSpec) -> Self {
        self.timezone = zone;
        self
    }

    /// Replace the wall clock, mostly useful for deterministic tests
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the console sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Build the Logger
    ///
    /// Fails on an unknown color, an invalid or duplicate level name.
    pub fn build(self) -> Result<Logger> {
        let main_color = match self.main_color {
            Some(name) => name.parse()?,
            None => ColorId::default(),
        };

        let mut levels = self.base_levels;
        for (name, color) in self.pending_levels {
            let color: ColorId = color.parse()?;
            levels.insert(LevelName::new(name)?, color)?;
        }

        Ok(Logger {
            main_color,
            levels,
            palette: Palette::for_sink(self.color_mode, self.sink.supports_color()),
            timestamps: TimestampProvider::new(self.timezone, self.clock),
            sink: Mutex::new(self.sink),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
