//! Backend for the `log` facade
//!
//! Routes `log::info!`, `log::warn!` and friends into a [`Logger`]. A record
//! is written under the declared level named after its lower-cased
//! [`log::Level`] (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`);
//! records for levels the logger never declared are not enabled.

use crate::core::{Logger, LoggerError, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Register as the global `log` backend
    ///
    /// Can succeed only once per process.
    ///
    /// ```no_run
    /// use relogger::{LogBridge, Logger};
    ///
    /// let logger = Logger::builder()
    ///     .level("info", "blue")
    ///     .level("error", "red")
    ///     .build()
    ///     .unwrap();
    /// LogBridge::new(logger).install().unwrap();
    ///
    /// log::info!("routed through relogger");
    /// ```
    pub fn install(self) -> Result<()> {
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| LoggerError::config("log bridge", e.to_string()))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }

    fn level_name(level: log::Level) -> String {
        level.as_str().to_lowercase()
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger.has_level(&Self::level_name(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = Self::level_name(record.level());
        if let Err(e) = self.logger.log(&level, record.args().to_string(), &[]) {
            eprintln!("[LOGGER ERROR] log bridge failed to write record: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.logger.flush() {
            eprintln!("[LOGGER ERROR] log bridge failed to flush: {}", e);
        }
    }
}
