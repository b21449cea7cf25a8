//! In-memory sink that keeps every line it receives

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// One write received by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedLine {
    pub line: String,
    pub args: Vec<Value>,
}

/// Captures lines and their untouched extra arguments
///
/// Clones share the same buffer, so a clone can be handed to a logger while
/// the original is kept for inspection.
///
/// # Examples
///
/// ```
/// use relogger::sinks::MemorySink;
/// use relogger::{ColorMode, Logger};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level("info", "blue")
///     .color_mode(ColorMode::Never)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.log("info", "ready", &[]).unwrap();
/// assert_eq!(sink.len(), 1);
/// assert!(sink.lines()[0].ends_with("INFO : ready"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedLine> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.line.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, line: &str, args: &[Value]) -> Result<()> {
        self.records.lock().push(CapturedLine {
            line: line.to_string(),
            args: args.to_vec(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
