//! Sink over any `std::io::Write`

use crate::core::sink::render_line;
use crate::core::{Result, Sink};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders lines into an arbitrary writer, one line per call
///
/// # Examples
///
/// ```
/// use relogger::sinks::WriterSink;
/// use relogger::Sink;
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write("hello", &[serde_json::json!(42)]).unwrap();
/// assert_eq!(sink.get_ref().as_slice(), b"hello 42\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl WriterSink<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use relogger::sinks::WriterSink;
    ///
    /// let sink = WriterSink::file("/var/log/app.log").unwrap();
    /// ```
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, line: &str, args: &[Value]) -> Result<()> {
        let mut output = render_line(line, args);
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}

impl<W: Write + Send> Drop for WriterSink<W> {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the writer
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_one_line_per_call() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write("first", &[]).unwrap();
        sink.write("second", &[json!({"id": 1})]).unwrap();

        let text = String::from_utf8(sink.get_ref().clone()).unwrap();
        assert_eq!(text, "first\nsecond {\"id\":1}\n");
        assert_eq!(sink.name(), "writer");
    }

    #[test]
    fn test_write_error_propagates() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(BrokenPipe);
        let err = sink.write("lost", &[]).unwrap_err();
        assert!(matches!(err, crate::core::LoggerError::IoError(_)));
    }
}
