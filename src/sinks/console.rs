//! Console sink implementation

use crate::core::sink::render_line;
use crate::core::{Result, Sink};
use serde_json::Value;
use std::io::Write;

/// Writes every line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, line: &str, args: &[Value]) -> Result<()> {
        let output = render_line(line, args);
        // One locked write per line keeps concurrent lines whole
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn supports_color(&self) -> bool {
        colored::control::SHOULD_COLORIZE.should_colorize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_support_follows_terminal_detection() {
        assert_eq!(
            ConsoleSink::new().supports_color(),
            colored::control::SHOULD_COLORIZE.should_colorize()
        );
    }
}
