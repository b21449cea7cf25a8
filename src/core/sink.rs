//! Sink trait for log output destinations

use super::error::Result;
use serde_json::Value;

/// Destination for finished log lines
///
/// A sink receives the composed line and the caller's extra arguments
/// untouched, and decides itself how to render the arguments.
pub trait Sink: Send {
    fn write(&mut self, line: &str, args: &[Value]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether escape codes are wanted here when the color mode is `Auto`
    fn supports_color(&self) -> bool {
        false
    }
}

/// Render a line followed by its extra arguments, space separated
///
/// Strings are written as-is; every other value is written as compact JSON.
///
/// # Examples
///
/// ```
/// use relogger::core::sink::render_line;
/// use serde_json::json;
///
/// let rendered = render_line("Parsed JSON:", &[json!({"id": 1}), json!("done")]);
/// assert_eq!(rendered, r#"Parsed JSON: {"id":1} done"#);
/// ```
pub fn render_line(line: &str, args: &[Value]) -> String {
    let mut output = String::from(line);
    for arg in args {
        output.push(' ');
        match arg {
            Value::String(s) => output.push_str(s),
            other => output.push_str(&other.to_string()),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_without_args() {
        assert_eq!(render_line("plain", &[]), "plain");
    }

    #[test]
    fn test_render_mixed_args() {
        let rendered = render_line(
            "Array spread:",
            &[json!(1), json!(2), json!(3), json!(null), json!(true)],
        );
        assert_eq!(rendered, "Array spread: 1 2 3 null true");
    }

    #[test]
    fn test_render_strings_unquoted() {
        let rendered = render_line("Stringified object:", &[json!("{\n  \"a\": 1\n}")]);
        assert_eq!(rendered, "Stringified object: {\n  \"a\": 1\n}");
    }

    #[test]
    fn test_render_nested_values() {
        let rendered = render_line("Object:", &[json!({"name": "John", "tags": [1, 2]})]);
        assert_eq!(rendered, r#"Object: {"name":"John","tags":[1,2]}"#);
    }
}
