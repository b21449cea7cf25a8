//! Basic logger usage example
//!
//! Declares five levels, logs plain messages and messages with extra values.
//!
//! Run with: cargo run --example basic_usage

use relogger::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    // "cyan" colors the timestamp; every level gets its own color
    let logger = Logger::builder()
        .main_color("cyan")
        .level("info", "blue")
        .level("error", "red")
        .level("warn", "yellow")
        .level("debug", "gray")
        .level("success", "green")
        .build()?;

    logger.log("info", "System initialized", &[])?;
    logger.log("warn", "Disk space low", &[])?;
    logger.log("error", "Failed to connect", &[])?;
    logger.log("debug", "User data loaded", &[])?;
    logger.log("success", "Operation complete", &[])?;

    // Extra values are handed to the sink untouched
    logger.log("debug", "Array spread:", &[json!(1), json!(2), json!(3)])?;
    logger.log("info", "Object:", &[json!({"name": "John", "age": 30})])?;

    match serde_json::from_str::<serde_json::Value>(r#"{"id": 1, "value": "test"}"#) {
        Ok(parsed) => logger.log("success", "Parsed JSON:", &[parsed])?,
        Err(e) => logger.log("error", "JSON parse error:", &[json!(e.to_string())])?,
    };

    let sample = json!({"name": "John", "age": 30});
    let pretty = serde_json::to_string_pretty(&sample)?;
    logger.log("debug", "Stringified object:", &[json!(pretty)])?;

    // A handle skips the name lookup on every call
    let success = logger.level("success")?;
    success.log("Handles work too", &[])?;

    // Undeclared levels are reported, nothing is printed
    if let Err(e) = logger.log("trace", "never printed", &[]) {
        println!("expected failure: {}", e);
    }

    Ok(())
}
