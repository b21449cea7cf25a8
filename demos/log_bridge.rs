//! Routing the `log` facade through relogger
//!
//! Run with: cargo run --example log_bridge --features log-bridge

use relogger::prelude::*;
use relogger::LogBridge;

fn main() -> Result<()> {
    let logger = Logger::builder()
        .main_color("green")
        .level("info", "blue")
        .level("warn", "yellow")
        .level("error", "red")
        .build()?;

    LogBridge::new(logger).install()?;

    log::info!("Info from log crate");
    log::warn!("Retry attempt {} of {}", 3, 5);
    log::error!("Error from log crate");
    // No "debug" level was declared, so this record is not enabled
    log::debug!("never printed");

    Ok(())
}
