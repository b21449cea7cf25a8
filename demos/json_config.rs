//! Loading a logger from JSON configuration
//!
//! Run with: cargo run --example json_config

use relogger::prelude::*;
use relogger::log;

const CONFIG: &str = r#"{
    "mainColor": "magenta",
    "levels": {
        "request": "bright_blue",
        "response": "bright_green",
        "failure": "redBright"
    },
    "colorMode": "auto",
    "timezone": "utc"
}"#;

fn main() -> Result<()> {
    let config = LoggerConfig::from_json_str(CONFIG)?;
    let logger = Logger::from_config(config);

    println!("Declared levels: {:?}", logger.levels().collect::<Vec<_>>());

    for (i, path) in ["/", "/health", "/missing"].iter().enumerate() {
        log!(logger, "request", "GET {}", path)?;
        if i < 2 {
            log!(logger, "response", [200], "{} ->", path)?;
        } else {
            log!(logger, "failure", [404], "{} ->", path)?;
        }
    }

    logger.flush()
}
