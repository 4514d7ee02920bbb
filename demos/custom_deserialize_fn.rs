//! Example demonstrating custom deserializer functions
//!
//! `#[envify(deserializer = "func")]` bypasses the built-in coercion with
//! any `fn(&str) -> Result<T, E>`, which covers JSON payloads and formats
//! the comma-delimited list convention cannot express.

use envify::Envify;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Replica {
    pub host: String,
    pub weight: u32,
}

fn parse_duration_secs(s: &str) -> Result<Duration, String> {
    s.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| format!("not a number of seconds: {e}"))
}

#[derive(Debug, Envify)]
struct Config {
    // JSON array of objects
    #[envify(deserializer = "serde_json::from_str")]
    pub replicas: Vec<Replica>,

    // JSON object
    #[envify(deserializer = "serde_json::from_str")]
    pub feature_flags: HashMap<String, bool>,

    // Custom parser
    #[envify(deserializer = "parse_duration_secs")]
    pub timeout: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var(
        "REPLICAS",
        r#"[{"host":"db1","weight":2},{"host":"db2","weight":1}]"#,
    );
    std::env::set_var("FEATURE_FLAGS", r#"{"new_ui":true,"beta_api":false}"#);
    std::env::set_var("TIMEOUT", "30");

    let config = Config::from_env()?;

    println!("Replicas: {:?}", config.replicas);
    println!("Feature flags: {:?}", config.feature_flags);
    println!("Timeout: {:?}", config.timeout);

    Ok(())
}
