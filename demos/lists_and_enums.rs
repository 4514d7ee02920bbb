//! Example demonstrating list and enum fields
//!
//! Lists live in a single comma-delimited variable; the empty string is the
//! empty list. Enums coerce by integer discriminant when every variant
//! declares one, otherwise by matching the variant's string value.

use envify::Envify;

#[derive(Debug, PartialEq, Envify)]
enum LogLevel {
    Debug = 1,
    Info = 2,
    Warning = 3,
}

#[derive(Debug, PartialEq, Envify)]
enum Mode {
    Development,
    #[envify(value = "prod")]
    Production,
}

#[derive(Debug, Envify)]
struct Config {
    pub tags: Vec<String>,
    pub allowed_ports: Vec<u16>,
    pub log_level: LogLevel,
    pub mode: Mode,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TAGS", "api,v2,internal");
    std::env::set_var("ALLOWED_PORTS", "80,443,8080");
    std::env::set_var("LOG_LEVEL", "2");
    std::env::set_var("MODE", "prod");

    let config = Config::from_env()?;

    println!("Tags: {:?}", config.tags);
    println!("Allowed ports: {:?}", config.allowed_ports);
    println!("Log level: {:?}", config.log_level);
    println!("Mode: {:?}", config.mode);

    Ok(())
}
