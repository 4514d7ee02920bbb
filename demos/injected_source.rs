//! Example demonstrating an injected lookup source
//!
//! The resolver reads from any `EnvSource`, so tests (or tools that load
//! variables from somewhere else entirely) can resolve from a plain map
//! without touching the process environment.

use envify::{Envify, Resolver};
use std::collections::HashMap;

#[derive(Debug, Envify)]
struct DatabaseConfig {
    pub username: String,
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    let mut env = HashMap::new();
    env.insert(
        "DATABASE_CONFIG_USERNAME".to_string(),
        "postgres".to_string(),
    );
    env.insert("DATABASE_CONFIG_PORT".to_string(), "5432".to_string());

    let resolver = Resolver::with_source(env);
    let config: DatabaseConfig = resolver.envify("database_config")?;

    println!("Username: {}", config.username);
    println!("Port: {}", config.port);

    Ok(())
}
