//! Example demonstrating the prefix attribute and the Resolver API

use envify::{Envify, Resolver};

#[derive(Debug, Envify)]
#[envify(prefix = "MYAPP")]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    pub database_url: String,
    pub api_key: String,

    #[envify(default = 8080)]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    // Generated from_env() uses the struct-level prefix
    let config = Config::from_env()?;
    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);

    // The same struct can be rooted anywhere through the Resolver
    std::env::set_var("STAGING_DATABASE_URL", "postgres://staging/db");
    std::env::set_var("STAGING_API_KEY", "staging-key");

    let staging: Config = Resolver::new().envify("STAGING")?;
    println!("Staging database URL: {}", staging.database_url);

    Ok(())
}
