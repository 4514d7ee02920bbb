//! Basic example of loading configuration from environment variables

use envify::Envify;

#[derive(Debug, Envify)]
struct Config {
    pub database_url: String,
    pub api_key: String,

    #[envify(default = 8080)]
    pub port: u16,

    #[envify(default)]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("API_KEY", "secret-key-123");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {} (default)", config.port);
    println!("  Debug: {} (default)", config.debug);

    Ok(())
}
