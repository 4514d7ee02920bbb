//! Example demonstrating custom key segments

use envify::Envify;

#[derive(Debug, Envify)]
struct Config {
    // Resolves from DB_CONNECTION_STRING instead of DATABASE_URL
    #[envify(name = "DB_CONNECTION_STRING")]
    pub database_url: String,

    // Resolves from REDIS_URL instead of CACHE_URL
    #[envify(name = "REDIS_URL")]
    pub cache_url: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_CONNECTION_STRING", "postgres://localhost/db");
    std::env::set_var("REDIS_URL", "redis://localhost");

    let config = Config::from_env()?;

    println!("Database URL: {}", config.database_url);
    println!("Cache URL: {}", config.cache_url);

    Ok(())
}
