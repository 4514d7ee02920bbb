//! Example demonstrating nested configuration blocks
//!
//! A field whose type is itself a derived struct resolves recursively from
//! a sub-prefix: with root prefix `APP`, the field `database` of type
//! `DatabaseConfig` reads `APP_DATABASE_HOST`, `APP_DATABASE_PORT`, ...

use envify::Envify;

#[derive(Debug, Envify)]
struct DatabaseConfig {
    pub host: String,

    #[envify(default = 5432)]
    pub port: u16,

    pub username: String,
}

#[derive(Debug, Envify)]
struct CacheConfig {
    pub host: String,

    #[envify(default = 60)]
    pub ttl_seconds: u32,
}

#[derive(Debug, Envify)]
#[envify(prefix = "APP")]
struct Config {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_DATABASE_HOST", "db.internal");
    std::env::set_var("APP_DATABASE_USERNAME", "postgres");
    std::env::set_var("APP_CACHE_HOST", "redis.internal");

    let config = Config::from_env()?;

    println!("Database: {}@{}:{}", config.database.username, config.database.host, config.database.port);
    println!("Cache: {} (ttl {}s)", config.cache.host, config.cache.ttl_seconds);

    Ok(())
}
