//! Example demonstrating Option<T> fields
//!
//! An absent variable resolves an `Option` field to `None` instead of an
//! error. A present but malformed value is still an error.

use envify::Envify;

#[derive(Debug, Envify)]
struct Config {
    pub app_name: String,

    // None when SENTRY_DSN is not set
    pub sentry_dsn: Option<String>,

    // None when WORKER_COUNT is not set
    pub worker_count: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "my-service");
    std::env::set_var("WORKER_COUNT", "4");
    std::env::remove_var("SENTRY_DSN");

    let config = Config::from_env()?;

    println!("App: {}", config.app_name);
    println!("Sentry DSN: {:?}", config.sentry_dsn);
    println!("Workers: {:?}", config.worker_count);

    Ok(())
}
