//! Resolver service: the public entry point for building values

use crate::de::{FromEnv, Lookup};
use crate::error::EnvifyError;
use crate::source::{EnvSource, ProcessEnv};

/// Builds typed values from an environment lookup.
///
/// The resolver owns no state beyond the source and caches nothing: each
/// [`envify`](Resolver::envify) call re-reads the source, so a single
/// resolver may be shared across threads as long as the source is read-only
/// during the call.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use envify::{Envify, Resolver};
///
/// #[derive(Debug, Envify)]
/// struct DatabaseConfig {
///     pub username: String,
///     pub port: u16,
/// }
///
/// # fn main() -> Result<(), envify::EnvifyError> {
/// let mut env = HashMap::new();
/// env.insert("DATABASE_CONFIG_USERNAME".to_string(), "postgres".to_string());
/// env.insert("DATABASE_CONFIG_PORT".to_string(), "5432".to_string());
///
/// let resolver = Resolver::with_source(env);
/// let config: DatabaseConfig = resolver.envify("database_config")?;
/// assert_eq!(config.username, "postgres");
/// assert_eq!(config.port, 5432);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Resolver<S = ProcessEnv> {
    source: S,
}

impl Resolver<ProcessEnv> {
    /// Resolver over the process environment.
    pub fn new() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: EnvSource> Resolver<S> {
    /// Resolver over an injected source (a `HashMap` in tests).
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Build a `T` rooted at `prefix`.
    ///
    /// The prefix is upper-cased, then each field of `T` resolves at
    /// `PREFIX_FIELDNAME`; nested composites extend the prefix recursively
    /// with exactly one `_` per segment. An empty prefix resolves fields at
    /// their bare upper-cased names.
    pub fn envify<T: FromEnv>(&self, prefix: &str) -> Result<T, EnvifyError> {
        T::resolve(&Lookup::new(&self.source), &prefix.to_uppercase())
    }
}

/// Build a `T` rooted at `prefix` from the process environment.
///
/// Shorthand for `Resolver::new().envify(prefix)`.
pub fn envify<T: FromEnv>(prefix: &str) -> Result<T, EnvifyError> {
    Resolver::new().envify(prefix)
}
