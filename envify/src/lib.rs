//! Typed, nested configuration from environment variables
//!
//! `envify` builds a strongly-typed configuration value out of flat
//! environment variables, following a prefix naming convention. Annotate a
//! struct with `#[derive(Envify)]` and each field resolves from
//! `PREFIX_FIELDNAME`; fields whose type is itself a derived struct recurse
//! with the extended prefix, so deep configuration trees map onto flat
//! variable names with exactly one `_` per segment.
//!
//! # Features
//!
//! - **Declarative**: automatic implementation with `#[derive(Envify)]`
//! - **Nested**: composite fields resolve recursively from sub-prefixes
//! - **Type-safe**: integers, floats, booleans, strings, enums, lists and
//!   `Option` out of the box
//! - **Testable**: the environment is an injected [`EnvSource`], so tests
//!   resolve from plain `HashMap`s
//! - **Default values**: support for the `Default` trait and explicit values
//!
//! # Value Parsing
//!
//! - Strings: `DATABASE_URL=postgres://localhost/db` (taken verbatim)
//! - Numbers: `MAX_CONNECTIONS=42`
//! - Booleans: `DEBUG=true` — exactly `true`/`false`/`1`/`0`,
//!   case-insensitive; anything else is an error
//! - Lists: `TAGS=a,b,c` — one comma-delimited variable; the empty string
//!   is the empty list
//! - Enums: unit-variant enums match by variant name (or
//!   `#[envify(value = "...")]`), or by integer discriminant when every
//!   variant declares one
//!
//! # Example
//!
//! ```rust
//! use envify::Envify;
//!
//! #[derive(Debug, Envify)]
//! struct DatabaseConfig {
//!     pub host: String,
//!
//!     #[envify(default = 5432)]
//!     pub port: u16,
//! }
//!
//! #[derive(Debug, Envify)]
//! #[envify(prefix = "APP")]
//! struct Config {
//!     // Resolves recursively from APP_DATABASE_HOST, APP_DATABASE_PORT
//!     pub database: DatabaseConfig,
//!
//!     // Absent variable means None, not an error
//!     pub log_level: Option<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("APP_DATABASE_HOST", "localhost");
//! #     let config = Config::from_env()?;
//! #     assert_eq!(config.database.host, "localhost");
//! #     assert_eq!(config.database.port, 5432);
//! #     assert_eq!(config.log_level, None);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[envify(prefix = "APP")]` (struct level)
//!
//! Root prefix used by the generated `from_env()`. Callers going through
//! [`Resolver::envify`] pass the prefix explicitly instead.
//!
//! ## `#[envify(validate = "function")]` (struct level)
//!
//! Run `fn(&Self) -> Result<(), impl Display>` after all fields resolve;
//! rejection surfaces as [`EnvifyError::Construction`].
//!
//! ## `#[envify(name = "SEGMENT")]`
//!
//! Override the key segment derived from the field name. The override is
//! used verbatim (it is not upper-cased).
//!
//! ## `#[envify(default)]` / `#[envify(default = value)]`
//!
//! Fallback when the field's own variable is absent: `Default::default()`
//! or the given expression. Not allowed on `Option` fields, which already
//! default to `None`. A variable missing *inside* a nested composite is
//! still an error; the default only covers absence of the field's own key.
//!
//! ## `#[envify(deserializer = "function")]`
//!
//! Bypass the built-in coercion with `fn(&str) -> Result<T, E>`, e.g.
//! `#[envify(deserializer = "serde_json::from_str")]` for JSON payloads.
//!
//! ## `#[envify(value = "...")]` (enum variant level)
//!
//! Literal string a string-valued enum variant matches against, instead of
//! the variant name.

pub mod de;

mod error;
mod resolver;
mod source;
mod value;

pub use de::FromEnv;
pub use envify_derive::Envify;
pub use error::EnvifyError;
pub use resolver::{envify, Resolver};
pub use source::{EnvSource, ProcessEnv};
pub use value::FromEnvValue;

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;
