//! Error types for environment variable resolution

/// Errors that can occur while resolving a configuration value from
/// environment variables.
///
/// Resolution is fail-fast: the first error aborts the whole build and no
/// partially populated value is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum EnvifyError {
    /// Required environment variable is not set.
    ///
    /// Occurs when a non-optional field's environment variable is not found
    /// and no default value is specified. `name` is the exact key that was
    /// queried, including every prefix segment.
    #[error("Environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Environment variable is set but its value cannot be coerced into the
    /// target type.
    #[error("Failed to convert environment variable '{name}' (value '{value}') to {type_name}: {message}")]
    InvalidValue {
        /// Name of the environment variable being coerced
        name: String,
        /// Raw value found in the environment
        value: String,
        /// Fully qualified target type name
        type_name: String,
        /// Error message from the coercion
        message: String,
    },

    /// The target type cannot be resolved from the environment.
    ///
    /// At runtime this only happens when nested resolution exceeds the
    /// maximum depth, which indicates a self-referential type graph.
    /// Shapes that are decidable at macro-expansion time (tuple structs,
    /// non-unit enum variants, ...) are compile errors instead.
    #[error("Unsupported type {type_name} at '{path}': {reason}")]
    UnsupportedType {
        /// Fully qualified type name that could not be resolved
        type_name: String,
        /// Key prefix at which resolution failed
        path: String,
        /// Why the type is unsupported
        reason: String,
    },

    /// All fields resolved but the target type's validation hook rejected
    /// the assembled values.
    #[error("Validation of {type_name} rejected the resolved values: {message}")]
    Construction {
        /// Fully qualified type name of the rejected value
        type_name: String,
        /// Message produced by the validation hook
        message: String,
    },
}

impl EnvifyError {
    /// Create a missing environment variable error (used by macro-generated code)
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create a coercion error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an unsupported type error (used by the resolution depth guard)
    #[doc(hidden)]
    pub fn unsupported<T>(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>().to_string(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a construction error (used by macro-generated code)
    #[doc(hidden)]
    pub fn construction<T>(message: impl std::fmt::Display) -> Self {
        Self::Construction {
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }
}
