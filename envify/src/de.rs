//! Recursive resolution of typed values from an environment lookup

use crate::error::EnvifyError;
use crate::source::EnvSource;
use crate::value::FromEnvValue;

/// Delimiter used by `Vec<T>` fields stored in a single variable.
const LIST_DELIMITER: char = ',';

/// Maximum nesting depth for composite resolution.
///
/// Self-referential type graphs (representable through `Box`) would recurse
/// forever; the guard turns them into a reported error instead of a stack
/// overflow. Real configuration trees are nowhere near this deep.
const MAX_DEPTH: usize = 32;

/// Handle on the lookup collaborator passed down through resolution.
///
/// Carries the source and the current nesting depth. One `Lookup` is created
/// per [`Resolver::envify`](crate::Resolver::envify) call; nothing is cached
/// across calls.
pub struct Lookup<'a> {
    source: &'a dyn EnvSource,
    depth: usize,
}

impl<'a> Lookup<'a> {
    pub(crate) fn new(source: &'a dyn EnvSource) -> Self {
        Self { source, depth: 0 }
    }

    /// Query the underlying source by exact key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.source.get(key)
    }

    /// Enter a nested composite at `path`, bumping the depth counter.
    ///
    /// Called by derive-generated `FromEnv` impls before resolving fields.
    pub fn descend<T>(&self, path: &str) -> Result<Lookup<'a>, EnvifyError> {
        if self.depth >= MAX_DEPTH {
            return Err(EnvifyError::unsupported::<T>(
                path,
                format!("nesting exceeds the maximum depth of {MAX_DEPTH}, is the type self-referential?"),
            ));
        }
        Ok(Lookup {
            source: self.source,
            depth: self.depth + 1,
        })
    }
}

/// Join a prefix and a field segment into an environment key.
///
/// Exactly one `_` between segments; an empty prefix joins to the bare
/// segment. Segments are expected to be upper-cased already (the derive
/// upper-cases field names at expansion time, [`Resolver::envify`]
/// upper-cases the root prefix).
///
/// [`Resolver::envify`]: crate::Resolver::envify
pub fn env_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}_{segment}")
    }
}

/// A type that can be resolved from an environment lookup at a key.
///
/// Scalars read the key directly; `Option`/`Vec`/`Box` wrap their inner
/// resolution; `#[derive(Envify)]` structs treat the key as a prefix and
/// recurse into their fields. Implement this by hand for types the derive
/// cannot express.
pub trait FromEnv: Sized {
    /// Resolve a value at `key` (a full, upper-cased environment key).
    fn resolve(lookup: &Lookup<'_>, key: &str) -> Result<Self, EnvifyError>;
}

/// Resolve a scalar through its [`FromEnvValue`] coercion.
///
/// Used by the scalar `FromEnv` impls below and by derive-generated enum
/// impls.
#[doc(hidden)]
pub fn resolve_value<T: FromEnvValue>(lookup: &Lookup<'_>, key: &str) -> Result<T, EnvifyError> {
    match lookup.get(key) {
        Some(raw) => {
            T::from_env_value(&raw).map_err(|message| EnvifyError::parse_error::<T>(key, &raw, message))
        }
        None => Err(EnvifyError::missing(key)),
    }
}

/// Resolve a required field (used by macro-generated code).
#[doc(hidden)]
pub fn resolve_required<T: FromEnv>(lookup: &Lookup<'_>, key: &str) -> Result<T, EnvifyError> {
    T::resolve(lookup, key)
}

/// Resolve a field with a fallback value (used by macro-generated code).
///
/// The default only applies when `key` itself is absent. A `Missing` error
/// naming a deeper key means a partially-present nested composite and still
/// propagates, so a half-set nested block is reported rather than silently
/// replaced.
#[doc(hidden)]
pub fn resolve_with_default<T: FromEnv>(
    lookup: &Lookup<'_>,
    key: &str,
    default: T,
) -> Result<T, EnvifyError> {
    match T::resolve(lookup, key) {
        Err(EnvifyError::Missing { ref name }) if name == key => Ok(default),
        other => other,
    }
}

macro_rules! impl_from_env_for_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnv for $ty {
                fn resolve(lookup: &Lookup<'_>, key: &str) -> Result<Self, EnvifyError> {
                    resolve_value::<$ty>(lookup, key)
                }
            }
        )*
    };
}

impl_from_env_for_scalar!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Absence of the exact key resolves to `None` instead of an error.
///
/// Only the key queried at this level counts as "absent": a `Missing` error
/// carrying a deeper key (a required field inside a nested composite that is
/// otherwise present) propagates unchanged.
impl<T: FromEnv> FromEnv for Option<T> {
    fn resolve(lookup: &Lookup<'_>, key: &str) -> Result<Self, EnvifyError> {
        match T::resolve(lookup, key) {
            Ok(value) => Ok(Some(value)),
            Err(EnvifyError::Missing { ref name }) if name == key => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// A list is one variable holding delimiter-separated segments.
///
/// The empty string is an empty list, not a single empty element. Segments
/// are not trimmed, so a trailing delimiter produces a trailing empty
/// segment (which only element types accepting `""` can coerce). Element
/// types are restricted to scalars and enums by the `FromEnvValue` bound;
/// lists of composites do not compile.
impl<T: FromEnvValue> FromEnv for Vec<T> {
    fn resolve(lookup: &Lookup<'_>, key: &str) -> Result<Self, EnvifyError> {
        let raw = lookup.get(key).ok_or_else(|| EnvifyError::missing(key))?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        raw.split(LIST_DELIMITER)
            .map(|segment| {
                T::from_env_value(segment)
                    .map_err(|message| EnvifyError::parse_error::<T>(key, segment, message))
            })
            .collect()
    }
}

impl<T: FromEnv> FromEnv for Box<T> {
    fn resolve(lookup: &Lookup<'_>, key: &str) -> Result<Self, EnvifyError> {
        T::resolve(lookup, key).map(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_key_joins_with_single_separator() {
        assert_eq!(env_key("APP", "PORT"), "APP_PORT");
        assert_eq!(env_key("APP_DATABASE", "HOST"), "APP_DATABASE_HOST");
    }

    #[test]
    fn test_env_key_empty_prefix() {
        assert_eq!(env_key("", "PORT"), "PORT");
    }

    #[test]
    fn test_resolve_required_success() {
        let src = source(&[("PORT", "42")]);
        let lookup = Lookup::new(&src);
        let value: i32 = resolve_required(&lookup, "PORT").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_resolve_required_missing_names_key() {
        let src = source(&[]);
        let lookup = Lookup::new(&src);
        let result: Result<String, _> = resolve_required(&lookup, "ABSENT");
        match result {
            Err(EnvifyError::Missing { name }) => assert_eq!(name, "ABSENT"),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_with_default_env_set() {
        let src = source(&[("COUNT", "100")]);
        let lookup = Lookup::new(&src);
        let value: u32 = resolve_with_default(&lookup, "COUNT", 50).unwrap();
        assert_eq!(value, 100);
    }

    #[test]
    fn test_resolve_with_default_use_default() {
        let src = source(&[]);
        let lookup = Lookup::new(&src);
        let value: u32 = resolve_with_default(&lookup, "COUNT", 50).unwrap();
        assert_eq!(value, 50);
    }

    #[test]
    fn test_resolve_with_default_keeps_parse_errors() {
        let src = source(&[("COUNT", "not_a_number")]);
        let lookup = Lookup::new(&src);
        let result: Result<u32, _> = resolve_with_default(&lookup, "COUNT", 50);
        assert!(matches!(result, Err(EnvifyError::InvalidValue { .. })));
    }

    #[test]
    fn test_option_absent_is_none() {
        let src = source(&[]);
        let lookup = Lookup::new(&src);
        let value: Option<String> = resolve_required(&lookup, "ABSENT").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_option_present_is_some() {
        let src = source(&[("NAME", "hello")]);
        let lookup = Lookup::new(&src);
        let value: Option<String> = resolve_required(&lookup, "NAME").unwrap();
        assert_eq!(value, Some("hello".to_string()));
    }

    #[test]
    fn test_option_keeps_parse_errors() {
        let src = source(&[("PORT", "abc")]);
        let lookup = Lookup::new(&src);
        let result: Result<Option<u16>, _> = resolve_required(&lookup, "PORT");
        assert!(matches!(result, Err(EnvifyError::InvalidValue { .. })));
    }

    #[test]
    fn test_vec_splits_on_comma() {
        let src = source(&[("TAGS", "a,b,c")]);
        let lookup = Lookup::new(&src);
        let value: Vec<String> = resolve_required(&lookup, "TAGS").unwrap();
        assert_eq!(value, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_empty_string_is_empty_list() {
        let src = source(&[("TAGS", "")]);
        let lookup = Lookup::new(&src);
        let value: Vec<String> = resolve_required(&lookup, "TAGS").unwrap();
        assert!(value.is_empty());

        let value: Vec<i32> = resolve_required(&lookup, "TAGS").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_vec_segments_are_not_trimmed() {
        let src = source(&[("TAGS", " a, b")]);
        let lookup = Lookup::new(&src);
        let value: Vec<String> = resolve_required(&lookup, "TAGS").unwrap();
        assert_eq!(value, vec![" a", " b"]);
    }

    #[test]
    fn test_vec_of_ints() {
        let src = source(&[("PORTS", "80,443,8080")]);
        let lookup = Lookup::new(&src);
        let value: Vec<u16> = resolve_required(&lookup, "PORTS").unwrap();
        assert_eq!(value, vec![80, 443, 8080]);
    }

    #[test]
    fn test_vec_bad_segment_reports_segment_value() {
        let src = source(&[("PORTS", "80,oops,8080")]);
        let lookup = Lookup::new(&src);
        let result: Result<Vec<u16>, _> = resolve_required(&lookup, "PORTS");
        match result {
            Err(EnvifyError::InvalidValue { name, value, .. }) => {
                assert_eq!(name, "PORTS");
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_vec_trailing_delimiter_keeps_empty_segment() {
        let src = source(&[("TAGS", "a,")]);
        let lookup = Lookup::new(&src);

        let value: Vec<String> = resolve_required(&lookup, "TAGS").unwrap();
        assert_eq!(value, vec!["a", ""]);

        let result: Result<Vec<u16>, _> = resolve_required(&lookup, "TAGS");
        assert!(matches!(result, Err(EnvifyError::InvalidValue { .. })));
    }

    #[test]
    fn test_descend_trips_after_max_depth() {
        let src = source(&[]);
        let mut lookup = Lookup::new(&src);
        for _ in 0..MAX_DEPTH {
            lookup = lookup.descend::<()>("PATH").unwrap();
        }
        let result = lookup.descend::<()>("PATH");
        assert!(matches!(result, Err(EnvifyError::UnsupportedType { .. })));
    }
}
