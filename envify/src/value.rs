//! Scalar coercion: raw environment strings into primitive values

/// Coerce a single raw environment string into a value.
///
/// Implemented for the primitive scalars (integers, floats, `bool`,
/// `String`) and generated by `#[derive(Envify)]` for unit-variant enums.
/// Types implementing this trait are also valid element types for
/// comma-delimited `Vec<T>` fields.
///
/// The error is a bare message; the resolution layer wraps it into
/// [`EnvifyError::InvalidValue`](crate::EnvifyError::InvalidValue) together
/// with the key and raw value.
pub trait FromEnvValue: Sized {
    /// Convert a raw string into `Self`.
    fn from_env_value(raw: &str) -> Result<Self, String>;
}

impl FromEnvValue for String {
    // Identity: no trimming, no normalization.
    fn from_env_value(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl FromEnvValue for bool {
    /// Accepts a fixed case-insensitive vocabulary: `true`, `false`, `1`,
    /// `0`. Anything else is an error; arbitrary non-empty strings are
    /// never coerced to `true`.
    fn from_env_value(raw: &str) -> Result<Self, String> {
        if raw.eq_ignore_ascii_case("true") || raw == "1" {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
            Ok(false)
        } else {
            Err(format!(
                "expected 'true', 'false', '1' or '0' (case-insensitive), got '{raw}'"
            ))
        }
    }
}

macro_rules! impl_from_env_value_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                fn from_env_value(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|err| err.to_string())
                }
            }
        )*
    };
}

impl_from_env_value_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(
            String::from_env_value("  spaced  ").unwrap(),
            "  spaced  ".to_string()
        );
        assert_eq!(String::from_env_value("").unwrap(), "".to_string());
    }

    #[test]
    fn test_int_round_trip() {
        assert_eq!(i64::from_env_value("1993").unwrap(), 1993);
        assert_eq!(i32::from_env_value("-42").unwrap(), -42);
        assert_eq!(u16::from_env_value("5432").unwrap(), 5432);
    }

    #[test]
    fn test_int_rejects_non_numeric() {
        assert!(i64::from_env_value("str").is_err());
        assert!(u32::from_env_value("12.5").is_err());
        assert!(u8::from_env_value("-1").is_err());
    }

    #[test]
    fn test_float_round_trip() {
        assert_eq!(f64::from_env_value("3.14").unwrap(), 3.14);
        assert_eq!(f64::from_env_value("1e-3").unwrap(), 0.001);
        assert!(f32::from_env_value("not a float").is_err());
    }

    #[test]
    fn test_bool_vocabulary() {
        assert!(bool::from_env_value("true").unwrap());
        assert!(bool::from_env_value("TRUE").unwrap());
        assert!(bool::from_env_value("True").unwrap());
        assert!(bool::from_env_value("1").unwrap());
        assert!(!bool::from_env_value("false").unwrap());
        assert!(!bool::from_env_value("FALSE").unwrap());
        assert!(!bool::from_env_value("0").unwrap());
    }

    #[test]
    fn test_bool_rejects_everything_else() {
        assert!(bool::from_env_value("yes").is_err());
        assert!(bool::from_env_value("on").is_err());
        assert!(bool::from_env_value("").is_err());
        assert!(bool::from_env_value("2").is_err());
    }
}
