//! Lookup collaborator: where raw environment values come from

use std::collections::HashMap;

/// A read-only key-value store queried during resolution.
///
/// In production this is the process environment ([`ProcessEnv`]); tests
/// inject a plain [`HashMap`] to resolve deterministically without touching
/// process-wide state.
pub trait EnvSource {
    /// Look up a value by exact key.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process's own environment variable table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_process_env_get() {
        env::set_var("SOURCE_TEST_VAR", "value");
        assert_eq!(
            ProcessEnv.get("SOURCE_TEST_VAR"),
            Some("value".to_string())
        );
        env::remove_var("SOURCE_TEST_VAR");
        assert_eq!(ProcessEnv.get("SOURCE_TEST_VAR"), None);
    }

    #[test]
    fn test_hashmap_get() {
        let mut map = HashMap::new();
        map.insert("KEY".to_string(), "value".to_string());

        assert_eq!(EnvSource::get(&map, "KEY"), Some("value".to_string()));
        assert_eq!(EnvSource::get(&map, "OTHER"), None);
    }
}
