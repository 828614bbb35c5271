//! Runtime settings. Native builds read the environment at startup, web
//! builds bake values in at compile time.

use crate::proctor::DEFAULT_DISTRACTION_THRESHOLD;

pub const DEFAULT_EXPLAIN_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[cfg(target_arch = "wasm32")]
const DEFAULT_PUBLIC_BASE: &str = ".";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_PUBLIC_BASE: &str = "public";

const DEFAULT_STORE_PATH: &str = "mocktest_store.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub public_base: String, // question resources resolve against this
    pub explain_endpoint: String,
    pub explain_with_options: bool,
    pub distraction_threshold: u32,
    pub store_path: String, // native only
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_base: DEFAULT_PUBLIC_BASE.to_string(),
            explain_endpoint: DEFAULT_EXPLAIN_ENDPOINT.to_string(),
            explain_with_options: true,
            distraction_threshold: DEFAULT_DISTRACTION_THRESHOLD,
            store_path: DEFAULT_STORE_PATH.to_string(),
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let baked = match key {
                "MOCKTEST_PUBLIC_URL" => option_env!("MOCKTEST_PUBLIC_URL"),
                "MOCKTEST_EXPLAIN_ENDPOINT" => option_env!("MOCKTEST_EXPLAIN_ENDPOINT"),
                "MOCKTEST_EXPLAIN_WITH_OPTIONS" => option_env!("MOCKTEST_EXPLAIN_WITH_OPTIONS"),
                "MOCKTEST_DISTRACTION_THRESHOLD" => option_env!("MOCKTEST_DISTRACTION_THRESHOLD"),
                _ => None,
            };
            baked.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(base) = value("MOCKTEST_PUBLIC_URL") {
            config.public_base = base;
        }
        if let Some(endpoint) = value("MOCKTEST_EXPLAIN_ENDPOINT") {
            config.explain_endpoint = endpoint;
        }
        if let Some(raw) = value("MOCKTEST_EXPLAIN_WITH_OPTIONS") {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" => config.explain_with_options = true,
                "0" | "false" | "no" => config.explain_with_options = false,
                _ => log::warn!(
                    "MOCKTEST_EXPLAIN_WITH_OPTIONS={raw} is not a boolean; keeping default"
                ),
            }
        }
        if let Some(raw) = value("MOCKTEST_DISTRACTION_THRESHOLD") {
            match raw.parse::<u32>() {
                Ok(n) => config.distraction_threshold = n,
                Err(_) => log::warn!(
                    "MOCKTEST_DISTRACTION_THRESHOLD={raw} is not a number; keeping default"
                ),
            }
        }
        if let Some(path) = value("MOCKTEST_STORE") {
            config.store_path = path;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
        assert_eq!(AppConfig::default().distraction_threshold, 3);
    }

    #[test]
    fn overrides_apply() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MOCKTEST_PUBLIC_URL", " https://cdn.example/quiz/ "),
            ("MOCKTEST_EXPLAIN_WITH_OPTIONS", "no"),
            ("MOCKTEST_DISTRACTION_THRESHOLD", "5"),
            ("MOCKTEST_STORE", "/tmp/s.json"),
        ]));
        assert_eq!(config.public_base, "https://cdn.example/quiz/");
        assert!(!config.explain_with_options);
        assert_eq!(config.distraction_threshold, 5);
        assert_eq!(config.store_path, "/tmp/s.json");
        assert_eq!(config.explain_endpoint, DEFAULT_EXPLAIN_ENDPOINT);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MOCKTEST_DISTRACTION_THRESHOLD", "three"),
            ("MOCKTEST_EXPLAIN_WITH_OPTIONS", "maybe"),
            ("MOCKTEST_PUBLIC_URL", "   "),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
