//! Persisted per-user state
//!
//! Remembers the last command used for each container and the version
//! marker of the installed build.

mod store;

pub use store::{ConfigStore, CONFIG_DIR, CONFIG_FILE};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of the per-user config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Version marker of the installed build, empty if never updated
    #[serde(default)]
    pub version: String,
    /// Last command used per container name
    #[serde(default)]
    pub containers: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered command for `container`, if any
    pub fn last_command(&self, container: &str) -> Option<&[String]> {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .filter(|c| !c.is_empty())
    }

    /// Record `commands` as the last command used in `container`.
    ///
    /// Replaces any previous entry. Empty sequences are ignored.
    pub fn remember(&mut self, container: &str, commands: &[String]) {
        if commands.is_empty() {
            return;
        }
        self.containers
            .insert(container.to_string(), commands.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &[&str]) -> Vec<String> {
        s.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_remember_overwrites() {
        let mut config = Config::new();
        config.remember("db", &tokens(&["psql", "-U", "postgres"]));
        config.remember("db", &tokens(&["sh"]));
        assert_eq!(config.last_command("db"), Some(&tokens(&["sh"])[..]));
        assert_eq!(config.containers.len(), 1);
    }

    #[test]
    fn test_remember_ignores_empty() {
        let mut config = Config::new();
        config.remember("db", &[]);
        assert!(config.last_command("db").is_none());
        assert!(config.containers.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::new());

        let config: Config = serde_json::from_str(r#"{"version":"abc"}"#).unwrap();
        assert_eq!(config.version, "abc");
        assert!(config.containers.is_empty());
    }
}
