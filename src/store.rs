//! Shared property store for resolved setting values.
//!
//! The store is freely writable while it is being seeded (properties file,
//! `-D` defines, host-supplied keys) and append-only once the resolution
//! pass starts: `set_if_absent` never overwrites, so a key that was seeded
//! externally stays authoritative for the whole run.

use crate::error::{OsbConfigError, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping of property key to resolved string value.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    values: BTreeMap<String, String>,
}

impl PropertyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before resolution begins. Overwrites any earlier seed.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Seed a key only if it is not already present.
    pub fn seed_if_absent(&mut self, key: &str, value: impl Into<String>) {
        if !self.contains(key) {
            self.values.insert(key.to_string(), value.into());
        }
    }

    /// Record a resolved value unless the key is already set.
    ///
    /// Returns true if the value was written. Once a key is present the
    /// store wins and the computed value is discarded by callers.
    pub fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.values.insert(key.to_string(), value.to_string());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Load seed properties from a YAML file containing a flat string map.
pub fn load_properties_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        OsbConfigError::UserError(format!(
            "failed to read properties file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&content).map_err(|e| {
        OsbConfigError::UserError(format!(
            "failed to parse properties file '{}': {}\n\
             Fix: the file must be a flat YAML map of string keys to string values.",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_if_absent_writes_new_key() {
        let mut store = PropertyStore::new();
        assert!(store.set_if_absent("osbconfig.osbhome", "/opt/mw/Oracle_OSB1"));
        assert_eq!(store.get("osbconfig.osbhome"), Some("/opt/mw/Oracle_OSB1"));
    }

    #[test]
    fn set_if_absent_never_overwrites() {
        let mut store = PropertyStore::new();
        store.seed("osbconfig.osbhome", "/seeded");
        assert!(!store.set_if_absent("osbconfig.osbhome", "/computed"));
        assert_eq!(store.get("osbconfig.osbhome"), Some("/seeded"));
    }

    #[test]
    fn seed_overwrites_earlier_seed() {
        let mut store = PropertyStore::new();
        store.seed("key", "from-file");
        store.seed("key", "from-define");
        assert_eq!(store.get("key"), Some("from-define"));
    }

    #[test]
    fn seed_if_absent_keeps_existing() {
        let mut store = PropertyStore::new();
        store.seed("project.build.directory", "/explicit");
        store.seed_if_absent("project.build.directory", "target");
        assert_eq!(store.get("project.build.directory"), Some("/explicit"));

        store.seed_if_absent("java.home", "/usr/lib/jvm/java");
        assert_eq!(store.get("java.home"), Some("/usr/lib/jvm/java"));
    }

    #[test]
    fn contains_tracks_seeded_keys() {
        let mut store = PropertyStore::new();
        assert!(!store.contains("a"));
        store.seed("a", "1");
        assert!(store.contains("a"));
    }

    #[test]
    fn load_properties_file_reads_flat_map() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("osbconfig.yaml");
        std::fs::write(
            &path,
            "osbconfig.mwhome: /opt/mw\nosbconfig.wlver: \"12.1\"\n",
        )
        .unwrap();

        let props = load_properties_file(&path).unwrap();
        assert_eq!(props.get("osbconfig.mwhome"), Some(&"/opt/mw".to_string()));
        assert_eq!(props.get("osbconfig.wlver"), Some(&"12.1".to_string()));
    }

    #[test]
    fn load_properties_file_missing_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yaml");
        let err = load_properties_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read properties file"));
    }

    #[test]
    fn load_properties_file_rejects_non_map() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        std::fs::write(&path, "- just\n- a\n- list\n").unwrap();
        let err = load_properties_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse properties file"));
    }
}
