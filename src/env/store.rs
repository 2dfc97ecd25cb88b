//! Environment providers and stores

use std::collections::{BTreeMap, HashMap};

/// Anything that can answer "what is the value of this variable?".
pub trait EnvironmentProvider {
    fn var(&self, name: &str) -> Option<String>;
}

/// A provider that can also be written to.
pub trait EnvironmentStore: EnvironmentProvider {
    /// Set `key` to `value`, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str);
}

/// The environment of the running process.
///
/// Writes go to process-global state. Callers are responsible for not
/// writing from several threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentProvider for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvironmentStore for ProcessEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An in-memory environment, used for dry runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: BTreeMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variable names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl EnvironmentProvider for MemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl EnvironmentStore for MemoryEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

impl EnvironmentProvider for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvironmentProvider for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_environment_overwrites_values() {
        let mut env = MemoryEnvironment::new();
        env.set_var("KEY", "one");
        env.set_var("KEY", "two");

        assert_eq!(env.var("KEY").as_deref(), Some("two"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn memory_environment_lists_keys_sorted() {
        let env: MemoryEnvironment = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn process_environment_round_trips_through_std() {
        let mut env = ProcessEnvironment;
        env.set_var("ENV_STORE_TEST_7D21", "present");

        assert_eq!(std::env::var("ENV_STORE_TEST_7D21").as_deref(), Ok("present"));
        assert_eq!(env.var("ENV_STORE_TEST_7D21").as_deref(), Some("present"));
    }

    #[test]
    fn maps_act_as_providers() {
        let map: HashMap<String, String> = HashMap::from([("A".to_string(), "1".to_string())]);
        assert_eq!(map.var("A").as_deref(), Some("1"));
        assert_eq!(map.var("B"), None);
    }
}
