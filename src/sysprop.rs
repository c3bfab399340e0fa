//! Ordered system-property maps rendered as `-Dkey=value` tokens.
//!
//! Each argument provider builds a fresh map per invocation; insertion order
//! is preserved into the rendered argument vector so spawned processes see a
//! reproducible command line.

use indexmap::IndexMap;

use crate::error::{BurnishError, Result};

/// An insertion-ordered map of JVM system properties.
///
/// Inserting a key twice is a configuration error rather than a silent
/// overwrite: the providers own disjoint key sets, so a collision always
/// means miswired inputs.
///
/// # Examples
///
/// ```
/// use burnish::sysprop::PropertyMap;
///
/// let mut properties = PropertyMap::new();
/// properties
///     .insert("integTest.libsRepo", "build/repo")
///     .expect("fresh key");
/// assert_eq!(properties.arguments(), vec!["-DintegTest.libsRepo=build/repo"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: IndexMap<String, String>,
}

impl PropertyMap {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::DuplicateProperty`] when `key` is already
    /// present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(BurnishError::DuplicateProperty { key });
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Absorb every entry of `other`, preserving its insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::DuplicateProperty`] on the first key that is
    /// already present; entries before it are kept.
    pub fn merge(&mut self, other: Self) -> Result<()> {
        for (key, value) in other.entries {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Look up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true when no properties have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Render the map as `-Dkey=value` tokens in insertion order.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, value)| format!("-D{key}={value}"))
            .collect()
    }

    /// Consume the map and render it as `-Dkey=value` tokens.
    #[must_use]
    pub fn into_arguments(self) -> Vec<String> {
        self.arguments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_renders_no_arguments() {
        let properties = PropertyMap::new();
        assert!(properties.arguments().is_empty());
    }

    #[test]
    fn arguments_follow_insertion_order() {
        let mut properties = PropertyMap::new();
        properties
            .insert("integTest.gradleUserHomeDir", "/work/user-home/bin")
            .expect("fresh key");
        properties
            .insert("integTest.samplesdir", "/work/snippets")
            .expect("fresh key");
        properties
            .insert("org.gradle.integtest.daemon.registry", "/work/daemon")
            .expect("fresh key");

        assert_eq!(
            properties.arguments(),
            vec![
                "-DintegTest.gradleUserHomeDir=/work/user-home/bin",
                "-DintegTest.samplesdir=/work/snippets",
                "-Dorg.gradle.integtest.daemon.registry=/work/daemon",
            ]
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut properties = PropertyMap::new();
        properties
            .insert("integTest.libsRepo", "build/repo")
            .expect("fresh key");
        let err = properties
            .insert("integTest.libsRepo", "other/repo")
            .expect_err("second insert must fail");
        assert!(err.to_string().contains("integTest.libsRepo"));
        assert_eq!(properties.get("integTest.libsRepo"), Some("build/repo"));
    }

    #[test]
    fn merge_rejects_cross_map_duplicates() {
        let mut left = PropertyMap::new();
        left.insert("integTest.binDistribution", "dist.zip")
            .expect("fresh key");

        let mut right = PropertyMap::new();
        right
            .insert("integTest.binDistribution", "dist-2.zip")
            .expect("fresh key");

        assert!(left.merge(right).is_err());
    }

    #[test]
    fn merge_appends_in_order() {
        let mut left = PropertyMap::new();
        left.insert("integTest.gradleHomeDir", "/dist")
            .expect("fresh key");

        let mut right = PropertyMap::new();
        right
            .insert("integTest.libsRepo", "build/repo")
            .expect("fresh key");

        left.merge(right).expect("disjoint keys");
        assert_eq!(
            left.arguments(),
            vec![
                "-DintegTest.gradleHomeDir=/dist",
                "-DintegTest.libsRepo=build/repo",
            ]
        );
    }
}
