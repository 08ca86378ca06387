/*!
Open key-value option mappings for strategies.

Strategies receive their tuning parameters (cost factors, output
lengths, ...) as an open mapping rather than a fixed struct, so new
algorithms can introduce parameters without touching the core.
*/

use std::collections::HashMap;

use serde_json::Value;

/// An open key-value mapping of strategy options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(HashMap<String, Value>);

impl Options {
    /// Create an empty option mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any existing value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an option by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the mapping holds no options
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of options in the mapping
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the options
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge these options over a set of defaults.
    ///
    /// Keys present here win on collision; non-overlapping keys from both
    /// sides are preserved.
    pub fn merged_over(&self, defaults: &Options) -> Options {
        let mut merged = defaults.clone();
        for (key, value) in &self.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl From<HashMap<String, Value>> for Options {
    fn from(map: HashMap<String, Value>) -> Self {
        Options(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Options(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
