/// An insertion-ordered set of unique query-parameter pairs.
///
/// Merging never mutates an input set; on a key collision the value from the
/// set that appears later wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.set(key, value);
        }
        params
    }

    /// Set `key` to `value`, replacing any existing value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// New set containing `self` overlaid with `other`; `other` wins on
    /// shared keys.
    pub fn merged(&self, other: &Params) -> Params {
        let mut result = self.clone();
        for (key, value) in &other.entries {
            result.set(key.clone(), value.clone());
        }
        result
    }

    /// Copy of `self` with one pair added or overridden.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Params {
        let mut result = self.clone();
        result.set(key, value);
        result
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
