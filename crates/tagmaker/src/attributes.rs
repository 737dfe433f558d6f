//! Element Attributes
//!
//! Insertion-ordered attribute store: get, set, remove, has.

use std::collections::HashMap;

/// Named attribute map
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.entries.get(i))
            .map(|(_, value)| value.as_str())
    }

    /// Set attribute; an existing name keeps its position
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(&index) = self.by_name.get(name) {
            self.entries[index].1 = value.to_string();
        } else {
            self.by_name.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove attribute by name, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.by_name.remove(name)?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    /// Check if attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> Attributes<'_> {
        Attributes {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over `(name, value)` pairs of an [`AttributeMap`]
#[derive(Debug, Clone)]
pub struct Attributes<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Attributes<'_> {}
