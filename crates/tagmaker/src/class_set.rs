//! ClassSet (classList)
//!
//! Ordered, de-duplicated CSS class tokens.

use std::fmt;

/// Input accepted by [`ClassSet::merge`]: another set, or a
/// whitespace-separated string of tokens.
#[derive(Debug, Clone, Copy)]
pub enum ClassSource<'a> {
    Set(&'a ClassSet),
    Text(&'a str),
}

impl<'a> From<&'a ClassSet> for ClassSource<'a> {
    fn from(set: &'a ClassSet) -> Self {
        Self::Set(set)
    }
}

impl<'a> From<&'a str> for ClassSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ClassSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

/// Ordered set of class tokens; no duplicates, no empty tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: Vec<String>,
}

impl ClassSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a whitespace-separated string
    pub fn parse(s: &str) -> Self {
        let mut set = Self::new();
        set.merge([s]);
        set
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if a token exists (input is trimmed)
    pub fn has(&self, token: &str) -> bool {
        let token = token.trim();
        self.tokens.iter().any(|t| t == token)
    }

    /// Append a token unless it is blank or already present
    pub fn add(&mut self, token: &str) -> &mut Self {
        let token = token.trim();
        if !token.is_empty() && !self.has(token) {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Remove a token if present
    pub fn remove(&mut self, token: &str) -> &mut Self {
        let token = token.trim();
        if let Some(pos) = self.tokens.iter().position(|t| t == token) {
            self.tokens.remove(pos);
        }
        self
    }

    /// Remove the token if present, add it otherwise
    pub fn toggle(&mut self, token: &str) -> &mut Self {
        let token = token.trim();
        if token.is_empty() {
            return self;
        }
        if self.has(token) {
            self.remove(token)
        } else {
            self.add(token)
        }
    }

    /// Add every token from sets or whitespace-separated strings
    pub fn merge<'a, I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ClassSource<'a>>,
    {
        for source in sources {
            match source.into() {
                ClassSource::Set(set) => {
                    for token in set.iter() {
                        self.add(token);
                    }
                }
                ClassSource::Text(text) => {
                    for token in text.split_whitespace() {
                        self.add(token);
                    }
                }
            }
        }
        self
    }

    /// Tokens in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.merge([item.as_ref()]);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_dedups() {
        let mut set = ClassSet::new();
        set.add(" btn ").add("btn").add("").add("   ");
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), "btn");
    }

    #[test]
    fn test_remove_closes_gap() {
        let mut set = ClassSet::parse("a b c");
        set.remove("b").remove("missing");
        assert_eq!(set.as_slice(), ["a", "c"]);
    }

    #[test]
    fn test_toggle_involution() {
        let mut set = ClassSet::parse("active");
        set.toggle("active");
        assert!(!set.has("active"));
        set.toggle("active");
        assert!(set.has("active"));

        set.toggle("  ");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge_mixed_sources() {
        let other = ClassSet::parse("b c");
        let mut set = ClassSet::parse("a");
        set.merge([ClassSource::from(&other), ClassSource::from("c\td  a")]);
        assert_eq!(set.to_string(), "a b c d");
    }

    #[test]
    fn test_from_iter() {
        let set: ClassSet = ["x", " y ", "x", ""].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), ["x", "y"]);
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(ClassSet::new().to_string(), "");
    }
}
