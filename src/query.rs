//! Query parameter type.

use std::fmt;

/// One decoded key/value pair of a URL query.
///
/// A parameter written without `=` has an empty value. Equality is
/// structural over both key and value.
///
/// # Examples
///
/// ```
/// use lazy_url::KeyVal;
///
/// let kv = KeyVal::new("q", "a b");
/// assert_eq!(kv.key(), "q");
/// assert_eq!(kv.val(), "a b");
///
/// let flag = KeyVal::key_only("verbose");
/// assert_eq!(flag.val(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyVal {
    key: String,
    val: String,
}

impl KeyVal {
    /// Creates a pair from a decoded key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            val: val.into(),
        }
    }

    /// Creates a pair with an empty value.
    #[must_use]
    pub fn key_only(key: impl Into<String>) -> Self {
        Self::new(key, String::new())
    }

    /// Returns the decoded key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the decoded value.
    #[must_use]
    pub fn val(&self) -> &str {
        &self.val
    }

    /// Replaces the key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Replaces the value.
    pub fn set_val(&mut self, val: impl Into<String>) {
        self.val = val.into();
    }

    /// Exchanges the contents of two pairs.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns true if both key and value are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.val.is_empty()
    }

    /// Splits the pair into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.val)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyVal {
    fn from((key, val): (K, V)) -> Self {
        Self::new(key, val)
    }
}

impl From<&str> for KeyVal {
    fn from(key: &str) -> Self {
        Self::key_only(key)
    }
}

/// Formats the pair for debugging output as `<key(..) val(..)>`.
impl fmt::Display for KeyVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<key({}) val({})>", self.key, self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pair() {
        let kv = KeyVal::new("version", "2.0");
        assert_eq!(kv.key(), "version");
        assert_eq!(kv.val(), "2.0");
    }

    #[test]
    fn key_only_has_empty_value() {
        let kv = KeyVal::key_only("flag");
        assert_eq!(kv.val(), "");
        assert_eq!(kv, KeyVal::from("flag"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(KeyVal::new("a", "1"), KeyVal::from(("a", "1")));
        assert_ne!(KeyVal::new("a", "1"), KeyVal::new("a", "2"));
        assert_ne!(KeyVal::new("a", "1"), KeyVal::new("b", "1"));
    }

    #[test]
    fn setters_replace_parts() {
        let mut kv = KeyVal::default();
        assert!(kv.is_empty());
        kv.set_key("k");
        kv.set_val("v");
        assert_eq!(kv.into_parts(), ("k".to_string(), "v".to_string()));
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = KeyVal::new("a", "1");
        let mut b = KeyVal::key_only("b");
        a.swap(&mut b);
        assert_eq!(a, KeyVal::key_only("b"));
        assert_eq!(b, KeyVal::new("a", "1"));
    }

    #[test]
    fn display_debug_form() {
        assert_eq!(KeyVal::new("a", "b c").to_string(), "<key(a) val(b c)>");
    }
}
