// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key path newtype.
//!
//! A `KeyPath` is the raw `--key` argument. Splitting happens on every `.`
//! and there is no escape for literal dots in key names.

use std::fmt;

/// A dotted path into a decoded secrets document.
///
/// # Examples
///
/// ```
/// use sops_read_secret::domain::KeyPath;
///
/// let path = KeyPath::from("database.credentials.password");
/// assert_eq!(path.segments(), vec!["database", "credentials", "password"]);
/// assert!(!path.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// Creates a new `KeyPath` from a `String`.
    pub fn new(path: String) -> Self {
        KeyPath(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when no extraction was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the path on every `.`.
    ///
    /// Empty segments are kept, so `"a..b"` has three segments.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    /// Splits the path into an INI `(section, key)` pair.
    ///
    /// Only the first `.` separates; a path without a dot names a key in the
    /// default (empty-name) section.
    ///
    /// # Examples
    ///
    /// ```
    /// use sops_read_secret::domain::KeyPath;
    ///
    /// assert_eq!(KeyPath::from("web.port").ini_parts(), ("web", "port"));
    /// assert_eq!(KeyPath::from("debug").ini_parts(), ("", "debug"));
    /// assert_eq!(KeyPath::from("a.b.c").ini_parts(), ("a", "b.c"));
    /// ```
    pub fn ini_parts(&self) -> (&str, &str) {
        self.0.split_once('.').unwrap_or(("", self.0.as_str()))
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath(s)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(s.to_string())
    }
}

impl From<Option<String>> for KeyPath {
    fn from(s: Option<String>) -> Self {
        KeyPath(s.unwrap_or_default())
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_path_segments() {
        let path = KeyPath::from("a.b.c");
        assert_eq!(path.segments(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_segment() {
        let path = KeyPath::from("password");
        assert_eq!(path.segments(), vec!["password"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let path = KeyPath::from("a..b");
        assert_eq!(path.segments(), vec!["a", "", "b"]);

        let path = KeyPath::from("a.");
        assert_eq!(path.segments(), vec!["a", ""]);
    }

    #[test]
    fn test_empty_path() {
        let path = KeyPath::from("");
        assert!(path.is_empty());
        assert_eq!(KeyPath::default(), path);
        assert_eq!(KeyPath::from(None), path);
    }

    #[test]
    fn test_ini_parts() {
        assert_eq!(KeyPath::from("web.port").ini_parts(), ("web", "port"));
        assert_eq!(KeyPath::from("debug").ini_parts(), ("", "debug"));
        assert_eq!(KeyPath::from("a.b.c").ini_parts(), ("a", "b.c"));
        assert_eq!(KeyPath::from(".port").ini_parts(), ("", "port"));
    }

    #[test]
    fn test_display() {
        let path = KeyPath::from(Some("db.host".to_string()));
        assert_eq!(format!("{}", path), "db.host");
        assert_eq!(path.as_ref(), "db.host");
    }
}
