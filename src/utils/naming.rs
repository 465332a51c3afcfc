//! Deployment and resource name helpers.
//!
//! Azure resource names are built from length-limited fragments of the
//! service, stage, and region names; deployment names carry an embedded
//! millisecond timestamp behind a fixed marker so later runs can recover
//! when a deployment was created from its name alone.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker separating a deployment's base name from its embedded timestamp.
pub const DEPLOYMENT_NAME_MARKER: &str = "-t";

static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{DEPLOYMENT_NAME_MARKER}(\d+)")).expect("timestamp pattern is valid")
});

/// Concatenate the first `length` characters of each part, in order.
///
/// Counts Unicode scalar values rather than bytes, so multibyte input never
/// splits a character. Parts shorter than `length` contribute whole.
pub fn append_substrings(length: usize, parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.chars().take(length))
        .collect()
}

/// Extract the digits following the `-t` marker anywhere in `name`.
///
/// Returns `None` when the marker is absent or followed by no digits.
pub fn timestamp_from_name(name: &str) -> Option<&str> {
    TIMESTAMP_PATTERN
        .captures(name)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Build a deployment name from `base` with the current UTC time embedded
/// behind the marker.
pub fn deployment_name(base: &str) -> String {
    format!(
        "{base}{DEPLOYMENT_NAME_MARKER}{}",
        Utc::now().timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_substrings() {
        let parts = ["abcde", "fghij", "klmno", "pqrst", "uvwxyz", "ab"];
        assert_eq!(append_substrings(2, &parts), "abfgklpquvab");
    }

    #[test]
    fn test_append_substrings_short_parts_contribute_whole() {
        assert_eq!(append_substrings(3, &["ab", "cdef"]), "abcde");
    }

    #[test]
    fn test_append_substrings_zero_length() {
        assert_eq!(append_substrings(0, &["abc", "def"]), "");
    }

    #[test]
    fn test_append_substrings_empty_parts() {
        assert_eq!(append_substrings(4, &[]), "");
    }

    #[test]
    fn test_append_substrings_multibyte() {
        // Character-wise, not byte-wise
        assert_eq!(append_substrings(2, &["héllo", "日本語"]), "hé日本");
    }

    #[test]
    fn test_timestamp_from_name() {
        assert_eq!(timestamp_from_name("myDeployment-t12345"), Some("12345"));
    }

    #[test]
    fn test_timestamp_marker_without_digits() {
        assert_eq!(timestamp_from_name("myDeployment-t"), None);
    }

    #[test]
    fn test_timestamp_empty_name() {
        assert_eq!(timestamp_from_name(""), None);
    }

    #[test]
    fn test_timestamp_without_marker() {
        assert_eq!(timestamp_from_name("myDeployment12345"), None);
    }

    #[test]
    fn test_timestamp_marker_mid_name() {
        assert_eq!(timestamp_from_name("dep-t42-blue"), Some("42"));
    }

    #[test]
    fn test_deployment_name_roundtrip() {
        let name = deployment_name("myDeployment");
        assert!(name.starts_with("myDeployment-t"));

        let timestamp = timestamp_from_name(&name).unwrap();
        assert!(timestamp.parse::<i64>().unwrap() > 0);
    }
}
