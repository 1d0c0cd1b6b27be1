//! Name-list handling for tracked individuals and keypoints.
//!
//! Loaders hand us labels in several shapes: a proper list of strings, a
//! single bare string, or nothing at all. This module normalizes those inputs
//! and generates the documented defaults when labels are absent.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// Label input accepted by the dataset builders.
///
/// A single string is tolerated and coerced into a one-element list (with a
/// warning), matching the behavior expected from permissive loader output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameList {
    /// A single bare label
    Single(String),
    /// An ordered list of labels
    List(Vec<String>),
}

impl NameList {
    /// Resolves the input into an ordered list of strings.
    ///
    /// A `Single` value is converted to a one-element list and a warning is
    /// emitted, since a list was expected.
    pub(crate) fn into_names(self, field: &'static str) -> Vec<String> {
        match self {
            Self::Single(name) => {
                warn!(
                    field,
                    value = %name,
                    "Invalid value: expected a list of strings. \
                     Converting to a list of length 1."
                );
                vec![name]
            }
            Self::List(names) => names,
        }
    }
}

impl From<&str> for NameList {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for NameList {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self::List(names)
    }
}

impl From<Vec<&str>> for NameList {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for NameList {
    fn from(names: &[&str]) -> Self {
        Self::List(names.iter().map(|n| (*n).to_string()).collect())
    }
}

/// Default individual names: `individual_0`, `individual_1`, ...
pub(crate) fn default_individual_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("individual_{i}")).collect()
}

/// Default keypoint names: `keypoint_0`, `keypoint_1`, ...
pub(crate) fn default_keypoint_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("keypoint_{i}")).collect()
}

/// Default bounding-box identities: `id_1`, `id_2`, ... (1-based).
pub(crate) fn default_bbox_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("id_{i}")).collect()
}

fn bbox_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^id_(\d+)$").expect("valid bbox id pattern"))
}

/// Extracts the integer from a bounding-box identity of the form `id_<N>`.
///
/// Returns `None` when the string does not fully match the pattern (or the
/// digits overflow a `u64`).
#[must_use]
pub fn parse_bbox_id(name: &str) -> Option<u64> {
    bbox_id_pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_coerces_to_list() {
        let names = NameList::from("mouse").into_names("individual_names");
        assert_eq!(names, vec!["mouse".to_string()]);
    }

    #[test]
    fn test_list_passes_through() {
        let names = NameList::from(vec!["a", "b"]).into_names("keypoint_names");
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_default_names() {
        assert_eq!(default_individual_names(2), vec!["individual_0", "individual_1"]);
        assert_eq!(default_keypoint_names(1), vec!["keypoint_0"]);
        assert_eq!(default_bbox_names(3), vec!["id_1", "id_2", "id_3"]);
    }

    #[test]
    fn test_parse_bbox_id_accepts_full_matches_only() {
        assert_eq!(parse_bbox_id("id_3"), Some(3));
        assert_eq!(parse_bbox_id("id_007"), Some(7));
        assert_eq!(parse_bbox_id("id_01x"), None);
        assert_eq!(parse_bbox_id("box_1"), None);
        assert_eq!(parse_bbox_id("id_"), None);
        assert_eq!(parse_bbox_id("ID_1"), None);
    }
}
