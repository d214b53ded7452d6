//! Group-configuration validation.
//!
//! Runs once at configuration-load time, before any file is processed.
//! Raw (stringly) group entries either convert into the typed
//! `GroupRule` form or fail with a specific error carrying the offending
//! value. A rejected configuration aborts the run entirely; the pattern
//! registry's never-matching fallback only covers patterns that evade
//! this check at runtime.

use crate::config::RawGroup;
use crate::models::group::{GroupRule, SortKey};
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {0}")]
    Read(String),
    #[error("invalid configuration file {file}: {detail}")]
    Parse { file: String, detail: String },
    #[error("each group must have a pattern")]
    MissingPattern,
    #[error("duplicate group pattern: {0}")]
    DuplicatePattern(String),
    #[error("invalid group pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid sort method: {0} (expected \"length\" or \"alphabetical\")")]
    InvalidSortMethod(String),
    #[error("invalid lengthTarget option: {0} (expected \"from\" or \"full\")")]
    InvalidLengthTarget(String),
    #[error("group priority must be a non-negative number, got {0}")]
    InvalidPriority(String),
}

/// Validate raw group entries into `GroupRule`s, resolving the
/// `sortMethod`/`lengthTarget` pair into a single sort key and applying
/// the documented defaults (alphabetical; length measured on the module
/// path).
pub fn validate_groups(raw: &[RawGroup]) -> Result<Vec<GroupRule>, ConfigError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut groups = Vec::with_capacity(raw.len());

    for entry in raw {
        let pattern = entry
            .pattern
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingPattern)?;
        if !seen.insert(pattern) {
            return Err(ConfigError::DuplicatePattern(pattern.to_string()));
        }
        if Regex::new(pattern).is_err() {
            return Err(ConfigError::InvalidPattern(pattern.to_string()));
        }

        let length = match entry.sort_method.as_deref() {
            None | Some("alphabetical") => false,
            Some("length") => true,
            Some(other) => return Err(ConfigError::InvalidSortMethod(other.to_string())),
        };
        let full = match entry.length_target.as_deref() {
            None | Some("from") => false,
            Some("full") => true,
            Some(other) => return Err(ConfigError::InvalidLengthTarget(other.to_string())),
        };
        let sort_key = match (length, full) {
            (false, _) => SortKey::Alphabetical,
            (true, false) => SortKey::LengthFrom,
            (true, true) => SortKey::LengthFull,
        };

        let priority = match &entry.priority {
            None => None,
            Some(n) => {
                let value = n.as_f64().unwrap_or(f64::NAN);
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidPriority(n.to_string()));
                }
                Some(value)
            }
        };

        groups.push(GroupRule {
            pattern: pattern.to_string(),
            sort_key,
            priority,
        });
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pattern: Option<&str>) -> RawGroup {
        RawGroup {
            pattern: pattern.map(str::to_string),
            sort_method: None,
            length_target: None,
            priority: None,
        }
    }

    #[test]
    fn test_defaults_resolve_to_alphabetical_and_from() {
        let groups = validate_groups(&[raw(Some(r"\.ts$"))]).unwrap();
        assert_eq!(groups[0].sort_key, SortKey::Alphabetical);
        assert_eq!(groups[0].priority, None);

        let entry = RawGroup {
            sort_method: Some("length".into()),
            ..raw(Some(r"\.js$"))
        };
        let groups = validate_groups(&[entry]).unwrap();
        assert_eq!(groups[0].sort_key, SortKey::LengthFrom);

        let entry = RawGroup {
            sort_method: Some("length".into()),
            length_target: Some("full".into()),
            ..raw(Some(r"\.jsx$"))
        };
        let groups = validate_groups(&[entry]).unwrap();
        assert_eq!(groups[0].sort_key, SortKey::LengthFull);
    }

    #[test]
    fn test_missing_pattern_rejected() {
        assert!(matches!(
            validate_groups(&[raw(None)]),
            Err(ConfigError::MissingPattern)
        ));
        assert!(matches!(
            validate_groups(&[raw(Some(""))]),
            Err(ConfigError::MissingPattern)
        ));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let err = validate_groups(&[raw(Some("a")), raw(Some("a"))]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePattern(p) if p == "a"));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = validate_groups(&[raw(Some("(unterminated"))]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(p) if p == "(unterminated"));
    }

    #[test]
    fn test_invalid_enum_values_rejected() {
        let entry = RawGroup {
            sort_method: Some("size".into()),
            ..raw(Some("a"))
        };
        assert!(matches!(
            validate_groups(&[entry]),
            Err(ConfigError::InvalidSortMethod(m)) if m == "size"
        ));

        let entry = RawGroup {
            length_target: Some("half".into()),
            ..raw(Some("b"))
        };
        assert!(matches!(
            validate_groups(&[entry]),
            Err(ConfigError::InvalidLengthTarget(t)) if t == "half"
        ));
    }

    #[test]
    fn test_negative_priority_rejected() {
        let entry = RawGroup {
            priority: Some(serde_json::Number::from_f64(-1.0).unwrap()),
            ..raw(Some("a"))
        };
        assert!(matches!(
            validate_groups(&[entry]),
            Err(ConfigError::InvalidPriority(_))
        ));
    }
}
