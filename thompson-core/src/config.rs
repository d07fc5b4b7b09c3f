//! Conversion policies and the regex input record

use serde::{Deserialize, Serialize};

/// What the empty regex (an empty postfix sequence) denotes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRegexPolicy {
    /// One non-accepting state: the automaton rejects every string
    #[default]
    AcceptsNothing,
    /// One accepting state: the automaton accepts only the empty string
    AcceptsEmptyString,
}

/// How states not reached from the start state appear in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreachablePolicy {
    /// Keep them, with an empty name
    #[default]
    Retain,
    /// Drop them along with their transitions
    Prune,
}

/// Settings for one conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Result for the empty regex
    pub empty_regex: EmptyRegexPolicy,
    /// Treatment of unreachable states
    pub unreachable: UnreachablePolicy,
}

impl Config {
    /// Default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty regex policy
    pub fn empty_regex(mut self, policy: EmptyRegexPolicy) -> Self {
        self.empty_regex = policy;
        self
    }

    /// Set the unreachable state policy
    pub fn unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.unreachable = policy;
        self
    }
}

/// The input record: a JSON object holding the regex
///
/// The field is `regex`, also accepted as `RE`. A missing or null field is
/// the empty regex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexSource {
    #[serde(default, alias = "RE")]
    pub regex: Option<String>,
}

impl RegexSource {
    /// Parse the input record from JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The regex text, empty when absent
    pub fn pattern(&self) -> &str {
        self.regex.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.empty_regex, EmptyRegexPolicy::AcceptsNothing);
        assert_eq!(config.unreachable, UnreachablePolicy::Retain);
    }

    #[test]
    fn test_config_setters() {
        let config = Config::new()
            .empty_regex(EmptyRegexPolicy::AcceptsEmptyString)
            .unreachable(UnreachablePolicy::Prune);
        assert_eq!(config.empty_regex, EmptyRegexPolicy::AcceptsEmptyString);
        assert_eq!(config.unreachable, UnreachablePolicy::Prune);
    }

    #[test]
    fn test_source_regex_field() {
        let source = RegexSource::from_json(r#"{"regex": "a+b"}"#).unwrap();
        assert_eq!(source.pattern(), "a+b");
    }

    #[test]
    fn test_source_re_alias() {
        let source = RegexSource::from_json(r#"{"RE": "ab*"}"#).unwrap();
        assert_eq!(source.pattern(), "ab*");
    }

    #[test]
    fn test_source_missing_or_null() {
        assert_eq!(RegexSource::from_json("{}").unwrap().pattern(), "");
        assert_eq!(
            RegexSource::from_json(r#"{"regex": null}"#).unwrap().pattern(),
            ""
        );
    }

    #[test]
    fn test_source_ignores_unknown_fields() {
        let source = RegexSource::from_json(r#"{"regex": "a", "comment": "x"}"#).unwrap();
        assert_eq!(source.pattern(), "a");
    }

    #[test]
    fn test_source_rejects_bad_json() {
        assert!(RegexSource::from_json("not json").is_err());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&EmptyRegexPolicy::AcceptsEmptyString).unwrap();
        assert_eq!(json, r#""accepts_empty_string""#);
    }
}
