use crate::error::{DelimiterKind, SubstResult, SubstitutionError};
use serde::{Deserialize, Serialize};

/// Delimiter pair and scope filter for one substitution pass.
///
/// Both tokens are arbitrary non-empty strings. They may be multi-character,
/// may share characters, and may even be identical (`%` / `%`).
///
/// A config can be embedded in an application's own configuration file:
///
/// ```
/// use substitutor::DelimiterConfig;
///
/// let config: DelimiterConfig = serde_json::from_str(
///     r#"{ "prefix": "${", "suffix": "}$", "scope_key_prefix": ".response" }"#,
/// ).unwrap();
/// assert_eq!(config.suffix(), "}$");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDelimiterConfig")]
pub struct DelimiterConfig {
    prefix: String,
    suffix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    scope_key_prefix: String,
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
struct RawDelimiterConfig {
    prefix: String,
    suffix: String,
    #[serde(default)]
    scope_key_prefix: String,
}

impl TryFrom<RawDelimiterConfig> for DelimiterConfig {
    type Error = SubstitutionError;

    fn try_from(raw: RawDelimiterConfig) -> SubstResult<Self> {
        DelimiterConfig::new(raw.prefix, raw.suffix, raw.scope_key_prefix)
    }
}

impl DelimiterConfig {
    /// Create a config, rejecting empty delimiter tokens
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        scope_key_prefix: impl Into<String>,
    ) -> SubstResult<Self> {
        let prefix = prefix.into();
        let suffix = suffix.into();

        if prefix.is_empty() {
            return Err(SubstitutionError::invalid_delimiter(
                DelimiterKind::Prefix,
                "must not be empty",
            ));
        }
        if suffix.is_empty() {
            return Err(SubstitutionError::invalid_delimiter(
                DelimiterKind::Suffix,
                "must not be empty",
            ));
        }

        Ok(Self {
            prefix,
            suffix,
            scope_key_prefix: scope_key_prefix.into(),
        })
    }

    /// `${key}` placeholders, unscoped
    pub fn dollar_brace() -> Self {
        Self {
            prefix: "${".to_string(),
            suffix: "}".to_string(),
            scope_key_prefix: String::new(),
        }
    }

    /// `{key}` placeholders, unscoped
    pub fn braces() -> Self {
        Self {
            prefix: "{".to_string(),
            suffix: "}".to_string(),
            scope_key_prefix: String::new(),
        }
    }

    /// Same delimiters, restricted to bodies starting with `scope`
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope_key_prefix = scope.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn scope_key_prefix(&self) -> &str {
        &self.scope_key_prefix
    }

    /// Whether this pass only handles a subset of placeholders
    pub fn is_scoped(&self) -> bool {
        !self.scope_key_prefix.is_empty()
    }
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self::dollar_brace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_prefix() {
        let err = DelimiterConfig::new("", "}", "").unwrap_err();
        assert!(matches!(
            err,
            SubstitutionError::InvalidDelimiter {
                which: DelimiterKind::Prefix,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_suffix() {
        let err = DelimiterConfig::new("${", "", ".scope").unwrap_err();
        assert!(matches!(
            err,
            SubstitutionError::InvalidDelimiter {
                which: DelimiterKind::Suffix,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_scope_is_allowed() {
        let config = DelimiterConfig::new("${", "}$", "").unwrap();
        assert!(!config.is_scoped());
        assert_eq!(config.prefix(), "${");
        assert_eq!(config.suffix(), "}$");
    }

    #[test]
    fn test_with_scope() {
        let config = DelimiterConfig::braces().with_scope(".response");
        assert!(config.is_scoped());
        assert_eq!(config.scope_key_prefix(), ".response");
        assert_eq!(config.prefix(), "{");
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<DelimiterConfig, _> =
            serde_json::from_str(r#"{ "prefix": "", "suffix": "}" }"#);
        assert!(result.is_err());

        let config: DelimiterConfig =
            serde_json::from_str(r#"{ "prefix": "<<", "suffix": ">>" }"#).unwrap();
        assert_eq!(config.prefix(), "<<");
        assert_eq!(config.scope_key_prefix(), "");
    }

    #[test]
    fn test_serialize_skips_empty_scope() {
        let json = serde_json::to_string(&DelimiterConfig::dollar_brace()).unwrap();
        assert_eq!(json, r#"{"prefix":"${","suffix":"}"}"#);
    }
}
