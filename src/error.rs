use std::convert::Infallible;
use thiserror::Error;

/// Result type alias for substitution operations
pub type SubstResult<T> = Result<T, SubstitutionError>;

/// Which delimiter token a configuration error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Prefix,
    Suffix,
}

impl std::fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterKind::Prefix => write!(f, "prefix"),
            DelimiterKind::Suffix => write!(f, "suffix"),
        }
    }
}

/// Errors that can occur while configuring or running a substitution pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// Rejected delimiter token
    #[error("Invalid placeholder {which}: {reason}")]
    InvalidDelimiter { which: DelimiterKind, reason: String },

    /// A record path that does not follow the path grammar
    #[error("Invalid path '{path}' at column {column}: {message}")]
    PathSyntax {
        path: String,
        column: usize,
        message: String,
    },

    /// A lookup provider failed for a key
    #[error("Lookup of '{key}' failed: {message}")]
    Lookup { key: String, message: String },

    /// Custom error with message
    #[error("{message}")]
    Custom { message: String },
}

impl SubstitutionError {
    /// Create an invalid delimiter error
    pub fn invalid_delimiter(which: DelimiterKind, reason: impl Into<String>) -> Self {
        SubstitutionError::InvalidDelimiter {
            which,
            reason: reason.into(),
        }
    }

    /// Create a path syntax error
    pub fn path_syntax(
        path: impl Into<String>,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        SubstitutionError::PathSyntax {
            path: path.into(),
            column,
            message: message.into(),
        }
    }

    /// Create a lookup error
    pub fn lookup(key: impl Into<String>, message: impl Into<String>) -> Self {
        SubstitutionError::Lookup {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        SubstitutionError::Custom {
            message: message.into(),
        }
    }

    /// True for errors raised while building a pass, before any scanning
    pub fn is_configuration(&self) -> bool {
        matches!(self, SubstitutionError::InvalidDelimiter { .. })
    }
}

impl From<Infallible> for SubstitutionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl SubstitutionError {
    /// Convert a pest error for `path` into a path syntax error
    pub(crate) fn from_pest<R: pest::RuleType>(path: &str, err: pest::error::Error<R>) -> Self {
        let column = match err.line_col {
            pest::error::LineColLocation::Pos((_, col)) => col,
            pest::error::LineColLocation::Span((_, col), _) => col,
        };

        SubstitutionError::path_syntax(path, column, err.variant.message().into_owned())
    }
}
