//! # Substitutor
//!
//! A scoped placeholder substitution engine.
//!
//! Rewrites text by replacing delimited placeholders with values from a
//! caller-supplied lookup. It is the utility behind request-body templating,
//! record-to-document mapping and `${env}`-style configuration resolution.
//!
//! ## Features
//!
//! - **Custom delimiters**: any non-empty prefix and suffix, multi-character included
//! - **Balanced nesting**: `{.a{b}}` is one placeholder with body `.a{b}`
//! - **Defaults**: `${key:-fallback}`
//! - **Escaping**: `\${key}` is emitted as the literal `${key}`
//! - **Scopes**: a pass only touches bodies starting with its scope key prefix,
//!   so independent passes can share one template
//! - **Pluggable lookups**: maps, closures, environment variables and JSON
//!   record paths behind one [`Lookup`] trait
//!
//! ## Optional Features
//!
//! ### `json` Feature (default)
//!
//! Provides [`JsonPathLookup`], which resolves keys such as
//! `.record.items[0].id` against a `serde_json::Value`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use substitutor::Substitutor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut values = HashMap::new();
//! values.insert(".record.user${age > 40}$".to_string(), "another_user".to_string());
//!
//! let pass = Substitutor::new("${", "}$", "", values)?;
//! let output = pass.replace(Some("This is dssl ${.record.user${age > 40}$}$ end."))?;
//!
//! assert_eq!(output.as_deref(), Some("This is dssl another_user end."));
//! # Ok(())
//! # }
//! ```
//!
//! ## Scoped Passes
//!
//! ```rust
//! use std::collections::HashMap;
//! use substitutor::Substitutor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut response = HashMap::new();
//! response.insert(".k".to_string(), "done".to_string());
//!
//! let pass = Substitutor::new("${", "}", ".response", response)?;
//! assert_eq!(
//!     pass.replace_str("${.input.k} -> ${.response.k}")?,
//!     "${.input.k} -> done"
//! );
//! # Ok(())
//! # }
//! ```

// Module declarations
mod config;
mod error;
mod lookup;
mod passes;
mod path;
mod resolver;
mod scanner;
mod substitutor;

// Feature-gated modules
#[cfg(feature = "json")]
mod record;

// Public API exports
pub use config::DelimiterConfig;
pub use error::{DelimiterKind, SubstResult, SubstitutionError};
pub use lookup::{Chain, EnvLookup, FnLookup, Lookup, TryFnLookup};
pub use passes::Passes;
pub use substitutor::Substitutor;

// Re-export submodules for advanced usage
pub use path::{PathSegment, RecordPath};
pub use resolver::{DEFAULT_SEPARATOR, Outcome, ResolvedKey, resolve};
pub use scanner::{Placeholder, Scanner, Segment, find_placeholders};

// Feature-gated exports
#[cfg(feature = "json")]
pub use record::JsonPathLookup;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_basic_substitution() {
        let pass = Substitutor::new("${", "}", "", values(&[("x", "V")])).unwrap();
        assert_eq!(pass.replace(Some("a ${x} b")).unwrap().unwrap(), "a V b");
    }

    #[test]
    fn test_default_value() {
        let pass = Substitutor::new("${", "}", "", values(&[])).unwrap();
        assert_eq!(pass.replace_str("a ${x:-D} b").unwrap(), "a D b");
    }

    #[test]
    fn test_scope_filtering() {
        let pass = Substitutor::new("{", "}", ".response", values(&[(".k", "R")])).unwrap();
        assert_eq!(pass.replace_str("{.input.k}/{.response.k}").unwrap(), "{.input.k}/R");
    }

    #[test]
    fn test_custom_delimiters() {
        let pass = Substitutor::new("<%", "%>", "", values(&[("name", "ada")])).unwrap();
        assert_eq!(pass.replace_str("hi <%name%>!").unwrap(), "hi ada!");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_record_lookup() {
        let record = serde_json::json!({ "record": { "user": "ada" } });
        let pass = Substitutor::new("${", "}", "", JsonPathLookup::new(record)).unwrap();
        assert_eq!(pass.replace_str("user=${.record.user}").unwrap(), "user=ada");
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
