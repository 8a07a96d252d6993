use crate::lookup::Lookup;

/// Separator between a lookup key and its default value
pub const DEFAULT_SEPARATOR: &str = ":-";

/// A placeholder body split into its lookup key and optional default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedKey<'a> {
    pub lookup_key: &'a str,
    pub default_value: Option<&'a str>,
}

impl<'a> ResolvedKey<'a> {
    /// Split on the first `:-`; everything after it is the default, verbatim
    pub fn parse(body: &'a str) -> Self {
        match body.split_once(DEFAULT_SEPARATOR) {
            Some((lookup_key, default_value)) => Self {
                lookup_key,
                default_value: Some(default_value),
            },
            None => Self {
                lookup_key: body,
                default_value: None,
            },
        }
    }

    /// Apply the scope filter and split what remains.
    ///
    /// Returns `None` when the body belongs to a different pass.
    pub fn scoped(body: &'a str, scope_key_prefix: &str) -> Option<Self> {
        body.strip_prefix(scope_key_prefix).map(Self::parse)
    }
}

/// What to emit for one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replace the whole placeholder with this text
    Substitute(String),

    /// Reproduce the placeholder exactly as written
    LeaveLiteral,
}

/// Resolve one placeholder body against `lookup`.
///
/// Out-of-scope bodies are left literal so a later pass can still match them.
/// In-scope keys fall back to their default, then to the empty string. The
/// lookup is called at most once and its error is returned unchanged.
pub fn resolve<L>(body: &str, scope_key_prefix: &str, lookup: &L) -> Result<Outcome, L::Error>
where
    L: Lookup + ?Sized,
{
    let Some(key) = ResolvedKey::scoped(body, scope_key_prefix) else {
        tracing::trace!(body, scope = scope_key_prefix, "placeholder out of scope");
        return Ok(Outcome::LeaveLiteral);
    };

    let text = match lookup.lookup(key.lookup_key)? {
        Some(value) => value,
        None => {
            tracing::trace!(
                key = key.lookup_key,
                has_default = key.default_value.is_some(),
                "no value for key"
            );
            key.default_value.unwrap_or_default().to_string()
        }
    };

    Ok(Outcome::Substitute(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::TryFnLookup;
    use std::collections::HashMap;

    fn lookup_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_without_default() {
        let key = ResolvedKey::parse("user.name");
        assert_eq!(key.lookup_key, "user.name");
        assert_eq!(key.default_value, None);
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let key = ResolvedKey::parse("a:-b:-c");
        assert_eq!(key.lookup_key, "a");
        assert_eq!(key.default_value, Some("b:-c"));
    }

    #[test]
    fn test_parse_empty_default() {
        let key = ResolvedKey::parse("a:-");
        assert_eq!(key.lookup_key, "a");
        assert_eq!(key.default_value, Some(""));
    }

    #[test]
    fn test_single_colon_is_part_of_key() {
        let key = ResolvedKey::parse("host:port");
        assert_eq!(key.lookup_key, "host:port");
        assert_eq!(key.default_value, None);
    }

    #[test]
    fn test_scoped_strips_prefix() {
        let key = ResolvedKey::scoped(".response.k:-x", ".response").unwrap();
        assert_eq!(key.lookup_key, ".k");
        assert_eq!(key.default_value, Some("x"));
        assert!(ResolvedKey::scoped(".input.k", ".response").is_none());
    }

    #[test]
    fn test_resolve_found() {
        let lookup = lookup_of(&[("x", "V")]);
        assert_eq!(
            resolve("x:-D", "", &lookup).unwrap(),
            Outcome::Substitute("V".to_string())
        );
    }

    #[test]
    fn test_resolve_default() {
        let lookup = lookup_of(&[]);
        assert_eq!(
            resolve("x:-D", "", &lookup).unwrap(),
            Outcome::Substitute("D".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_collapses_to_empty() {
        let lookup = lookup_of(&[]);
        assert_eq!(
            resolve("x", "", &lookup).unwrap(),
            Outcome::Substitute(String::new())
        );
    }

    #[test]
    fn test_resolve_out_of_scope() {
        let lookup = lookup_of(&[(".input.k", "nope"), (".k", "nope")]);
        assert_eq!(
            resolve(".input.k", ".response", &lookup).unwrap(),
            Outcome::LeaveLiteral
        );
    }

    #[test]
    fn test_resolve_error_propagates() {
        let lookup = TryFnLookup::new(|key: &str| Err::<Option<String>, _>(format!("boom: {key}")));
        assert_eq!(resolve("k:-d", "", &lookup).unwrap_err(), "boom: k");
    }

    #[test]
    fn test_resolve_calls_lookup_once() {
        let calls = std::cell::Cell::new(0);
        let lookup = TryFnLookup::new(|_: &str| {
            calls.set(calls.get() + 1);
            Ok::<_, String>(None)
        });
        resolve("k:-d", "", &lookup).unwrap();
        assert_eq!(calls.get(), 1);
    }
}
