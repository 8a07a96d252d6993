use crate::config::DelimiterConfig;
use crate::error::SubstResult;
use crate::lookup::Lookup;
use crate::resolver::{Outcome, ResolvedKey, resolve};
use crate::scanner::{Placeholder, Scanner, Segment, find_placeholders};

/// One substitution pass: a delimiter config plus a lookup provider.
///
/// The pass keeps no state between calls, so a single instance can serve
/// many inputs, including from several threads when `L` is `Sync`.
///
/// ```
/// use std::collections::HashMap;
/// use substitutor::Substitutor;
///
/// let mut values = HashMap::new();
/// values.insert("x".to_string(), "V".to_string());
///
/// let pass = Substitutor::new("${", "}", "", values).unwrap();
/// assert_eq!(pass.replace_str("a ${x} b").unwrap(), "a V b");
/// assert_eq!(pass.replace_str("a ${y:-D} b").unwrap(), "a D b");
/// ```
#[derive(Debug, Clone)]
pub struct Substitutor<L> {
    config: DelimiterConfig,
    lookup: L,
}

impl<L> Substitutor<L> {
    /// Create a pass, rejecting empty delimiter tokens
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        scope_key_prefix: impl Into<String>,
        lookup: L,
    ) -> SubstResult<Self> {
        let config = DelimiterConfig::new(prefix, suffix, scope_key_prefix)?;
        Ok(Self::with_config(config, lookup))
    }

    /// Create a pass from an already validated config
    pub fn with_config(config: DelimiterConfig, lookup: L) -> Self {
        tracing::debug!(
            prefix = config.prefix(),
            suffix = config.suffix(),
            scope = config.scope_key_prefix(),
            "created substitution pass"
        );
        Self { config, lookup }
    }

    pub fn config(&self) -> &DelimiterConfig {
        &self.config
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn into_lookup(self) -> L {
        self.lookup
    }

    /// Whether `input` contains at least one matched placeholder
    pub fn has_placeholders(&self, input: &str) -> bool {
        input.contains(self.config.prefix()) && !self.placeholders(input).is_empty()
    }

    /// Every matched placeholder in `input`, scoped or not
    pub fn placeholders<'a>(&'a self, input: &'a str) -> Vec<Placeholder<'a>> {
        find_placeholders(input, &self.config)
    }

    /// Lookup keys (and defaults) this pass would resolve in `input`
    pub fn keys<'a>(&'a self, input: &'a str) -> Vec<ResolvedKey<'a>> {
        let scope = self.config.scope_key_prefix();
        self.placeholders(input)
            .into_iter()
            .filter_map(|placeholder| ResolvedKey::scoped(placeholder.body, scope))
            .collect()
    }
}

impl<L: Lookup> Substitutor<L> {
    /// Replace placeholders in an optional input; absent input stays absent
    pub fn replace(&self, input: Option<&str>) -> Result<Option<String>, L::Error> {
        input.map(|text| self.replace_str(text)).transpose()
    }

    /// Replace every placeholder in `input`.
    ///
    /// Substituted values are never rescanned.
    pub fn replace_str(&self, input: &str) -> Result<String, L::Error> {
        if !input.contains(self.config.prefix()) {
            return Ok(input.to_string());
        }

        let scope = self.config.scope_key_prefix();
        let mut output = String::with_capacity(input.len());
        let mut matched = 0usize;
        let mut left = 0usize;

        for segment in Scanner::new(input, &self.config) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(placeholder) => {
                    matched += 1;
                    match resolve(placeholder.body, scope, &self.lookup)? {
                        Outcome::Substitute(value) => output.push_str(&value),
                        Outcome::LeaveLiteral => {
                            left += 1;
                            output.push_str(placeholder.as_written(input));
                        }
                    }
                }
            }
        }

        tracing::debug!(matched, left_literal = left, "substitution pass complete");
        Ok(output)
    }
}
