use crate::config::DelimiterConfig;
use crate::lookup::Lookup;
use crate::substitutor::Substitutor;

type BoxedLookup<'l, E> = Box<dyn Lookup<Error = E> + Send + Sync + 'l>;

/// An ordered list of substitution passes applied to the same text.
///
/// Each pass sees the output of the previous one. Scoped passes leave other
/// scopes' placeholders untouched, which is what lets several of them share
/// one template. Lookups must be `Send + Sync`, so a built list can be
/// shared across threads like a single [`Substitutor`]:
///
/// ```
/// use std::collections::HashMap;
/// use substitutor::{DelimiterConfig, Passes};
///
/// let input: HashMap<String, String> = [(".id".to_string(), "42".to_string())].into();
/// let response: HashMap<String, String> = [(".status".to_string(), "ok".to_string())].into();
///
/// let passes = Passes::new()
///     .pass(DelimiterConfig::dollar_brace().with_scope(".input"), input)
///     .pass(DelimiterConfig::dollar_brace().with_scope(".response"), response);
///
/// assert_eq!(
///     passes.replace_str("${.input.id}: ${.response.status}").unwrap(),
///     "42: ok"
/// );
/// ```
pub struct Passes<'l, E> {
    passes: Vec<Substitutor<BoxedLookup<'l, E>>>,
}

impl<'l, E> Passes<'l, E> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Append a pass
    pub fn pass<L>(mut self, config: DelimiterConfig, lookup: L) -> Self
    where
        L: Lookup<Error = E> + Send + Sync + 'l,
    {
        let lookup: BoxedLookup<'l, E> = Box::new(lookup);
        self.passes.push(Substitutor::with_config(config, lookup));
        self
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order over an optional input
    pub fn replace(&self, input: Option<&str>) -> Result<Option<String>, E> {
        input.map(|text| self.replace_str(text)).transpose()
    }

    /// Run every pass in order; the first lookup error aborts the run
    pub fn replace_str(&self, input: &str) -> Result<String, E> {
        let mut text = input.to_string();
        for pass in &self.passes {
            text = pass.replace_str(&text)?;
        }
        Ok(text)
    }
}

impl<E> Default for Passes<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Passes<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.passes.iter().map(Substitutor::config))
            .finish()
    }
}
