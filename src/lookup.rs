use crate::error::SubstitutionError;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::sync::Arc;

/// A source of values for placeholder keys.
///
/// A missing key is `Ok(None)`, never an error. Errors are reserved for
/// provider failures and are handed back to the caller of
/// [`Substitutor::replace`](crate::Substitutor::replace) untouched.
///
/// Implementations used from several threads at once must be safe for
/// concurrent calls; the substitutor itself holds no mutable state.
pub trait Lookup {
    /// Failure raised by the provider
    type Error;

    /// Look up the value for `key`
    fn lookup(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Consult `fallback` for keys this provider does not know
    fn or<B>(self, fallback: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Lookup,
    {
        Chain {
            first: self,
            second: fallback,
        }
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    type Error = Infallible;

    fn lookup(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.get(key).cloned())
    }
}

impl Lookup for BTreeMap<String, String> {
    type Error = Infallible;

    fn lookup(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok(self.get(key).cloned())
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    type Error = L::Error;

    fn lookup(&self, key: &str) -> Result<Option<String>, L::Error> {
        (**self).lookup(key)
    }
}

impl<L: Lookup + ?Sized> Lookup for Box<L> {
    type Error = L::Error;

    fn lookup(&self, key: &str) -> Result<Option<String>, L::Error> {
        (**self).lookup(key)
    }
}

impl<L: Lookup + ?Sized> Lookup for Arc<L> {
    type Error = L::Error;

    fn lookup(&self, key: &str) -> Result<Option<String>, L::Error> {
        (**self).lookup(key)
    }
}

/// Function-based lookup that cannot fail
#[derive(Clone)]
pub struct FnLookup<F> {
    lookup: F,
}

impl<F> FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    type Error = Infallible;

    fn lookup(&self, key: &str) -> Result<Option<String>, Infallible> {
        Ok((self.lookup)(key))
    }
}

impl<F> std::fmt::Debug for FnLookup<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnLookup").finish_non_exhaustive()
    }
}

/// Function-based lookup whose failures propagate to the caller
pub struct TryFnLookup<F, E> {
    lookup: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> TryFnLookup<F, E>
where
    F: Fn(&str) -> Result<Option<String>, E>,
{
    pub fn new(lookup: F) -> Self {
        Self {
            lookup,
            _error: PhantomData,
        }
    }
}

impl<F, E> Lookup for TryFnLookup<F, E>
where
    F: Fn(&str) -> Result<Option<String>, E>,
{
    type Error = E;

    fn lookup(&self, key: &str) -> Result<Option<String>, E> {
        (self.lookup)(key)
    }
}

impl<F: Clone, E> Clone for TryFnLookup<F, E> {
    fn clone(&self) -> Self {
        Self {
            lookup: self.lookup.clone(),
            _error: PhantomData,
        }
    }
}

impl<F, E> std::fmt::Debug for TryFnLookup<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFnLookup").finish_non_exhaustive()
    }
}

/// Process environment variables, optionally namespaced.
///
/// With a prefix of `APP_`, the key `port` reads `APP_port`. Variables that
/// are unset or not valid unicode are treated as missing.
#[derive(Debug, Clone, Default)]
pub struct EnvLookup {
    prefix: String,
}

impl EnvLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Lookup for EnvLookup {
    type Error = Infallible;

    fn lookup(&self, key: &str) -> Result<Option<String>, Infallible> {
        let name = format!("{}{}", self.prefix, key);
        if name.is_empty() || name.contains(['=', '\0']) {
            return Ok(None);
        }
        Ok(std::env::var(name).ok())
    }
}

/// Two providers consulted in order; see [`Lookup::or`]
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Lookup for Chain<A, B>
where
    A: Lookup,
    B: Lookup,
    A::Error: Into<SubstitutionError>,
    B::Error: Into<SubstitutionError>,
{
    type Error = SubstitutionError;

    fn lookup(&self, key: &str) -> Result<Option<String>, SubstitutionError> {
        if let Some(value) = self.first.lookup(key).map_err(Into::into)? {
            return Ok(Some(value));
        }
        self.second.lookup(key).map_err(Into::into)
    }
}
