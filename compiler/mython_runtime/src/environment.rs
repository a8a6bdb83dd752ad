//! Identifier to value mapping.
//!
//! Used as the frame of a single invocation (or the global scope) and as the
//! field storage of a class instance. There is no parent chain: a method
//! frame sees only `self` and its parameters.

use rustc_hash::FxHashMap;

use crate::errors::{unbound_identifier, EvalResult};
use crate::value::Value;

/// A flat scope of bindings. Last write wins.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding; the handle shares the stored object.
    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    /// Look up a binding, failing with `UnboundIdentifier` if absent.
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.get(name).ok_or_else(|| unbound_identifier(name))
    }

    /// `true` if `name` is bound.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.define(name, value);
        }
        env
    }
}
