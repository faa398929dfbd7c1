use std::collections::HashMap;

use nullable_value::Optional;

use crate::value::Value;

/// Named values available to an expression.
#[derive(Debug, Default, Clone)]
pub struct Context(HashMap<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ident: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(ident, value);
        self
    }

    pub fn insert(&mut self, ident: impl Into<String>, value: impl Into<Value>) {
        _ = self.0.insert(ident.into(), value.into());
    }

    /// A missing name is absent.
    pub fn lookup(&self, ident: &str) -> Optional<&Value> {
        self.0.get(ident).into()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self(values.collect())
    }
}
