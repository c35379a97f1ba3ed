use crate::common::Float;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Variable bindings consulted when evaluating or simplifying an expression.
///
/// Unbound names evaluate to `0` and are left untouched by simplification.
pub trait Scope {
    fn get(&self, name: &str) -> Option<Float>;
}

/// The empty scope.
impl Scope for () {
    fn get(&self, _name: &str) -> Option<Float> {
        None
    }
}

impl<S: BuildHasher> Scope for HashMap<String, Float, S> {
    fn get(&self, name: &str) -> Option<Float> {
        HashMap::get(self, name).copied()
    }
}

impl Scope for BTreeMap<String, Float> {
    fn get(&self, name: &str) -> Option<Float> {
        BTreeMap::get(self, name).copied()
    }
}

impl<T: Scope + ?Sized> Scope for &T {
    fn get(&self, name: &str) -> Option<Float> {
        (**self).get(name)
    }
}
