//! Variable resolution supplied by the host application.
//!
//! The evaluator consults a [`Lookup`] whenever it meets an identifier. The
//! lookup is only ever read, so any implementor that is `Sync` can serve
//! evaluations running on several threads at once.

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// Maps a variable name to its current value.
///
/// Returning `None` means the name is unknown, which the evaluator reports as
/// an undefined-identifier error.
///
/// # Examples
///
/// ```
/// use calc_lang::{Lookup, Value};
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("qty".to_string(), 3_i64);
///
/// assert_eq!(vars.get_value("qty"), Some(Value::Number(3.0)));
/// assert_eq!(vars.get_value("price"), None);
/// ```
pub trait Lookup {
    fn get_value(&self, name: &str) -> Option<Value>;
}

/// The empty lookup: every name is undefined.
impl Lookup for () {
    fn get_value(&self, _name: &str) -> Option<Value> {
        None
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn get_value(&self, name: &str) -> Option<Value> {
        (**self).get_value(name)
    }
}

impl<V, S> Lookup for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: std::hash::BuildHasher,
{
    fn get_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V> Lookup for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn get_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl Lookup for serde_json::Map<String, serde_json::Value> {
    fn get_value(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Value::from)
    }
}

/// Only JSON objects define names; any other JSON value finds nothing.
impl Lookup for serde_json::Value {
    fn get_value(&self, name: &str) -> Option<Value> {
        match self {
            serde_json::Value::Object(map) => map.get_value(name),
            _ => None,
        }
    }
}
