use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Resolves `$name` references during evaluation.
///
/// Implementations front whatever holds named values: user variables, a
/// debuggee's registers, symbol tables. Only variable nodes consult it.
pub trait Environment {
    /// Looks up `name`, returning `None` when it is not defined.
    fn resolve(&self, name: &str) -> Option<Value>;
}

/// Named values defined from the command line.
///
/// # Example
/// ```
/// use asmrepl::interpreter::{
///     environment::{Bindings, Environment},
///     value::core::Value,
/// };
///
/// let mut bindings = Bindings::new();
/// bindings.define("base", Value::Integer(0x1000));
///
/// assert_eq!(bindings.resolve("base"), Some(Value::Integer(0x1000)));
/// assert_eq!(bindings.resolve("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    variables: HashMap<String, Value>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Removes `name`, returning its value if it was defined.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Number of defined names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self.variables
                                      .iter()
                                      .map(|(name, value)| (name.as_str(), value))
                                      .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Environment for Bindings {
    fn resolve(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }
}
