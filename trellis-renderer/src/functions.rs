//! Helper function table bound into every composed template.
//!
//! Helpers are Tera functions and take named arguments:
//!
//! ```rust
//! use std::collections::HashMap;
//! use trellis_renderer::FunctionMap;
//!
//! let funcs = FunctionMap::new()
//!     .with("app_name", |_: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
//!         Ok(tera::Value::from("Trellis"))
//!     });
//! assert!(funcs.contains("app_name"));
//! ```
//!
//! In a template: `{{ app_name() }}`, `{{ add(a=1, b=2) }}`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tera::{Function, Tera, Value};

use crate::error::InitError;

/// Functions Tera registers on every instance.
pub const BUILTIN_FUNCTIONS: &[&str] = &["range", "now", "throw", "get_random", "get_env"];

/// Named helpers, fixed before composition and shared by every template.
#[derive(Clone, Default)]
pub struct FunctionMap {
    entries: BTreeMap<String, Arc<dyn Function>>,
}

impl FunctionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F: Function + 'static>(mut self, name: impl Into<String>, function: F) -> Self {
        self.register(name, function);
        self
    }

    /// Add or replace a helper. Names are validated when the map is bound.
    pub fn register<F: Function + 'static>(&mut self, name: impl Into<String>, function: F) {
        self.entries.insert(name.into(), Arc::new(function));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Helper names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `name` is callable from a template bound with this map.
    pub fn is_bound(&self, name: &str) -> bool {
        self.contains(name) || BUILTIN_FUNCTIONS.contains(&name)
    }

    /// Validate every name and register the helpers on `tera`.
    pub(crate) fn bind(&self, tera: &mut Tera) -> Result<(), InitError> {
        for (name, function) in &self.entries {
            if !is_identifier(name) {
                return Err(InitError::InvalidFunctionName { name: name.clone() });
            }
            tera.register_function(name, SharedFunction(Arc::clone(function)));
        }
        Ok(())
    }
}

impl fmt::Debug for FunctionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Lets one helper instance back registrations in several Tera instances.
struct SharedFunction(Arc<dyn Function>);

impl Function for SharedFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.0.call(args)
    }

    fn is_safe(&self) -> bool {
        self.0.is_safe()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
