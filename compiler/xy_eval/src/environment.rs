//! Global bindings written by `set` and read by `;` and `.`.
//!
//! There is one flat namespace per interpreter. No scoping: a later `set`
//! overwrites an earlier one.

use rustc_hash::FxHashMap;

use xy_patterns::Value;

/// Symbol name → bound value.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(previous) = self.bindings.insert(name.to_string(), value) {
            tracing::trace!(name, %previous, "rebinding");
        }
    }

    /// Look up a binding.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Number of bindings.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
