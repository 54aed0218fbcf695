//! The primitive table.
//!
//! Every built-in word is a plain function over the interpreter, found by
//! name. The table is filled once when an interpreter is built and is not
//! modified afterwards.
//!
//! | group      | words                                   |
//! |------------|-----------------------------------------|
//! | arithmetic | `+ - * % ^ _`                           |
//! | machine    | `set ; . ' $ $$`, dip (`` ` ``)          |
//! | patterns   | `) (`                                   |
//! | sequences  | `\| , @ count enum clone`               |
//! | compare    | `= < > <= >= not`                       |
//! | io         | `print println write getline millis`    |

mod arithmetic;
mod compare;
mod io;
mod machine;
mod patterns;
mod sequences;

use rustc_hash::FxHashMap;

use xy_patterns::EvalResult;

use crate::Interpreter;

/// Native implementation of a primitive.
pub type PrimitiveFn = fn(&mut Interpreter) -> EvalResult<()>;

/// Name → native function.
#[derive(Clone)]
pub struct PrimitiveTable {
    entries: FxHashMap<&'static str, PrimitiveFn>,
}

impl PrimitiveTable {
    /// Table holding every built-in primitive.
    pub fn standard() -> Self {
        let mut table = PrimitiveTable {
            entries: FxHashMap::default(),
        };
        arithmetic::register(&mut table);
        machine::register(&mut table);
        patterns::register(&mut table);
        sequences::register(&mut table);
        compare::register(&mut table);
        io::register(&mut table);
        table
    }

    /// Add or replace a primitive.
    pub fn register(&mut self, name: &'static str, f: PrimitiveFn) {
        if self.entries.insert(name, f).is_some() {
            tracing::debug!(name, "primitive replaced");
        }
    }

    /// Native function for `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<PrimitiveFn> {
        self.entries.get(name).copied()
    }

    /// Canonical `'static` name, for building `Value::Primitive`.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.entries.get_key_value(name).map(|(&key, _)| key)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for PrimitiveTable {
    fn default() -> Self {
        Self::standard()
    }
}
