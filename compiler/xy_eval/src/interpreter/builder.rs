//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::collections::VecDeque;

use xy_patterns::Value;

use super::Interpreter;
use crate::environment::Environment;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::limits::Limit;
use crate::primitives::{PrimitiveFn, PrimitiveTable};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults: the standard primitive table, stdout for output, stdin for
/// `getline`, an empty environment and no limits.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    primitives: PrimitiveTable,
    limits: Vec<Limit>,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl InterpreterBuilder {
    /// Create a new builder with the standard primitives.
    pub fn new() -> Self {
        Self {
            env: None,
            primitives: PrimitiveTable::standard(),
            limits: Vec::new(),
            print_handler: None,
            input_handler: None,
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Bind one name in the initial environment.
    #[must_use]
    pub fn define(mut self, name: &str, value: Value) -> Self {
        self.env.get_or_insert_with(Environment::new).define(name, value);
        self
    }

    /// Register a limit checked on every run.
    #[must_use]
    pub fn limit(mut self, limit: Limit) -> Self {
        self.limits.push(limit);
        self
    }

    /// Add or replace a primitive before the table is frozen.
    #[must_use]
    pub fn primitive(mut self, name: &'static str, f: PrimitiveFn) -> Self {
        self.primitives.register(name, f);
        self
    }

    /// Set the handler for `print`, `println` and `write`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the handler for `getline`.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        Interpreter {
            stack: Vec::new(),
            queue: VecDeque::new(),
            env: self.env.unwrap_or_default(),
            primitives: self.primitives,
            limits: self.limits,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
