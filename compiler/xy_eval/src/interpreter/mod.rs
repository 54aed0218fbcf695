//! The stack/queue machine.
//!
//! An [`Interpreter`] owns the stack (X), the program queue (Y), the global
//! environment, the primitive table, the registered limits and the I/O
//! handlers. Each [`step`](Interpreter::step) pops the front of the queue and
//! executes it:
//!
//! - numbers, strings and sequences are data and are pushed;
//! - a shuffle permutes the top of the stack;
//! - a primitive runs its native function;
//! - a symbol runs the primitive of the same name, or is pushed as data.
//!
//! [`run`](Interpreter::run) steps until the queue is empty, sampling every
//! limit before each step. Errors unwind out of `run`; whatever the failing
//! primitive had not yet consumed stays on the stack and queue.

mod builder;

use std::collections::VecDeque;

use xy_patterns::{
    queue_underflow, stack_underflow, symbol_not_found, type_mismatch, EvalResult, Value,
};

use crate::environment::Environment;
use crate::input_handler::SharedInputHandler;
use crate::limits::{Limit, RunClock};
use crate::primitives::PrimitiveTable;
use crate::print_handler::SharedPrintHandler;

pub use builder::InterpreterBuilder;

/// One evaluation context.
pub struct Interpreter {
    stack: Vec<Value>,
    queue: VecDeque<Value>,
    env: Environment,
    primitives: PrimitiveTable,
    limits: Vec<Limit>,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
}

impl Interpreter {
    /// Interpreter with the standard primitives, stdout/stdin and no limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    // Inspection

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Remaining program, next word first.
    pub fn queue(&self) -> &VecDeque<Value> {
        &self.queue
    }

    /// Global bindings.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The primitive table this interpreter dispatches through.
    pub fn primitives(&self) -> &PrimitiveTable {
        &self.primitives
    }

    /// Output sink.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Line source for `getline`.
    pub fn input_handler(&self) -> &SharedInputHandler {
        &self.input_handler
    }

    /// Render the machine as `stack -> queue` in parse form.
    pub fn render_state(&self) -> String {
        let mut parts: Vec<String> = self.stack.iter().map(ToString::to_string).collect();
        parts.push("->".to_string());
        parts.extend(self.queue.iter().map(ToString::to_string));
        parts.join(" ")
    }

    // Limits

    /// Register a limit; it applies from the next `run()`.
    pub fn add_limit(&mut self, limit: Limit) {
        self.limits.push(limit);
    }

    /// Remove every registered limit.
    pub fn clear_limits(&mut self) {
        self.limits.clear();
    }

    /// Registered limits.
    pub fn limits(&self) -> &[Limit] {
        &self.limits
    }

    // Evaluation

    /// Append an already-parsed program to the queue.
    pub fn load(&mut self, program: impl IntoIterator<Item = Value>) {
        self.queue.extend(program);
    }

    /// Load `program` and run to completion.
    pub fn eval(&mut self, program: impl IntoIterator<Item = Value>) -> EvalResult<()> {
        self.load(program);
        self.run()
    }

    /// Step until the queue is empty or an error (or limit) stops the run.
    #[tracing::instrument(level = "debug", skip_all, fields(queued = self.queue.len()))]
    pub fn run(&mut self) -> EvalResult<()> {
        let mut clock = RunClock::start();
        while !self.queue.is_empty() {
            if let Some(limit) = self.limits.iter().find(|limit| limit.reached(&clock)) {
                tracing::debug!(%limit, steps = clock.steps, "limit reached");
                return Err(xy_patterns::limit_reached(&limit.to_string()));
            }
            self.step()?;
            clock.steps += 1;
        }
        tracing::debug!(steps = clock.steps, depth = self.stack.len(), "run complete");
        Ok(())
    }

    /// Execute the word at the front of the queue. No-op on an empty queue.
    pub fn step(&mut self) -> EvalResult<()> {
        let Some(word) = self.queue.pop_front() else {
            return Ok(());
        };
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(%word, state = %self.render_state(), "step");
        }
        match self.execute(&word) {
            Ok(()) => Ok(()),
            Err(err) => Err(err.with_word(word.to_string())),
        }
    }

    fn execute(&mut self, word: &Value) -> EvalResult<()> {
        match word {
            Value::Symbol(name) => match self.primitives.get(name) {
                Some(primitive) => primitive(self),
                None => {
                    self.push(word.clone());
                    Ok(())
                }
            },
            Value::Primitive(name) => match self.primitives.get(name) {
                Some(primitive) => primitive(self),
                None => Err(symbol_not_found(name)),
            },
            Value::Shuffle(shuffle) => shuffle.apply(&mut self.stack),
            _ => {
                self.push(word.clone());
                Ok(())
            }
        }
    }

    // Machine access for primitives

    /// Push onto the stack.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    /// Pop the top of the stack on behalf of `primitive`.
    pub fn pop(&mut self, primitive: &str) -> EvalResult {
        self.stack
            .pop()
            .ok_or_else(|| stack_underflow(primitive, 1, 0))
    }

    /// Pop two values, returned as `[deeper, top]`.
    pub fn pop2(&mut self, primitive: &str) -> EvalResult<(Value, Value)> {
        let [a, b] = self.pop_array(primitive)?;
        Ok((a, b))
    }

    /// Pop `N` values, returned bottom first. Nothing is popped on underflow.
    pub(crate) fn pop_array<const N: usize>(&mut self, primitive: &str) -> EvalResult<[Value; N]> {
        let taken = self.pop_n(primitive, N)?;
        match <[Value; N]>::try_from(taken) {
            Ok(values) => Ok(values),
            Err(taken) => Err(stack_underflow(primitive, N, taken.len())),
        }
    }

    /// Pop `n` values, returned bottom first. Nothing is popped on underflow.
    pub fn pop_n(&mut self, primitive: &str, n: usize) -> EvalResult<Vec<Value>> {
        let available = self.stack.len();
        if available < n {
            return Err(stack_underflow(primitive, n, available));
        }
        Ok(self.stack.split_off(available - n))
    }

    /// Take the next queued item unevaluated.
    pub fn pop_front(&mut self, primitive: &str) -> EvalResult {
        self.queue
            .pop_front()
            .ok_or_else(|| queue_underflow(primitive, 1, 0))
    }

    /// Take up to `n` queued items unevaluated, front first.
    pub(crate) fn take_front(&mut self, n: usize) -> Vec<Value> {
        let n = n.min(self.queue.len());
        self.queue.drain(..n).collect()
    }

    /// Put `item` at the front of the queue; it executes next.
    pub(crate) fn push_front(&mut self, item: Value) {
        self.queue.push_front(item);
    }

    /// Splice `items` onto the front of the queue, preserving their order.
    pub(crate) fn splice_front(&mut self, items: Vec<Value>) {
        for item in items.into_iter().rev() {
            self.queue.push_front(item);
        }
    }

    /// Splice a quotation's elements, or queue a lone value as itself.
    pub(crate) fn unquote(&mut self, program: &Value) {
        match program.as_seq() {
            Some(seq) if program.is_quotation() => self.splice_front(seq.to_vec()),
            _ => self.push_front(program.clone()),
        }
    }

    /// Replace the whole machine state.
    pub(crate) fn install(&mut self, stack: Vec<Value>, queue: Vec<Value>) {
        self.stack = stack;
        self.queue = queue.into();
    }

    /// Take the whole machine state, leaving both halves empty.
    pub(crate) fn take_state(&mut self) -> (Vec<Value>, Vec<Value>) {
        let stack = std::mem::take(&mut self.stack);
        let queue = std::mem::take(&mut self.queue).into();
        (stack, queue)
    }

    pub(crate) fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Name of a symbol operand, or a type error for `primitive`.
    pub(crate) fn expect_symbol(primitive: &str, value: &Value) -> EvalResult<String> {
        match value.as_symbol() {
            Some(name) => Ok(name.to_string()),
            None => Err(type_mismatch(primitive, "a symbol", value.type_name())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
