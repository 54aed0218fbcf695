//! Stack shuffles such as `ab-ba` (swap) or `abc-cab` (rotate).
//!
//! Letters before the `-` name the top stack values, the last letter being
//! the top. Letters after it list what is pushed back, in order.

use std::fmt;

use super::Value;
use crate::errors::{stack_underflow, EvalResult};

/// A validated before/after letter pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shuffle {
    before: Vec<char>,
    after: Vec<char>,
}

impl Shuffle {
    /// Parse `before-after`.
    ///
    /// Returns `None` unless there is exactly one `-`, the letters before it
    /// are distinct ASCII lowercase, and every letter after it also appears
    /// before it.
    pub fn parse(pattern: &str) -> Option<Self> {
        let (before, after) = pattern.split_once('-')?;
        if after.contains('-') {
            return None;
        }
        let before: Vec<char> = before.chars().collect();
        let after: Vec<char> = after.chars().collect();
        if !before.iter().all(char::is_ascii_lowercase) {
            return None;
        }
        for (i, c) in before.iter().enumerate() {
            if before[..i].contains(c) {
                return None;
            }
        }
        if !after.iter().all(|c| before.contains(c)) {
            return None;
        }
        Some(Shuffle { before, after })
    }

    /// Number of stack values consumed.
    #[inline]
    pub fn arity(&self) -> usize {
        self.before.len()
    }

    /// Permute the top of `stack`.
    pub fn apply(&self, stack: &mut Vec<Value>) -> EvalResult<()> {
        let needed = self.arity();
        if stack.len() < needed {
            return Err(stack_underflow(&self.to_string(), needed, stack.len()));
        }
        let taken = stack.split_off(stack.len() - needed);
        for letter in &self.after {
            if let Some(i) = self.before.iter().position(|c| c == letter) {
                stack.push(taken[i].clone());
            }
        }
        Ok(())
    }
}

impl fmt::Display for Shuffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.before {
            write!(f, "{c}")?;
        }
        f.write_str("-")?;
        for c in &self.after {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
