//! Line source for `getline`.
//!
//! Mirrors the print handler: stdin by default, a queue of canned lines for
//! tests and embedders.

use std::collections::VecDeque;
use std::io::BufRead;

use parking_lot::Mutex;

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Reads from the process's stdin.
    Stdin,
    /// Serves pre-supplied lines, then end of input.
    Buffer(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Next line without its terminator, or `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                match std::io::stdin().lock().read_line(&mut line) {
                    Ok(0) => None,
                    Ok(_) => {
                        let trimmed = line.trim_end_matches(['\n', '\r']).len();
                        line.truncate(trimmed);
                        Some(line)
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to read program input");
                        None
                    }
                }
            }
            Self::Buffer(lines) => lines.lock().pop_front(),
        }
    }
}

/// Shared input handler.
#[expect(
    clippy::disallowed_types,
    reason = "Arc lets a scripted input queue be shared with the caller"
)]
pub type SharedInputHandler = std::sync::Arc<InputHandlerImpl>;

/// Create the default stdin input handler.
#[expect(clippy::disallowed_types, reason = "Arc required for SharedInputHandler")]
pub fn stdin_handler() -> SharedInputHandler {
    std::sync::Arc::new(InputHandlerImpl::Stdin)
}

/// Create an input handler serving `lines` in order.
#[expect(clippy::disallowed_types, reason = "Arc required for SharedInputHandler")]
pub fn buffer_input_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines = lines.into_iter().map(Into::into).collect();
    std::sync::Arc::new(InputHandlerImpl::Buffer(Mutex::new(lines)))
}
