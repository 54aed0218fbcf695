//! Output sink for `print`, `println` and `write`.
//!
//! The evaluator never writes to the process directly. Output goes through
//! a shared handler chosen when the interpreter is built:
//! - stdout (default)
//! - an in-memory buffer (tests, embedding)
//! - nowhere (benchmarks, fuzzing)
//!
//! Enum dispatch keeps the per-call cost to a match.

use std::io::Write;

use parking_lot::Mutex;

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to the process's stdout.
    Stdout,
    /// Appends to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit `text` followed by a newline.
    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Emit `text` as-is.
    ///
    /// Stdout is flushed so prompts appear before a following `getline`.
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
                    tracing::warn!(%err, "failed to write program output");
                }
            }
            Self::Buffer(buffer) => buffer.lock().push_str(text),
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Shared print handler that can be passed around.
#[expect(
    clippy::disallowed_types,
    reason = "Arc lets one capture buffer outlive and be shared between interpreters"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create the default stdout print handler.
#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout)
}

/// Create a buffer print handler for capturing output.
#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

/// Create a print handler that discards all output.
#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
