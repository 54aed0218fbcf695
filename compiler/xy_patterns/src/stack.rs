//! Native stack guard for recursive walks over nested values.
//!
//! Rendering, comparison, destructuring and element-wise arithmetic all
//! recurse once per nesting level of a sequence. User programs can build
//! arbitrarily deep quotations, so each of those walks re-enters through
//! [`ensure_sufficient_stack`].

/// Run `f`, growing the native stack first if less than the red zone remains.
///
/// On wasm32 targets this calls `f` directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow when fewer than 64KB remain.
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each new stack segment (1MB).
    const SEGMENT: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
