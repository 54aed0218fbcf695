//! Reference-counted handle for heap-allocated value payloads.
//!
//! `Heap<T>` wraps `Rc<T>` and is the only way value payloads are shared.
//! The constructor and the mutable accessor are `pub(super)`, so payloads
//! are created through `Value` factory methods and mutated only by the
//! sequence operations that have already proven unique ownership.
//!
//! Handles are `Rc`-backed, so values are not `Send`.

// Rc is the intentional implementation detail of Heap<T>
#![expect(clippy::disallowed_types, reason = "Rc is the whole point of Heap<T>")]

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// A shared, immutable-by-default value payload.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated payload.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl Heap<str> {
    /// Allocate a shared string slice (symbol names).
    #[inline]
    pub(super) fn from_str(value: &str) -> Self {
        Heap(Rc::from(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether this handle is the only live reference to the payload.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.0) == 1 && Rc::weak_count(&self.0) == 0
    }

    /// Mutable access, granted only when the payload is uniquely owned.
    #[inline]
    pub(super) fn get_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.0)
    }

    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

// Lets `FxHashMap<Heap<str>, _>` be queried with a plain `&str`.
impl Borrow<str> for Heap<str> {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
