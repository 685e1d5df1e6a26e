//! Immutable shared payloads for primitive values.
//!
//! The constructor is private to the `value` module so every heap payload
//! is created through a `Value` factory.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared immutable payload behind a primitive value.
#[derive(PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl Heap<str> {
    #[inline]
    pub(super) fn from_str(s: &str) -> Self {
        Heap(Arc::from(s))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
