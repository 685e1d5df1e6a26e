//! Interned string identifier.
//!
//! Provides compact 32-bit interned identifiers for variable names,
//! property keys and string literals.

use std::fmt;

/// Interned string identifier.
///
/// The raw value is an index into the owning [`StringInterner`](crate::StringInterner).
/// A handful of names are pre-interned at fixed indices so the evaluator can
/// refer to them without an interner round-trip.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);
    /// Pre-interned `this`.
    pub const THIS: Name = Name(1);
    /// Pre-interned `length`.
    pub const LENGTH: Name = Name(2);
    /// Pre-interned `console`.
    pub const CONSOLE: Name = Name(3);
    /// Pre-interned `log`.
    pub const LOG: Name = Name(4);
    /// Pre-interned `Object`.
    pub const OBJECT: Name = Name(5);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_raw_roundtrip() {
        let name = Name::from_raw(1000);
        assert_eq!(name.raw(), 1000);
        assert_eq!(name.index(), 1000);
    }

    #[test]
    fn test_name_default_is_empty() {
        assert_eq!(Name::default(), Name::EMPTY);
    }

    #[test]
    fn test_name_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Name::from_raw(1));
        set.insert(Name::from_raw(1)); // duplicate
        set.insert(Name::from_raw(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::THIS < Name::LENGTH);
    }
}
