//! Interned identifier.

use std::fmt;

/// Interned identifier handle.
///
/// Only meaningful together with the [`StringInterner`](crate::StringInterner)
/// that produced it. Equality and hashing are a single `u32` compare.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    /// Position in the interner's string table.
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
