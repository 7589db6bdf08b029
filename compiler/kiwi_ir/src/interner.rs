//! String interner for identifiers.
//!
//! Strings are leaked into `'static` storage on first sight so that
//! [`StringInterner::lookup`] can hand out plain `&str` without holding the
//! lock. A program only ever interns its own identifiers, so the leak is
//! bounded by the input size.

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternTable {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Interner mapping identifier text to [`Name`] handles.
///
/// Thread-safe behind a `RwLock`; interning an already-known string only
/// takes the read lock.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create an interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", Name::EMPTY);
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Intern `s`, returning the existing handle when it was seen before.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(s) {
            return name;
        }

        let mut table = self.table.write();
        // Another writer may have won the race between the two locks.
        if let Some(&name) = table.map.get(s) {
            return name;
        }

        let index = u32::try_from(table.strings.len())
            .unwrap_or_else(|_| panic!("string interner exceeded u32::MAX entries"));
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_index(index);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        name
    }

    /// Resolve a handle back to its text.
    ///
    /// Handles from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always `false`: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let interner = StringInterner::new();
        let a = interner.intern("counter");
        let b = interner.intern("counter");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "counter");
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");
        assert_ne!(x, y);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn empty_string_is_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }
}
