//! Room identifiers backed by a global string interner.
//!
//! Layout engines hash and compare identifiers in their inner loops, so
//! [`Id`] is a `Copy` symbol rather than an owned `String`.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// Append-only; guarded by a `Mutex` so identifiers can be created from any thread.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of a room (graph vertex).
///
/// # Examples
///
/// ```
/// use floorplan_core::identifier::Id;
///
/// let kitchen = Id::new("Kitchen");
/// assert_eq!(kitchen, Id::new("Kitchen"));
/// assert_eq!(kitchen, "Kitchen");
/// assert_eq!(kitchen.to_string(), "Kitchen");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns true when the identifier is the empty string.
    pub fn is_empty(self) -> bool {
        interner().resolve(self.0).is_none_or(str::is_empty)
    }

    /// Returns the identifier text with every occurrence of `prefix` removed.
    ///
    /// Used for display labels, e.g. `"RoomKitchen"` → `"Kitchen"`. The text
    /// is removed wherever it appears, so `"BathRoom"` also becomes `"Bath"`.
    pub fn label_without_prefix(self, prefix: &str) -> String {
        let text = self.to_string();
        if prefix.is_empty() {
            return text;
        }
        text.replace(prefix, "")
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f.write_str(str_value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        interner().resolve(self.0) == Some(*other)
    }
}
