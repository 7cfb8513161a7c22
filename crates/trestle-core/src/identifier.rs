//! Node identifiers backed by a global string interner.
//!
//! [`NodeId`] is `Copy` and compares in constant time, which keeps hit-testing
//! and edge resolution cheap while still displaying as the original string.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> std::sync::MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Identifier of a diagram node.
///
/// # Examples
///
/// ```
/// use trestle_core::identifier::NodeId;
///
/// let input = NodeId::new("node1");
/// assert_eq!(input, NodeId::new("node1"));
/// assert_eq!(input, "node1");
/// assert_eq!(input.to_string(), "node1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(DefaultSymbol);

impl NodeId {
    /// Creates a `NodeId` from &str, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        interner()
            .get(other)
            .is_some_and(|symbol| symbol == self.0)
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(NodeId::new("alpha"), NodeId::new("alpha"));
        assert_ne!(NodeId::new("alpha"), NodeId::new("beta"));
    }

    #[test]
    fn test_display_round_trips_name() {
        assert_eq!(NodeId::new("Process").to_string(), "Process");
    }

    #[test]
    fn test_compare_with_str() {
        let id = NodeId::from("gamma");
        assert_eq!(id, "gamma");
        assert!(id != "delta");
        assert!(id != "never-interned-identifier");
    }
}
