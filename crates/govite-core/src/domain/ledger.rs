//! Installed-module ledger entity.
//!
//! A small audit record mapping each working directory (absolute path, string
//! key) to the ordered sequence of module identifiers installed or imported
//! there. Advisory only: nothing re-reads it to prevent re-import or to drive
//! local-module removal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// In-memory form of the persisted ledger.
///
/// Loaded fully into memory, mutated, and rewritten as a whole on every
/// update. Within one working-directory entry, identifiers are unique and
/// keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Working directory → ordered module identifiers.
    #[serde(default)]
    pub installed_modules: BTreeMap<String, Vec<String>>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent add: a duplicate identifier within the same working
    /// directory is a no-op.
    pub fn record(&mut self, working_dir: &str, identifier: &str) {
        let entries = self
            .installed_modules
            .entry(working_dir.to_string())
            .or_default();
        if !entries.iter().any(|m| m == identifier) {
            entries.push(identifier.to_string());
        }
    }

    /// Idempotent remove: absent identifiers are a no-op, and the relative
    /// order of the remaining entries is preserved.
    pub fn forget(&mut self, working_dir: &str, identifier: &str) {
        if let Some(entries) = self.installed_modules.get_mut(working_dir) {
            entries.retain(|m| m != identifier);
        }
    }

    /// Identifiers recorded for a working directory, in insertion order.
    pub fn modules_for(&self, working_dir: &str) -> &[String] {
        self.installed_modules
            .get(working_dir)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.installed_modules.values().all(Vec::is_empty)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut ledger = Ledger::new();
        ledger.record("/work", "a");
        ledger.record("/work", "b");
        assert_eq!(ledger.modules_for("/work"), ["a", "b"]);
    }

    #[test]
    fn record_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.record("/work", "a");
        ledger.record("/work", "a");
        assert_eq!(ledger.modules_for("/work"), ["a"]);
    }

    #[test]
    fn forget_is_idempotent_and_order_preserving() {
        let mut ledger = Ledger::new();
        ledger.record("/work", "a");
        ledger.record("/work", "b");
        ledger.record("/work", "c");

        ledger.forget("/work", "b");
        assert_eq!(ledger.modules_for("/work"), ["a", "c"]);

        // Removing an absent identifier is a no-op, not an error.
        ledger.forget("/work", "b");
        ledger.forget("/elsewhere", "a");
        assert_eq!(ledger.modules_for("/work"), ["a", "c"]);
    }

    #[test]
    fn record_then_forget_round_trips() {
        let mut ledger = Ledger::new();
        let before = ledger.modules_for("/work").to_vec();
        ledger.record("/work", "x");
        ledger.forget("/work", "x");
        assert_eq!(ledger.modules_for("/work"), before.as_slice());
    }

    #[test]
    fn same_name_under_both_provenances_does_not_collide() {
        let mut ledger = Ledger::new();
        ledger.record("/work", "local:widgets");
        ledger.record("/work", "imported:widgets");
        assert_eq!(
            ledger.modules_for("/work"),
            ["local:widgets", "imported:widgets"]
        );
    }

    #[test]
    fn entries_are_scoped_per_working_directory() {
        let mut ledger = Ledger::new();
        ledger.record("/a", "m");
        ledger.record("/b", "m");
        ledger.forget("/a", "m");
        assert!(ledger.modules_for("/a").is_empty());
        assert_eq!(ledger.modules_for("/b"), ["m"]);
    }
}
