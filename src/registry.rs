//! The process-wide flag registry.
//!
//! Mirrors the global command-line flag set most flag libraries keep: a
//! singleton table that composition merges into by default so that every
//! composed configuration's flags appear in the one process-wide set.
//! Registration is idempotent by name, which is what makes composing the
//! same structure type twice safe.
//!
//! The registry is ambient shared state. Callers that need isolation use
//! [`compose_with_flag_set`](crate::compose_with_flag_set), which never
//! touches it. Environment variables stay process-global either way.

use std::sync::{LazyLock, Mutex, PoisonError};

use crate::flags::FlagSet;

static PROCESS_FLAGS: LazyLock<Mutex<FlagSet>> = LazyLock::new(|| Mutex::new(FlagSet::new()));

/// Merge a flag set into the process-wide registry. Names already present
/// are left untouched.
pub fn merge_into_process(set: &FlagSet) {
    let mut flags = PROCESS_FLAGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    flags.merge(set);
}

/// A snapshot of the current process-wide flag set.
pub fn process_snapshot() -> FlagSet {
    PROCESS_FLAGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{FlagDecl, FlagKind, FlagValue};

    fn decl(name: &str, default: &str) -> FlagDecl {
        FlagDecl {
            name: name.to_string(),
            kind: FlagKind::Text,
            default: FlagValue::Text(default.to_string()),
            desc: "",
        }
    }

    // The registry is shared across the whole test binary, so these tests
    // use names no other test registers.

    #[test]
    fn merge_then_snapshot_round_trips() {
        let mut set = FlagSet::new();
        set.declare(decl("registry_test_alpha", "a"));
        merge_into_process(&set);

        let snapshot = process_snapshot();
        assert!(snapshot.lookup("registry_test_alpha").is_some());
    }

    #[test]
    fn remerge_does_not_overwrite() {
        let mut first = FlagSet::new();
        first.declare(decl("registry_test_beta", "original"));
        merge_into_process(&first);

        let mut second = FlagSet::new();
        second.declare(decl("registry_test_beta", "changed"));
        merge_into_process(&second);

        let snapshot = process_snapshot();
        assert_eq!(
            snapshot.lookup("registry_test_beta").unwrap().default,
            FlagValue::Text("original".into())
        );
    }
}
