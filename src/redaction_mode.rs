//! Process-wide redaction mode.
//!
//! When enabled, every field value in diagnostic output is replaced with the
//! redaction marker, sensitive or not. Field names, command names, and
//! namespaces remain visible. The mode is monotonic with respect to
//! per-field redaction: enabling it never exposes a value that a command's
//! sensitive-field set would hide.
//!
//! The flag is set by an administrative surface outside this crate; this
//! module only exposes the explicit get/set pair.
//!
//! # Lock-free-read contract
//!
//! [`is_enabled`] is a single relaxed atomic load: no synchronization
//! barriers, no locks. The flag may change while a render is in progress;
//! that only affects the immediate output and no torn state is observable,
//! so readers on crash/termination paths are safe.

use std::sync::atomic::{AtomicBool, Ordering};

static REDACT_FIELD_VALUES: AtomicBool = AtomicBool::new(false);

/// Enables or disables process-wide redaction of field values.
pub fn set_enabled(enabled: bool) {
    REDACT_FIELD_VALUES.store(enabled, Ordering::Relaxed);
}

/// Returns whether process-wide redaction is currently enabled.
pub fn is_enabled() -> bool {
    REDACT_FIELD_VALUES.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trips() {
        assert!(!is_enabled());
        set_enabled(true);
        assert!(is_enabled());
        set_enabled(false);
        assert!(!is_enabled());
    }
}
