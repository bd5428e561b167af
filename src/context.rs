//! Operation-scoped state the printer reads at render time.
//!
//! This module provides:
//!
//! - [`Namespace`]: the database/collection the operation targets.
//! - [`CommandDocument`]: the raw command as an ordered field mapping.
//! - [`CurrentOperation`]: a point-in-time snapshot of the attached command.
//! - [`OperationContext`]: the mutable per-operation record, guarded by a
//!   mutex against concurrent mutation by other subsystems of the same
//!   connection.
//!
//! The printer never caches a snapshot: it takes a fresh locked copy at each
//! render so output reflects current state, not construction-time state.

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use serde_json::Value as JsonValue;

use crate::command::CommandDescriptor;

/// The raw command document: an ordered mapping of unique field names to
/// values.
///
/// `serde_json`'s `preserve_order` feature is enabled, so iteration yields
/// fields in insertion order.
pub type CommandDocument = serde_json::Map<String, JsonValue>;

// =============================================================================
// Namespace - The database/collection an operation targets
// =============================================================================

/// The namespace an operation targets, e.g. `"myDB.myColl"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a namespace from its textual form.
    pub fn new(ns: impl Into<String>) -> Self {
        Self(ns.into())
    }

    /// Returns the textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(ns: &str) -> Self {
        Self(ns.to_string())
    }
}

impl From<String> for Namespace {
    fn from(ns: String) -> Self {
        Self(ns)
    }
}

// =============================================================================
// CurrentOperation - Locked snapshot of the attached command
// =============================================================================

/// A point-in-time copy of the command attached to an operation context.
///
/// Cloning is cheap relative to rendering: the descriptor is an `Arc` and the
/// document is copied so that no lock is held during formatting.
#[derive(Clone)]
pub struct CurrentOperation {
    namespace: Namespace,
    descriptor: Option<Arc<dyn CommandDescriptor>>,
    document: CommandDocument,
    suppress_diagnostics: bool,
}

impl CurrentOperation {
    /// Creates a snapshot describing a newly attached command.
    ///
    /// The suppression flag starts out `false`; subsystems that know an
    /// operation must not be printed set it later via
    /// [`OperationContext::set_suppress_diagnostics`].
    pub fn new(
        namespace: Namespace,
        descriptor: Option<Arc<dyn CommandDescriptor>>,
        document: CommandDocument,
    ) -> Self {
        Self {
            namespace,
            descriptor,
            document,
            suppress_diagnostics: false,
        }
    }

    /// The namespace the operation targets.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The descriptor of the attached command, if the command was recognized.
    pub fn descriptor(&self) -> Option<&Arc<dyn CommandDescriptor>> {
        self.descriptor.as_ref()
    }

    /// The raw command document.
    pub fn document(&self) -> &CommandDocument {
        &self.document
    }

    /// Whether diagnostic printing has been explicitly suppressed for this
    /// operation, overriding the command's own policy.
    pub fn suppress_diagnostics(&self) -> bool {
        self.suppress_diagnostics
    }
}

impl fmt::Debug for CurrentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrentOperation")
            .field("namespace", &self.namespace)
            .field("command", &self.descriptor.as_ref().map(|d| d.name().to_string()))
            .field("fields", &self.document.len())
            .field("suppress_diagnostics", &self.suppress_diagnostics)
            .finish()
    }
}

// =============================================================================
// OperationContext - Mutable per-operation record
// =============================================================================

/// Execution-scoped state backing one in-flight command.
///
/// The attached operation is guarded by a mutex because other subsystems of
/// the same connection may swap the command or flip the suppression flag
/// concurrently. The lock is only ever held for the duration of a field
/// assignment or a snapshot clone, never while formatting.
#[derive(Default)]
pub struct OperationContext {
    current_op: Mutex<Option<CurrentOperation>>,
}

impl OperationContext {
    /// Creates a context with no operation attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches (or replaces) the current operation.
    pub fn set_current_operation(&self, op: CurrentOperation) {
        *self.lock() = Some(op);
    }

    /// Detaches the current operation, if any.
    pub fn clear_current_operation(&self) {
        *self.lock() = None;
    }

    /// Sets the per-operation suppression flag.
    ///
    /// A no-op when no operation is attached: suppression is a property of an
    /// operation, not of the context.
    pub fn set_suppress_diagnostics(&self, suppress: bool) {
        if let Some(op) = self.lock().as_mut() {
            op.suppress_diagnostics = suppress;
        }
    }

    /// Returns a fresh snapshot of the attached operation.
    ///
    /// The snapshot is cloned under the context's lock and the lock is
    /// released before this method returns, so callers can format the copy
    /// without blocking writers.
    pub fn current_operation(&self) -> Option<CurrentOperation> {
        self.lock().clone()
    }

    /// Acquires the operation lock, recovering from poisoning.
    ///
    /// A panic in another subsystem must not disable diagnostics: the
    /// snapshot data stays usable even if a writer panicked mid-update
    /// elsewhere, since every field assignment here is atomic with respect
    /// to the lock.
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CurrentOperation>> {
        self.current_op
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for OperationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationContext")
            .field("current_op", &*self.lock())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::StaticCommandDescriptor;

    static PING: StaticCommandDescriptor =
        StaticCommandDescriptor::new("ping").with_diagnostic_printing(true);

    fn ping_operation() -> CurrentOperation {
        CurrentOperation::new(
            Namespace::new("test.ping"),
            Some(Arc::new(PING)),
            CommandDocument::new(),
        )
    }

    #[test]
    fn context_starts_empty() {
        let ctx = OperationContext::new();
        assert!(ctx.current_operation().is_none());
    }

    #[test]
    fn snapshot_reflects_current_state_not_attach_time() {
        let ctx = OperationContext::new();
        ctx.set_current_operation(ping_operation());

        let before = ctx.current_operation().unwrap();
        assert!(!before.suppress_diagnostics());

        ctx.set_suppress_diagnostics(true);
        let after = ctx.current_operation().unwrap();
        assert!(after.suppress_diagnostics());
        // The earlier snapshot is an independent copy.
        assert!(!before.suppress_diagnostics());
    }

    #[test]
    fn suppression_is_a_noop_without_an_operation() {
        let ctx = OperationContext::new();
        ctx.set_suppress_diagnostics(true);
        assert!(ctx.current_operation().is_none());

        ctx.set_current_operation(ping_operation());
        let op = ctx.current_operation().unwrap();
        assert!(!op.suppress_diagnostics());
    }

    #[test]
    fn clear_detaches_the_operation() {
        let ctx = OperationContext::new();
        ctx.set_current_operation(ping_operation());
        ctx.clear_current_operation();
        assert!(ctx.current_operation().is_none());
    }

    #[test]
    fn namespace_display_is_verbatim() {
        let ns = Namespace::new("myDB.myColl");
        assert_eq!(ns.to_string(), "myDB.myColl");
        assert_eq!(ns.as_str(), "myDB.myColl");
    }
}
