//! Per-command-type diagnostic metadata.
//!
//! This module defines the two ways a command type declares its diagnostic
//! capabilities:
//!
//! - [`CommandDescriptor`]: a trait each command type implements directly.
//! - [`StaticCommandDescriptor`]: a declarative, `const`-constructible table
//!   entry for hosts that keep command metadata in a registry keyed by name.
//!
//! Metadata is static per command type: the sensitive-field set and the
//! diagnostic-printing flag never change at runtime.

use std::collections::HashSet;

// =============================================================================
// CommandDescriptor - Trait for per-command diagnostic capabilities
// =============================================================================

/// Diagnostic metadata for one command type.
///
/// Descriptors are shared as `Arc<dyn CommandDescriptor>` between the
/// operation context and the diagnostic printer, so implementations must be
/// `Send + Sync`.
///
/// Diagnostic printing is opt-in: the default implementation of
/// [`diagnostic_printing_enabled`](Self::diagnostic_printing_enabled) returns
/// `false`, and such commands render as a fixed omission message rather than
/// disclosing their document.
pub trait CommandDescriptor: Send + Sync {
    /// Returns the command name.
    ///
    /// The name is structural metadata: it appears in diagnostic output even
    /// when every field value is redacted.
    fn name(&self) -> &str;

    /// Returns the names of fields whose values must never appear in
    /// diagnostic output.
    ///
    /// Field names are unique within a document and matching is exact; order
    /// is irrelevant. Defaults to the empty set.
    fn sensitive_field_names(&self) -> HashSet<String> {
        HashSet::new()
    }

    /// Returns whether this command permits its document to be printed in
    /// diagnostics at all.
    fn diagnostic_printing_enabled(&self) -> bool {
        false
    }
}

// =============================================================================
// StaticCommandDescriptor - Declarative metadata table entry
// =============================================================================

/// A [`CommandDescriptor`] backed by static data.
///
/// Useful for hosts that declare command metadata in a flat table instead of
/// implementing the trait per command type:
///
/// ```
/// use command_diagnostics::{CommandDescriptor, StaticCommandDescriptor};
///
/// static SALUTE: StaticCommandDescriptor = StaticCommandDescriptor::new("salute")
///     .with_diagnostic_printing(true)
///     .with_sensitive_fields(&["token"]);
///
/// assert!(SALUTE.diagnostic_printing_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StaticCommandDescriptor {
    name: &'static str,
    sensitive_field_names: &'static [&'static str],
    diagnostic_printing_enabled: bool,
}

impl StaticCommandDescriptor {
    /// Creates a descriptor with no sensitive fields and diagnostic printing
    /// disabled.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            sensitive_field_names: &[],
            diagnostic_printing_enabled: false,
        }
    }

    /// Declares the sensitive field names for this command.
    #[must_use]
    pub const fn with_sensitive_fields(mut self, names: &'static [&'static str]) -> Self {
        self.sensitive_field_names = names;
        self
    }

    /// Enables or disables diagnostic printing for this command.
    #[must_use]
    pub const fn with_diagnostic_printing(mut self, enabled: bool) -> Self {
        self.diagnostic_printing_enabled = enabled;
        self
    }
}

impl CommandDescriptor for StaticCommandDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn sensitive_field_names(&self) -> HashSet<String> {
        self.sensitive_field_names
            .iter()
            .map(|name| (*name).to_string())
            .collect()
    }

    fn diagnostic_printing_enabled(&self) -> bool {
        self.diagnostic_printing_enabled
    }
}

// =============================================================================
// Tests
// =============================================================================
