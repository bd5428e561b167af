//! The lazily-evaluated diagnostic printer.
//!
//! [`Printer`] is the composition root: it binds to an (optional) operation
//! context at construction and does all of its work when formatted. It runs
//! the disclosure cascade, and when that proceeds, copies a snapshot, drops
//! the context lock, and renders the redacted field list.
//!
//! Intended use is inline inside a log statement on a failure path:
//!
//! ```ignore
//! log::error!("fatal assertion while running {}", Printer::new(Some(&ctx)));
//! ```

use std::fmt;

use crate::{
    context::OperationContext,
    decision::{DiagnosticDecision, OMIT_UNRECOGNIZED_COMMAND_MSG, RenderableOperation, decide},
    redaction_mode,
    redactor::FieldRedactor,
};

/// Lazily renders the command currently executing on an operation context.
///
/// Construction performs no work and cannot fail, so a printer may be created
/// unconditionally even when the caller may not end up emitting anything.
/// Rendering never panics: every failure path degrades to a fixed omission
/// message, which makes the printer safe to format from restricted contexts
/// such as crash and termination handling.
#[derive(Clone, Copy)]
pub struct Printer<'a> {
    op_ctx: Option<&'a OperationContext>,
}

impl<'a> Printer<'a> {
    /// Binds a printer to an operation context, which may be absent.
    #[must_use]
    pub const fn new(op_ctx: Option<&'a OperationContext>) -> Self {
        Self { op_ctx }
    }

    /// Renders the diagnostic text.
    ///
    /// Takes a fresh locked snapshot of the bound context, runs the
    /// disclosure cascade, and either returns the cascade's fixed message or
    /// the namespace, command name, and redacted field list.
    pub fn render(&self) -> String {
        match decide(self.op_ctx) {
            DiagnosticDecision::Render(op) => render_operation(&op),
            decision => decision
                .terminal_message()
                .unwrap_or(OMIT_UNRECOGNIZED_COMMAND_MSG)
                .to_string(),
        }
    }
}

/// Formats an operation that passed every disclosure check.
///
/// No lock is held here: `op` is a snapshot. The global redaction flag is
/// read once so the whole field list observes one value.
fn render_operation(op: &RenderableOperation) -> String {
    let namespace = op.namespace();
    let name = op.descriptor().name();
    if op.document().is_empty() {
        return format!("{namespace} {name}");
    }
    let sensitive = op.descriptor().sensitive_field_names();
    let redactor = FieldRedactor::new(&sensitive, redaction_mode::is_enabled());
    format!("{namespace} {name} {{{}}}", redactor.render(op.document()))
}

impl fmt::Display for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Printer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
