//! The disclosure decision cascade.
//!
//! Before any command content is rendered, [`decide`] maps the state of an
//! operation context to either a terminal fixed message or a
//! [`RenderableOperation`] that is safe to hand to the field redactor. The
//! checks run in a fixed priority order and the first match wins:
//!
//! 1. absent context
//! 2. no command attached to the operation
//! 3. per-operation suppression
//! 4. command-level diagnostic printing disabled
//! 5. proceed to render
//!
//! Cheap absence checks short-circuit before command metadata is touched,
//! and explicit per-request suppression overrides the command's own policy.
//! The function is pure: it takes one fresh locked snapshot and has no side
//! effects.

use std::sync::Arc;

use crate::{
    command::CommandDescriptor,
    context::{CommandDocument, Namespace, OperationContext},
};

/// Message emitted when the printer was constructed without a context.
pub const CONTEXT_IS_NULL_MSG: &str = "operation context is null";

/// Message emitted when the operation has no recognized command attached.
///
/// Without a descriptor it is unclear which fields are sensitive, so nothing
/// is disclosed.
pub const OMIT_UNRECOGNIZED_COMMAND_MSG: &str = "omitted: unrecognized command";

/// Message emitted when the operation explicitly suppressed diagnostics.
pub const OMIT_UNSUPPORTED_OPERATION_MSG: &str =
    "omitted: diagnostics unsupported for this operation";

/// Message emitted when the command does not opt into diagnostic printing.
pub const OMIT_UNSUPPORTED_COMMAND_MSG: &str =
    "omitted: command does not support diagnostic printing";

// =============================================================================
// RenderableOperation - Decision output that is safe to render
// =============================================================================

/// An operation that passed every disclosure check.
///
/// Carries everything the field redactor needs, copied out of the context so
/// no lock is held during formatting.
pub struct RenderableOperation {
    namespace: Namespace,
    descriptor: Arc<dyn CommandDescriptor>,
    document: CommandDocument,
}

impl RenderableOperation {
    /// The namespace the operation targets.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The attached command's descriptor. Present by construction: a missing
    /// descriptor terminates the cascade earlier.
    pub fn descriptor(&self) -> &Arc<dyn CommandDescriptor> {
        &self.descriptor
    }

    /// The raw command document.
    pub fn document(&self) -> &CommandDocument {
        &self.document
    }
}

// =============================================================================
// DiagnosticDecision - Outcome of the disclosure cascade
// =============================================================================

/// The outcome of the disclosure cascade for one render.
pub enum DiagnosticDecision {
    /// The printer was constructed without an operation context.
    ContextIsNull,
    /// The operation has no recognized command attached.
    UnrecognizedCommand,
    /// The operation explicitly suppressed diagnostics.
    UnsupportedOperation,
    /// The command does not opt into diagnostic printing.
    UnsupportedCommand,
    /// Every check passed; the operation may be rendered.
    Render(RenderableOperation),
}

impl DiagnosticDecision {
    /// The fixed message for a terminal outcome, or `None` for
    /// [`DiagnosticDecision::Render`].
    pub fn terminal_message(&self) -> Option<&'static str> {
        match self {
            Self::ContextIsNull => Some(CONTEXT_IS_NULL_MSG),
            Self::UnrecognizedCommand => Some(OMIT_UNRECOGNIZED_COMMAND_MSG),
            Self::UnsupportedOperation => Some(OMIT_UNSUPPORTED_OPERATION_MSG),
            Self::UnsupportedCommand => Some(OMIT_UNSUPPORTED_COMMAND_MSG),
            Self::Render(_) => None,
        }
    }
}

/// Runs the disclosure cascade against a fresh snapshot of `ctx`.
pub fn decide(ctx: Option<&OperationContext>) -> DiagnosticDecision {
    let Some(ctx) = ctx else {
        return DiagnosticDecision::ContextIsNull;
    };
    let Some(op) = ctx.current_operation() else {
        return DiagnosticDecision::UnrecognizedCommand;
    };
    let Some(descriptor) = op.descriptor().cloned() else {
        return DiagnosticDecision::UnrecognizedCommand;
    };
    if op.suppress_diagnostics() {
        return DiagnosticDecision::UnsupportedOperation;
    }
    if !descriptor.diagnostic_printing_enabled() {
        return DiagnosticDecision::UnsupportedCommand;
    }
    let (namespace, document) = (op.namespace().clone(), op.document().clone());
    DiagnosticDecision::Render(RenderableOperation {
        namespace,
        descriptor,
        document,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{command::StaticCommandDescriptor, context::CurrentOperation};

    static ENABLED: StaticCommandDescriptor =
        StaticCommandDescriptor::new("enabledCmd").with_diagnostic_printing(true);
    static DISABLED: StaticCommandDescriptor = StaticCommandDescriptor::new("disabledCmd");

    fn ctx_with(descriptor: Option<Arc<dyn CommandDescriptor>>) -> OperationContext {
        let ctx = OperationContext::new();
        ctx.set_current_operation(CurrentOperation::new(
            Namespace::new("db.coll"),
            descriptor,
            CommandDocument::new(),
        ));
        ctx
    }

    #[test]
    fn absent_context_terminates_first() {
        assert_eq!(decide(None).terminal_message(), Some(CONTEXT_IS_NULL_MSG));
    }

    #[test]
    fn empty_context_reports_unrecognized_command() {
        let ctx = OperationContext::new();
        assert_eq!(
            decide(Some(&ctx)).terminal_message(),
            Some(OMIT_UNRECOGNIZED_COMMAND_MSG)
        );
    }

    #[test]
    fn operation_without_descriptor_reports_unrecognized_command() {
        let ctx = ctx_with(None);
        assert_eq!(
            decide(Some(&ctx)).terminal_message(),
            Some(OMIT_UNRECOGNIZED_COMMAND_MSG)
        );
    }

    #[test]
    fn missing_command_takes_priority_over_suppression() {
        let ctx = ctx_with(None);
        ctx.set_suppress_diagnostics(true);
        assert_eq!(
            decide(Some(&ctx)).terminal_message(),
            Some(OMIT_UNRECOGNIZED_COMMAND_MSG)
        );
    }

    #[test]
    fn suppression_takes_priority_over_command_policy() {
        // Suppression wins whether or not the command itself would allow
        // printing.
        for descriptor in [&ENABLED, &DISABLED] {
            let ctx = ctx_with(Some(Arc::new(*descriptor)));
            ctx.set_suppress_diagnostics(true);
            assert_eq!(
                decide(Some(&ctx)).terminal_message(),
                Some(OMIT_UNSUPPORTED_OPERATION_MSG)
            );
        }
    }

    #[test]
    fn disabled_command_reports_unsupported_command() {
        let ctx = ctx_with(Some(Arc::new(DISABLED)));
        assert_eq!(
            decide(Some(&ctx)).terminal_message(),
            Some(OMIT_UNSUPPORTED_COMMAND_MSG)
        );
    }

    #[test]
    fn enabled_command_proceeds_to_render() {
        let ctx = ctx_with(Some(Arc::new(ENABLED)));
        let decision = decide(Some(&ctx));
        assert!(decision.terminal_message().is_none());
        match decision {
            DiagnosticDecision::Render(op) => {
                assert_eq!(op.namespace().as_str(), "db.coll");
                assert_eq!(op.descriptor().name(), "enabledCmd");
                assert!(op.document().is_empty());
            }
            _ => panic!("expected a renderable operation"),
        }
    }
}
