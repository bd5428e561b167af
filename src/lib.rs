//! Redaction-aware diagnostic printing for in-flight commands.
//!
//! This crate separates:
//! - **Decision**: whether any information about the current operation may be
//!   disclosed at all, via a fixed priority cascade.
//! - **Redaction**: how much of the command document is disclosed, combining
//!   per-command sensitive fields with a process-wide redaction mode.
//!
//! A [`Printer`] is constructed inline against an (optional) operation
//! context; construction performs no work, so it is safe to create one
//! unconditionally even on paths that may never emit anything. All work
//! happens lazily when the printer is formatted, which makes it suitable for
//! fatal-error and crash-diagnostic log lines.
//!
//! What this crate does:
//! - decides whether diagnostics are safe to disclose for an operation
//! - redacts sensitive and globally-redacted field values
//! - renders the result as plain text usable in string interpolation
//!
//! What it does not do:
//! - perform I/O or logging
//! - execute or parse commands
//! - decide when diagnostics fire
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use command_diagnostics::{
//!     CurrentOperation, Namespace, OperationContext, Printer, StaticCommandDescriptor,
//! };
//!
//! static FIND: StaticCommandDescriptor = StaticCommandDescriptor::new("find")
//!     .with_diagnostic_printing(true)
//!     .with_sensitive_fields(&["apiKey"]);
//!
//! let ctx = OperationContext::new();
//! let mut document = serde_json::Map::new();
//! document.insert("find".into(), "users".into());
//! document.insert("apiKey".into(), "sk_live_123".into());
//! ctx.set_current_operation(CurrentOperation::new(
//!     Namespace::new("app.users"),
//!     Some(Arc::new(FIND)),
//!     document,
//! ));
//!
//! let printer = Printer::new(Some(&ctx));
//! let line = format!("fatal error while running {printer}");
//! assert!(line.contains("app.users find"));
//! assert!(!line.contains("sk_live_123"));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
mod command;
mod context;
mod decision;
mod printer;
mod redaction_mode;
mod redactor;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use command::{CommandDescriptor, StaticCommandDescriptor};
pub use context::{CommandDocument, CurrentOperation, Namespace, OperationContext};
pub use decision::{
    CONTEXT_IS_NULL_MSG, DiagnosticDecision, OMIT_UNRECOGNIZED_COMMAND_MSG,
    OMIT_UNSUPPORTED_COMMAND_MSG, OMIT_UNSUPPORTED_OPERATION_MSG, RenderableOperation, decide,
};
pub use printer::Printer;
pub use redaction_mode::{is_enabled as redaction_enabled, set_enabled as set_redaction_enabled};
pub use redactor::{FieldRedactor, REDACTED_PLACEHOLDER};
