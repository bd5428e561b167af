//! Adapter for emitting command diagnostics through `tracing`.
//!
//! [`Printer`] already implements `Display`, so `%printer` works with any
//! subscriber. The extension trait here renders eagerly into a
//! [`DisplayValue`], which keeps the field usable on events recorded after
//! the borrowed context has gone away:
//!
//! ```ignore
//! use command_diagnostics::tracing::TracingDiagnosticsExt;
//!
//! tracing::error!(command = %printer, "fatal assertion");
//! tracing::error!(command = printer.tracing_diagnostics(), "fatal assertion");
//! ```

use tracing::field::{DisplayValue, display};

use crate::printer::Printer;

/// Extension trait for logging command diagnostics as a tracing field.
pub trait TracingDiagnosticsExt {
    /// Renders the diagnostic text and wraps it as a `tracing` display value.
    fn tracing_diagnostics(&self) -> DisplayValue<String>;
}

impl TracingDiagnosticsExt for Printer<'_> {
    fn tracing_diagnostics(&self) -> DisplayValue<String> {
        display(self.render())
    }
}
