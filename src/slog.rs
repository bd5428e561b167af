//! Adapter for emitting command diagnostics through `slog`.
//!
//! This module connects [`Printer`] with `slog` by providing a
//! `slog::Value` implementation, so the printer can be attached to a record
//! as a key/value pair instead of being pre-rendered into the message:
//!
//! ```ignore
//! use command_diagnostics::Printer;
//!
//! crit!(logger, "fatal assertion"; "command" => Printer::new(Some(&ctx)));
//! ```
//!
//! The emitted value is the printer's normal rendered text: either a fixed
//! omission message or the redacted command. Serialization is infallible on
//! our side; only the drain can fail.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::printer::Printer;

impl SlogValue for Printer<'_> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.render())
    }
}
