//! Field-level redaction of command documents.
//!
//! [`FieldRedactor`] renders an ordered command document to text, replacing
//! values with the redaction marker according to two rules:
//!
//! - a field whose name is in the command's sensitive set is always redacted;
//! - under global redaction, every value is redacted.
//!
//! Field names are never hidden, only values. Sensitivity is name-based and
//! exact: a field whose name happens to equal the command name is an ordinary
//! field.

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use crate::context::CommandDocument;

/// Placeholder substituted for a hidden value.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// =============================================================================
// FieldRedactor - Renders a document applying redaction rules
// =============================================================================

/// Renders a command document as `name: value` pairs with redaction applied.
///
/// Borrows the sensitive-name set and captures the global-redaction flag at
/// construction, so one render observes a single consistent flag value.
#[derive(Clone, Copy)]
pub struct FieldRedactor<'a> {
    sensitive_names: &'a HashSet<String>,
    redact_all: bool,
}

impl<'a> FieldRedactor<'a> {
    /// Creates a redactor for one render.
    pub fn new(sensitive_names: &'a HashSet<String>, redact_all: bool) -> Self {
        Self {
            sensitive_names,
            redact_all,
        }
    }

    /// Renders `document` in field order, comma separated.
    ///
    /// Never fails: a value that cannot be serialized degrades to the
    /// redaction marker instead of failing the whole render.
    pub fn render(&self, document: &CommandDocument) -> String {
        let mut out = String::new();
        for (name, value) in document {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(name);
            out.push_str(": ");
            if self.redact_all || self.sensitive_names.contains(name) {
                out.push_str(REDACTED_PLACEHOLDER);
            } else {
                out.push_str(&render_value(value));
            }
        }
        out
    }
}

/// Renders one value verbatim as compact JSON, nested structures included.
fn render_value(value: &JsonValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| REDACTED_PLACEHOLDER.to_string())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document() -> CommandDocument {
        let mut doc = CommandDocument::new();
        doc.insert("mockCmd".into(), json!("abcdefgh"));
        doc.insert("sensitive".into(), json!("12345678"));
        doc.insert("limit".into(), json!(10));
        doc
    }

    fn sensitive_set() -> HashSet<String> {
        HashSet::from(["sensitive".to_string()])
    }

    #[test]
    fn preserves_field_order() {
        let sensitive = HashSet::new();
        let redactor = FieldRedactor::new(&sensitive, false);
        assert_eq!(
            redactor.render(&document()),
            r#"mockCmd: "abcdefgh", sensitive: "12345678", limit: 10"#
        );
    }

    #[test]
    fn redacts_sensitive_values_but_keeps_names() {
        let sensitive = sensitive_set();
        let redactor = FieldRedactor::new(&sensitive, false);
        let out = redactor.render(&document());
        assert!(out.contains("sensitive: [REDACTED]"));
        assert!(!out.contains("12345678"));
        assert!(out.contains("abcdefgh"));
    }

    #[test]
    fn global_redaction_masks_every_value() {
        let sensitive = sensitive_set();
        let redactor = FieldRedactor::new(&sensitive, true);
        assert_eq!(
            redactor.render(&document()),
            "mockCmd: [REDACTED], sensitive: [REDACTED], limit: [REDACTED]"
        );
    }

    #[test]
    fn nested_structures_render_verbatim() {
        let mut doc = CommandDocument::new();
        doc.insert(
            "indexes".into(),
            json!([{"key": {"a": 1}, "partialFilterExpression": {"b": 1}}]),
        );
        let sensitive = HashSet::new();
        let redactor = FieldRedactor::new(&sensitive, false);
        assert_eq!(
            redactor.render(&doc),
            r#"indexes: [{"key":{"a":1},"partialFilterExpression":{"b":1}}]"#
        );
    }

    #[test]
    fn empty_document_renders_empty() {
        let sensitive = HashSet::new();
        let redactor = FieldRedactor::new(&sensitive, false);
        assert_eq!(redactor.render(&CommandDocument::new()), "");
    }

    #[test]
    fn sensitive_match_is_exact() {
        let sensitive = HashSet::from(["sens".to_string()]);
        let redactor = FieldRedactor::new(&sensitive, false);
        let out = redactor.render(&document());
        // "sensitive" is not "sens"
        assert!(out.contains("12345678"));
    }
}
