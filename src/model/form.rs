//! Contact Form Model
//!
//! Field values, per-field inline errors, the success message, and the
//! persisted submission record shape. Validation rules live in
//! `logic::form`; this module is state only.

use serde::{Deserialize, Serialize};

/// Fixed success message shown after a recorded submission
pub const SUCCESS_MESSAGE: &str =
    "Thanks — your message has been recorded locally. (This demo does not send email.)";

/// The three contact form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }
}

/// One persisted contact submission. Immutable once created; appended to the
/// stored history list and never updated or removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "sentAt")]
    pub sent_at: String,
}

/// Inline validation errors, one slot per field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    /// True when no field has an error
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Error text for a field
    pub fn get(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => self.name.as_deref(),
            FieldId::Email => self.email.as_deref(),
            FieldId::Message => self.message.as_deref(),
        }
    }
}

/// Contact form state
#[derive(Clone, Debug, Default)]
pub struct FormModel {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub success: Option<String>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Mutable value of a field (for keystroke editing)
    pub fn value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// Clear inline errors and the success message (start of every submit)
    pub fn clear_messages(&mut self) {
        self.errors = FieldErrors::default();
        self.success = None;
    }

    /// Reset all fields to empty (after a successful submission)
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access() {
        let mut form = FormModel::new();
        form.value_mut(FieldId::Email).push_str("a@b.co");
        assert_eq!(form.value(FieldId::Email), "a@b.co");
        assert_eq!(form.value(FieldId::Name), "");
    }

    #[test]
    fn test_clear_messages() {
        let mut form = FormModel::new();
        form.errors.name = Some("bad".to_string());
        form.success = Some("ok".to_string());

        form.clear_messages();
        assert!(form.errors.is_clear());
        assert!(form.success.is_none());
    }

    #[test]
    fn test_reset_fields_keeps_messages() {
        let mut form = FormModel::new();
        form.name = "Ada".to_string();
        form.success = Some(SUCCESS_MESSAGE.to_string());

        form.reset_fields();
        assert_eq!(form.name, "");
        assert!(form.success.is_some());
    }

    #[test]
    fn test_record_serialization_uses_sent_at_key() {
        let record = SubmissionRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello from the past.".to_string(),
            sent_at: "2026-08-05T10:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sentAt\":\"2026-08-05T10:00:00.000Z\""));
        assert!(!json.contains("sent_at"));
    }
}
