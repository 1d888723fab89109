//! Contact form validation and history logic
//!
//! All three validations run on every submit, independently, so the user
//! sees every problem at once. The email pattern is deliberately permissive
//! (one run of non-space/non-@ characters, an @, another run, a dot, a
//! trailing run); tightening it would change accepted inputs, so it stays
//! as is.

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::model::{FieldErrors, SubmissionRecord};

pub const NAME_ERROR: &str = "Please enter your name (2+ characters).";
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters.";

fn email_re() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email_valid: invalid regex")
    })
}

/// Permissive email shape check, applied to the trimmed value
pub fn email_valid(value: &str) -> bool {
    email_re().is_match(value)
}

/// Validate all three fields against their trimmed values. Every check runs
/// regardless of earlier failures.
pub fn validate(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if name.trim().chars().count() < 2 {
        errors.name = Some(NAME_ERROR.to_string());
    }
    if !email_valid(email.trim()) {
        errors.email = Some(EMAIL_ERROR.to_string());
    }
    if message.trim().chars().count() < 10 {
        errors.message = Some(MESSAGE_ERROR.to_string());
    }

    errors
}

/// Build the record persisted for a successful submission. Field values are
/// trimmed; the timestamp is the caller's (see [`timestamp_now`]).
pub fn build_record(name: &str, email: &str, message: &str, sent_at: String) -> SubmissionRecord {
    SubmissionRecord {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
        sent_at,
    }
}

/// Current instant in the stored timestamp format: ISO-8601 UTC with
/// millisecond precision and a Z suffix
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Deserialize the stored history. Absent or malformed storage reads as the
/// empty list; a valid list is returned in stored order.
pub fn parse_history(raw: Option<&str>) -> Vec<SubmissionRecord> {
    raw.and_then(|value| serde_json::from_str(value).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_simple_address() {
        assert!(email_valid("a@b.co"));
        assert!(email_valid("first.last@example.com"));
    }

    #[test]
    fn test_email_rejects_missing_at_or_dot() {
        assert!(!email_valid("plainaddress"));
        assert!(!email_valid("a@bco"));
        assert!(!email_valid("ab.co"));
        assert!(!email_valid(""));
    }

    #[test]
    fn test_email_rejects_spaces_and_empty_runs() {
        assert!(!email_valid("a b@c.d"));
        assert!(!email_valid("@b.co"));
        assert!(!email_valid("a@.co"));
        assert!(!email_valid("a@b."));
    }

    #[test]
    fn test_email_permissive_edge_cases_stay_accepted() {
        // The pattern is intentionally loose; these must keep passing
        assert!(email_valid("a..b@c..d.e"));
        assert!(email_valid("!#$%@[].x"));
    }

    #[test]
    fn test_validate_runs_all_checks() {
        let errors = validate("A", "nope", "short");
        assert_eq!(errors.name.as_deref(), Some(NAME_ERROR));
        assert_eq!(errors.email.as_deref(), Some(EMAIL_ERROR));
        assert_eq!(errors.message.as_deref(), Some(MESSAGE_ERROR));
    }

    #[test]
    fn test_validate_trims_before_checking() {
        // Two spaces are not a name; padded valid values pass
        let errors = validate("  ", " a@b.co ", "  a message long enough  ");
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_validate_clean_input() {
        let errors = validate("Ada", "ada@example.com", "A sufficiently long message.");
        assert!(errors.is_clear());
    }

    #[test]
    fn test_build_record_trims_values() {
        let record = build_record(" Ada ", " ada@example.com ", " hello ", "t".to_string());
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.message, "hello");
        assert_eq!(record.sent_at, "t");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_parse_history_absent_or_malformed_is_empty() {
        assert!(parse_history(None).is_empty());
        assert!(parse_history(Some("")).is_empty());
        assert!(parse_history(Some("{not json")).is_empty());
        assert!(parse_history(Some("{\"a\":1}")).is_empty());
    }

    #[test]
    fn test_parse_history_round_trip() {
        let records = vec![build_record("Ada", "a@b.co", "hello there world", "t1".to_string())];
        let raw = serde_json::to_string(&records).unwrap();
        assert_eq!(parse_history(Some(&raw)), records);
    }
}
