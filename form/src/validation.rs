//! Format validators for the email and phone fields.
//!
//! Validators are pure; the reducer runs them when a field loses focus and
//! writes the result into that field's helper.

use crate::types::Field;
use regex::Regex;
use std::sync::LazyLock;

/// Local part: dot-separated tokens or a quoted string.
/// Domain: bracketed dotted quad or a dotted hostname with a 2+ letter TLD.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

/// Nine digits, starting with 6, 7 or 9.
const PHONE_PATTERN: &str = r"^[679][0-9]{8}$";

#[allow(clippy::expect_used)] // constant pattern, covered by tests
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern should always compile"));

#[allow(clippy::expect_used)] // constant pattern, covered by tests
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern should always compile"));

/// Outcome of validating one field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The value has the expected format
    Valid,
    /// The value has the wrong format
    Invalid,
    /// The value is empty and the field is optional
    Skipped,
}

impl Validity {
    /// Whether the field's helper should be shown
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Invalid)
    }

    const fn from_match(matched: bool) -> Self {
        if matched { Self::Valid } else { Self::Invalid }
    }
}

/// Whether `value` is a well-formed email address
///
/// The value is lower-cased before matching. The empty string is invalid.
///
/// ```
/// use registro_form::validation::is_valid_email;
///
/// assert!(is_valid_email("Ana.Garcia@Example.ES"));
/// assert!(is_valid_email("user@[192.168.0.1]"));
/// assert!(!is_valid_email("invalid_email"));
/// assert!(!is_valid_email(""));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(&value.to_lowercase())
}

/// Whether `value` is a nine-digit phone number starting with 6, 7 or 9
///
/// ```
/// use registro_form::validation::is_valid_phone;
///
/// assert!(is_valid_phone("681522348"));
/// assert!(!is_valid_phone("5012485"));
/// ```
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validate an email value; never skipped
#[must_use]
pub fn check_email(value: &str) -> Validity {
    Validity::from_match(is_valid_email(value))
}

/// Validate a phone value; empty values are skipped since the field is optional
#[must_use]
pub fn check_phone(value: &str) -> Validity {
    if value.is_empty() {
        return Validity::Skipped;
    }
    Validity::from_match(is_valid_phone(value))
}

/// Run the validator of `field`, if it has one
#[must_use]
pub fn check_field(field: Field, value: &str) -> Option<Validity> {
    match field {
        Field::Email => Some(check_email(value)),
        Field::Phone => Some(check_phone(value)),
        Field::Name | Field::Surname | Field::Password | Field::RepeatPassword => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "ana@example.com",
            "ana.garcia@mail.example.es",
            "ANA@EXAMPLE.COM",
            "o'brien+tag@example.io",
            "\"john doe\"@example.org",
            "user@[10.0.0.1]",
            "user@sub-domain.example.travel",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "invalid_email",
            "@example.com",
            "ana@",
            "ana@example",
            "ana@example.c",
            "ana..garcia@example.com",
            ".ana@example.com",
            "ana@@example.com",
            "ana garcia@example.com",
            "ana@exa_mple.com",
            "ana@example.c0m",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_phone_patterns() {
        assert!(is_valid_phone("681522348"));
        assert!(is_valid_phone("712345678"));
        assert!(is_valid_phone("912345678"));

        assert!(!is_valid_phone("5012485"));
        assert!(!is_valid_phone("812345678"));
        assert!(!is_valid_phone("61234567"));
        assert!(!is_valid_phone("6123456789"));
        assert!(!is_valid_phone("6123 4567"));
        assert!(!is_valid_phone("+34612345678"));
    }

    #[test]
    fn test_empty_phone_is_skipped_but_empty_email_is_not() {
        assert_eq!(check_phone(""), Validity::Skipped);
        assert!(!check_phone("").is_error());
        assert_eq!(check_email(""), Validity::Invalid);
        assert!(check_email("").is_error());
    }

    #[test]
    fn test_check_field_dispatch() {
        assert_eq!(check_field(Field::Phone, "123"), Some(Validity::Invalid));
        assert_eq!(check_field(Field::Email, "a@b.co"), Some(Validity::Valid));
        assert_eq!(check_field(Field::Name, ""), None);
        assert_eq!(check_field(Field::Password, "x"), None);
    }
}
