use serde::Serialize;

use crate::copy::ContactCopy;
use crate::i18n::Locale;

pub const MIN_MESSAGE_CHARS: usize = 10;

/// Body of `POST /api/contact`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub message: String,
    pub locale: Locale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmail,
    ShortMessage,
}

impl FieldError {
    pub fn message(self, copy: &ContactCopy) -> &'static str {
        match self {
            FieldError::InvalidEmail => copy.invalid_email,
            FieldError::ShortMessage => copy.short_message,
        }
    }
}

/// local@domain.tld with no whitespace and non-empty labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate(
    name: &str,
    email: &str,
    message: &str,
    locale: Locale,
) -> Result<ContactSubmission, Vec<FieldError>> {
    let email = email.trim();
    let message = message.trim();

    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.push(FieldError::ShortMessage);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let name = name.trim();
    Ok(ContactSubmission {
        name: (!name.is_empty()).then(|| name.to_string()),
        email: email.to_string(),
        message: message.to_string(),
        locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        let submission = validate(" Ana ", " ana@example.com ", "We need a new site.", Locale::Es).unwrap();
        assert_eq!(submission.name.as_deref(), Some("Ana"));
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.locale, Locale::Es);
    }

    #[test]
    fn blank_name_is_omitted() {
        let submission = validate("  ", "ana@example.com", "We need a new site.", Locale::En).unwrap();
        assert_eq!(submission.name, None);
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["locale"], "en");
    }

    #[test]
    fn message_needs_ten_characters() {
        assert_eq!(
            validate("", "ana@example.com", "too short", Locale::En),
            Err(vec![FieldError::ShortMessage])
        );
        // trimmed before counting
        assert_eq!(
            validate("", "ana@example.com", "   123456789   ", Locale::En),
            Err(vec![FieldError::ShortMessage])
        );
        // characters, not bytes
        assert!(validate("", "ana@example.com", "ñññññññññó", Locale::Es).is_ok());
    }

    #[test]
    fn reports_every_field_error() {
        assert_eq!(
            validate("", "", "", Locale::En),
            Err(vec![FieldError::InvalidEmail, FieldError::ShortMessage])
        );
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example..com"));
        assert!(!is_valid_email("ana @example.com"));
    }
}
