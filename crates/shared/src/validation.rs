//! Common validation utilities.
//!
//! Bounds mirror the store schema: names and emails are varchar(40),
//! phone numbers varchar(12).

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

/// Maximum length of a first or last name.
pub const MAX_NAME_LEN: usize = 40;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: usize = 40;

/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 12;

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 -]*$").unwrap();
}

/// Validates a first or last name: non-blank, at most 40 characters.
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("name_blank");
        err.message = Some("Name must not be blank".into());
        return Err(err);
    }
    if name.chars().count() > MAX_NAME_LEN {
        let mut err = ValidationError::new("name_length");
        err.message = Some("Name must be at most 40 characters".into());
        return Err(err);
    }
    Ok(())
}

/// Validates an email address: well-formed, at most 40 characters.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.chars().count() > MAX_EMAIL_LEN {
        let mut err = ValidationError::new("email_length");
        err.message = Some("Email must be at most 40 characters".into());
        return Err(err);
    }
    if !email.validate_email() {
        let mut err = ValidationError::new("email_format");
        err.message = Some("Invalid email format".into());
        return Err(err);
    }
    Ok(())
}

/// Validates a phone number: optional leading +, then digits with spaces or
/// dashes, at most 12 characters.
pub fn validate_phone_number(number: &str) -> Result<(), ValidationError> {
    if number.is_empty() {
        let mut err = ValidationError::new("phone_blank");
        err.message = Some("Phone number must not be blank".into());
        return Err(err);
    }
    if number.chars().count() > MAX_PHONE_LEN {
        let mut err = ValidationError::new("phone_length");
        err.message = Some("Phone number must be at most 12 characters".into());
        return Err(err);
    }
    if !PHONE_RE.is_match(number) {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number may contain digits, spaces, dashes and a leading +".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests
    #[test]
    fn test_validate_person_name() {
        assert!(validate_person_name("Ada").is_ok());
        assert!(validate_person_name("O'Brien").is_ok());
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name("   ").is_err());
    }

    #[test]
    fn test_validate_person_name_length_boundary() {
        assert!(validate_person_name(&"a".repeat(40)).is_ok());
        assert!(validate_person_name(&"a".repeat(41)).is_err());
    }

    #[test]
    fn test_validate_person_name_error_message() {
        let err = validate_person_name("").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Name must not be blank");
    }

    // Email tests
    #[test]
    fn test_validate_email_address() {
        assert!(validate_email_address("a@b.com").is_ok());
        assert!(validate_email_address("first.last@example.org").is_ok());
        assert!(validate_email_address("not-an-email").is_err());
        assert!(validate_email_address("").is_err());
    }

    #[test]
    fn test_validate_email_address_length_boundary() {
        // 40 characters total still fits the column
        let local = "a".repeat(34);
        assert!(validate_email_address(&format!("{local}@b.com")).is_ok());
        let local = "a".repeat(35);
        assert!(validate_email_address(&format!("{local}@b.com")).is_err());
    }

    #[test]
    fn test_validate_email_address_error_message() {
        let err = validate_email_address("nope").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Invalid email format");
    }

    // Phone tests
    #[test]
    fn test_validate_phone_number() {
        assert!(validate_phone_number("+1").is_ok());
        assert!(validate_phone_number("073-111-2233").is_ok());
        assert!(validate_phone_number("12 34 56").is_ok());
        assert!(validate_phone_number("").is_err());
        assert!(validate_phone_number("abc").is_err());
        assert!(validate_phone_number("+").is_err());
    }

    #[test]
    fn test_validate_phone_number_length_boundary() {
        assert!(validate_phone_number("123456789012").is_ok());
        assert!(validate_phone_number("1234567890123").is_err());
    }

    #[test]
    fn test_validate_phone_number_error_message() {
        let err = validate_phone_number("1234567890123").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Phone number must be at most 12 characters"
        );
    }
}
