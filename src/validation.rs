//! Form validation for school records.
//!
//! Pure mapping from an untrusted form capture to either a normalized
//! `NewSchool` or a field-keyed error map. Fields are trimmed before any
//! rule runs; the first failing rule wins per field. File constraints for
//! the optional image are not checked here, they belong to the storage
//! adapter.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{NewSchool, RawSchoolForm};

/// One human-readable message per failing field.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Optional leading `+`, then 10-20 digits/spaces/hyphens/parentheses.
/// Strings like "123" are too short to be a phone number.
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9()\s-]{10,20}$").expect("contact regex"));

/// local@domain.tld shape; rejects missing local part, domain, or TLD.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Validate a raw form capture into a normalized school record.
pub fn validate_school(form: &RawSchoolForm) -> Result<NewSchool, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = trimmed(&form.name);
    let address = trimmed(&form.address);
    let city = trimmed(&form.city);
    let state = trimmed(&form.state);
    let contact = trimmed(&form.contact);
    let email_id = trimmed(&form.email_id);

    check_length(&mut errors, "name", &name, 2, 255, "Name");
    check_length(&mut errors, "address", &address, 5, 500, "Address");
    check_length(&mut errors, "city", &city, 2, 100, "City");
    check_length(&mut errors, "state", &state, 2, 100, "State");

    if !CONTACT_RE.is_match(&contact) {
        errors.insert("contact", "Contact must be a valid phone number".to_string());
    }

    if !EMAIL_RE.is_match(&email_id) {
        errors.insert("email_id", "Email must be a valid email address".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewSchool {
        name,
        address,
        city,
        state,
        contact,
        email_id,
        image: form
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    })
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

fn check_length(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.insert(
            field,
            format!("{} must be between {} and {} characters", label, min, max),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RawSchoolForm {
        RawSchoolForm {
            name: Some("Central High School".to_string()),
            address: Some("42 Elm Street".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("Illinois".to_string()),
            contact: Some("+1 555-123-4567".to_string()),
            email_id: Some("office@centralhigh.edu".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_valid_form_normalizes() {
        let school = validate_school(&valid_form()).expect("valid form");
        assert_eq!(school.name, "Central High School");
        assert_eq!(school.image, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = valid_form();
        form.name = Some("  Central High School  ".to_string());
        form.city = Some("  Springfield".to_string());

        let school = validate_school(&form).expect("valid form");
        assert_eq!(school.name, "Central High School");
        assert_eq!(school.city, "Springfield");
    }

    #[test]
    fn test_single_failing_field_yields_single_error() {
        let mut form = valid_form();
        form.name = Some("X".to_string());

        let errors = validate_school(&form).expect_err("invalid name");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must be between 2 and 255 characters")
        );
    }

    #[test]
    fn test_name_boundaries() {
        let mut form = valid_form();

        form.name = Some("A".to_string());
        assert!(validate_school(&form).is_err());

        form.name = Some("AB".to_string());
        assert!(validate_school(&form).is_ok());

        form.name = Some("N".repeat(255));
        assert!(validate_school(&form).is_ok());

        form.name = Some("N".repeat(256));
        assert!(validate_school(&form).is_err());
    }

    #[test]
    fn test_address_boundaries() {
        let mut form = valid_form();

        form.address = Some("1234".to_string());
        assert!(validate_school(&form).is_err());

        form.address = Some("12345".to_string());
        assert!(validate_school(&form).is_ok());

        form.address = Some("A".repeat(500));
        assert!(validate_school(&form).is_ok());

        form.address = Some("A".repeat(501));
        assert!(validate_school(&form).is_err());
    }

    #[test]
    fn test_city_and_state_boundaries() {
        let mut form = valid_form();

        form.city = Some("A".to_string());
        assert!(validate_school(&form).is_err());
        form.city = Some("Ab".to_string());
        assert!(validate_school(&form).is_ok());
        form.city = Some("C".repeat(100));
        assert!(validate_school(&form).is_ok());
        form.city = Some("C".repeat(101));
        assert!(validate_school(&form).is_err());

        form = valid_form();
        form.state = Some("S".repeat(101));
        assert!(validate_school(&form).is_err());
        form.state = Some("S".repeat(100));
        assert!(validate_school(&form).is_ok());
    }

    #[test]
    fn test_contact_pattern() {
        let mut form = valid_form();

        form.contact = Some("123".to_string());
        let errors = validate_school(&form).expect_err("too short");
        assert_eq!(
            errors.get("contact").map(String::as_str),
            Some("Contact must be a valid phone number")
        );

        form.contact = Some("(555) 123-4567".to_string());
        assert!(validate_school(&form).is_ok());

        form.contact = Some("+919876543210".to_string());
        assert!(validate_school(&form).is_ok());

        form.contact = Some("call me maybe".to_string());
        assert!(validate_school(&form).is_err());
    }

    #[test]
    fn test_email_pattern() {
        let mut form = valid_form();

        form.email_id = Some("@nodomain.com".to_string());
        assert!(validate_school(&form).is_err());

        form.email_id = Some("user@".to_string());
        assert!(validate_school(&form).is_err());

        form.email_id = Some("user@host".to_string());
        assert!(validate_school(&form).is_err());

        form.email_id = Some("user@host.org".to_string());
        assert!(validate_school(&form).is_ok());
    }

    #[test]
    fn test_missing_required_fields_report_every_field() {
        let errors = validate_school(&RawSchoolForm::default()).expect_err("empty form");
        assert_eq!(errors.len(), 6);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("address"));
        assert!(errors.contains_key("city"));
        assert!(errors.contains_key("state"));
        assert!(errors.contains_key("contact"));
        assert!(errors.contains_key("email_id"));
    }

    #[test]
    fn test_image_path_passes_through() {
        let mut form = valid_form();
        form.image = Some("/schoolImages/3f2b.png".to_string());

        let school = validate_school(&form).expect("valid form");
        assert_eq!(school.image.as_deref(), Some("/schoolImages/3f2b.png"));
    }

    #[test]
    fn test_blank_image_treated_as_absent() {
        let mut form = valid_form();
        form.image = Some("   ".to_string());

        let school = validate_school(&form).expect("valid form");
        assert_eq!(school.image, None);
    }
}
