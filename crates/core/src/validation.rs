//! Input validators shared by every write endpoint.
//!
//! Each validator returns `Ok(())` or a [`CoreError::Validation`] carrying a
//! human-readable message naming the offending field.

use crate::error::CoreError;
use crate::types::{Date, DbId};

/// Maximum length of short text fields (names, titles, positions).
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of free-form text fields (descriptions, bios).
pub const MAX_TEXT_LEN: usize = 5000;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Validate a required short text field (non-blank, <= [`MAX_NAME_LEN`] chars).
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a required free-form text field (non-blank, <= [`MAX_TEXT_LEN`] chars).
pub fn validate_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_optional_text(field, Some(value))
}

/// Validate an optional free-form text field. `None` is always accepted.
pub fn validate_optional_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > MAX_TEXT_LEN => Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional short text field. Blank strings are rejected; use
/// `null` to clear the field instead.
pub fn validate_optional_name(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_name(field, v),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// URLs and emails
// ---------------------------------------------------------------------------

/// Validate an absolute http(s) URL.
pub fn validate_url(field: &str, value: &str) -> Result<(), CoreError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| {
            CoreError::Validation(format!("{field} must start with http:// or https://"))
        })?;
    if rest.is_empty() || rest.starts_with('/') || rest.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!("{field} is not a valid URL")));
    }
    Ok(())
}

/// Validate an optional email address: exactly one `@` with non-empty sides.
pub fn validate_optional_email(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(email) = value else {
        return Ok(());
    };
    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "{field} is not a valid email address"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// References and dates
// ---------------------------------------------------------------------------

/// Validate an optional foreign-key reference.
///
/// Absence is expressed with `None`; zero or negative ids are rejected rather
/// than treated as "no reference".
pub fn validate_reference(field: &str, id: Option<DbId>) -> Result<(), CoreError> {
    match id {
        Some(id) if id <= 0 => Err(CoreError::Validation(format!(
            "{field} must be a positive id (use null for no reference)"
        ))),
        _ => Ok(()),
    }
}

/// Validate that `end` is not before `start` when both are present.
pub fn validate_date_range(
    start_field: &str,
    start: Option<Date>,
    end_field: &str,
    end: Option<Date>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "{end_field} must not be before {start_field}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_rejects_blank() {
        assert_matches!(validate_name("name", "   "), Err(CoreError::Validation(_)));
        assert!(validate_name("name", "Chess").is_ok());
    }

    #[test]
    fn name_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_name("company_name", &long).unwrap_err();
        assert!(err.to_string().contains("company_name"));

        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(validate_name("company_name", &exact).is_ok());
    }

    #[test]
    fn optional_text_accepts_none() {
        assert!(validate_optional_text("bio", None).is_ok());
        let long = "y".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_optional_text("bio", Some(&long)).is_err());
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_text("description", "").is_err());
        assert!(validate_text("description", "Plays weekly").is_ok());
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(validate_url("url", "https://github.com/someone").is_ok());
        assert!(validate_url("url", "http://localhost:8080").is_ok());
        assert!(validate_url("url", "github.com").is_err());
        assert!(validate_url("url", "https://").is_err());
        assert!(validate_url("url", "https:///path").is_err());
        assert!(validate_url("url", "https://exa mple.com").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_optional_email("email", None).is_ok());
        assert!(validate_optional_email("email", Some("me@example.com")).is_ok());
        assert!(validate_optional_email("email", Some("me.example.com")).is_err());
        assert!(validate_optional_email("email", Some("@example.com")).is_err());
        assert!(validate_optional_email("email", Some("a@b@c")).is_err());
    }

    #[test]
    fn reference_zero_is_not_absent() {
        assert!(validate_reference("logo_image_id", None).is_ok());
        assert!(validate_reference("logo_image_id", Some(7)).is_ok());
        assert_matches!(
            validate_reference("logo_image_id", Some(0)),
            Err(CoreError::Validation(msg)) if msg.contains("logo_image_id")
        );
        assert!(validate_reference("logo_image_id", Some(-3)).is_err());
    }

    #[test]
    fn date_range_ordering() {
        let jan = date(2023, 1, 1);
        let jun = date(2023, 6, 1);
        assert!(validate_date_range("start_date", Some(jan), "end_date", Some(jun)).is_ok());
        assert!(validate_date_range("start_date", Some(jan), "end_date", Some(jan)).is_ok());
        assert!(validate_date_range("start_date", Some(jun), "end_date", None).is_ok());
        let err = validate_date_range("start_date", Some(jun), "end_date", Some(jan)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: end_date must not be before start_date"
        );
    }
}
