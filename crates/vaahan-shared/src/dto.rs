//! Data Transfer Objects - form payloads exchanged with the view layer.

use serde::{Deserialize, Serialize};

/// Amenity vocabulary offered by the spot form.
pub const AMENITY_OPTIONS: [&str; 6] = [
    "Security Guard",
    "CC Camera",
    "EV Charging",
    "Car Wash",
    "Covered Parking",
    "24/7 Access",
];

/// Raw login form input, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages for the login form.
///
/// Both fields `None` means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    /// Shape-only validation: the email must contain an `@` and the password
    /// must be at least 6 characters. Nothing further is checked anywhere.
    pub fn validate(&self) -> LoginErrors {
        let mut errors = LoginErrors::default();

        if self.email.is_empty() || !self.email.contains('@') {
            errors.email = Some("Invalid email".to_string());
        }
        if self.password.chars().count() < 6 {
            errors.password = Some("Password must be at least 6 characters".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let errors = form("admin@parkvaahan.in", "123456").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let errors = form("bad-email", "123456").validate();
        assert_eq!(errors.email.as_deref(), Some("Invalid email"));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let errors = form("", "123456").validate();
        assert!(errors.email.is_some());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let errors = form("admin@parkvaahan.in", "12345").validate();
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_both_fields_can_fail_at_once() {
        let errors = form("nope", "123").validate();
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(!errors.is_empty());
    }
}
