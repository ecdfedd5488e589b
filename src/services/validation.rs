// ==================== FORM VALIDATION ====================
// Regras do formulário de usuário: name required|min:3, email required|email, bod required|date

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FieldErrors, UserForm, ValidUser};

pub const NAME_MIN_LENGTH: usize = 3;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"#,
    )
    .expect("valid email regex")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Accepts `YYYY-MM-DD`, or a `YYYY-MM-DDTHH:MM` value from a datetime picker
pub fn parse_bod(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|dt| dt.date())
        })
}

impl UserForm {
    /// Rules shared by create and update
    pub fn validate(&self) -> Result<ValidUser, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "The name field is required.");
        } else if name.chars().count() < NAME_MIN_LENGTH {
            errors.add(
                "name",
                format!("The name field must be at least {} characters.", NAME_MIN_LENGTH),
            );
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "The email field is required.");
        } else if !is_valid_email(email) {
            errors.add("email", "The email field must be a valid email address.");
        }

        let bod_raw = self.bod.trim();
        let bod = if bod_raw.is_empty() {
            errors.add("bod", "The bod field is required.");
            None
        } else {
            let parsed = parse_bod(bod_raw);
            if parsed.is_none() {
                errors.add("bod", "The bod field must be a valid date.");
            }
            parsed
        };

        match bod {
            Some(bod) if errors.is_empty() => Ok(ValidUser {
                name: name.to_string(),
                email: email.to_string(),
                bod,
            }),
            _ => Err(errors),
        }
    }

    /// Update also needs the target id
    pub fn validate_update(&self) -> Result<(u64, ValidUser), FieldErrors> {
        let validated = self.validate();
        match (self.user_id, validated) {
            (Some(id), Ok(user)) => Ok((id, user)),
            (user_id, validated) => {
                let mut errors = validated.err().unwrap_or_default();
                if user_id.is_none() {
                    errors.add("userId", "The user id field is required.");
                }
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, bod: &str) -> UserForm {
        UserForm {
            name: name.into(),
            email: email.into(),
            bod: bod.into(),
            user_id: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let user = form("Alice", "a@b.com", "2000-01-01").validate().unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.bod, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_short_name_rejected() {
        let errors = form("Al", "a@b.com", "2000-01-01").validate().unwrap_err();
        assert_eq!(errors.get("name"), ["The name field must be at least 3 characters."]);
        assert!(!errors.has("email"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(form("Zoë", "a@b.com", "2000-01-01").validate().is_ok());
        assert!(form("  Al  ", "a@b.com", "2000-01-01").validate().is_err());
    }

    #[test]
    fn test_all_fields_required() {
        let errors = UserForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), ["The name field is required."]);
        assert_eq!(errors.get("email"), ["The email field is required."]);
        assert_eq!(errors.get("bod"), ["The bod field is required."]);
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("first.last+tag@example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a b@c.com"));

        let errors = form("Alice", "alice@", "2000-01-01").validate().unwrap_err();
        assert_eq!(errors.get("email"), ["The email field must be a valid email address."]);
    }

    #[test]
    fn test_bod_formats() {
        assert_eq!(parse_bod("1999-12-31"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_bod("1999-12-31T08:30"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_bod("31/12/1999"), None);

        let errors = form("Alice", "a@b.com", "2001-02-30").validate().unwrap_err();
        assert_eq!(errors.get("bod"), ["The bod field must be a valid date."]);
    }

    #[test]
    fn test_update_requires_user_id() {
        let errors = form("Alice", "a@b.com", "2000-01-01").validate_update().unwrap_err();
        assert!(errors.has("userId"));

        let mut with_id = form("Al", "a@b.com", "2000-01-01");
        with_id.user_id = Some(4);
        let errors = with_id.validate_update().unwrap_err();
        assert!(errors.has("name"));
        assert!(!errors.has("userId"));

        with_id.name = "Alice".into();
        let (id, user) = with_id.validate_update().unwrap();
        assert_eq!(id, 4);
        assert_eq!(user.email, "a@b.com");
    }
}
