use std::fmt;

use crate::models::FieldErrors;

#[derive(Debug)]
pub enum AppError {
    /// Form input rejected; carries one message list per field
    Validation(FieldErrors),
    NotFound(String),
    Storage(String),
    Hashing(String),
    Template(String),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.summary()),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Hashing(msg) => write!(f, "Hashing error: {}", msg),
            AppError::Template(msg) => write!(f, "Template error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        // tera guarda a causa real no source()
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            msg.push_str(&format!(": {}", cause));
            source = std::error::Error::source(cause);
        }
        AppError::Template(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound("User #1".into()).to_string(), "Not found: User #1");
    }

    #[test]
    fn test_display_includes_field_messages() {
        let mut errors = FieldErrors::default();
        errors.add("name", "The name field is required.");
        let msg = AppError::Validation(errors).to_string();
        assert!(msg.contains("The name field is required."));
    }
}
