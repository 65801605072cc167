//! Member registration form validation
//!
//! Only field-level checks live here. Submitting a registration is handled
//! elsewhere.

use crate::core::error::{FieldValidationError, SocietyError, ValidationError};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Flat number is required"))]
    pub flat_number: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validate every field, collecting all failures.
    ///
    /// Errors are ordered by field name, then by declaration order within a field.
    pub fn check(&self) -> Result<(), SocietyError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        Err(ValidationError::FieldErrors(fields).into())
    }
}
