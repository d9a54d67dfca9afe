//! Contact form rules
//!
//! Fields are checked in a fixed order (name, email, phone, message) and each
//! failing field contributes exactly one error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::email::is_valid_email;
use crate::string::{is_blank, trim_value};

/// The contact form inputs, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values read from the form at submit time, already trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl FormFields {
    /// Build from raw input values, trimming each one
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: trim_value(name).to_string(),
            email: trim_value(email).to_string(),
            phone: trim_value(phone).to_string(),
            message: trim_value(message).to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "camelCase")]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

/// Validate every contact field, in order
///
/// Returns an empty vector when the form can be sent.
pub fn validate_contact(fields: &FormFields) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in Field::ALL {
        let value = fields.get(field);
        if is_blank(value) {
            errors.push(FieldError::Required(field));
        } else if field == Field::Email && !is_valid_email(trim_value(value)) {
            errors.push(FieldError::InvalidEmail);
        }
    }

    errors
}
