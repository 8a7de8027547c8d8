//! Explicit request validation for the contact endpoint.
//!
//! The handler hands the raw JSON body to [`parse_contact`], which either
//! produces a [`ContactSubmissionCreate`] or a [`ValidationErrors`] listing
//! every failing field at once. Validation never partially succeeds: a
//! payload with any recorded error creates nothing.
//!
//! String fields are trimmed before checks and stored trimmed. The email
//! check is syntax-only (single `@`, non-empty local part, dotted domain
//! with non-empty labels); deliverability is out of scope.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::ContactSubmissionCreate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

/// Validates a contact payload and builds the creation input.
///
/// Required: `name`, `email`, `message` (strings, non-empty after trim).
/// Optional: `company` (string or null). `email` must additionally pass
/// [`is_valid_email`]. Unknown fields are ignored.
pub fn parse_contact(payload: &Value) -> Result<ContactSubmissionCreate, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(object) = payload.as_object() else {
        errors.push("body", "must be a JSON object");
        return Err(errors);
    };

    let name = required_text(object, "name", &mut errors);
    let email = required_text(object, "email", &mut errors);
    let company = optional_text(object, "company", &mut errors);
    let message = required_text(object, "message", &mut errors);

    if let Some(email) = &email {
        if !is_valid_email(email) {
            errors.push("email", "must be a valid email address");
        }
    }

    match (name, email, company, message) {
        (Some(name), Some(email), Some(company), Some(message)) if errors.is_empty() => {
            Ok(ContactSubmissionCreate {
                name,
                email,
                company,
                message,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "is required");
            None
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.push(field, "must not be empty");
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            errors.push(field, "must be a string");
            None
        }
    }
}

/// Outer `None` marks a recorded type error; `Some(None)` means absent.
fn optional_text(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<Option<String>> {
    match object.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.trim().to_string())),
        Some(_) => {
            errors.push(field, "must be a string");
            None
        }
    }
}

/// Syntax-only address check: one `@`, non-empty local part capped at 64
/// bytes, and a dotted domain capped at 255 whose labels are all non-empty.
/// Whitespace and control characters are rejected anywhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.len() > 255 {
        return false;
    }
    if domain.contains('@') {
        return false;
    }
    if !domain.contains('.') || domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
