use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

lazy_static! {
    /// Regex for category names: ASCII letters and spaces only
    /// - Valid: "Electronics", "Home and Garden"
    /// - Invalid: "Books2", "Toys & Games", "Café"
    pub static ref CATEGORY_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z ]+$").unwrap();
}

/// Rejects empty and whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A single rejected field, reported back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Flattens validator output into one entry per failed rule, ordered by field name.
    /// Field names are reported in the camelCase used on the wire.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = to_camel_case(&field);
                errs.iter().map(move |err| FieldError {
                    field: field.clone(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, err.code)),
                })
            })
            .collect()
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
