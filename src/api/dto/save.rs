//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::api::dto::response::ApiResponse;
use crate::error::AppError;

/// Request to store a URL under an alias.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL (must be a valid absolute URL).
    #[validate(required, url)]
    pub url: Option<String>,

    /// Desired alias. Missing or empty means "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    pub fn new(url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            url: Some(url.into()),
            alias,
        }
    }

    /// Runs the field validators, rendering failures as a bad request.
    ///
    /// Every entry point that stores a URL goes through this before
    /// reaching the service.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| AppError::bad_request(validation_message(&errors)))
    }
}

/// Successful save: `{"status":"ok","alias":"..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn new(alias: String) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias,
        }
    }
}

/// Renders validation failures as one human-readable line.
///
/// Every failed constraint becomes `field <Name> ...`; constraints are
/// ordered by field name and joined with `, `.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, field_errors) in fields {
        let name: &str = field.as_ref();
        let name = capitalize(name);

        for error in field_errors {
            let message = match error.code.as_ref() {
                "required" => format!("field {name} is a required field"),
                "url" => format!("field {name} must be a valid URL"),
                _ => format!("field {name} is not valid"),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
