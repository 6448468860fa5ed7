//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject missing required credentials before any network activity
//! - Validate value ranges (timeouts > 0, parseable endpoints)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - A missing API key is fatal and bypasses the retry machinery entirely

use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required credential field is absent or empty.
    MissingField(&'static str),

    /// A URL field failed to parse.
    InvalidUrl { field: &'static str, reason: String },

    /// A numeric field is outside its valid range.
    InvalidRange { field: &'static str, reason: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "required field '{}' is missing or empty", field)
            }
            ValidationError::InvalidUrl { field, reason } => {
                write!(f, "field '{}' is not a valid URL: {}", field, reason)
            }
            ValidationError::InvalidRange { field, reason } => {
                write!(f, "field '{}' out of range: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingField("backend.api_key"));
    }
    if config.backend.project_id.trim().is_empty() {
        errors.push(ValidationError::MissingField("backend.project_id"));
    }

    for (field, value) in [
        ("backend.document_endpoint", &config.backend.document_endpoint),
        ("backend.blob_endpoint", &config.backend.blob_endpoint),
        ("prober.probe_url", &config.prober.probe_url),
    ] {
        if let Err(e) = Url::parse(value) {
            errors.push(ValidationError::InvalidUrl {
                field,
                reason: e.to_string(),
            });
        }
    }

    if config.prober.timeout_ms == 0 {
        errors.push(ValidationError::InvalidRange {
            field: "prober.timeout_ms",
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.backend.request_timeout_secs == 0 {
        errors.push(ValidationError::InvalidRange {
            field: "backend.request_timeout_secs",
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.retry.base_delay_ms > config.retry.max_delay_ms {
        errors.push(ValidationError::InvalidRange {
            field: "retry.base_delay_ms",
            reason: "base delay exceeds max delay".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
