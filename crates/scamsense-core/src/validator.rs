//! Submission validator
//!
//! Checks each schema field in order and stops at the first failure:
//! absent or `null` fields are missing (or skipped when optional), non-string
//! values have the wrong type, and blank strings are empty. Accepted text is
//! trimmed.

use serde_json::Value;

use crate::rejection::Rejection;
use crate::submission::{
    submission_schema, FieldSpec, FieldType, SubmissionPayload, SubmissionRecord,
    CATEGORY_SPEC, CONTENT_SPEC,
};

/// Outcome of validating a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(SubmissionRecord),
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn into_result(self) -> Result<SubmissionRecord, Rejection> {
        match self {
            ValidationResult::Accepted(record) => Ok(record),
            ValidationResult::Rejected(rejection) => Err(rejection),
        }
    }
}

impl From<Result<SubmissionRecord, Rejection>> for ValidationResult {
    fn from(result: Result<SubmissionRecord, Rejection>) -> Self {
        match result {
            Ok(record) => ValidationResult::Accepted(record),
            Err(rejection) => ValidationResult::Rejected(rejection),
        }
    }
}

/// Validates scam report payloads against [`submission_schema`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn new() -> Self {
        Self
    }

    /// The fields this validator checks
    pub fn schema(&self) -> &'static [FieldSpec] {
        submission_schema()
    }

    /// Validate a decoded payload
    pub fn validate(&self, payload: &SubmissionPayload) -> ValidationResult {
        let result = self.check(payload);
        if let Err(rejection) = &result {
            tracing::debug!(
                kind = %rejection.kind(),
                field = %rejection.field(),
                "Submission rejected"
            );
        }
        result.into()
    }

    // Field initializers run in source order, which is schema order.
    fn check(&self, payload: &SubmissionPayload) -> Result<SubmissionRecord, Rejection> {
        Ok(SubmissionRecord {
            content: required_text(payload, &CONTENT_SPEC)?,
            category: text_value(payload, &CATEGORY_SPEC)?,
        })
    }
}

/// Validate a payload with the default validator
pub fn validate_submission(payload: &SubmissionPayload) -> ValidationResult {
    SubmissionValidator::new().validate(payload)
}

fn required_text(payload: &SubmissionPayload, spec: &FieldSpec) -> Result<String, Rejection> {
    text_value(payload, spec)?.ok_or_else(|| Rejection::missing_field(spec.name))
}

/// Absent and `null` values yield `None`
fn text_value(payload: &SubmissionPayload, spec: &FieldSpec) -> Result<Option<String>, Rejection> {
    let value = match payload.get(spec.name) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    match spec.field_type {
        FieldType::String => {
            let text = value
                .as_str()
                .ok_or_else(|| Rejection::invalid_type(spec.name))?
                .trim();
            if text.is_empty() {
                return Err(Rejection::empty_value(spec.name));
            }
            Ok(Some(text.to_string()))
        }
    }
}
