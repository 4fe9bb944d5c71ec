//! Submission data model and field schema

use serde::Serialize;

/// Decoded request body: field name to JSON value
pub type SubmissionPayload = serde_json::Map<String, serde_json::Value>;

/// Name of the reported message text field
pub const CONTENT_FIELD: &str = "content";

/// Name of the optional channel label field
pub const CATEGORY_FIELD: &str = "category";

/// A validated, normalized scam report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    /// The suspicious message, trimmed
    pub content: String,
    /// Where the message was received (e.g. "email", "sms"), trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SubmissionRecord {
    /// Convert the record back into a payload, e.g. for re-validation
    pub fn to_payload(&self) -> SubmissionPayload {
        let mut payload = SubmissionPayload::new();
        payload.insert(
            CONTENT_FIELD.to_string(),
            serde_json::Value::String(self.content.clone()),
        );
        if let Some(category) = &self.category {
            payload.insert(
                CATEGORY_FIELD.to_string(),
                serde_json::Value::String(category.clone()),
            );
        }
        payload
    }
}

/// Expected JSON type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
}

/// Descriptor for one field of the submission schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub description: &'static str,
}

/// The reported message text
pub const CONTENT_SPEC: FieldSpec = FieldSpec {
    name: CONTENT_FIELD,
    field_type: FieldType::String,
    required: true,
    description: "Text of the suspicious email or message",
};

/// The channel label
pub const CATEGORY_SPEC: FieldSpec = FieldSpec {
    name: CATEGORY_FIELD,
    field_type: FieldType::String,
    required: false,
    description: "Channel the message arrived through, e.g. email or sms",
};

static SUBMISSION_SCHEMA: [FieldSpec; 2] = [CONTENT_SPEC, CATEGORY_SPEC];

/// Fields accepted by the validator, in the order they are checked
pub fn submission_schema() -> &'static [FieldSpec] {
    &SUBMISSION_SCHEMA
}
