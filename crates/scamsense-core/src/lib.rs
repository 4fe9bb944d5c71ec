//! ScamSense submission validation
//!
//! Validates scam reports submitted to the `/scamsense` endpoint before any
//! further processing takes place.
//!
//! ## Design Principles
//!
//! - **Pure**: validation is a function of the payload alone, with no I/O
//! - **Deterministic**: fields are checked in schema order, so the same
//!   payload always yields the same rejection
//! - **Normalizing**: accepted text fields are trimmed, and validating an
//!   accepted record again returns it unchanged
//!
//! ## Example
//!
//! ```rust
//! use scamsense_core::{SubmissionValidator, ValidationResult};
//!
//! let payload = serde_json::json!({"content": "  this looks like a scam  "});
//! let payload = payload.as_object().unwrap();
//!
//! match SubmissionValidator::new().validate(payload) {
//!     ValidationResult::Accepted(record) => {
//!         assert_eq!(record.content, "this looks like a scam");
//!     }
//!     ValidationResult::Rejected(rejection) => panic!("unexpected: {}", rejection),
//! }
//! ```

pub mod rejection;
pub mod submission;
pub mod validator;

pub use rejection::{Rejection, RejectionKind};
pub use submission::{
    submission_schema, FieldSpec, FieldType, SubmissionPayload, SubmissionRecord,
    CATEGORY_FIELD, CATEGORY_SPEC, CONTENT_FIELD, CONTENT_SPEC,
};
pub use validator::{validate_submission, SubmissionValidator, ValidationResult};
