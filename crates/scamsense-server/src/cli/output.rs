//! Output formatting for the `check` command

use clap::ValueEnum;
use colored::Colorize;
use scamsense_core::{SubmissionRecord, ValidationResult};
use serde::Serialize;

use crate::error::{Result, ServerError};
use crate::handler::ErrorInfo;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Text,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Rendered outcome of a submission check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<SubmissionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<ErrorInfo>,
    pub summary: String,
}

impl CheckOutput {
    pub fn from_result(result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted(record) => Self {
                accepted: true,
                record: Some(record.clone()),
                rejection: None,
                summary: "Submission is valid".to_string(),
            },
            ValidationResult::Rejected(rejection) => Self {
                accepted: false,
                record: None,
                rejection: Some(ErrorInfo::from(rejection)),
                summary: format!("Submission rejected: {}", rejection),
            },
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self)
                    .map_err(|e| ServerError::SerializationError(e.to_string()))?;
                println!("{}", json);
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(self)
                    .map_err(|e| ServerError::SerializationError(e.to_string()))?;
                print!("{}", yaml);
            }
            OutputFormat::Text => println!("{}", self.render_text()),
        }
        Ok(())
    }

    fn render_text(&self) -> String {
        let mut lines = Vec::new();

        if self.accepted {
            lines.push(format!("{} {}", "✓".green().bold(), self.summary.green()));
        } else {
            lines.push(format!("{} {}", "✗".red().bold(), self.summary.red()));
        }

        if let Some(record) = &self.record {
            lines.push(format!("  {} {}", "content:".dimmed(), record.content));
            if let Some(category) = &record.category {
                lines.push(format!("  {} {}", "category:".dimmed(), category));
            }
        }

        if let Some(rejection) = &self.rejection {
            lines.push(format!("  {} {}", "kind:".dimmed(), rejection.kind.yellow()));
            if let Some(field) = &rejection.field {
                lines.push(format!("  {} {}", "field:".dimmed(), field));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamsense_core::Rejection;

    #[test]
    fn test_output_from_accepted() {
        let result = ValidationResult::Accepted(SubmissionRecord {
            content: "hello".to_string(),
            category: Some("sms".to_string()),
        });
        let output = CheckOutput::from_result(&result);
        assert!(output.accepted);
        assert!(output.rejection.is_none());

        colored::control::set_override(false);
        let text = output.render_text();
        assert!(text.contains("content: hello"));
        assert!(text.contains("category: sms"));
    }

    #[test]
    fn test_output_from_rejected() {
        let result = ValidationResult::Rejected(Rejection::missing_field("content"));
        let output = CheckOutput::from_result(&result);
        assert!(!output.accepted);

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["rejection"]["kind"], "missing_field");
        assert_eq!(json["rejection"]["field"], "content");
        assert!(json.get("record").is_none());
    }
}
