//! Command-line interface
//!
//! - `serve` starts the HTTP service
//! - `check` validates a submission stored in a JSON or YAML file

pub mod output;

pub use output::{CheckOutput, OutputFormat};

use clap::{Args, Parser, Subcommand};
use scamsense_core::{SubmissionPayload, SubmissionValidator};
use std::path::{Path, PathBuf};

use crate::config::{ConfigOverrides, LogFormat, ServerConfig};
use crate::error::{Result, ServerError};

/// ScamSense scam report service
#[derive(Parser, Debug)]
#[command(name = "scamsense")]
#[command(about = "ScamSense - scam report validation service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Validate a submission file without starting the server
    Check {
        /// Path to the submission (JSON, or YAML by .yaml/.yml extension)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Flags for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SCAMSENSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long, env = "SCAMSENSE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Maximum request body size in bytes
    #[arg(long, env = "SCAMSENSE_MAX_BODY_SIZE")]
    pub max_body_size: Option<usize>,

    /// Log output format
    #[arg(long, value_enum, env = "SCAMSENSE_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Do not send CORS headers
    #[arg(long)]
    pub no_cors: bool,
}

impl ServeArgs {
    /// Collect the flags into config overrides
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            max_body_size: self.max_body_size,
            log_format: self.log_format,
            disable_cors: self.no_cors,
        }
    }

    /// Resolve the effective server configuration
    pub fn load_config(&self) -> Result<ServerConfig> {
        ServerConfig::load(self.config.as_deref(), self.overrides())
    }
}

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Submission accepted
    Success = 0,
    /// Submission rejected by the validator
    Rejected = 1,
    /// Invalid input, unreadable or undecodable file
    InvalidInput = 3,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Execute the check command
pub fn execute_check(file: &Path, format: OutputFormat) -> Result<ExitCode> {
    let payload = read_payload(file)?;
    let result = SubmissionValidator::new().validate(&payload);

    let output = CheckOutput::from_result(&result);
    output.render(format)?;

    Ok(if output.accepted {
        ExitCode::Success
    } else {
        ExitCode::Rejected
    })
}

/// Read a submission payload from disk
pub fn read_payload(file: &Path) -> Result<SubmissionPayload> {
    let content = std::fs::read_to_string(file).map_err(|e| {
        ServerError::FileError(format!(
            "Failed to read submission file '{}': {}",
            file.display(),
            e
        ))
    })?;
    parse_payload(file, &content)
}

fn parse_payload(file: &Path, content: &str) -> Result<SubmissionPayload> {
    let is_yaml = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "yaml" | "yml"))
        .unwrap_or(false);

    let value: serde_json::Value = if is_yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };

    match value {
        serde_json::Value::Object(payload) => Ok(payload),
        _ => Err(ServerError::invalid_input(
            "submission must be a mapping of field names to values",
        )),
    }
}

/// Map a CLI error to its exit code, printing it to stderr
pub fn exit_code_for_error(err: &ServerError) -> ExitCode {
    eprintln!("Error: {}", err);
    if err.is_user_error() {
        ExitCode::InvalidInput
    } else {
        ExitCode::InternalError
    }
}
