//! ScamSense Server
//!
//! HTTP service behind the ScamSense web client. Scam reports posted to
//! `/scamsense` are validated with [`scamsense_core`] and echoed back in
//! normalized form; invalid reports are rejected with a machine-readable
//! reason.
//!
//! ## Architecture
//!
//! 1. **Handler** (`handler/`): axum router, route handlers, middleware.
//!    The router is built explicitly at startup and handed to the listener.
//!
//! 2. **Config** (`config`): defaults, TOML file, CLI and environment overrides.
//!
//! 3. **Telemetry** (`telemetry/`): structured logging and Prometheus metrics.
//!
//! 4. **CLI** (`cli/`): `serve` and offline `check` commands.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Start the server on the default port (3000)
//! scamsense serve
//!
//! # Start with a config file and a port override
//! PORT=8080 scamsense serve --config scamsense.toml
//!
//! # Validate a stored submission
//! scamsense check --file report.json --format json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod server;
pub mod telemetry;

pub use config::{ConfigOverrides, LogFormat, ServerConfig};
pub use error::ServerError;
pub use handler::{create_router, ApiError, ApiResponse, AppState, ErrorInfo};
pub use server::serve;
