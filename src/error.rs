//! Toolkit error types
//!
//! Every failure a tool or the adapter can produce maps onto one of the
//! variants here; the adapter converts them into speakable results at its
//! boundary, so none of these ever reach the agent runtime as a fault.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised during a single tool invocation
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool with the requested name is registered
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The supplied arguments do not satisfy the tool's parameter schema
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The tool's external dependency failed (non-200 response, SMTP
    /// rejection, scrape miss, ...)
    #[error("dependency failure: {0}")]
    Dependency(String),

    /// The invocation exceeded the configured per-call timeout
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// A credential or setting the tool needs was not configured at startup
    #[error("missing configuration: {0}")]
    Configuration(String),
}

impl ToolError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ToolError::InvalidArgument(msg.into())
    }

    /// Create a dependency error
    pub fn dependency(msg: impl Into<String>) -> Self {
        ToolError::Dependency(msg.into())
    }

    /// The wire-level kind for this error, carried on `InvocationResult`
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::UnknownTool(_) => ErrorKind::UnknownTool,
            ToolError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ToolError::Dependency(_) => ErrorKind::Dependency,
            ToolError::Timeout(_) => ErrorKind::Timeout,
            ToolError::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        ToolError::Dependency(err.to_string())
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::Dependency(err.to_string())
    }
}

/// Failure classification reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTool,
    InvalidArgument,
    Dependency,
    Timeout,
    Configuration,
}

/// Errors raised while building the tool registry at startup
///
/// Unlike [`ToolError`], these are fatal: a process that registers two tools
/// under the same name is misconfigured and should not start.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A tool with this name is already registered
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolError::UnknownTool("get_stock_price".into());
        assert_eq!(err.to_string(), "unknown tool: get_stock_price");

        let err = ToolError::Configuration("MAIL_SENDER".into());
        assert_eq!(err.to_string(), "missing configuration: MAIL_SENDER");
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            ToolError::invalid_argument("numbers").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ToolError::Timeout(Duration::from_secs(15)).kind(),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no browser");
        let tool_err: ToolError = io_err.into();
        assert!(matches!(tool_err, ToolError::Dependency(_)));
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::DuplicateName("get_weather".into());
        assert_eq!(err.to_string(), "duplicate tool name: get_weather");
    }
}
