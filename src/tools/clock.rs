//! Clock tools
//!
//! Current system time and date, formatted for speech.

use async_trait::async_trait;
use chrono::Local;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamSpec, Tool};

/// Current system time, `%Y-%m-%d %H:%M:%S`
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Get the current system time"
    }

    fn parameters(&self) -> &[ParamSpec] {
        &[]
    }

    async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
        Ok(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Current system date, `%Y-%m-%d`
pub struct CurrentDateTool;

#[async_trait]
impl Tool for CurrentDateTool {
    fn name(&self) -> &str {
        "get_current_date"
    }

    fn description(&self) -> &str {
        "Get the current system date"
    }

    fn parameters(&self) -> &[ParamSpec] {
        &[]
    }

    async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
        Ok(Local::now().format("%Y-%m-%d").to_string())
    }
}
