//! Utility tools: echo, sum, and the notification/translation stubs.

use async_trait::async_trait;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamKind, ParamSpec, Tool};

const ECHO_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "message",
    ParamKind::String,
    "The message to echo back",
)];

/// Echoes the provided message back to the agent
pub struct EchoTool;

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo_message"
    }

    fn description(&self) -> &str {
        "Echo back the provided message"
    }

    fn parameters(&self) -> &[ParamSpec] {
        ECHO_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        Ok(args.required_str("message")?.to_string())
    }
}

const SUM_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "numbers",
    ParamKind::NumberList,
    "Comma-separated list of numbers to add, e.g. \"1, 2, 3.5\"",
)];

/// Sums a comma-separated list of numbers
pub struct CalculateSumTool;

#[async_trait]
impl Tool for CalculateSumTool {
    fn name(&self) -> &str {
        "calculate_sum"
    }

    fn description(&self) -> &str {
        "Calculate the sum of a list of numbers provided as a comma-separated string"
    }

    fn parameters(&self) -> &[ParamSpec] {
        SUM_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let numbers = args.required_numbers("numbers")?;
        let total: f64 = numbers.iter().sum();
        Ok(format!("The sum is {}.", total))
    }
}

const NOTIFY_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "notification",
    ParamKind::String,
    "The notification text to deliver",
)];

/// Notification stub; acknowledges without delivering anywhere
pub struct NotifyUserTool;

#[async_trait]
impl Tool for NotifyUserTool {
    fn name(&self) -> &str {
        "notify_user"
    }

    fn description(&self) -> &str {
        "Notify the user with a message"
    }

    fn parameters(&self) -> &[ParamSpec] {
        NOTIFY_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        Ok(format!(
            "User notified with message: {}",
            args.required_str("notification")?
        ))
    }
}

const TRANSLATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("text", ParamKind::String, "The text to translate"),
    ParamSpec::required(
        "target_language",
        ParamKind::String,
        "The language to translate into",
    ),
];

/// Translation stub; acknowledges without translating
pub struct TranslateTextTool;

#[async_trait]
impl Tool for TranslateTextTool {
    fn name(&self) -> &str {
        "translate_text"
    }

    fn description(&self) -> &str {
        "Translate text into a target language"
    }

    fn parameters(&self) -> &[ParamSpec] {
        TRANSLATE_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        Ok(format!(
            "Translated '{}' to {}.",
            args.required_str("text")?,
            args.required_str("target_language")?
        ))
    }
}
