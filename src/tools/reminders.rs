//! Reminder stubs
//!
//! Reminder persistence is out of scope; these acknowledge the request so the
//! agent keeps a consistent conversational surface.

use async_trait::async_trait;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamKind, ParamSpec, Tool};

const ADD_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("reminder", ParamKind::String, "What to be reminded about"),
    ParamSpec::required("time", ParamKind::String, "When to be reminded"),
];

/// Acknowledges a new reminder
pub struct AddReminderTool;

#[async_trait]
impl Tool for AddReminderTool {
    fn name(&self) -> &str {
        "add_reminder"
    }

    fn description(&self) -> &str {
        "Set a reminder for a given time"
    }

    fn parameters(&self) -> &[ParamSpec] {
        ADD_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        Ok(format!(
            "Reminder '{}' set for {}.",
            args.required_str("reminder")?,
            args.required_str("time")?
        ))
    }
}

/// Reports the (empty) reminder list
pub struct ListRemindersTool;

#[async_trait]
impl Tool for ListRemindersTool {
    fn name(&self) -> &str {
        "list_reminders"
    }

    fn description(&self) -> &str {
        "List the reminders that are currently set"
    }

    fn parameters(&self) -> &[ParamSpec] {
        &[]
    }

    async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
        Ok("You have no reminders set.".to_string())
    }
}

const DELETE_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "reminder_id",
    ParamKind::String,
    "The id of the reminder to delete",
)];

/// Acknowledges a reminder deletion
pub struct DeleteReminderTool;

#[async_trait]
impl Tool for DeleteReminderTool {
    fn name(&self) -> &str {
        "delete_reminder"
    }

    fn description(&self) -> &str {
        "Delete a reminder by id"
    }

    fn parameters(&self) -> &[ParamSpec] {
        DELETE_PARAMS
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        Ok(format!(
            "Reminder with ID {} deleted.",
            args.required_str("reminder_id")?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> Arguments {
        Arguments::from_map(value.as_object().cloned().unwrap_or_default())
    }

    #[tokio::test]
    async fn test_add_reminder_acknowledges() {
        let text = AddReminderTool
            .execute(args(json!({"reminder": "stand up", "time": "3pm"})))
            .await
            .unwrap();
        assert_eq!(text, "Reminder 'stand up' set for 3pm.");
    }

    #[tokio::test]
    async fn test_list_reminders_is_empty() {
        let text = ListRemindersTool
            .execute(Arguments::default())
            .await
            .unwrap();
        assert_eq!(text, "You have no reminders set.");
    }
}
