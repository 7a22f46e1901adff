//! Built-in tools
//!
//! One file per concern, each a thin wrapper over a single external
//! dependency:
//! - `weather`, `search`, `joke` - non-blocking HTTP lookups (DIRECT)
//! - `news`, `email`, `video`, `whatsapp` - blocking clients (OFFLOADED)
//! - `clock`, `utility`, `reminders` - local formatting and stubs (DIRECT)

mod clock;
mod email;
mod joke;
mod news;
mod reminders;
mod search;
mod utility;
mod video;
mod weather;
mod whatsapp;

pub use clock::{CurrentDateTool, CurrentTimeTool};
pub use email::EmailTool;
pub use joke::JokeTool;
pub use news::NewsTool;
pub use reminders::{AddReminderTool, DeleteReminderTool, ListRemindersTool};
pub use search::SearchTool;
pub use utility::{CalculateSumTool, EchoTool, NotifyUserTool, TranslateTextTool};
pub use video::{AutoplayStrategy, BrowserSearchStrategy, PlayStrategy, PlayVideoTool};
pub use weather::WeatherTool;
pub use whatsapp::{normalize_phone, WhatsAppTool};

use crate::config::ToolkitConfig;
use crate::error::RegistryError;
use crate::invocation::ToolRegistry;

/// Register the full built-in tool set
///
/// One explicit `register` call per tool; a duplicate name here is a startup
/// bug and propagates as a fatal [`RegistryError`].
pub fn register_default_tools(
    registry: &mut ToolRegistry,
    config: &ToolkitConfig,
) -> Result<(), RegistryError> {
    registry.register(WeatherTool::new())?;
    registry.register(SearchTool::new())?;
    registry.register(JokeTool::new())?;
    registry.register(CurrentTimeTool)?;
    registry.register(CurrentDateTool)?;
    registry.register(EchoTool)?;
    registry.register(CalculateSumTool)?;
    registry.register(AddReminderTool)?;
    registry.register(ListRemindersTool)?;
    registry.register(DeleteReminderTool)?;
    registry.register(NotifyUserTool)?;
    registry.register(TranslateTextTool)?;

    registry.register_blocking(NewsTool::new())?;
    registry.register_blocking(EmailTool::new(config.mail.clone()))?;
    registry.register_blocking(PlayVideoTool::new())?;
    registry.register_blocking(WhatsAppTool::new(config.default_country_code.clone()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::invocation::{InvocationAdapter, InvocationRequest};
    use std::sync::Arc;

    #[test]
    fn test_default_tool_set_registers_cleanly() {
        let mut registry = ToolRegistry::new();
        register_default_tools(&mut registry, &ToolkitConfig::default()).unwrap();
        assert_eq!(registry.len(), 16);
        assert!(registry.get("get_weather").is_some());
        assert!(registry.get("send_whatsapp").is_some());
    }

    #[test]
    fn test_double_registration_is_fatal() {
        let mut registry = ToolRegistry::new();
        let config = ToolkitConfig::default();
        register_default_tools(&mut registry, &config).unwrap();
        let err = register_default_tools(&mut registry, &config).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn test_calculate_sum_through_the_adapter() {
        let config = ToolkitConfig::default();
        let mut registry = ToolRegistry::new();
        registry.register(CalculateSumTool).unwrap();
        let adapter = InvocationAdapter::new(Arc::new(registry), &config).unwrap();

        let result = adapter
            .invoke(InvocationRequest::new("calculate_sum").with_arg("numbers", "1, 2, 3.5"))
            .await;
        assert!(result.succeeded);
        assert!(result.text.contains("6.5"));

        let result = adapter
            .invoke(InvocationRequest::new("calculate_sum").with_arg("numbers", "a,b"))
            .await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::InvalidArgument));
        assert!(!result.text.is_empty());
    }

    #[tokio::test]
    async fn test_email_without_credentials_fails_as_configuration() {
        let config = ToolkitConfig::default();
        let mut registry = ToolRegistry::new();
        registry.register_blocking(EmailTool::new(None)).unwrap();
        let adapter = InvocationAdapter::new(Arc::new(registry), &config).unwrap();

        let result = adapter
            .invoke(
                InvocationRequest::new("send_email")
                    .with_arg("to_email", "a@example.com")
                    .with_arg("subject", "Hi")
                    .with_arg("message", "Hello"),
            )
            .await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::Configuration));
        assert!(result.text.contains("not set up"));
    }
}
