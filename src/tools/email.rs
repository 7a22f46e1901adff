//! Email tool
//!
//! Sends plain-text mail through the configured SMTP relay (STARTTLS). The
//! lettre transport is synchronous, so the tool registers as OFFLOADED.
//! Missing credentials fail before any connection is attempted.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailConfig;
use crate::error::ToolError;
use crate::invocation::{Arguments, BlockingTool, ParamKind, ParamSpec};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::required("to_email", ParamKind::String, "The recipient's email address"),
    ParamSpec::required("subject", ParamKind::String, "The subject of the email"),
    ParamSpec::required("message", ParamKind::String, "The content/body of the email"),
    ParamSpec::optional("cc_email", ParamKind::String, "Optional CC email address"),
];

/// Plain-text email via SMTP
pub struct EmailTool {
    mail: Option<MailConfig>,
}

impl EmailTool {
    /// Create the tool with the mail settings from startup configuration
    ///
    /// `None` is valid: the tool stays registered and reports a configuration
    /// failure when invoked.
    pub fn new(mail: Option<MailConfig>) -> Self {
        Self { mail }
    }

    fn parse_mailbox(field: &str, address: &str) -> Result<Mailbox, ToolError> {
        address.parse().map_err(|e| {
            ToolError::invalid_argument(format!("{} '{}' is not a valid address: {}", field, address, e))
        })
    }
}

impl BlockingTool for EmailTool {
    fn name(&self) -> &str {
        "send_email"
    }

    fn description(&self) -> &str {
        "Send an email from the configured account"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, args: &Arguments) -> String {
        format!(
            "An error occurred while sending the email to {}.",
            args.get_str("to_email").unwrap_or("that address")
        )
    }

    fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let mail = self.mail.as_ref().ok_or_else(|| {
            ToolError::Configuration("mail sender credentials are not set".to_string())
        })?;

        let to_email = args.required_str("to_email")?;
        let subject = args.required_str("subject")?;
        let body = args.required_str("message")?;

        let mut builder = Message::builder()
            .from(Self::parse_mailbox("sender", &mail.sender)?)
            .to(Self::parse_mailbox("to_email", to_email)?)
            .subject(subject);

        if let Some(cc) = args.get_str("cc_email").filter(|cc| !cc.is_empty()) {
            builder = builder.cc(Self::parse_mailbox("cc_email", cc)?);
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| ToolError::dependency(format!("failed to build message: {}", e)))?;

        let transport = SmtpTransport::starttls_relay(&mail.smtp_host)
            .map_err(|e| ToolError::dependency(format!("SMTP relay error: {}", e)))?
            .port(mail.smtp_port)
            .credentials(Credentials::new(
                mail.sender.clone(),
                mail.app_password.clone(),
            ))
            .build();

        transport
            .send(&message)
            .map_err(|e| ToolError::dependency(format!("SMTP send failed: {}", e)))?;

        tracing::info!("Email sent to {}", to_email);
        Ok(format!("Email sent to {}!", to_email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: serde_json::Value) -> Arguments {
        Arguments::from_map(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_missing_credentials_fails_before_connecting() {
        let tool = EmailTool::new(None);
        let err = tool
            .execute(args(json!({
                "to_email": "a@example.com",
                "subject": "Hi",
                "message": "Hello"
            })))
            .unwrap_err();
        assert!(matches!(err, ToolError::Configuration(_)));
    }

    #[test]
    fn test_invalid_recipient_is_an_argument_error() {
        let tool = EmailTool::new(Some(MailConfig {
            sender: "bot@example.com".to_string(),
            app_password: "secret".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
        }));
        let err = tool
            .execute(args(json!({
                "to_email": "not an address",
                "subject": "Hi",
                "message": "Hello"
            })))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }
}
