//! WhatsApp tool
//!
//! Opens WhatsApp Web with a prefilled message via the default browser.
//! Whether the message actually goes out depends on the user's logged-in
//! session, so the spoken result asks them to check. Local-format numbers get
//! the configured default country code; there is no hardcoded fallback.

use reqwest::Url;

use crate::error::ToolError;
use crate::invocation::{Arguments, BlockingTool, ParamKind, ParamSpec};

const PARAMS: &[ParamSpec] = &[
    ParamSpec::required(
        "phone_number",
        ParamKind::String,
        "Destination phone number, ideally with country code (+14155550123)",
    ),
    ParamSpec::required("message", ParamKind::String, "The message to send"),
];

/// WhatsApp Web message via browser automation
pub struct WhatsAppTool {
    default_country_code: Option<String>,
}

impl WhatsAppTool {
    /// Create the tool with the configured default country code, if any
    pub fn new(default_country_code: Option<String>) -> Self {
        Self {
            default_country_code,
        }
    }
}

/// Normalize a phone number into `+<digits>` form
///
/// Spaces and dashes are stripped. Numbers without a leading `+` take the
/// default country code; with none configured they are rejected rather than
/// silently assigned a region.
pub fn normalize_phone(raw: &str, default_country_code: Option<&str>) -> Result<String, ToolError> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();

    let with_code = if let Some(rest) = cleaned.strip_prefix('+') {
        format!("+{}", rest)
    } else {
        match default_country_code {
            Some(code) => format!("{}{}", code, cleaned),
            None => {
                return Err(ToolError::invalid_argument(format!(
                    "phone number '{}' has no country code and no default is configured",
                    raw
                )))
            }
        }
    };

    let digits = with_code.strip_prefix('+').unwrap_or(&with_code);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ToolError::invalid_argument(format!(
            "phone number '{}' is not numeric",
            raw
        )));
    }

    Ok(format!("+{}", digits))
}

impl BlockingTool for WhatsAppTool {
    fn name(&self) -> &str {
        "send_whatsapp"
    }

    fn description(&self) -> &str {
        "Send a WhatsApp message to a phone number via WhatsApp Web"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, _args: &Arguments) -> String {
        "I tried to send the WhatsApp message, but it failed. Is WhatsApp Web logged in?"
            .to_string()
    }

    fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let raw_number = args.required_str("phone_number")?;
        let message = args.required_str("message")?;

        let phone = normalize_phone(raw_number, self.default_country_code.as_deref())?;
        tracing::info!("Opening WhatsApp Web for {}", phone);

        let url = Url::parse_with_params(
            "https://web.whatsapp.com/send",
            &[("phone", phone.as_str()), ("text", message)],
        )
        .map_err(|e| ToolError::invalid_argument(format!("bad message: {}", e)))?;

        open::that(url.as_str())?;
        Ok(format!(
            "I have opened WhatsApp and typed the message to {}. Please check if it sent.",
            phone
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_number_passes_through() {
        assert_eq!(
            normalize_phone("+1 415-555-0123", None).unwrap(),
            "+14155550123"
        );
    }

    #[test]
    fn test_local_number_uses_configured_code() {
        assert_eq!(
            normalize_phone("9876543210", Some("+91")).unwrap(),
            "+919876543210"
        );
    }

    #[test]
    fn test_local_number_without_default_is_rejected() {
        let err = normalize_phone("9876543210", None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_numeric_number_is_rejected() {
        let err = normalize_phone("+1-CALL-ME-NOW", Some("+1")).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument(_)));
    }
}
