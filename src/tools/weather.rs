//! Weather tool
//!
//! One-line current conditions from wttr.in's `format=3` endpoint.

use async_trait::async_trait;
use reqwest::Url;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamKind, ParamSpec, Tool};

const PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "city",
    ParamKind::String,
    "The city to get current weather for",
)];

/// Current-weather lookup via wttr.in
pub struct WeatherTool {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherTool {
    /// Create the tool against the public wttr.in endpoint
    pub fn new() -> Self {
        Self::with_base_url("https://wttr.in")
    }

    /// Create the tool against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather for a given city"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, args: &Arguments) -> String {
        format!(
            "An error occurred while retrieving weather for {}.",
            args.get_str("city").unwrap_or("that city")
        )
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let city = args.required_str("city")?;

        let url = Url::parse(&format!("{}/{}", self.base_url, city))
            .map_err(|e| ToolError::invalid_argument(format!("bad city name '{}': {}", city, e)))?;

        let response = self.client.get(url).query(&[("format", "3")]).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::dependency(format!(
                "wttr.in returned {} for '{}'",
                response.status(),
                city
            )));
        }

        let text = response.text().await?;
        let report = text.trim().to_string();
        tracing::info!("Weather for {}: {}", city, report);
        Ok(report)
    }
}
