//! Joke tool
//!
//! Fetches a random joke from the official-joke-api.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamSpec, Tool};

#[derive(Debug, Deserialize)]
struct Joke {
    setup: String,
    punchline: String,
}

impl Joke {
    fn speak(&self) -> String {
        format!("{} - {}", self.setup, self.punchline)
    }
}

/// Random joke via official-joke-api.appspot.com
pub struct JokeTool {
    client: reqwest::Client,
    base_url: String,
}

impl JokeTool {
    /// Create the tool against the public endpoint
    pub fn new() -> Self {
        Self::with_base_url("https://official-joke-api.appspot.com")
    }

    /// Create the tool against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for JokeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for JokeTool {
    fn name(&self) -> &str {
        "fetch_joke"
    }

    fn description(&self) -> &str {
        "Fetch a random joke"
    }

    fn parameters(&self) -> &[ParamSpec] {
        &[]
    }

    fn failure_text(&self, _args: &Arguments) -> String {
        "An error occurred while fetching a joke.".to_string()
    }

    async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
        let url = format!("{}/random_joke", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::dependency(format!(
                "joke API returned {}",
                response.status()
            )));
        }

        let joke: Joke = response.json().await?;
        Ok(joke.speak())
    }
}
