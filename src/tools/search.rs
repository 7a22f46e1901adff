//! Web search tool
//!
//! DuckDuckGo instant-answer lookup. Returns the topic abstract when one
//! exists, otherwise the first few related-topic snippets.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::error::ToolError;
use crate::invocation::{Arguments, ParamKind, ParamSpec, Tool};

const PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "query",
    ParamKind::String,
    "What to search the web for",
)];

/// Maximum related-topic snippets when there is no abstract
const MAX_RELATED: usize = 3;

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "Heading", default)]
    heading: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
}

/// Web search via the DuckDuckGo instant-answer API
pub struct SearchTool {
    client: reqwest::Client,
    base_url: String,
}

impl SearchTool {
    /// Create the tool against the public API endpoint
    pub fn new() -> Self {
        Self::with_base_url("https://api.duckduckgo.com")
    }

    /// Create the tool against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn summarize(answer: &InstantAnswer, query: &str) -> String {
        if !answer.abstract_text.is_empty() {
            if answer.heading.is_empty() {
                return answer.abstract_text.clone();
            }
            return format!("{}: {}", answer.heading, answer.abstract_text);
        }

        let snippets: Vec<&str> = answer
            .related_topics
            .iter()
            .map(|t| t.text.as_str())
            .filter(|t| !t.is_empty())
            .take(MAX_RELATED)
            .collect();

        if snippets.is_empty() {
            format!("I couldn't find anything about '{}'.", query)
        } else {
            format!(
                "Here's what I found about '{}': {}",
                query,
                snippets.join(" | ")
            )
        }
    }
}

impl Default for SearchTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search_web"
    }

    fn description(&self) -> &str {
        "Search the web using DuckDuckGo"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, args: &Arguments) -> String {
        format!(
            "An error occurred while searching for '{}'.",
            args.get_str("query").unwrap_or("that")
        )
    }

    async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let query = args.required_str("query")?;

        let url = Url::parse_with_params(
            &format!("{}/", self.base_url),
            &[("q", query), ("format", "json"), ("no_html", "1")],
        )
        .map_err(|e| ToolError::invalid_argument(format!("bad query: {}", e)))?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ToolError::dependency(format!(
                "search API returned {}",
                response.status()
            )));
        }

        let answer: InstantAnswer = response.json().await?;
        let summary = Self::summarize(&answer, query);
        tracing::info!("Search results for '{}': {}", query, summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_prefers_abstract() {
        let answer: InstantAnswer = serde_json::from_str(
            r#"{"AbstractText": "Rust is a systems programming language.", "Heading": "Rust"}"#,
        )
        .unwrap();
        assert_eq!(
            SearchTool::summarize(&answer, "rust"),
            "Rust: Rust is a systems programming language."
        );
    }

    #[test]
    fn test_summarize_falls_back_to_related_topics() {
        let answer: InstantAnswer = serde_json::from_str(
            r#"{"RelatedTopics": [{"Text": "First"}, {"Text": ""}, {"Text": "Second"}]}"#,
        )
        .unwrap();
        let summary = SearchTool::summarize(&answer, "things");
        assert!(summary.contains("First"));
        assert!(summary.contains("Second"));
    }

    #[test]
    fn test_summarize_empty_answer() {
        let answer: InstantAnswer = serde_json::from_str("{}").unwrap();
        assert_eq!(
            SearchTool::summarize(&answer, "nothing"),
            "I couldn't find anything about 'nothing'."
        );
    }
}
