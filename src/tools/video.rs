//! Video playback tool
//!
//! Plays a YouTube video for a topic. Playback is an ordered list of
//! strategies, each with its own success and failure, tried in sequence:
//! first resolve the top search result and open it directly, then fall back
//! to opening the search-results page. Both strategies block (HTTP scrape,
//! browser launch), so the tool registers as OFFLOADED.

use regex::Regex;
use reqwest::Url;

use crate::error::ToolError;
use crate::invocation::{Arguments, BlockingTool, ParamKind, ParamSpec};

const PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "topic",
    ParamKind::String,
    "The song or video to play",
)];

/// One way of getting a video playing for a topic
pub trait PlayStrategy: Send + Sync {
    /// Strategy name, for logs
    fn name(&self) -> &str;

    /// Attempt playback; the returned text is spoken on success
    fn play(&self, topic: &str) -> Result<String, ToolError>;
}

/// Resolve the first search result and open its watch page directly
pub struct AutoplayStrategy {
    results_url: String,
}

impl AutoplayStrategy {
    pub fn new() -> Self {
        Self {
            results_url: "https://www.youtube.com/results".to_string(),
        }
    }

    /// Find the first video id on a results page
    fn first_video_id(page: &str) -> Option<String> {
        let re = Regex::new(r#"watch\?v=([\w-]{11})"#).ok()?;
        re.captures(page).map(|cap| cap[1].to_string())
    }
}

impl Default for AutoplayStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayStrategy for AutoplayStrategy {
    fn name(&self) -> &str {
        "autoplay-first-result"
    }

    fn play(&self, topic: &str) -> Result<String, ToolError> {
        let url = Url::parse_with_params(&self.results_url, &[("search_query", topic)])
            .map_err(|e| ToolError::invalid_argument(format!("bad topic: {}", e)))?;

        let response = reqwest::blocking::get(url)?;
        if !response.status().is_success() {
            return Err(ToolError::dependency(format!(
                "results page returned {}",
                response.status()
            )));
        }

        let page = response.text()?;
        let video_id = Self::first_video_id(&page)
            .ok_or_else(|| ToolError::dependency("no video id found in results page"))?;

        open::that(format!("https://www.youtube.com/watch?v={}", video_id))?;
        Ok(format!("I've started playing {} on YouTube.", topic))
    }
}

/// Open the search-results page in the default browser
pub struct BrowserSearchStrategy;

impl PlayStrategy for BrowserSearchStrategy {
    fn name(&self) -> &str {
        "open-search-results"
    }

    fn play(&self, topic: &str) -> Result<String, ToolError> {
        let url = Url::parse_with_params(
            "https://www.youtube.com/results",
            &[("search_query", topic)],
        )
        .map_err(|e| ToolError::invalid_argument(format!("bad topic: {}", e)))?;

        open::that(url.as_str())?;
        Ok(format!(
            "I couldn't autoplay the specific video, but I've opened YouTube search results for {}.",
            topic
        ))
    }
}

/// YouTube playback over an ordered strategy list
pub struct PlayVideoTool {
    strategies: Vec<Box<dyn PlayStrategy>>,
}

impl PlayVideoTool {
    /// Create the tool with the default strategy order
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(AutoplayStrategy::new()),
            Box::new(BrowserSearchStrategy),
        ])
    }

    /// Create the tool with an explicit strategy order (used by tests)
    pub fn with_strategies(strategies: Vec<Box<dyn PlayStrategy>>) -> Self {
        Self { strategies }
    }
}

impl Default for PlayVideoTool {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockingTool for PlayVideoTool {
    fn name(&self) -> &str {
        "play_video"
    }

    fn description(&self) -> &str {
        "Play a song or video on YouTube"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, args: &Arguments) -> String {
        format!(
            "I wasn't able to play {} on YouTube.",
            args.get_str("topic").unwrap_or("that")
        )
    }

    fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let topic = args.required_str("topic")?;

        let mut last_error = ToolError::dependency("no playback strategies configured");
        for strategy in &self.strategies {
            match strategy.play(topic) {
                Ok(text) => {
                    tracing::info!(strategy = strategy.name(), "Playback started for '{}'", topic);
                    return Ok(text);
                }
                Err(err) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %err,
                        "Playback strategy failed, trying next"
                    );
                    last_error = err;
                }
            }
        }
        Err(last_error)
    }
}
