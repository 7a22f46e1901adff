//! News tool
//!
//! Headline lookup over the Google News RSS search feed. The HTTP client here
//! is the blocking one, so the tool registers as OFFLOADED and runs on the
//! worker pool.

use regex::Regex;
use reqwest::Url;

use crate::error::ToolError;
use crate::invocation::{Arguments, BlockingTool, ParamKind, ParamSpec};

const PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "topic",
    ParamKind::String,
    "The topic to fetch recent news headlines for",
)];

/// Number of headlines to read back
const MAX_HEADLINES: usize = 5;

/// Latest-headlines lookup via the Google News RSS feed
pub struct NewsTool {
    base_url: String,
}

impl NewsTool {
    /// Create the tool against the public feed
    pub fn new() -> Self {
        Self::with_base_url("https://news.google.com/rss/search")
    }

    /// Create the tool against a specific feed URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Pull item titles out of an RSS document
    ///
    /// The first `<title>` in the feed names the channel itself and is
    /// skipped.
    fn extract_headlines(feed: &str) -> Vec<String> {
        let title_re = match Regex::new(r"<title>(.*?)</title>") {
            Ok(re) => re,
            Err(e) => {
                tracing::error!("RSS title pattern failed to compile: {}", e);
                return Vec::new();
            }
        };

        title_re
            .captures_iter(feed)
            .skip(1)
            .map(|cap| strip_cdata(&cap[1]).to_string())
            .filter(|t| !t.is_empty())
            .take(MAX_HEADLINES)
            .collect()
    }

    fn format_headlines(topic: &str, headlines: &[String]) -> String {
        if headlines.is_empty() {
            return format!(
                "I couldn't find any recent news stories regarding '{}'.",
                topic
            );
        }

        let mut lines = vec![format!("Here is the latest news on {}:", topic)];
        for headline in headlines {
            lines.push(format!("- {}", headline));
        }
        lines.join("\n")
    }
}

impl Default for NewsTool {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_cdata(raw: &str) -> &str {
    raw.trim()
        .strip_prefix("<![CDATA[")
        .and_then(|s| s.strip_suffix("]]>"))
        .unwrap_or_else(|| raw.trim())
}

impl BlockingTool for NewsTool {
    fn name(&self) -> &str {
        "read_news"
    }

    fn description(&self) -> &str {
        "Fetch the latest news headlines for a specific topic"
    }

    fn parameters(&self) -> &[ParamSpec] {
        PARAMS
    }

    fn failure_text(&self, args: &Arguments) -> String {
        format!(
            "I encountered an error while searching for news on {}.",
            args.get_str("topic").unwrap_or("that topic")
        )
    }

    fn execute(&self, args: Arguments) -> Result<String, ToolError> {
        let topic = args.required_str("topic")?;
        tracing::info!("Fetching news for: {}", topic);

        let url = Url::parse_with_params(&self.base_url, &[("q", topic)])
            .map_err(|e| ToolError::invalid_argument(format!("bad topic: {}", e)))?;

        let response = reqwest::blocking::get(url)?;
        if !response.status().is_success() {
            return Err(ToolError::dependency(format!(
                "news feed returned {}",
                response.status()
            )));
        }

        let feed = response.text()?;
        let headlines = Self::extract_headlines(&feed);
        Ok(Self::format_headlines(topic, &headlines))
    }
}
