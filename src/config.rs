//! Toolkit configuration
//!
//! All environment access happens here, once, at process start. Tools receive
//! what they need from this struct instead of reading the environment
//! themselves, so a missing credential surfaces as a per-tool configuration
//! failure rather than a hidden global.

use std::env;
use std::time::Duration;

/// Default per-invocation timeout, chosen to stay inside a conversational turn
const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// Default number of worker threads for blocking tools
const DEFAULT_WORKER_THREADS: usize = 4;

/// SMTP credentials and relay settings for the email tool
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Sender address, also used as the SMTP username
    pub sender: String,
    /// App password for the SMTP account
    pub app_password: String,
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,
}

/// Process-wide toolkit configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct ToolkitConfig {
    /// Per-invocation timeout applied by the adapter
    pub invoke_timeout: Duration,
    /// Size of the worker pool servicing blocking tools
    pub worker_threads: usize,
    /// Mail settings; `None` when credentials are absent, in which case the
    /// email tool reports a configuration failure instead of connecting
    pub mail: Option<MailConfig>,
    /// Default country code (e.g. "+91") prepended to local-format WhatsApp
    /// numbers; when unset, local-format numbers are rejected as invalid
    pub default_country_code: Option<String>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            invoke_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            worker_threads: DEFAULT_WORKER_THREADS,
            mail: None,
            default_country_code: None,
        }
    }
}

impl ToolkitConfig {
    /// Build the configuration from the process environment
    ///
    /// Loads `.env` first if one is present. Missing mail credentials are not
    /// an error here; they disable the email tool at invocation time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mail = match (env::var("MAIL_SENDER"), env::var("MAIL_APP_PASSWORD")) {
            (Ok(sender), Ok(app_password)) => Some(MailConfig {
                sender,
                app_password,
                smtp_host: env::var("MAIL_SMTP_HOST")
                    .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                smtp_port: env::var("MAIL_SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(587),
            }),
            _ => {
                tracing::warn!("Mail credentials not set; email tool will be unavailable");
                None
            }
        };

        let invoke_timeout = env::var("ASSISTANT_TOOL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let worker_threads = env::var("ASSISTANT_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_WORKER_THREADS);

        let default_country_code = env::var("ASSISTANT_COUNTRY_CODE").ok();

        tracing::info!(
            timeout_secs = invoke_timeout.as_secs(),
            worker_threads,
            mail_configured = mail.is_some(),
            "Toolkit configuration loaded"
        );

        Self {
            invoke_timeout,
            worker_threads,
            mail,
            default_country_code,
        }
    }

    /// Set the per-invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.invoke_timeout = timeout;
        self
    }

    /// Set the worker pool size
    pub fn with_worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    /// Set the default WhatsApp country code
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.default_country_code = Some(code.into());
        self
    }
}
