//! Invocation adapter
//!
//! The single entry point the agent runtime calls. `invoke` never lets a
//! fault escape: unknown tools, bad arguments, dependency failures, panics,
//! and timeouts all come back as an [`InvocationResult`] with speakable text.
//! An agent mid-conversation is better served by a spoken apology than by a
//! crash.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use uuid::Uuid;

use super::arguments::{validate_arguments, Arguments};
use super::offload::WorkerPool;
use super::registry::ToolRegistry;
use super::tool::{InvocationRequest, InvocationResult, ToolHandle};
use crate::config::ToolkitConfig;
use crate::error::{ErrorKind, ToolError};

/// Per-invocation lifecycle, logged for operators
///
/// Every invocation moves `Pending → Dispatched` and ends in exactly one of
/// the terminal states, each producing exactly one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvocationState {
    Pending,
    Dispatched,
    Succeeded,
    Failed,
    TimedOut,
}

/// Dispatches tool invocations and enforces the uniform result contract
pub struct InvocationAdapter {
    registry: Arc<ToolRegistry>,
    pool: WorkerPool,
    timeout: Duration,
}

impl InvocationAdapter {
    /// Create an adapter over a finished registry
    ///
    /// Spawns the worker pool for blocking tools; failing to spawn threads is
    /// a startup error, not an invocation one.
    pub fn new(registry: Arc<ToolRegistry>, config: &ToolkitConfig) -> std::io::Result<Self> {
        let pool = WorkerPool::new(config.worker_threads)?;
        Ok(Self {
            registry,
            pool,
            timeout: config.invoke_timeout,
        })
    }

    /// Invoke a tool and return its result
    ///
    /// Infallible at this boundary. Cancellation: dropping the returned
    /// future before dispatch abandons the call entirely; during DIRECT
    /// execution it cancels the underlying I/O. An in-flight OFFLOADED call
    /// is detached, not interrupted — the worker finishes on its own and the
    /// stale result is logged and discarded.
    pub async fn invoke(&self, request: InvocationRequest) -> InvocationResult {
        let id = Uuid::new_v4();
        let mut state = InvocationState::Pending;
        tracing::debug!(%id, tool = %request.tool_name, ?state, "Invocation received");

        let handle = match self.registry.get(&request.tool_name) {
            Some(handle) => handle,
            None => {
                tracing::warn!(%id, tool = %request.tool_name, "Unknown tool requested");
                return InvocationResult::failure(
                    format!("I don't have a tool called '{}'.", request.tool_name),
                    ErrorKind::UnknownTool,
                );
            }
        };

        let args = match validate_arguments(handle.parameters(), &request.arguments) {
            Ok(args) => args,
            Err(err) => {
                return self.fail(id, &handle, &Arguments::default(), &mut state, err);
            }
        };

        state = InvocationState::Dispatched;
        tracing::debug!(%id, tool = %request.tool_name, ?state, mode = ?handle.execution_mode(), "Dispatching");

        let outcome = match &handle {
            ToolHandle::Direct(tool) => {
                // catch_unwind keeps a buggy tool from taking down the
                // runtime's task; cancellation propagates by drop.
                let call = std::panic::AssertUnwindSafe(tool.execute(args.clone())).catch_unwind();
                match tokio::time::timeout(self.timeout, call).await {
                    Ok(Ok(result)) => Some(result),
                    Ok(Err(_panic)) => Some(Err(ToolError::dependency(format!(
                        "tool '{}' panicked",
                        request.tool_name
                    )))),
                    Err(_) => None,
                }
            }
            ToolHandle::Offloaded(tool) => {
                let tool = Arc::clone(tool);
                let job_args = args.clone();
                let rx = self
                    .pool
                    .submit(&request.tool_name, move || tool.execute(job_args));
                match tokio::time::timeout(
                    self.timeout,
                    WorkerPool::await_result(rx, &request.tool_name),
                )
                .await
                {
                    Ok(result) => Some(result),
                    Err(_) => None,
                }
            }
        };

        match outcome {
            Some(Ok(text)) => {
                state = InvocationState::Succeeded;
                tracing::info!(%id, tool = %request.tool_name, ?state, "Invocation complete");
                InvocationResult::success(text)
            }
            Some(Err(err)) => self.fail(id, &handle, &args, &mut state, err),
            None => {
                state = InvocationState::TimedOut;
                tracing::warn!(
                    %id,
                    tool = %request.tool_name,
                    ?state,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Invocation timed out; detaching"
                );
                InvocationResult::failure(
                    format!("Sorry, {} took too long to respond.", request.tool_name),
                    ErrorKind::Timeout,
                )
            }
        }
    }

    /// Convert a tool error into a speakable failure result
    ///
    /// Internal detail goes to the log; the spoken text stays vague and
    /// friendly.
    fn fail(
        &self,
        id: Uuid,
        handle: &ToolHandle,
        args: &Arguments,
        state: &mut InvocationState,
        err: ToolError,
    ) -> InvocationResult {
        *state = InvocationState::Failed;
        tracing::error!(%id, tool = %handle.name(), ?state, error = %err, "Invocation failed");

        let text = match err.kind() {
            ErrorKind::UnknownTool => format!("I don't have a tool called '{}'.", handle.name()),
            ErrorKind::InvalidArgument => {
                format!("I couldn't understand the arguments for {}.", handle.name())
            }
            ErrorKind::Configuration => format!("The {} tool is not set up yet.", handle.name()),
            ErrorKind::Timeout => {
                format!("Sorry, {} took too long to respond.", handle.name())
            }
            ErrorKind::Dependency => handle.failure_text(args),
        };

        InvocationResult::failure(text, err.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::arguments::{ParamKind, ParamSpec};
    use crate::invocation::tool::{BlockingTool, Tool};
    use async_trait::async_trait;
    use futures::future::join_all;
    use std::time::Instant;

    const GREET_PARAMS: &[ParamSpec] =
        &[ParamSpec::required("who", ParamKind::String, "Person to greet")];

    struct GreetTool;

    #[async_trait]
    impl Tool for GreetTool {
        fn name(&self) -> &str {
            "greet"
        }
        fn description(&self) -> &str {
            "Greets a person by name"
        }
        fn parameters(&self) -> &[ParamSpec] {
            GREET_PARAMS
        }
        async fn execute(&self, args: Arguments) -> Result<String, ToolError> {
            Ok(format!("Hello, {}!", args.required_str("who")?))
        }
    }

    struct NeverTool;

    #[async_trait]
    impl Tool for NeverTool {
        fn name(&self) -> &str {
            "never"
        }
        fn description(&self) -> &str {
            "Waits on a dependency that never answers"
        }
        fn parameters(&self) -> &[ParamSpec] {
            &[]
        }
        async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    struct PanicTool;

    #[async_trait]
    impl Tool for PanicTool {
        fn name(&self) -> &str {
            "panicky"
        }
        fn description(&self) -> &str {
            "Always panics"
        }
        fn parameters(&self) -> &[ParamSpec] {
            &[]
        }
        async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
            panic!("tool bug")
        }
    }

    const CITY_PARAMS: &[ParamSpec] =
        &[ParamSpec::required("city", ParamKind::String, "City to look up")];

    struct FlakyWeatherTool;

    #[async_trait]
    impl Tool for FlakyWeatherTool {
        fn name(&self) -> &str {
            "get_weather"
        }
        fn description(&self) -> &str {
            "Weather lookup with a broken upstream"
        }
        fn parameters(&self) -> &[ParamSpec] {
            CITY_PARAMS
        }
        fn failure_text(&self, args: &Arguments) -> String {
            format!(
                "An error occurred while retrieving weather for {}.",
                args.get_str("city").unwrap_or("that city")
            )
        }
        async fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
            Err(ToolError::dependency("upstream returned 503"))
        }
    }

    struct NapTool {
        millis: u64,
    }

    impl BlockingTool for NapTool {
        fn name(&self) -> &str {
            "nap"
        }
        fn description(&self) -> &str {
            "Blocks the worker for a bit"
        }
        fn parameters(&self) -> &[ParamSpec] {
            &[]
        }
        fn execute(&self, _args: Arguments) -> Result<String, ToolError> {
            std::thread::sleep(Duration::from_millis(self.millis));
            Ok("rested".to_string())
        }
    }

    fn adapter_with(registry: ToolRegistry, config: ToolkitConfig) -> InvocationAdapter {
        InvocationAdapter::new(Arc::new(registry), &config).unwrap()
    }

    #[tokio::test]
    async fn test_successful_invocation() {
        let mut registry = ToolRegistry::new();
        registry.register(GreetTool).unwrap();
        let adapter = adapter_with(registry, ToolkitConfig::default());

        let result = adapter
            .invoke(InvocationRequest::new("greet").with_arg("who", "Ada"))
            .await;
        assert!(result.succeeded);
        assert_eq!(result.text, "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_a_result_not_a_fault() {
        let adapter = adapter_with(ToolRegistry::new(), ToolkitConfig::default());
        let result = adapter.invoke(InvocationRequest::new("teleport")).await;
        assert!(!result.succeeded);
        assert!(!result.text.is_empty());
        assert_eq!(result.error_kind, Some(ErrorKind::UnknownTool));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let mut registry = ToolRegistry::new();
        registry.register(GreetTool).unwrap();
        let adapter = adapter_with(registry, ToolkitConfig::default());

        let result = adapter.invoke(InvocationRequest::new("greet")).await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::InvalidArgument));
        assert!(result.text.contains("greet"));
    }

    #[tokio::test]
    async fn test_dependency_failure_speaks_the_tool_text() {
        let mut registry = ToolRegistry::new();
        registry.register(FlakyWeatherTool).unwrap();
        let adapter = adapter_with(registry, ToolkitConfig::default());

        let result = adapter
            .invoke(InvocationRequest::new("get_weather").with_arg("city", "Paris"))
            .await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::Dependency));
        assert_eq!(
            result.text,
            "An error occurred while retrieving weather for Paris."
        );
    }

    #[tokio::test]
    async fn test_panicking_tool_becomes_a_failure_result() {
        let mut registry = ToolRegistry::new();
        registry.register(PanicTool).unwrap();
        let adapter = adapter_with(registry, ToolkitConfig::default());

        let result = adapter.invoke(InvocationRequest::new("panicky")).await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::Dependency));
        assert!(!result.text.is_empty());
    }

    #[tokio::test]
    async fn test_direct_timeout_within_bounds() {
        let mut registry = ToolRegistry::new();
        registry.register(NeverTool).unwrap();
        let config = ToolkitConfig::default().with_timeout(Duration::from_millis(50));
        let adapter = adapter_with(registry, config);

        let start = Instant::now();
        let result = adapter.invoke(InvocationRequest::new("never")).await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::Timeout));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_offloaded_timeout_detaches_worker() {
        let mut registry = ToolRegistry::new();
        registry.register_blocking(NapTool { millis: 500 }).unwrap();
        let config = ToolkitConfig::default()
            .with_timeout(Duration::from_millis(50))
            .with_worker_threads(1);
        let adapter = adapter_with(registry, config);

        let start = Instant::now();
        let result = adapter.invoke(InvocationRequest::new("nap")).await;
        assert!(!result.succeeded);
        assert_eq!(result.error_kind, Some(ErrorKind::Timeout));
        assert!(start.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_offloaded_calls_beyond_pool_capacity_queue_and_finish() {
        let mut registry = ToolRegistry::new();
        registry.register_blocking(NapTool { millis: 50 }).unwrap();
        let config = ToolkitConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_worker_threads(2);
        let adapter = adapter_with(registry, config);

        let results = join_all((0..3).map(|_| adapter.invoke(InvocationRequest::new("nap")))).await;
        assert_eq!(results.len(), 3);
        for result in results {
            assert!(result.succeeded);
            assert_eq!(result.text, "rested");
        }
    }

    #[tokio::test]
    async fn test_read_only_tool_is_repeatable() {
        let mut registry = ToolRegistry::new();
        registry.register(GreetTool).unwrap();
        let adapter = adapter_with(registry, ToolkitConfig::default());

        for _ in 0..3 {
            let result = adapter
                .invoke(InvocationRequest::new("greet").with_arg("who", "Ada"))
                .await;
            assert!(result.succeeded);
            assert_eq!(result.text, "Hello, Ada!");
        }
    }
}
