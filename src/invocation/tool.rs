//! Tool traits and invocation types
//!
//! A tool is registered either as [`Tool`] (non-blocking I/O, awaited in
//! place) or [`BlockingTool`] (synchronous library call, shipped to the
//! worker pool). Both produce plain text the agent can speak.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::arguments::{Arguments, ParamSpec};
use crate::error::{ErrorKind, ToolError};

/// How the adapter schedules a tool's handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// Non-blocking handler, awaited on the caller's task
    Direct,
    /// Blocking handler, run on a worker thread
    Offloaded,
}

/// Default spoken text for a tool whose dependency failed
pub(crate) fn default_failure_text(name: &str) -> String {
    format!("An error occurred while running {}.", name)
}

/// A tool whose handler performs non-blocking I/O
///
/// Implementations must not block the executor thread; anything that calls a
/// synchronous library belongs behind [`BlockingTool`] instead.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name the agent calls this tool by
    fn name(&self) -> &str;

    /// One-line description of what the tool does
    fn description(&self) -> &str;

    /// Declared parameter schema, in call order
    fn parameters(&self) -> &[ParamSpec];

    /// Spoken text for a dependency failure during this invocation
    ///
    /// Keep it vague and friendly; the real error is logged, not spoken.
    fn failure_text(&self, _args: &Arguments) -> String {
        default_failure_text(self.name())
    }

    /// Run the tool against validated arguments
    async fn execute(&self, args: Arguments) -> Result<String, ToolError>;
}

/// A tool whose handler is inherently blocking
///
/// The adapter runs these on the worker pool and only awaits the bridged
/// completion, so a stuck handler can never stall the caller's scheduler.
pub trait BlockingTool: Send + Sync {
    /// Unique name the agent calls this tool by
    fn name(&self) -> &str;

    /// One-line description of what the tool does
    fn description(&self) -> &str;

    /// Declared parameter schema, in call order
    fn parameters(&self) -> &[ParamSpec];

    /// Spoken text for a dependency failure during this invocation
    fn failure_text(&self, _args: &Arguments) -> String {
        default_failure_text(self.name())
    }

    /// Run the tool against validated arguments (called on a worker thread)
    fn execute(&self, args: Arguments) -> Result<String, ToolError>;
}

/// A registered tool: descriptor plus handler, immutable after registration
#[derive(Clone)]
pub enum ToolHandle {
    /// Awaited in place
    Direct(Arc<dyn Tool>),
    /// Run on the worker pool
    Offloaded(Arc<dyn BlockingTool>),
}

impl ToolHandle {
    /// The tool's registered name
    pub fn name(&self) -> &str {
        match self {
            ToolHandle::Direct(t) => t.name(),
            ToolHandle::Offloaded(t) => t.name(),
        }
    }

    /// The tool's description
    pub fn description(&self) -> &str {
        match self {
            ToolHandle::Direct(t) => t.description(),
            ToolHandle::Offloaded(t) => t.description(),
        }
    }

    /// The tool's declared parameter schema
    pub fn parameters(&self) -> &[ParamSpec] {
        match self {
            ToolHandle::Direct(t) => t.parameters(),
            ToolHandle::Offloaded(t) => t.parameters(),
        }
    }

    /// The tool's execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        match self {
            ToolHandle::Direct(_) => ExecutionMode::Direct,
            ToolHandle::Offloaded(_) => ExecutionMode::Offloaded,
        }
    }

    /// Spoken text for a dependency failure
    pub fn failure_text(&self, args: &Arguments) -> String {
        match self {
            ToolHandle::Direct(t) => t.failure_text(args),
            ToolHandle::Offloaded(t) => t.failure_text(args),
        }
    }
}

/// One tool call from the agent runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Name of the tool to invoke
    pub tool_name: String,
    /// Raw arguments as supplied by the runtime
    pub arguments: Map<String, Value>,
    /// Opaque caller context, carried through for log correlation only
    #[serde(default)]
    pub context: Value,
}

impl InvocationRequest {
    /// Create a request with no arguments
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: Map::new(),
            context: Value::Null,
        }
    }

    /// Add an argument
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Attach opaque caller context
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }
}

/// The outcome of one invocation
///
/// `text` is always present, even on failure, so the agent always has
/// something it can say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Text for the agent to speak or display
    pub text: String,
    /// Whether the tool ran to completion
    pub succeeded: bool,
    /// Failure classification when `succeeded` is false
    pub error_kind: Option<ErrorKind>,
}

impl InvocationResult {
    /// Create a successful result
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
            error_kind: None,
        }
    }

    /// Create a failure result with speakable text
    pub fn failure(text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            text: text.into(),
            succeeded: false,
            error_kind: Some(kind),
        }
    }
}
