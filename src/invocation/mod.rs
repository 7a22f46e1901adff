//! Tool invocation core
//!
//! This module provides:
//! - `Tool` / `BlockingTool` traits - the two execution modes a tool can declare
//! - `ParamSpec` / `Arguments` - declared schemas and validated arguments
//! - `ToolRegistry` - name-to-tool mapping, immutable after startup
//! - `InvocationAdapter` - the runtime-facing `invoke` boundary
//! - `WorkerPool` - the bridge that keeps blocking tools off the scheduler

mod adapter;
mod arguments;
mod offload;
mod registry;
mod tool;

pub use adapter::InvocationAdapter;
pub use arguments::{validate_arguments, Arguments, ParamKind, ParamSpec};
pub use offload::WorkerPool;
pub use registry::ToolRegistry;
pub use tool::{
    BlockingTool, ExecutionMode, InvocationRequest, InvocationResult, Tool, ToolHandle,
};
