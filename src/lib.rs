pub mod config;
pub mod error;
pub mod invocation;
pub mod tools;

// Optional components
pub mod logging;

// Convenience re-exports for embedding in an agent runtime
pub use config::ToolkitConfig;
pub use error::{ErrorKind, RegistryError, ToolError};
pub use invocation::{
    Arguments, BlockingTool, ExecutionMode, InvocationAdapter, InvocationRequest,
    InvocationResult, ParamKind, ParamSpec, Tool, ToolRegistry,
};
pub use tools::register_default_tools;
