//! Tool registry
//!
//! Holds every tool the agent can call. Registration happens once at process
//! start and duplicate names are fatal there; after startup the registry is
//! read-only, so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use super::tool::{BlockingTool, Tool, ToolHandle};
use crate::error::RegistryError;

/// Registry mapping tool names to their handles
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolHandle>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a direct (non-blocking) tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) -> Result<(), RegistryError> {
        self.insert(ToolHandle::Direct(Arc::new(tool)))
    }

    /// Register a blocking tool, to be run on the worker pool
    pub fn register_blocking<T: BlockingTool + 'static>(
        &mut self,
        tool: T,
    ) -> Result<(), RegistryError> {
        self.insert(ToolHandle::Offloaded(Arc::new(tool)))
    }

    fn insert(&mut self, handle: ToolHandle) -> Result<(), RegistryError> {
        let name = handle.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        tracing::info!(mode = ?handle.execution_mode(), "Registering tool: {}", name);
        self.tools.insert(name, handle);
        Ok(())
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<ToolHandle> {
        self.tools.get(name).cloned()
    }

    /// Get the list of registered tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
