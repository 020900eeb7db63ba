use crate::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// A planner operation callable with raw JSON parameters
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// The name of the tool (used when dispatching)
    fn name(&self) -> &'static str;

    /// A description of what the tool does
    fn description(&self) -> &'static str;

    /// JSON Schema for the tool's parameters
    fn parameters_schema(&self) -> Result<Value>;

    /// Execute the tool with given parameters
    fn execute(&self, parameters: Value) -> Result<Value>;
}

/// Registry for available tools, ordered by name
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Get all registered tools
    pub fn list(&self) -> Vec<&dyn Tool> {
        self.tools.values().map(|tool| tool.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Describe every tool as a function definition
    pub fn definitions(&self) -> Result<Vec<Value>> {
        self.tools
            .values()
            .map(|tool| -> Result<Value> {
                Ok(serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.parameters_schema()?
                    }
                }))
            })
            .collect()
    }
}
