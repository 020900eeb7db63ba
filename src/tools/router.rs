use super::{
    budget_estimator::BudgetEstimatorTool, itinerary_generator::ItineraryGeneratorTool,
    tool::ToolRegistry, Tool,
};
use crate::{config::PlannerConfig, PlannerError, Result};
use serde_json::Value;
use tracing::debug;

/// Dispatches raw JSON calls to registered tools by name
#[derive(Debug, Default)]
pub struct ToolRouter {
    registry: ToolRegistry,
}

impl ToolRouter {
    /// Create a router with no tools
    pub fn new() -> Self {
        Self::default()
    }

    /// Router exposing the budget estimator and itinerary generator
    pub fn with_default_tools(config: &PlannerConfig) -> Result<Self> {
        let mut router = Self::new();
        if config.strict_validation {
            router.register_tool(BudgetEstimatorTool::strict()?);
            router.register_tool(ItineraryGeneratorTool::strict()?);
        } else {
            router.register_tool(BudgetEstimatorTool::new());
            router.register_tool(ItineraryGeneratorTool::new());
        }
        Ok(router)
    }

    /// Register a tool with the router
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a tool call by name
    pub fn execute(&self, tool_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| PlannerError::ToolNotFound(tool_name.to_string()))?;

        debug!("Dispatching '{}'", tool_name);
        tool.execute(parameters)
    }

    /// Function definitions for every registered tool
    pub fn tool_definitions(&self) -> Result<Vec<Value>> {
        self.registry.definitions()
    }

    /// Names of the registered tools, sorted
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.list().iter().map(|tool| tool.name()).collect()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}
