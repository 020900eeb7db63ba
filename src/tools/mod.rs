//! JSON-facing wrappers around the planner operations

pub mod budget_estimator;
pub mod itinerary_generator;
pub mod router;
pub mod tool;

pub use budget_estimator::BudgetEstimatorTool;
pub use itinerary_generator::ItineraryGeneratorTool;
pub use router::ToolRouter;
pub use tool::{Tool, ToolRegistry};
