//! trip-planner-rs: deterministic travel budget estimation and itinerary generation
//!
//! The planner turns trip parameters into priced plans using fixed rate
//! tables. Both operations are pure functions: identical inputs always give
//! identical outputs, and nothing is shared between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use trip_planner_rs::{estimate_budget, Amount, TripParameters};
//!
//! let params = TripParameters::new(3, 2)
//!     .with_accommodation("mid")
//!     .with_meals("mid")
//!     .with_transport("private")
//!     .with_activities("medium")
//!     .with_shopping("moderate");
//!
//! let estimate = estimate_budget(&params).unwrap();
//! assert_eq!(estimate.total, Amount::from_units(62700));
//! ```
//!
//! Raw form submissions go through the [`tools`] layer, which validates and
//! coerces JSON before calling the planner.

pub mod config;
pub mod error;
pub mod planner;
pub mod schemas;
pub mod tools;
pub mod types;

pub use config::{OutputFormat, PlannerConfig};
pub use error::{PlannerError, Result};
pub use planner::{estimate_budget, generate_itinerary};
pub use schemas::validator::Validator;
pub use tools::{BudgetEstimatorTool, ItineraryGeneratorTool, Tool, ToolRouter};
pub use types::{
    ActivitySlot, Amount, BudgetCategory, BudgetForm, BudgetLine, BudgetResult, DayPlan,
    FormNumber, GeneratedItinerary, ItineraryForm, SlotCategory, Tier, TripGenerationInput,
    TripParameters,
};

#[cfg(feature = "cli")]
pub mod cli;
