//! Raw form submissions as they arrive from a UI or the command line.
//!
//! Forms are loosely typed: counts may be numbers or numeric strings and tier
//! selections may be missing. Converting a form into trip parameters is the
//! only place coercion happens; the planner itself only sees typed values.

use super::trip::{Tier, TripGenerationInput, TripParameters};
use crate::error::{PlannerError, Result};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A count field submitted either as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FormNumber {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl FormNumber {
    /// Coerce into a strictly positive count.
    ///
    /// Text that is not a whole number is a [`PlannerError::Validation`];
    /// zero or negative values are a [`PlannerError::InvalidParameter`].
    pub fn to_count(&self, field: &str) -> Result<u32> {
        let value = match self {
            FormNumber::Integer(value) => *value,
            FormNumber::Decimal(value) => {
                if value.fract() != 0.0 || !value.is_finite() {
                    return Err(PlannerError::Validation(format!(
                        "{} must be a whole number, got {}",
                        field, value
                    )));
                }
                *value as i64
            }
            FormNumber::Text(raw) => raw.trim().parse::<i64>().map_err(|_| {
                PlannerError::Validation(format!("{} must be a whole number, got '{}'", field, raw))
            })?,
        };

        if value <= 0 {
            return Err(PlannerError::invalid(format!(
                "{} must be positive, got {}",
                field, value
            )));
        }

        u32::try_from(value)
            .map_err(|_| PlannerError::invalid(format!("{} is too large: {}", field, value)))
    }
}

impl From<u32> for FormNumber {
    fn from(value: u32) -> Self {
        FormNumber::Integer(i64::from(value))
    }
}

impl From<&str> for FormNumber {
    fn from(value: &str) -> Self {
        FormNumber::Text(value.to_string())
    }
}

fn tier(selection: Option<String>) -> Tier {
    selection.map(Tier::from).unwrap_or_default()
}

/// Budget calculator submission
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BudgetForm {
    /// Free-text destination label
    #[serde(default)]
    pub destination: Option<String>,
    /// Trip length in days
    pub duration: FormNumber,
    /// Number of travelers
    pub travelers: FormNumber,
    /// Accommodation tier: budget, mid or luxury
    #[serde(default, alias = "accommodationType")]
    pub accommodation: Option<String>,
    /// Meal tier: budget, mid or luxury
    #[serde(default, alias = "mealPreference")]
    pub meals: Option<String>,
    /// Transport tier: local, private or luxury
    #[serde(default, alias = "transportMode")]
    pub transport: Option<String>,
    /// Activity tier: low, medium or high
    #[serde(default, alias = "activityLevel")]
    pub activities: Option<String>,
    /// Shopping tier: none, minimal, moderate or extensive
    #[serde(default, alias = "shoppingBudget")]
    pub shopping: Option<String>,
}

impl BudgetForm {
    pub fn into_parameters(self) -> Result<TripParameters> {
        Ok(TripParameters {
            destination: self.destination.unwrap_or_default(),
            duration: self.duration.to_count("duration")?,
            travelers: self.travelers.to_count("travelers")?,
            accommodation: tier(self.accommodation),
            meals: tier(self.meals),
            transport: tier(self.transport),
            activities: tier(self.activities),
            shopping: tier(self.shopping),
        })
    }
}

/// Trip planner submission
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ItineraryForm {
    /// Free-text destination label
    #[serde(default)]
    pub destination: Option<String>,
    /// First day of the trip (YYYY-MM-DD)
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
    /// Number of travelers
    pub travelers: FormNumber,
    /// Budget tier: budget, mid or luxury
    #[serde(default, alias = "budget")]
    pub budget_tier: Option<String>,
    /// Interests such as culture or food; informational only
    #[serde(default)]
    pub interests: Vec<String>,
}

impl ItineraryForm {
    pub fn into_input(self) -> Result<TripGenerationInput> {
        Ok(TripGenerationInput {
            destination: self.destination.unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            travelers: self.travelers.to_count("travelers")?,
            budget_tier: tier(self.budget_tier),
            interests: self.interests,
        })
    }
}
