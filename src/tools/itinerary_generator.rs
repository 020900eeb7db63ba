use super::Tool;
use crate::{
    planner::generate_itinerary,
    schemas::{parameters_schema, StrictValidator, Validator},
    types::forms::ItineraryForm,
    Result,
};
use serde_json::{json, Value};

const NAME: &str = "itinerary_generator";

/// Trip planner exposed over raw form JSON
#[derive(Debug, Default)]
pub struct ItineraryGeneratorTool {
    validator: Validator,
}

impl ItineraryGeneratorTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check payloads against the form schema before decoding
    pub fn strict() -> Result<Self> {
        let schema = parameters_schema::<ItineraryForm>()?;
        Ok(Self {
            validator: Validator::Strict(StrictValidator::new().with_schema(NAME, schema)),
        })
    }
}

impl Tool for ItineraryGeneratorTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Generate a day-by-day priced itinerary for an inclusive date range and budget tier"
    }

    fn parameters_schema(&self) -> Result<Value> {
        parameters_schema::<ItineraryForm>()
    }

    fn execute(&self, parameters: Value) -> Result<Value> {
        let form: ItineraryForm = self.validator.validate(NAME, parameters)?;
        let input = form.into_input()?;
        let itinerary = generate_itinerary(&input)?;

        Ok(json!({
            "itinerary": itinerary,
            "day_count": itinerary.day_count(),
            "total_cost": itinerary.total_cost(),
            "average_daily_cost": itinerary.average_daily_cost(),
            "cost_per_traveler": itinerary.cost_per_traveler()
        }))
    }
}
