use super::Tool;
use crate::{
    planner::estimate_budget,
    schemas::{parameters_schema, StrictValidator, Validator},
    types::forms::BudgetForm,
    Result,
};
use serde_json::{json, Value};

const NAME: &str = "budget_estimator";

/// Budget calculator exposed over raw form JSON
#[derive(Debug, Default)]
pub struct BudgetEstimatorTool {
    validator: Validator,
}

impl BudgetEstimatorTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check payloads against the form schema before decoding
    pub fn strict() -> Result<Self> {
        let schema = parameters_schema::<BudgetForm>()?;
        Ok(Self {
            validator: Validator::Strict(StrictValidator::new().with_schema(NAME, schema)),
        })
    }
}

impl Tool for BudgetEstimatorTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Estimate trip cost across accommodation, food, transport, activities and shopping, plus a 10% contingency"
    }

    fn parameters_schema(&self) -> Result<Value> {
        parameters_schema::<BudgetForm>()
    }

    fn execute(&self, parameters: Value) -> Result<Value> {
        let form: BudgetForm = self.validator.validate(NAME, parameters)?;
        let params = form.into_parameters()?;
        let estimate = estimate_budget(&params)?;

        Ok(json!({
            "destination": params.destination,
            "estimate": estimate,
            "subtotal": estimate.subtotal(),
            "breakdown": estimate.breakdown(),
            "per_person": estimate.per_person(),
            "per_person_per_day": estimate.per_person_per_day(),
            "per_day": estimate.per_day()
        }))
    }
}
