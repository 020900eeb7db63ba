use crate::Result;
use schemars::{gen::SchemaSettings, JsonSchema};
use serde_json::Value;

/// Generate the Draft 7 JSON Schema describing `T`.
///
/// Subschemas are inlined so the result can be embedded in a tool definition
/// without a `definitions` section.
pub fn parameters_schema<T: JsonSchema>() -> Result<Value> {
    let settings = SchemaSettings::draft07().with(|settings| {
        settings.inline_subschemas = true;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();

    Ok(serde_json::to_value(root)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forms::{BudgetForm, ItineraryForm};

    #[test]
    fn test_budget_form_schema_requires_counts() {
        let schema = parameters_schema::<BudgetForm>().unwrap();

        assert_eq!(schema["type"], "object");
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"duration"));
        assert!(required.contains(&"travelers"));
        assert!(!required.contains(&"meals"));
    }

    #[test]
    fn test_itinerary_form_schema_uses_date_format() {
        let schema = parameters_schema::<ItineraryForm>().unwrap();
        assert_eq!(schema["properties"]["start_date"]["format"], "date");
        assert!(schema["definitions"]
            .as_object()
            .map_or(true, |defs| defs.is_empty()));
    }
}
