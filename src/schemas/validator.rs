use super::validation::validate_against_schema;
use crate::{PlannerError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Validation strategies for tool parameters
#[derive(Debug, Clone, Default)]
pub enum Validator {
    /// Fast validation using serde
    #[default]
    SerdeFirst,
    /// JSON Schema check before decoding
    Strict(StrictValidator),
}

impl Validator {
    /// Validate and deserialize `tool_name` parameters into type T
    pub fn validate<T: DeserializeOwned>(&self, tool_name: &str, params: Value) -> Result<T> {
        match self {
            Validator::SerdeFirst => serde_first_validate(params),
            Validator::Strict(validator) => validator.validate(tool_name, params),
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Validator::Strict(_))
    }
}

/// Fast serde-first validator
fn serde_first_validate<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_path_to_error::deserialize(params).map_err(|e| {
        let path = e.path().to_string();
        let location = if path == "." { "<root>".to_string() } else { path };
        PlannerError::Validation(format!(
            "Parameter validation failed at {}: {}",
            location,
            e.inner()
        ))
    })
}

/// Strict JSON Schema validator
#[derive(Debug, Clone, Default)]
pub struct StrictValidator {
    schemas: HashMap<String, Value>,
}

impl StrictValidator {
    /// Create a new strict validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema for a tool
    pub fn register_schema(&mut self, tool_name: &str, schema: Value) {
        self.schemas.insert(tool_name.to_string(), schema);
    }

    pub fn with_schema(mut self, tool_name: &str, schema: Value) -> Self {
        self.register_schema(tool_name, schema);
        self
    }

    pub fn has_schema(&self, tool_name: &str) -> bool {
        self.schemas.contains_key(tool_name)
    }

    /// Check parameters against the tool's registered schema, then decode them
    pub fn validate<T: DeserializeOwned>(&self, tool_name: &str, params: Value) -> Result<T> {
        match self.schemas.get(tool_name) {
            Some(schema) => validate_against_schema(tool_name, schema, &params)?,
            None => debug!(
                "No schema registered for '{}', falling back to serde validation",
                tool_name
            ),
        }

        serde_first_validate(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        nested: Nested,
    }

    #[derive(Debug, Deserialize)]
    struct Nested {
        count: u32,
    }

    #[test]
    fn test_serde_first_reports_path() {
        let err = Validator::SerdeFirst
            .validate::<Sample>("sample", json!({"name": "x", "nested": {"count": "many"}}))
            .unwrap_err();

        assert!(matches!(err, PlannerError::Validation(_)));
        assert!(err.to_string().contains("nested.count"), "{}", err);
    }

    #[test]
    fn test_strict_rejects_schema_violations() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "nested": {"type": "object"}
            },
            "required": ["name", "nested"]
        });
        let strict = StrictValidator::new().with_schema("sample", schema);
        assert!(strict.has_schema("sample"));
        let validator = Validator::Strict(strict);
        assert!(validator.is_strict());

        let err = validator
            .validate::<Sample>("sample", json!({"name": 7}))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`sample` schema"), "{}", message);

        let ok: Sample = validator
            .validate("sample", json!({"name": "ok", "nested": {"count": 2}}))
            .unwrap();
        assert_eq!(ok.name, "ok");
        assert_eq!(ok.nested.count, 2);
    }

    #[test]
    fn test_strict_without_schema_falls_back() {
        let validator = Validator::Strict(StrictValidator::new());
        let ok: Nested = validator.validate("unknown", json!({"count": 1})).unwrap();
        assert_eq!(ok.count, 1);
    }
}
