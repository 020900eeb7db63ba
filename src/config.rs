//! Runtime configuration for the planner surfaces (CLI and tool router).
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by the caller; command line flags override them.

use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};

pub const CURRENCY_ENV: &str = "TRIP_PLANNER_CURRENCY";
pub const FORMAT_ENV: &str = "TRIP_PLANNER_FORMAT";
pub const STRICT_ENV: &str = "TRIP_PLANNER_STRICT";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PlannerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlannerError::Config(format!(
                "unknown output format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Prefix used when rendering amounts; display only, no conversion
    pub currency_symbol: String,
    pub format: OutputFormat,
    /// Check tool payloads against their JSON Schema before decoding
    pub strict_validation: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            format: OutputFormat::Text,
            strict_validation: false,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(symbol) = lookup(CURRENCY_ENV) {
            config.currency_symbol = symbol;
        }
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        if let Some(strict) = lookup(STRICT_ENV) {
            config.strict_validation = parse_flag(STRICT_ENV, &strict)?;
        }

        Ok(config)
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(PlannerError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
