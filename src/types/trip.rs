use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price-level label chosen by the traveler (e.g. `"mid"`, `"private"`).
///
/// Labels are matched exactly against a rate table. An empty label means the
/// category was left unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(String);

impl Tier {
    pub fn new(label: impl Into<String>) -> Self {
        Tier(label.into())
    }

    /// The unselected tier
    pub fn unselected() -> Self {
        Tier(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unselected(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Tier {
    fn from(label: &str) -> Self {
        Tier(label.to_string())
    }
}

impl From<String> for Tier {
    fn from(label: String) -> Self {
        Tier(label)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inputs to the budget estimator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Free-text destination label, never checked against a catalog
    #[serde(default)]
    pub destination: String,
    /// Trip length in days
    pub duration: u32,
    /// Number of people travelling
    pub travelers: u32,
    #[serde(default)]
    pub accommodation: Tier,
    #[serde(default)]
    pub meals: Tier,
    #[serde(default)]
    pub transport: Tier,
    #[serde(default)]
    pub activities: Tier,
    #[serde(default)]
    pub shopping: Tier,
}

impl TripParameters {
    /// Parameters with every tier unselected
    pub fn new(duration: u32, travelers: u32) -> Self {
        Self {
            destination: String::new(),
            duration,
            travelers,
            accommodation: Tier::unselected(),
            meals: Tier::unselected(),
            transport: Tier::unselected(),
            activities: Tier::unselected(),
            shopping: Tier::unselected(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_accommodation(mut self, tier: impl Into<Tier>) -> Self {
        self.accommodation = tier.into();
        self
    }

    pub fn with_meals(mut self, tier: impl Into<Tier>) -> Self {
        self.meals = tier.into();
        self
    }

    pub fn with_transport(mut self, tier: impl Into<Tier>) -> Self {
        self.transport = tier.into();
        self
    }

    pub fn with_activities(mut self, tier: impl Into<Tier>) -> Self {
        self.activities = tier.into();
        self
    }

    pub fn with_shopping(mut self, tier: impl Into<Tier>) -> Self {
        self.shopping = tier.into();
        self
    }
}

/// Inputs to the itinerary generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripGenerationInput {
    #[serde(default)]
    pub destination: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip, inclusive
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget_tier: Tier,
    /// Traveler interests; carried through to the plan but never priced
    #[serde(default)]
    pub interests: Vec<String>,
}

impl TripGenerationInput {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        travelers: u32,
        budget_tier: impl Into<Tier>,
    ) -> Self {
        Self {
            destination: String::new(),
            start_date,
            end_date,
            travelers,
            budget_tier: budget_tier.into(),
            interests: Vec::new(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }
}
