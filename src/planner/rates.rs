//! Declarative tier → rate tables.
//!
//! Every price the planner knows about lives here. Table entries are whole
//! currency units; lookups on a label missing from a table resolve to zero.

use crate::types::{money::Amount, trip::Tier};
use tracing::debug;

/// A named mapping from tier labels to amounts
#[derive(Debug, Clone, Copy)]
pub struct RateTable {
    name: &'static str,
    entries: &'static [(&'static str, u64)],
}

impl RateTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, u64)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Tier labels this table prices, in declaration order
    pub fn tiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn get(&self, tier: &str) -> Option<Amount> {
        self.entries
            .iter()
            .find(|(label, _)| *label == tier)
            .map(|(_, units)| Amount::from_units(*units))
    }

    /// Rate for `tier`, or zero when the label is unknown or unselected
    pub fn rate(&self, tier: &Tier) -> Amount {
        match self.get(tier.as_str()) {
            Some(amount) => amount,
            None => {
                debug!(
                    "No '{}' rate for tier '{}', defaulting to zero",
                    self.name, tier
                );
                Amount::ZERO
            }
        }
    }
}

/// Per night, one room regardless of party size
pub static ACCOMMODATION_PER_NIGHT: RateTable = RateTable::new(
    "accommodation",
    &[
        ("budget", 1500),
        ("mid", 4000),
        ("luxury", 8000),
    ],
);

/// Per person per day
pub static MEALS_PER_PERSON_DAY: RateTable = RateTable::new(
    "meals",
    &[
        ("budget", 800),
        ("mid", 2000),
        ("luxury", 4000),
    ],
);

/// Per person per day
pub static TRANSPORT_PER_PERSON_DAY: RateTable = RateTable::new(
    "transport",
    &[
        ("local", 500),
        ("private", 2000),
        ("luxury", 3500),
    ],
);

/// Per person per day
pub static ACTIVITIES_PER_PERSON_DAY: RateTable = RateTable::new(
    "activities",
    &[
        ("low", 1000),
        ("medium", 2500),
        ("high", 5000),
    ],
);

/// Flat per person for the whole trip
pub static SHOPPING_PER_PERSON: RateTable = RateTable::new(
    "shopping",
    &[
        ("none", 0),
        ("minimal", 1000),
        ("moderate", 3000),
        ("extensive", 6000),
    ],
);

/// Percentage of the priced subtotal added as a buffer
pub const CONTINGENCY_PERCENT: u64 = 10;

pub static BREAKFAST: RateTable = RateTable::new(
    "breakfast",
    &[
        ("budget", 200),
        ("mid", 500),
        ("luxury", 800),
    ],
);

pub static PRIMARY_ATTRACTION: RateTable = RateTable::new(
    "primary attraction",
    &[
        ("budget", 300),
        ("mid", 600),
        ("luxury", 1200),
    ],
);

pub static LUNCH: RateTable = RateTable::new(
    "lunch",
    &[
        ("budget", 300),
        ("mid", 700),
        ("luxury", 1200),
    ],
);

pub static SECONDARY_ATTRACTION: RateTable = RateTable::new(
    "secondary attraction",
    &[
        ("budget", 200),
        ("mid", 400),
        ("luxury", 800),
    ],
);

pub static DINNER: RateTable = RateTable::new(
    "dinner",
    &[
        ("budget", 400),
        ("mid", 1000),
        ("luxury", 2000),
    ],
);

/// Budget tiers the itinerary template prices
pub const ITINERARY_TIERS: [&str; 3] = ["budget", "mid", "luxury"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tiers_resolve() {
        assert_eq!(
            ACCOMMODATION_PER_NIGHT.rate(&Tier::from("mid")),
            Amount::from_units(4000)
        );
        assert_eq!(
            TRANSPORT_PER_PERSON_DAY.rate(&Tier::from("private")),
            Amount::from_units(2000)
        );
        assert_eq!(
            SHOPPING_PER_PERSON.rate(&Tier::from("extensive")),
            Amount::from_units(6000)
        );
    }

    #[test]
    fn test_unknown_and_unselected_tiers_are_zero() {
        assert_eq!(MEALS_PER_PERSON_DAY.rate(&Tier::from("gourmet")), Amount::ZERO);
        assert_eq!(MEALS_PER_PERSON_DAY.rate(&Tier::unselected()), Amount::ZERO);
        // Matching is exact
        assert_eq!(MEALS_PER_PERSON_DAY.rate(&Tier::from("Mid")), Amount::ZERO);
    }

    #[test]
    fn test_itinerary_tables_cover_every_tier() {
        for table in [&BREAKFAST, &PRIMARY_ATTRACTION, &LUNCH, &SECONDARY_ATTRACTION, &DINNER] {
            let tiers: Vec<_> = table.tiers().collect();
            assert_eq!(tiers, ITINERARY_TIERS, "table {}", table.name());
        }
    }
}
