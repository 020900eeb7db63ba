use super::{money::Amount, trip::Tier};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Kind of activity occupying a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotCategory {
    Attraction,
    Meal,
    Transport,
    AccommodationCheckin,
}

impl SlotCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Attraction => "attraction",
            SlotCategory::Meal => "meal",
            SlotCategory::Transport => "transport",
            SlotCategory::AccommodationCheckin => "accommodation-checkin",
        }
    }
}

/// One priced, timed unit of a day's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySlot {
    /// Stable identifier, unique within an itinerary (`day-1-breakfast`)
    pub id: String,
    pub name: String,
    pub category: SlotCategory,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub cost: Amount,
    pub description: String,
    pub location: String,
}

impl ActivitySlot {
    /// Human-readable duration such as `1h 30m`
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        }
    }
}

/// A single calendar day of an itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day counter
    pub day: u32,
    pub date: NaiveDate,
    pub slots: Vec<ActivitySlot>,
    /// Sum of the slot costs
    pub total_cost: Amount,
    /// Rough time spent moving between slots
    pub travel_time: String,
}

impl DayPlan {
    pub fn has_checkin(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.category == SlotCategory::AccommodationCheckin)
    }
}

/// Day-by-day plan for a whole trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget_tier: Tier,
    pub interests: Vec<String>,
    /// One entry per calendar day, ascending
    pub days: Vec<DayPlan>,
}

impl GeneratedItinerary {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|day| day.slots.len()).sum()
    }

    pub fn total_cost(&self) -> Amount {
        self.days.iter().map(|day| day.total_cost).sum()
    }

    pub fn average_daily_cost(&self) -> f64 {
        self.total_cost().split(self.days.len() as u64)
    }

    /// Trip total divided evenly; slot costs themselves are group prices
    pub fn cost_per_traveler(&self) -> f64 {
        self.total_cost().split(u64::from(self.travelers))
    }
}
