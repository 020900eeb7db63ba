use super::rates::{RateTable, BREAKFAST, DINNER, LUNCH, PRIMARY_ATTRACTION, SECONDARY_ATTRACTION};
use crate::{
    error::{PlannerError, Result},
    types::{
        itinerary::{ActivitySlot, DayPlan, GeneratedItinerary, SlotCategory},
        money::Amount,
        trip::{Tier, TripGenerationInput},
    },
};
use chrono::{Days, Duration, NaiveDate, NaiveTime};
use tracing::debug;

/// Longest date range a single itinerary may cover
pub const MAX_ITINERARY_DAYS: i64 = 366;

const TRAVEL_TIME: &str = "2-3 hours";

/// Where a slot takes place
#[derive(Debug, Clone, Copy)]
enum Venue {
    Fixed(&'static str),
    Destination,
}

#[derive(Debug)]
struct SlotTemplate {
    key: &'static str,
    name: &'static str,
    /// Append the day number to the name
    numbered: bool,
    category: SlotCategory,
    start_minute: i64,
    duration_minutes: u32,
    rates: Option<&'static RateTable>,
    description: &'static str,
    venue: Venue,
}

static DAILY_TEMPLATE: [SlotTemplate; 5] = [
    SlotTemplate {
        key: "breakfast",
        name: "Breakfast",
        numbered: false,
        category: SlotCategory::Meal,
        start_minute: 8 * 60,
        duration_minutes: 60,
        rates: Some(&BREAKFAST),
        description: "Start your day with a delicious local breakfast",
        venue: Venue::Fixed("Local restaurant near hotel"),
    },
    SlotTemplate {
        key: "attraction1",
        name: "Main Attraction",
        numbered: true,
        category: SlotCategory::Attraction,
        start_minute: 10 * 60,
        duration_minutes: 180,
        rates: Some(&PRIMARY_ATTRACTION),
        description: "Visit the most popular attractions based on your interests",
        venue: Venue::Destination,
    },
    SlotTemplate {
        key: "lunch",
        name: "Lunch",
        numbered: false,
        category: SlotCategory::Meal,
        start_minute: 13 * 60,
        duration_minutes: 60,
        rates: Some(&LUNCH),
        description: "Enjoy authentic local cuisine",
        venue: Venue::Fixed("Recommended local restaurant"),
    },
    SlotTemplate {
        key: "attraction2",
        name: "Secondary Attraction",
        numbered: true,
        category: SlotCategory::Attraction,
        start_minute: 15 * 60,
        duration_minutes: 120,
        rates: Some(&SECONDARY_ATTRACTION),
        description: "Explore additional sights and experiences",
        venue: Venue::Destination,
    },
    SlotTemplate {
        key: "dinner",
        name: "Dinner",
        numbered: false,
        category: SlotCategory::Meal,
        start_minute: 19 * 60,
        duration_minutes: 90,
        rates: Some(&DINNER),
        description: "End your day with a memorable dining experience",
        venue: Venue::Fixed("Local restaurant"),
    },
];

/// Prepended to the first day only; always free
static CHECKIN: SlotTemplate = SlotTemplate {
    key: "checkin",
    name: "Hotel Check-in",
    numbered: false,
    category: SlotCategory::AccommodationCheckin,
    start_minute: 14 * 60,
    duration_minutes: 30,
    rates: None,
    description: "Check into your accommodation",
    venue: Venue::Fixed("Hotel/Resort"),
};

impl SlotTemplate {
    fn instantiate(&self, day: u32, tier: &Tier, destination: &str) -> ActivitySlot {
        let name = if self.numbered {
            format!("{} {}", self.name, day)
        } else {
            self.name.to_string()
        };
        let location = match self.venue {
            Venue::Fixed(place) => place.to_string(),
            Venue::Destination => destination.to_string(),
        };

        ActivitySlot {
            id: format!("day-{}-{}", day, self.key),
            name,
            category: self.category,
            start_time: NaiveTime::default() + Duration::minutes(self.start_minute),
            duration_minutes: self.duration_minutes,
            cost: self.rates.map_or(Amount::ZERO, |table| table.rate(tier)),
            description: self.description.to_string(),
            location,
        }
    }
}

/// Number of calendar days in the inclusive range, validated
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> Result<usize> {
    let span = end.signed_duration_since(start).num_days();
    if span < 0 {
        return Err(PlannerError::invalid(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }

    let days = span + 1;
    if days > MAX_ITINERARY_DAYS {
        return Err(PlannerError::invalid(format!(
            "itinerary covers {} days, at most {} are supported",
            days, MAX_ITINERARY_DAYS
        )));
    }

    Ok(days as usize)
}

/// Build a day-by-day plan for every date in `[start_date, end_date]`.
///
/// Each day follows the same five-slot template priced by the trip's budget
/// tier; the first day also opens with a free hotel check-in. Slot costs are
/// group prices and do not scale with the number of travelers. The output is
/// fully determined by the input.
pub fn generate_itinerary(input: &TripGenerationInput) -> Result<GeneratedItinerary> {
    if input.travelers == 0 {
        return Err(PlannerError::invalid(
            "travelers must be at least 1 person",
        ));
    }
    let day_count = inclusive_day_count(input.start_date, input.end_date)?;

    let days = (0..day_count as u64)
        .map(|offset| -> Result<DayPlan> {
            let date = input
                .start_date
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| {
                    PlannerError::invalid(format!(
                        "day {} after {} is not a representable date",
                        offset, input.start_date
                    ))
                })?;
            Ok(plan_day(offset as u32 + 1, date, input))
        })
        .collect::<Result<Vec<DayPlan>>>()?;

    debug!(
        "Generated {}-day itinerary for '{}' at tier '{}'",
        days.len(),
        input.destination,
        input.budget_tier
    );

    Ok(GeneratedItinerary {
        destination: input.destination.clone(),
        start_date: input.start_date,
        end_date: input.end_date,
        travelers: input.travelers,
        budget_tier: input.budget_tier.clone(),
        interests: input.interests.clone(),
        days,
    })
}

fn plan_day(day: u32, date: NaiveDate, input: &TripGenerationInput) -> DayPlan {
    let first_day = (day == 1).then_some(&CHECKIN);

    let slots: Vec<ActivitySlot> = first_day
        .into_iter()
        .chain(DAILY_TEMPLATE.iter())
        .map(|template| template.instantiate(day, &input.budget_tier, &input.destination))
        .collect();
    let total_cost = slots.iter().map(|slot| slot.cost).sum();

    DayPlan {
        day,
        date,
        slots,
        total_cost,
        travel_time: TRAVEL_TIME.to_string(),
    }
}
