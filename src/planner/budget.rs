use super::rates::{
    RateTable, ACCOMMODATION_PER_NIGHT, ACTIVITIES_PER_PERSON_DAY, CONTINGENCY_PERCENT,
    MEALS_PER_PERSON_DAY, SHOPPING_PER_PERSON, TRANSPORT_PER_PERSON_DAY,
};
use crate::{
    error::{PlannerError, Result},
    types::{budget::BudgetResult, money::Amount, trip::Tier, trip::TripParameters},
};
use tracing::debug;

/// Estimate the cost of a trip across all budget categories.
///
/// Accommodation is priced per night for a single room, meals, transport and
/// activities per person per day, shopping as a flat per-person amount. A
/// contingency of 10% of those five is added on top. Tiers missing from a
/// rate table price their category at zero.
pub fn estimate_budget(params: &TripParameters) -> Result<BudgetResult> {
    if params.duration == 0 {
        return Err(PlannerError::invalid("duration must be at least 1 day"));
    }
    if params.travelers == 0 {
        return Err(PlannerError::invalid(
            "travelers must be at least 1 person",
        ));
    }

    let duration = u64::from(params.duration);
    let travelers = u64::from(params.travelers);
    let person_days = duration * travelers;

    let accommodation = scaled(&ACCOMMODATION_PER_NIGHT, &params.accommodation, duration)?;
    let food = scaled(&MEALS_PER_PERSON_DAY, &params.meals, person_days)?;
    let transport = scaled(&TRANSPORT_PER_PERSON_DAY, &params.transport, person_days)?;
    let activities = scaled(&ACTIVITIES_PER_PERSON_DAY, &params.activities, person_days)?;
    let shopping = scaled(&SHOPPING_PER_PERSON, &params.shopping, travelers)?;

    let subtotal = [accommodation, food, transport, activities, shopping]
        .into_iter()
        .try_fold(Amount::ZERO, Amount::checked_add)
        .ok_or_else(overflow)?;
    let contingency = subtotal.percent(CONTINGENCY_PERCENT);
    let total = subtotal.checked_add(contingency).ok_or_else(overflow)?;

    debug!(
        "Estimated budget for '{}': {} days, {} travelers, total {}",
        params.destination, params.duration, params.travelers, total
    );

    Ok(BudgetResult {
        accommodation,
        food,
        transport,
        activities,
        shopping,
        contingency,
        total,
        duration: params.duration,
        travelers: params.travelers,
    })
}

fn scaled(table: &RateTable, tier: &Tier, factor: u64) -> Result<Amount> {
    table.rate(tier).checked_mul(factor).ok_or_else(overflow)
}

fn overflow() -> PlannerError {
    PlannerError::invalid("trip is too large to price")
}
