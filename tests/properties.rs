use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use trip_planner_rs::{
    estimate_budget, generate_itinerary, Amount, PlannerError, TripGenerationInput,
    TripParameters,
};

fn tier_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("budget".to_string()),
        Just("mid".to_string()),
        Just("luxury".to_string()),
        Just("local".to_string()),
        Just("private".to_string()),
        Just("low".to_string()),
        Just("medium".to_string()),
        Just("high".to_string()),
        Just("none".to_string()),
        Just("minimal".to_string()),
        Just("moderate".to_string()),
        Just("extensive".to_string()),
        "[a-z]{0,8}",
    ]
}

proptest! {
    #[test]
    fn test_total_is_exact_sum(
        duration in 1u32..60,
        travelers in 1u32..20,
        accommodation in tier_label(),
        meals in tier_label(),
        transport in tier_label(),
        activities in tier_label(),
        shopping in tier_label(),
    ) {
        let params = TripParameters::new(duration, travelers)
            .with_accommodation(accommodation)
            .with_meals(meals)
            .with_transport(transport)
            .with_activities(activities)
            .with_shopping(shopping);
        let result = estimate_budget(&params).unwrap();

        let five = result.accommodation.minor_units()
            + result.food.minor_units()
            + result.transport.minor_units()
            + result.activities.minor_units()
            + result.shopping.minor_units();

        prop_assert_eq!(result.subtotal().minor_units(), five);
        prop_assert_eq!(result.contingency.minor_units() * 10, five);
        prop_assert_eq!(result.total.minor_units(), five + result.contingency.minor_units());
    }

    #[test]
    fn test_unknown_tiers_price_zero(label in "[A-Z]{1,6}", duration in 1u32..30, travelers in 1u32..10) {
        // Upper-case labels never match the lower-case tables
        let params = TripParameters::new(duration, travelers)
            .with_accommodation(label.clone())
            .with_meals(label.clone())
            .with_transport(label.clone())
            .with_activities(label.clone())
            .with_shopping(label);
        let result = estimate_budget(&params).unwrap();
        prop_assert_eq!(result.total, Amount::ZERO);
    }

    #[test]
    fn test_itinerary_shape(
        offset in 0i64..2000,
        span in 0i64..45,
        travelers in 1u32..12,
        tier in prop_oneof![Just("budget"), Just("mid"), Just("luxury"), Just("other")],
    ) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset);
        let end = start + Duration::days(span);
        let input = TripGenerationInput::new(start, end, travelers, tier);

        let plan = generate_itinerary(&input).unwrap();
        prop_assert_eq!(plan.day_count() as i64, span + 1);
        prop_assert_eq!(plan.slot_count() as i64, (span + 1) * 5 + 1);

        let mut ids = std::collections::HashSet::new();
        for (idx, day) in plan.days.iter().enumerate() {
            prop_assert_eq!(day.date, start + Duration::days(idx as i64));
            prop_assert_eq!(day.has_checkin(), idx == 0);
            for slot in &day.slots {
                prop_assert!(ids.insert(slot.id.clone()));
            }
        }

        prop_assert_eq!(generate_itinerary(&input).unwrap(), plan);
    }

    #[test]
    fn test_reversed_ranges_fail(gap in 1i64..400) {
        let end = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let start = end + Duration::days(gap);
        let err = generate_itinerary(&TripGenerationInput::new(start, end, 1, "mid")).unwrap_err();
        prop_assert!(matches!(err, PlannerError::InvalidParameter(_)));
    }
}
