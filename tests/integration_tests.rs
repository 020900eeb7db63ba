use chrono::NaiveDate;
use serde_json::json;
use trip_planner_rs::{
    estimate_budget, generate_itinerary, Amount, BudgetEstimatorTool, PlannerConfig, PlannerError,
    SlotCategory, Tool, ToolRouter, TripGenerationInput, TripParameters,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_reference_budget_estimate() {
    let params = TripParameters::new(3, 2)
        .with_destination("Goa")
        .with_accommodation("mid")
        .with_meals("mid")
        .with_transport("private")
        .with_activities("medium")
        .with_shopping("moderate");

    let result = estimate_budget(&params).unwrap();

    assert_eq!(result.accommodation, Amount::from_units(12000));
    assert_eq!(result.food, Amount::from_units(12000));
    assert_eq!(result.transport, Amount::from_units(12000));
    assert_eq!(result.activities, Amount::from_units(15000));
    assert_eq!(result.shopping, Amount::from_units(6000));
    assert_eq!(result.contingency, Amount::from_units(5700));
    assert_eq!(result.total, Amount::from_units(62700));
}

#[test]
fn test_unrecognized_tier_zeroes_only_that_category() {
    let base = TripParameters::new(2, 2)
        .with_accommodation("luxury")
        .with_meals("budget")
        .with_transport("local")
        .with_activities("low")
        .with_shopping("minimal");

    let typo = base.clone().with_meals("budjet");
    let full = estimate_budget(&base).unwrap();
    let partial = estimate_budget(&typo).unwrap();

    assert_eq!(partial.food, Amount::ZERO);
    assert_eq!(partial.accommodation, full.accommodation);
    assert_eq!(partial.transport, full.transport);
    assert!(partial.total < full.total);
}

#[test]
fn test_invalid_budget_parameters() {
    for params in [TripParameters::new(0, 1), TripParameters::new(1, 0)] {
        let err = estimate_budget(&params).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}

#[test]
fn test_one_day_itinerary() {
    let day = date(2026, 6, 15);
    let plan = generate_itinerary(&TripGenerationInput::new(day, day, 1, "mid")).unwrap();

    assert_eq!(plan.days.len(), 1);
    assert_eq!(plan.days[0].day, 1);
    assert_eq!(plan.days[0].date, day);
    assert_eq!(plan.days[0].slots.len(), 6);
    let checkins = plan.days[0]
        .slots
        .iter()
        .filter(|slot| slot.category == SlotCategory::AccommodationCheckin)
        .count();
    assert_eq!(checkins, 1);
}

#[test]
fn test_week_long_itinerary() {
    let input = TripGenerationInput::new(date(2026, 12, 28), date(2027, 1, 3), 4, "luxury")
        .with_destination("Andaman Islands")
        .with_interests(["beaches", "diving"]);
    let plan = generate_itinerary(&input).unwrap();

    assert_eq!(plan.day_count(), 7);
    assert_eq!(plan.days.last().unwrap().date, date(2027, 1, 3));
    assert_eq!(plan.slot_count(), 7 * 5 + 1);
    assert_eq!(plan.total_cost(), Amount::from_units(7 * 6000));
    assert_eq!(plan.average_daily_cost(), 6000.0);
    assert_eq!(plan.cost_per_traveler(), 10500.0);
    assert_eq!(plan.interests, vec!["beaches", "diving"]);

    for (idx, day) in plan.days.iter().enumerate() {
        assert_eq!(day.day as usize, idx + 1);
        assert_eq!(day.has_checkin(), idx == 0);
        let slot_sum: Amount = day.slots.iter().map(|slot| slot.cost).sum();
        assert_eq!(day.total_cost, slot_sum);
    }
}

#[test]
fn test_end_before_start_fails() {
    let err = generate_itinerary(&TripGenerationInput::new(
        date(2026, 6, 15),
        date(2026, 6, 14),
        2,
        "mid",
    ))
    .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidParameter(_)));
}

#[test]
fn test_generation_is_deterministic() {
    let input = TripGenerationInput::new(date(2026, 1, 1), date(2026, 1, 10), 3, "budget")
        .with_destination("Hampi");

    let first = generate_itinerary(&input).unwrap();
    let second = generate_itinerary(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_router_dispatch() {
    let router = ToolRouter::with_default_tools(&PlannerConfig::default()).unwrap();

    assert!(router.has_tool("budget_estimator"));
    assert!(router.has_tool("itinerary_generator"));
    assert!(!router.has_tool("calculator"));
    assert_eq!(
        router.tool_names(),
        vec!["budget_estimator", "itinerary_generator"]
    );

    let output = router
        .execute(
            "itinerary_generator",
            json!({
                "start_date": "2026-08-01",
                "end_date": "2026-08-01",
                "travelers": "2",
                "budget_tier": "mid"
            }),
        )
        .unwrap();
    assert_eq!(output["total_cost"], 3200.0);

    let err = router.execute("weather", json!({})).unwrap_err();
    assert_eq!(err.error_code(), "TOOL_NOT_FOUND");
}

#[test]
fn test_error_payloads() {
    let err = BudgetEstimatorTool::new()
        .execute(json!({"duration": 0, "travelers": 2}))
        .unwrap_err();

    let payload = err.to_error_payload();
    assert_eq!(payload["error"]["code"], "INVALID_PARAMETER");
    assert!(payload["error"]["message"]
        .as_str()
        .unwrap()
        .contains("duration"));
}
