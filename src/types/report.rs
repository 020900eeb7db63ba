use super::{budget::BudgetResult, itinerary::GeneratedItinerary};

impl BudgetResult {
    /// Render a human-readable budget summary using `symbol` as currency prefix
    pub fn report(&self, symbol: &str) -> String {
        let mut lines = Vec::new();

        lines.push("=== Budget Estimate ===".to_string());
        lines.push(format!(
            "Total: {} for {} {} x {} {}",
            self.total.display_with(symbol),
            self.travelers,
            if self.travelers == 1 { "person" } else { "people" },
            self.duration,
            if self.duration == 1 { "day" } else { "days" },
        ));
        lines.push(format!(
            "Per day: {} for the whole party",
            self.total
                .divided_by(u64::from(self.duration))
                .display_with(symbol)
        ));

        lines.push(String::new());
        lines.push("--- Breakdown ---".to_string());

        for line in self.breakdown() {
            lines.push(format!(
                "{:<16} {:>16} {:>6.1}%",
                line.label,
                line.amount.display_with(symbol),
                line.share
            ));
        }

        lines.push(String::new());
        lines.push("--- Per Person ---".to_string());
        lines.push(format!(
            "Per person:         {}",
            self.total
                .divided_by(u64::from(self.travelers))
                .display_with(symbol)
        ));
        lines.push(format!(
            "Per person per day: {}",
            self.total
                .divided_by(self.traveler_days())
                .display_with(symbol)
        ));

        lines.join("\n")
    }
}

impl GeneratedItinerary {
    /// Render the itinerary day by day
    pub fn report(&self, symbol: &str) -> String {
        let mut lines = Vec::new();

        let destination = if self.destination.is_empty() {
            "your destination"
        } else {
            self.destination.as_str()
        };

        lines.push(format!("=== Itinerary: {} ===", destination));
        lines.push(format!(
            "{} to {} ({} days, {} travelers, tier '{}')",
            self.start_date,
            self.end_date,
            self.day_count(),
            self.travelers,
            self.budget_tier
        ));
        if !self.interests.is_empty() {
            lines.push(format!("Interests: {}", self.interests.join(", ")));
        }

        for day in &self.days {
            lines.push(String::new());
            lines.push(format!(
                "--- Day {} ({}) - {} ---",
                day.day,
                day.date.format("%a %Y-%m-%d"),
                day.total_cost.display_with(symbol)
            ));

            for slot in &day.slots {
                lines.push(format!(
                    "  {} {:<24} {:>6} {:>12}  {:<21} @ {}",
                    slot.start_time.format("%H:%M"),
                    slot.name,
                    slot.duration_label(),
                    slot.cost.display_with(symbol),
                    slot.category.as_str(),
                    slot.location
                ));
            }
            lines.push(format!("  Travel time: {}", day.travel_time));
        }

        lines.push(String::new());
        lines.push("--- Trip Summary ---".to_string());
        let total = self.total_cost();
        lines.push(format!("Total: {}", total.display_with(symbol)));
        lines.push(format!(
            "Average per day: {}",
            total
                .divided_by(self.day_count() as u64)
                .display_with(symbol)
        ));
        lines.push(format!(
            "Per traveler:    {}",
            total
                .divided_by(u64::from(self.travelers))
                .display_with(symbol)
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::planner::{estimate_budget, generate_itinerary};
    use crate::types::trip::{TripGenerationInput, TripParameters};
    use chrono::NaiveDate;

    #[test]
    fn test_budget_report_lists_every_category() {
        let params = TripParameters::new(3, 2)
            .with_accommodation("mid")
            .with_meals("mid")
            .with_transport("private")
            .with_activities("medium")
            .with_shopping("moderate");
        let report = estimate_budget(&params).unwrap().report("₹");

        assert!(report.contains("Total: ₹62,700.00 for 2 people x 3 days"));
        for label in ["Accommodation", "Food & Dining", "Transportation", "Shopping", "Contingency"] {
            assert!(report.contains(label), "missing {}", label);
        }
        assert!(report.contains("Per day: ₹20,900.00 for the whole party"), "{}", report);
        assert!(report.contains("Per person:         ₹31,350.00"), "{}", report);
        assert!(report.contains("Per person per day: ₹10,450.00"), "{}", report);
    }

    #[test]
    fn test_itinerary_report_has_each_day() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let input = TripGenerationInput::new(start, end, 2, "mid")
            .with_destination("Udaipur")
            .with_interests(["history"]);
        let report = generate_itinerary(&input).unwrap().report("$");

        assert!(report.contains("=== Itinerary: Udaipur ==="));
        assert!(report.contains("Interests: history"));
        assert!(report.contains("--- Day 1 (Sun 2026-03-01) - $3,200.00 ---"));
        assert!(report.contains("--- Day 2 (Mon 2026-03-02)"));
        assert!(report.contains("14:00 Hotel Check-in"));
        assert!(report.contains("Total: $6,400.00"));
        assert!(report.contains("accommodation-checkin"));
        assert!(report.contains("Average per day: $3,200.00"), "{}", report);
        assert!(report.contains("Per traveler:    $3,200.00"), "{}", report);
    }

    #[test]
    fn test_itinerary_report_groups_large_averages() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let report = generate_itinerary(&TripGenerationInput::new(start, end, 1, "luxury"))
            .unwrap()
            .report("₹");

        assert!(report.contains("Total: ₹18,000.00"));
        assert!(report.contains("Average per day: ₹6,000.00"), "{}", report);
        assert!(report.contains("Per traveler:    ₹18,000.00"), "{}", report);
    }
}
