use super::money::Amount;
use serde::{Deserialize, Serialize};

/// Cost categories shown in a budget breakdown, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
    Contingency,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 6] = [
        BudgetCategory::Accommodation,
        BudgetCategory::Food,
        BudgetCategory::Transport,
        BudgetCategory::Activities,
        BudgetCategory::Shopping,
        BudgetCategory::Contingency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetCategory::Accommodation => "Accommodation",
            BudgetCategory::Food => "Food & Dining",
            BudgetCategory::Transport => "Transportation",
            BudgetCategory::Activities => "Activities",
            BudgetCategory::Shopping => "Shopping",
            BudgetCategory::Contingency => "Contingency",
        }
    }
}

/// Estimated trip cost split across categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub accommodation: Amount,
    pub food: Amount,
    pub transport: Amount,
    pub activities: Amount,
    pub shopping: Amount,
    /// Fixed buffer on top of the five priced categories
    pub contingency: Amount,
    pub total: Amount,
    /// Trip length the estimate was computed for
    pub duration: u32,
    pub travelers: u32,
}

/// One row of a budget breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: BudgetCategory,
    pub label: &'static str,
    pub amount: Amount,
    /// Percentage of the total, 0.0 when the total is zero
    pub share: f64,
}

impl BudgetResult {
    pub fn amount(&self, category: BudgetCategory) -> Amount {
        match category {
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Transport => self.transport,
            BudgetCategory::Activities => self.activities,
            BudgetCategory::Shopping => self.shopping,
            BudgetCategory::Contingency => self.contingency,
        }
    }

    /// Sum of the five priced categories, excluding contingency
    pub fn subtotal(&self) -> Amount {
        self.accommodation + self.food + self.transport + self.activities + self.shopping
    }

    pub fn per_person(&self) -> f64 {
        self.total.split(u64::from(self.travelers))
    }

    /// Total spread across every traveler and every day of the trip
    pub fn per_person_per_day(&self) -> f64 {
        self.total.split(self.traveler_days())
    }

    /// Whole-party cost of one day of the trip
    pub fn per_day(&self) -> f64 {
        self.total.split(u64::from(self.duration))
    }

    pub(crate) fn traveler_days(&self) -> u64 {
        u64::from(self.travelers) * u64::from(self.duration)
    }

    pub fn breakdown(&self) -> Vec<BudgetLine> {
        BudgetCategory::ALL
            .iter()
            .map(|&category| {
                let amount = self.amount(category);
                BudgetLine {
                    category,
                    label: category.label(),
                    amount,
                    share: amount.share_of(self.total),
                }
            })
            .collect()
    }
}
