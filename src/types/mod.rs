pub mod budget;
pub mod forms;
pub mod itinerary;
pub mod money;
mod report;
pub mod trip;

pub use budget::{BudgetCategory, BudgetLine, BudgetResult};
pub use forms::{BudgetForm, FormNumber, ItineraryForm};
pub use itinerary::{ActivitySlot, DayPlan, GeneratedItinerary, SlotCategory};
pub use money::Amount;
pub use trip::{Tier, TripGenerationInput, TripParameters};
