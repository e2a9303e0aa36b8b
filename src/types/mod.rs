pub mod plan;
pub mod report;
pub mod trip;

pub use plan::{Activity, DayPlan, DocumentKind, JsonMap, PackingList, TripPlan};
pub use report::TripDocument;
pub use trip::{BudgetLevel, Season, TripRequest};
