use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON object alias used for the loosely structured documents.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Packing list: category name to the items under it.
pub type PackingList = BTreeMap<String, Vec<String>>;

/// The four document kinds produced for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Insights,
    Itinerary,
    Budget,
    Packing,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Insights => "insights",
            DocumentKind::Itinerary => "itinerary",
            DocumentKind::Budget => "budget",
            DocumentKind::Packing => "packing",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled activity within a day. Every field is optional in the model
/// output; missing values deserialize to their empty defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub description: String,
    pub duration: String,
    pub cost: f64,
    pub location: String,
    pub tips: String,
}

/// One generated day of the itinerary.
///
/// `date` and `day_of_week` are derived fields: the normalizer overwrites
/// them from the trip start date and the entry's position in the sequence,
/// never from what the model emitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub day_of_week: String,
    pub title: String,
    pub morning: Vec<Activity>,
    pub afternoon: Vec<Activity>,
    pub evening: Vec<Activity>,
    pub transportation: String,
    pub total_cost: f64,
    pub energy_level: String,
    pub weather_considerations: String,
    pub flexibility_note: String,
}

/// Aggregate of the four concurrently generated documents.
///
/// Each field is populated independently; a failed task leaves its field at
/// the empty default and appends a message to `errors`. The aggregator never
/// stores error markers inside the document fields themselves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripPlan {
    pub insights: JsonMap,
    pub itinerary: Vec<DayPlan>,
    pub budget: JsonMap,
    pub packing: PackingList,
    pub errors: Vec<String>,
}

impl TripPlan {
    /// True when every document was produced and no task failed.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
            && !self.insights.is_empty()
            && !self.itinerary.is_empty()
            && !self.budget.is_empty()
            && !self.packing.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_day_plan_deserializes_with_defaults() {
        let day: DayPlan = serde_json::from_value(json!({
            "day": 2,
            "title": "Left Bank wandering",
            "morning": [{"time": "9:00 AM", "activity": "Cafe breakfast"}]
        }))
        .unwrap();

        assert_eq!(day.day, 2);
        assert_eq!(day.title, "Left Bank wandering");
        assert_eq!(day.morning.len(), 1);
        assert_eq!(day.morning[0].activity, "Cafe breakfast");
        assert_eq!(day.morning[0].cost, 0.0);
        assert!(day.afternoon.is_empty());
        assert!(day.date.is_empty());
    }

    #[test]
    fn test_plan_completeness() {
        let mut plan = TripPlan::default();
        assert!(!plan.is_complete());
        assert!(!plan.has_failures());

        plan.insights.insert("description".to_string(), json!("x"));
        plan.itinerary.push(DayPlan::default());
        plan.budget.insert("total_per_person".to_string(), json!(900));
        plan.packing
            .insert("clothing".to_string(), vec!["rain jacket".to_string()]);
        assert!(plan.is_complete());

        plan.errors.push("budget: model call failed".to_string());
        assert!(!plan.is_complete());
        assert!(plan.has_failures());
    }
}
