use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::types::plan::TripPlan;
use crate::types::trip::{BudgetLevel, TripRequest};

/// Downloadable bundle of a trip request and everything generated for it.
///
/// Serialized as formatted JSON on demand; produced for the traveler to keep
/// and never read back by this system.
#[derive(Debug, Clone, Serialize)]
pub struct TripDocument {
    pub origin: String,
    pub destination: String,
    pub dates: String,
    pub start_date: NaiveDate,
    pub days: u32,
    pub travelers: u32,
    pub budget_level: BudgetLevel,
    pub preferences: Vec<String>,
    #[serde(flatten)]
    pub plan: TripPlan,
}

impl TripDocument {
    pub fn new(request: &TripRequest, plan: TripPlan) -> Self {
        let dates = format!(
            "{} - {}",
            request.start_date.format("%B %d, %Y"),
            request.end_date().format("%B %d, %Y")
        );
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            dates,
            start_date: request.start_date,
            days: request.day_count,
            travelers: request.traveler_count,
            budget_level: request.budget_level,
            preferences: request.preferences.clone(),
            plan,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested file name for the saved document.
    pub fn file_name(&self) -> String {
        format!(
            "trip_{}_{}_{}.json",
            slug(&self.origin),
            slug(&self.destination),
            self.start_date.format("%Y%m%d")
        )
    }

    /// Plain-text summary for sharing with travel companions: the route and
    /// headline numbers plus day titles for up to the first five days.
    pub fn share_summary(&self) -> String {
        let mut text = format!(
            "Trip to {}\n{}\nFrom {}\n{} travelers\n{} budget\n\nDaily Highlights:\n",
            self.destination, self.dates, self.origin, self.travelers, self.budget_level
        );
        for day in self.plan.itinerary.iter().take(5) {
            let title = if day.title.is_empty() {
                "Explore"
            } else {
                &day.title
            };
            text.push_str(&format!("Day {}: {}\n", day.day, title));
        }
        text
    }
}

fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::plan::DayPlan;

    fn request() -> TripRequest {
        TripRequest::new(
            "New York",
            "Paris",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            3,
            2,
            BudgetLevel::MidRange,
            vec!["Culture".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_file_name_is_filesystem_friendly() {
        let doc = TripDocument::new(&request(), TripPlan::default());
        assert_eq!(doc.file_name(), "trip_new-york_paris_20240601.json");
    }

    #[test]
    fn test_share_summary_lists_day_titles() {
        let mut plan = TripPlan::default();
        for (i, title) in ["Historic Heart", "", "Versailles"].iter().enumerate() {
            plan.itinerary.push(DayPlan {
                day: i as u32 + 1,
                title: title.to_string(),
                ..DayPlan::default()
            });
        }
        let doc = TripDocument::new(&request(), plan);
        let summary = doc.share_summary();

        assert!(summary.contains("Trip to Paris"));
        assert!(summary.contains("From New York"));
        assert!(summary.contains("Day 1: Historic Heart"));
        assert!(summary.contains("Day 2: Explore"));
        assert!(summary.contains("Day 3: Versailles"));
    }

    #[test]
    fn test_pretty_json_includes_plan_fields() {
        let doc = TripDocument::new(&request(), TripPlan::default());
        let json = doc.to_pretty_json().unwrap();
        assert!(json.contains("\"itinerary\""));
        assert!(json.contains("\"June 01, 2024 - June 04, 2024\""));
    }
}
