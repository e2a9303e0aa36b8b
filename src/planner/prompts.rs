//! Prompt construction for the four travel documents.
//!
//! Each builder is a pure function from trip parameters to an instruction
//! string plus generation parameters. The requested JSON shape is spelled
//! out textually so the structured-completion endpoint can be held to it.

use crate::types::trip::TripRequest;

const INSIGHTS_SYSTEM: &str =
    "You are an expert travel guide providing detailed, accurate information.";

const ITINERARY_SYSTEM: &str = "You are a professional travel planner creating detailed, \
     realistic itineraries with specific recommendations.";

/// An instruction string plus the generation parameters to send with it.
#[derive(Clone, Debug)]
pub struct PromptSpec {
    pub system: Option<&'static str>,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Destination overview: attractions, cuisine, culture, safety, logistics.
pub fn insights_prompt(destination: &str) -> PromptSpec {
    let prompt = format!(
        r#"Provide detailed travel insights for {destination} as JSON:

{{
  "description": "2-3 sentence overview of what makes this destination special",
  "best_time_to_visit": "detailed explanation with months and reasons",
  "average_daily_budget": {{"budget": 60, "mid_range": 150, "luxury": 400}},
  "top_attractions": [
    {{"name": "attraction", "description": "why visit", "time_needed": "2-3 hours", "cost": 15}}
  ],
  "local_cuisine": [
    {{"dish": "name", "description": "brief", "where": "type of place"}}
  ],
  "cultural_tips": ["important cultural insight 1", "important cultural insight 2"],
  "safety_info": {{"rating": 8, "notes": "specific safety tips"}},
  "weather_by_season": {{"spring": "...", "summer": "...", "fall": "...", "winter": "..."}},
  "transportation": {{"getting_around": "detailed transit info", "from_airport": "how to get from airport to city"}},
  "language_tips": ["useful phrase 1", "useful phrase 2"],
  "currency": "currency name and exchange tips",
  "neighborhoods": [
    {{"name": "neighborhood", "vibe": "description", "best_for": "what to do here"}}
  ]
}}

Be thorough and practical."#
    );

    PromptSpec {
        system: Some(INSIGHTS_SYSTEM),
        prompt,
        temperature: 0.7,
        max_tokens: 1500,
    }
}

/// Day-by-day itinerary with morning/afternoon/evening activity blocks.
pub fn itinerary_prompt(request: &TripRequest) -> PromptSpec {
    let prompt = format!(
        r#"Create a detailed {days}-day itinerary for {destination}.

Trip details:
- Starting from: {origin}
- Preferences: {preferences}
- Budget: {budget}
- Start date: {start_date}

For EACH day provide detailed JSON:
{{"itinerary": [{{
  "day": 1,
  "date": "{start_date}",
  "title": "Descriptive day theme (e.g., Historic Heart & Local Flavors)",
  "morning": [
    {{"time": "8:00 AM", "activity": "Breakfast at...", "description": "Why this is great, what to expect (2-3 sentences)", "duration": "1 hour", "cost": 15, "location": "neighborhood/address", "tips": "insider tip"}}
  ],
  "afternoon": [
    {{"time": "1:00 PM", "activity": "Lunch suggestion", "description": "What to try, atmosphere", "duration": "1.5 hours", "cost": 20, "location": "area", "tips": "reservation tips"}}
  ],
  "evening": [
    {{"time": "7:00 PM", "activity": "Dinner & evening plans", "description": "Evening experience details", "duration": "2-3 hours", "cost": 50, "location": "area", "tips": "what to wear, reservations"}}
  ],
  "transportation": "How to get around this day (metro lines, walking routes, etc)",
  "total_cost": 140,
  "energy_level": "moderate",
  "weather_considerations": "what to prepare for",
  "flexibility_note": "optional activities if time permits"
}}]}}

Make it realistic with proper timing, real locations, and practical advice.
Day 1 should include arrival from {origin}.
Last day should account for departure logistics.
Each activity should have meaningful descriptions, not generic statements."#,
        days = request.day_count,
        destination = request.destination,
        origin = request.origin,
        preferences = request.preferences_label(),
        budget = request.budget_level,
        start_date = request.start_date.format("%Y-%m-%d"),
    );

    PromptSpec {
        system: Some(ITINERARY_SYSTEM),
        prompt,
        temperature: 0.8,
        max_tokens: 500 * request.day_count.max(1),
    }
}

/// Cost breakdown per category with per-person and whole-party totals.
pub fn budget_prompt(request: &TripRequest) -> PromptSpec {
    let prompt = format!(
        r#"Create detailed budget breakdown for {travelers} traveler(s) in {destination} for {days} days ({budget} level).

JSON format:
{{
  "accommodation": {{"per_night": 0, "total_nights": {days}, "total": 0, "notes": "type of accommodation"}},
  "food": {{"breakfast_avg": 0, "lunch_avg": 0, "dinner_avg": 0, "daily_total": 0, "trip_total": 0}},
  "transportation": {{"airport_transfer": 0, "daily_local": 0, "total": 0, "notes": "what's included"}},
  "activities": {{"daily_avg": 0, "total": 0, "notes": "typical costs"}},
  "shopping": {{"budget": 0, "notes": "souvenirs and extras"}},
  "emergency_fund": 0,
  "total_per_person": 0,
  "total_all_travelers": 0,
  "daily_average": 0,
  "savings_tips": ["tip 1", "tip 2"]
}}

Provide realistic estimates with context."#,
        travelers = request.traveler_count,
        destination = request.destination,
        days = request.day_count,
        budget = request.budget_level,
    );

    PromptSpec {
        system: None,
        prompt,
        temperature: 0.5,
        max_tokens: 500,
    }
}

/// Packing list grouped by category, tuned to season and activities.
pub fn packing_prompt(request: &TripRequest) -> PromptSpec {
    let prompt = format!(
        r#"Create comprehensive packing list for {destination} in {season}, {days} days.
Activities: {preferences}

JSON format:
{{
  "documents": ["item with reason"],
  "clothing": ["specific items for weather/activities"],
  "footwear": ["what shoes and why"],
  "toiletries": ["essentials"],
  "electronics": ["device + accessories"],
  "medications": ["health items"],
  "accessories": ["bags, sunglasses, etc"],
  "activity_specific": ["gear for activities"],
  "optional": ["nice to have items"]
}}

Be specific about quantities and reasons (e.g., "Light rain jacket - afternoon showers common")"#,
        destination = request.destination,
        season = request.season,
        days = request.day_count,
        preferences = request.preferences_label(),
    );

    PromptSpec {
        system: None,
        prompt,
        temperature: 0.6,
        max_tokens: 600,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::trip::{BudgetLevel, TripRequest};
    use chrono::NaiveDate;

    fn request() -> TripRequest {
        TripRequest::new(
            "New York",
            "Paris",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            3,
            2,
            BudgetLevel::MidRange,
            vec!["Culture".to_string(), "Food".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_itinerary_prompt_embeds_trip_details() {
        let spec = itinerary_prompt(&request());
        assert!(spec.prompt.contains("3-day itinerary for Paris"));
        assert!(spec.prompt.contains("Starting from: New York"));
        assert!(spec.prompt.contains("Culture, Food"));
        assert!(spec.prompt.contains("Budget: mid-range"));
        assert!(spec.prompt.contains("Start date: 2024-06-01"));
        assert!(spec.prompt.contains("arrival from New York"));
        assert_eq!(spec.max_tokens, 1500);
        assert_eq!(spec.system, Some(ITINERARY_SYSTEM));
    }

    #[test]
    fn test_budget_prompt_embeds_party_and_tier() {
        let spec = budget_prompt(&request());
        assert!(spec.prompt.contains("2 traveler(s) in Paris"));
        assert!(spec.prompt.contains("3 days (mid-range level)"));
        assert!(spec.system.is_none());
        assert_eq!(spec.max_tokens, 500);
    }

    #[test]
    fn test_packing_prompt_embeds_season_and_activities() {
        let spec = packing_prompt(&request());
        assert!(spec.prompt.contains("Paris in summer, 3 days"));
        assert!(spec.prompt.contains("Activities: Culture, Food"));
    }

    #[test]
    fn test_packing_prompt_falls_back_without_preferences() {
        let mut req = request();
        req.preferences.clear();
        let spec = packing_prompt(&req);
        assert!(spec.prompt.contains("Activities: general sightseeing"));
    }

    #[test]
    fn test_insights_prompt_is_destination_only() {
        let spec = insights_prompt("Rome");
        assert!(spec.prompt.contains("travel insights for Rome"));
        assert!(spec.prompt.contains("top_attractions"));
        assert_eq!(spec.temperature, 0.7);
        assert_eq!(spec.max_tokens, 1500);
    }
}
