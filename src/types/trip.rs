use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Spending tier reflected in every generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetLevel::Budget => "budget",
            BudgetLevel::MidRange => "mid-range",
            BudgetLevel::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "budget" => Ok(BudgetLevel::Budget),
            "mid-range" | "midrange" | "mid" => Ok(BudgetLevel::MidRange),
            "luxury" => Ok(BudgetLevel::Luxury),
            other => Err(PlannerError::InvalidTrip(format!(
                "unknown budget level `{other}` (expected budget, mid-range, or luxury)"
            ))),
        }
    }
}

/// Season of travel, used by the packing list prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Bucket a calendar month into its meteorological season.
    pub fn from_month(month: u32) -> Self {
        match (month % 12) / 3 {
            0 => Season::Winter,
            1 => Season::Spring,
            2 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            other => Err(PlannerError::InvalidTrip(format!(
                "unknown season `{other}`"
            ))),
        }
    }
}

/// Parameters for one planning request. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub day_count: u32,
    pub traveler_count: u32,
    pub budget_level: BudgetLevel,
    pub preferences: Vec<String>,
    pub season: Season,
}

impl TripRequest {
    /// Build a request with an explicit day count. The season defaults to
    /// the start date's; override with [`with_season`](Self::with_season).
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        day_count: u32,
        traveler_count: u32,
        budget_level: BudgetLevel,
        preferences: Vec<String>,
    ) -> Result<Self> {
        let origin = origin.into();
        let destination = destination.into();
        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(PlannerError::InvalidTrip(
                "origin and destination must both be provided".to_string(),
            ));
        }
        if day_count < 1 {
            return Err(PlannerError::InvalidTrip(
                "trip must cover at least one day".to_string(),
            ));
        }
        if traveler_count < 1 {
            return Err(PlannerError::InvalidTrip(
                "trip must include at least one traveler".to_string(),
            ));
        }
        Ok(Self {
            origin,
            destination,
            start_date,
            day_count,
            traveler_count,
            budget_level,
            preferences,
            season: Season::from_date(start_date),
        })
    }

    /// Build a request from a start and end date; the day count is the whole
    /// number of days between them and must be at least one.
    pub fn for_dates(
        origin: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        traveler_count: u32,
        budget_level: BudgetLevel,
        preferences: Vec<String>,
    ) -> Result<Self> {
        let days = (end_date - start_date).num_days();
        if days < 1 {
            return Err(PlannerError::InvalidTrip(format!(
                "end date {end_date} must be after start date {start_date}"
            )));
        }
        Self::new(
            origin,
            destination,
            start_date,
            days as u32,
            traveler_count,
            budget_level,
            preferences,
        )
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    pub fn end_date(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(self.day_count as i64)
    }

    /// Preference list rendered for prompt text, with the original's
    /// fallback when the traveler picked nothing.
    pub fn preferences_label(&self) -> String {
        if self.preferences.is_empty() {
            "general sightseeing".to_string()
        } else {
            self.preferences.join(", ")
        }
    }
}
