//! trip-concierge-rs: A lightweight Rust library for AI-generated travel plans
//!
//! This library turns a small set of trip parameters into four natural-language
//! travel documents (destination overview, day-by-day itinerary, budget
//! breakdown, and packing list) by issuing templated structured-completion
//! requests to an OpenRouter-compatible model endpoint. The four requests run
//! concurrently and partial failures are collected rather than propagated, so
//! a slow or failed document never costs you the others.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trip_concierge_rs::{BudgetLevel, TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TripPlanner::from_env()?;
//!
//!     let request = TripRequest::for_dates(
//!         "New York",
//!         "Paris",
//!         NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
//!         2,
//!         BudgetLevel::MidRange,
//!         vec!["Culture".to_string()],
//!     )?;
//!
//!     let plan = planner.plan_trip(&request).await;
//!     for day in &plan.itinerary {
//!         println!("{} ({}): {}", day.date, day.day_of_week, day.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod planner;
pub mod services;
pub mod types;

pub use cache::{fingerprint, ResponseCache};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use planner::prompts::{
    budget_prompt, insights_prompt, itinerary_prompt, packing_prompt, PromptSpec,
};
pub use planner::{normalize::assign_dates, TripPlanner};
pub use services::{ChatCompletionRequest, CompletionClient, OpenRouterClient};
pub use types::{
    Activity, BudgetLevel, DayPlan, DocumentKind, JsonMap, PackingList, Season, TripDocument,
    TripPlan, TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
