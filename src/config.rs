use std::env;
use std::time::Duration;

use crate::error::{PlannerError, Result};

/// Default OpenRouter-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Model used for the insights, budget, and packing documents.
pub const DEFAULT_STANDARD_MODEL: &str = "openai/gpt-4o-mini";

/// Model used for the day-by-day itinerary, which carries the most structure.
pub const DEFAULT_ITINERARY_MODEL: &str = "openai/gpt-4o";

const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Configuration for a [`TripPlanner`](crate::TripPlanner).
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    pub api_key: String,
    pub base_url: String,
    pub standard_model: String,
    pub itinerary_model: String,
    pub timeout: Duration,
    pub cache_capacity: usize,
}

impl PlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            standard_model: DEFAULT_STANDARD_MODEL.to_string(),
            itinerary_model: DEFAULT_ITINERARY_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL` (or
    /// `OPENROUTER_BASE_URL`), `TRIP_STANDARD_MODEL`, and
    /// `TRIP_ITINERARY_MODEL` override the defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            PlannerError::Config(
                "OPENAI_API_KEY environment variable must be set before creating a planner"
                    .to_string(),
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) =
            env::var("OPENAI_BASE_URL").or_else(|_| env::var("OPENROUTER_BASE_URL"))
        {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("TRIP_STANDARD_MODEL") {
            config.standard_model = model;
        }
        if let Ok(model) = env::var("TRIP_ITINERARY_MODEL") {
            config.itinerary_model = model;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_standard_model(mut self, model: impl Into<String>) -> Self {
        self.standard_model = model.into();
        self
    }

    pub fn with_itinerary_model(mut self, model: impl Into<String>) -> Self {
        self.itinerary_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.standard_model, DEFAULT_STANDARD_MODEL);
        assert_eq!(config.itinerary_model, DEFAULT_ITINERARY_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_builder_overrides() {
        let config = PlannerConfig::new("key")
            .with_base_url("http://localhost:9000/v1")
            .with_itinerary_model("openai/gpt-4.1")
            .with_cache_capacity(8);
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.itinerary_model, "openai/gpt-4.1");
        assert_eq!(config.cache_capacity, 8);
    }
}
