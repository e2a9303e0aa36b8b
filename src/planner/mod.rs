//! Trip planning orchestration.
//!
//! [`TripPlanner`] owns the completion client, the response cache, and the
//! configuration, and exposes the four single-shot document operations plus
//! [`plan_trip`](TripPlanner::plan_trip), which fans all four out
//! concurrently and folds their outcomes into a single [`TripPlan`].

pub mod normalize;
pub mod prompts;

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use tracing::{info, warn};

use crate::cache::ResponseCache;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::services::executor::execute_document;
use crate::services::openrouter_client::{CompletionClient, OpenRouterClient};
use crate::types::plan::{DayPlan, DocumentKind, JsonMap, PackingList, TripPlan};
use crate::types::trip::TripRequest;

/// Successful payload of one fan-out task, tagged by its document kind.
enum TaskOutput {
    Insights(JsonMap),
    Itinerary(Vec<DayPlan>),
    Budget(JsonMap),
    Packing(PackingList),
}

/// Generates the four travel documents for a trip.
pub struct TripPlanner {
    client: Arc<dyn CompletionClient>,
    cache: ResponseCache,
    config: PlannerConfig,
}

impl TripPlanner {
    /// Create a planner backed by the OpenRouter-compatible HTTP client.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        let client = OpenRouterClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.timeout,
        )?;
        Ok(Self::with_client(Arc::new(client), config))
    }

    /// Create a planner with an injected completion client.
    pub fn with_client(client: Arc<dyn CompletionClient>, config: PlannerConfig) -> Self {
        let cache = ResponseCache::new(config.cache_capacity);
        Self {
            client,
            cache,
            config,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::new(PlannerConfig::from_env()?)
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Destination overview document. Memoized per destination for the life
    /// of this planner.
    pub async fn destination_insights(&self, destination: &str) -> Result<JsonMap> {
        let value = self
            .cache
            .get_or_compute("insights", &[destination], || async move {
                execute_document(
                    self.client.as_ref(),
                    DocumentKind::Insights,
                    &self.config.standard_model,
                    &prompts::insights_prompt(destination),
                )
                .await
            })
            .await?;
        into_object(DocumentKind::Insights, value)
    }

    /// Day-by-day itinerary with normalized calendar dates. Not memoized:
    /// the result depends on the full request, dates included.
    pub async fn daily_itinerary(&self, request: &TripRequest) -> Result<Vec<DayPlan>> {
        let value = execute_document(
            self.client.as_ref(),
            DocumentKind::Itinerary,
            &self.config.itinerary_model,
            &prompts::itinerary_prompt(request),
        )
        .await?;

        let entries = unwrap_itinerary(value)?;
        let mut days: Vec<DayPlan> =
            serde_path_to_error::deserialize(Value::Array(entries)).map_err(|err| {
                let path = err.path().to_string();
                let location = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                PlannerError::Decode(format!(
                    "itinerary entry at {location}: {}",
                    err.into_inner()
                ))
            })?;

        normalize::assign_dates(&mut days, request.start_date);
        Ok(days)
    }

    /// Budget breakdown document.
    pub async fn budget_breakdown(&self, request: &TripRequest) -> Result<JsonMap> {
        let value = execute_document(
            self.client.as_ref(),
            DocumentKind::Budget,
            &self.config.standard_model,
            &prompts::budget_prompt(request),
        )
        .await?;
        into_object(DocumentKind::Budget, value)
    }

    /// Packing list document. Memoized per destination, season, and
    /// preference set.
    pub async fn packing_list(&self, request: &TripRequest) -> Result<PackingList> {
        let preferences = request.preferences.join(",");
        let args = [
            request.destination.as_str(),
            request.season.as_str(),
            preferences.as_str(),
        ];
        let value = self
            .cache
            .get_or_compute("packing", &args, || async move {
                execute_document(
                    self.client.as_ref(),
                    DocumentKind::Packing,
                    &self.config.standard_model,
                    &prompts::packing_prompt(request),
                )
                .await
            })
            .await?;
        serde_json::from_value(value).map_err(|err| {
            PlannerError::Decode(format!("packing document had an unexpected shape: {err}"))
        })
    }

    /// Generate all four documents concurrently.
    ///
    /// The tasks are independent: none reads another's output, completion
    /// order is arbitrary, and outcomes are attributed by tag as they
    /// arrive. A failed task leaves its field empty and appends a message to
    /// [`TripPlan::errors`]; it never aborts its siblings, and this method
    /// itself never fails. There is no aggregate timeout: the call returns
    /// once every task has completed or failed on its own.
    pub async fn plan_trip(&self, request: &TripRequest) -> TripPlan {
        info!(
            origin = %request.origin,
            destination = %request.destination,
            days = request.day_count,
            "planning trip"
        );

        let mut tasks: FuturesUnordered<BoxFuture<'_, (DocumentKind, Result<TaskOutput>)>> =
            FuturesUnordered::new();

        tasks.push(
            async {
                let outcome = self.destination_insights(&request.destination).await;
                (DocumentKind::Insights, outcome.map(TaskOutput::Insights))
            }
            .boxed(),
        );
        tasks.push(
            async {
                let outcome = self.daily_itinerary(request).await;
                (DocumentKind::Itinerary, outcome.map(TaskOutput::Itinerary))
            }
            .boxed(),
        );
        tasks.push(
            async {
                let outcome = self.budget_breakdown(request).await;
                (DocumentKind::Budget, outcome.map(TaskOutput::Budget))
            }
            .boxed(),
        );
        tasks.push(
            async {
                let outcome = self.packing_list(request).await;
                (DocumentKind::Packing, outcome.map(TaskOutput::Packing))
            }
            .boxed(),
        );

        let mut plan = TripPlan::default();
        while let Some((kind, outcome)) = tasks.next().await {
            match outcome {
                Ok(TaskOutput::Insights(value)) => plan.insights = value,
                Ok(TaskOutput::Itinerary(days)) => plan.itinerary = days,
                Ok(TaskOutput::Budget(value)) => plan.budget = value,
                Ok(TaskOutput::Packing(items)) => plan.packing = items,
                Err(err) => {
                    warn!(task = %kind, error = %err, "document generation failed");
                    plan.errors.push(format!("{kind}: {err}"));
                }
            }
        }

        if plan.has_failures() {
            warn!(failed = plan.errors.len(), "trip plan completed partially");
        } else {
            info!("trip plan completed");
        }
        plan
    }
}

fn into_object(kind: DocumentKind, value: Value) -> Result<JsonMap> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PlannerError::Decode(format!(
            "{kind} document was not a JSON object"
        ))),
    }
}

/// The itinerary endpoint is asked for an object wrapping the day array, but
/// models sometimes return the array bare or under a `days` key.
fn unwrap_itinerary(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => map
            .remove("itinerary")
            .or_else(|| map.remove("days"))
            .and_then(|inner| match inner {
                Value::Array(entries) => Some(entries),
                _ => None,
            })
            .ok_or_else(|| {
                PlannerError::Decode("itinerary document carried no day array".to_string())
            }),
        _ => Err(PlannerError::Decode(
            "itinerary document was not an object or array".to_string(),
        )),
    }
}
