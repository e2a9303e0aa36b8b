use chrono::NaiveDate;
use serde_json::json;
use trip_concierge_rs::{BudgetLevel, PlannerConfig, PlannerError, TripPlanner, TripRequest};

fn planner_for(server: &mockito::ServerGuard) -> TripPlanner {
    let config = PlannerConfig::new("test-key").with_base_url(server.url());
    TripPlanner::new(config).unwrap()
}

fn rome_request() -> TripRequest {
    TripRequest::new(
        "Madrid",
        "Rome",
        NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
        2,
        1,
        BudgetLevel::Budget,
        vec!["Food".to_string()],
    )
    .unwrap()
}

fn completion_body(content: &serde_json::Value) -> String {
    json!({
        "choices": [{"message": {"content": content.to_string()}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_insights_request_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&json!({
            "description": "Layers of empire on every corner.",
            "currency": "EUR"
        })))
        .create_async()
        .await;

    let insights = planner_for(&server)
        .destination_insights("Rome")
        .await
        .unwrap();

    assert_eq!(insights["description"], "Layers of empire on every corner.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_status_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body(json!({"error": {"message": "quota exceeded"}}).to_string())
        .create_async()
        .await;

    let result = planner_for(&server).destination_insights("Rome").await;

    match result {
        Err(PlannerError::Api { status, message }) => {
            assert_eq!(status, 429);
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_in_body_error_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(json!({"error": {"message": "model overloaded"}}).to_string())
        .create_async()
        .await;

    let result = planner_for(&server).destination_insights("Rome").await;

    match result {
        Err(PlannerError::Api { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("model overloaded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_completion_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(&json!("I cannot plan that trip.")))
        .create_async()
        .await;

    let result = planner_for(&server).destination_insights("Rome").await;
    assert!(matches!(result, Err(PlannerError::Decode(_))));
}

#[tokio::test]
async fn test_missing_choices_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let result = planner_for(&server).destination_insights("Rome").await;
    assert!(matches!(result, Err(PlannerError::Decode(_))));
}

#[tokio::test]
async fn test_itinerary_wrapped_under_days_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(&json!({
            "days": [
                {"day": 1, "title": "Trastevere on foot"},
                {"day": 2, "title": "Vatican early entry"}
            ]
        })))
        .create_async()
        .await;

    let days = planner_for(&server)
        .daily_itinerary(&rome_request())
        .await
        .unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, "2024-09-14");
    assert_eq!(days[0].day_of_week, "Saturday");
    assert_eq!(days[1].date, "2024-09-15");
    assert_eq!(days[1].day_of_week, "Sunday");
}

#[tokio::test]
async fn test_fenced_completion_content_is_recovered() {
    let mut server = mockito::Server::new_async().await;
    let fenced = "```json\n{\"documents\": [\"passport\"], \"clothing\": [\"linen shirts\"]}\n```";
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(
            json!({
                "choices": [{"message": {"content": fenced}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let packing = planner_for(&server)
        .packing_list(&rome_request())
        .await
        .unwrap();

    assert_eq!(packing["documents"], vec!["passport".to_string()]);
    assert_eq!(packing["clothing"], vec!["linen shirts".to_string()]);
}
