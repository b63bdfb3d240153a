use planner_backend::config::Config;
use planner_backend::routes::create_router;
use planner_backend::services::mock::MockProvider;
use planner_backend::state::AppState;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tower::util::ServiceExt;

const VALID_BODY: &str = r#"{
    "where_to": "Paris",
    "number_of_days": 3,
    "itinerary_type": "leisure",
    "when_your_trip_start": "2024-06-01",
    "travel_preference": "relaxed",
    "budget": 1000
}"#;

struct Upstream {
    url: String,
    hits: Arc<AtomicUsize>,
}

/// Stub for the external trip-planner API, bound to an ephemeral port.
async fn spawn_upstream(status: StatusCode, body: &'static str) -> Upstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().route(
        "/trip_planner_api",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        url: format!("http://{addr}/trip_planner_api"),
        hits,
    }
}

fn app_forwarding_to(url: &str) -> Router {
    let config = Config {
        google_api_key: "test-key".to_string(),
        trip_api_key: "test-token".to_string(),
        trip_api_url: url.to_string(),
        text_model: "gemini-2.0-flash".to_string(),
        vision_model: "gemini-2.0-flash".to_string(),
        request_timeout: Duration::from_secs(5),
        bind_addr: "127.0.0.1:0".to_string(),
    };
    let provider = Arc::new(MockProvider::replying("unused", None));
    let state = Arc::new(AppState::new(config, provider).unwrap());
    create_router().with_state(state)
}

fn trip_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/trip_planner_api")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn success_is_wrapped_and_relayed_unmodified() {
    let upstream = spawn_upstream(StatusCode::OK, r#"{"plan": "3 days of museums"}"#).await;
    let app = app_forwarding_to(&upstream.url);

    let response = app.oneshot(trip_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "success": true, "response": { "plan": "3 days of museums" } })
    );
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upstream_error_keeps_status_and_body_text() {
    let upstream = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, "service unavailable").await;
    let app = app_forwarding_to(&upstream.url);

    let response = app.oneshot(trip_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "service unavailable");
}

#[tokio::test]
async fn missing_field_is_rejected_before_forwarding() {
    let upstream = spawn_upstream(StatusCode::OK, r#"{"plan": "unused"}"#).await;
    let app = app_forwarding_to(&upstream.url);

    // number_of_days is absent.
    let body = r#"{
        "where_to": "Paris",
        "itinerary_type": "leisure",
        "when_your_trip_start": "2024-06-01",
        "travel_preference": "relaxed",
        "budget": 1000
    }"#;
    let response = app.oneshot(trip_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_positive_days_are_rejected_before_forwarding() {
    let upstream = spawn_upstream(StatusCode::OK, r#"{"plan": "unused"}"#).await;
    let app = app_forwarding_to(&upstream.url);

    let body = VALID_BODY.replace("\"number_of_days\": 3", "\"number_of_days\": 0");
    let response = app.oneshot(trip_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn negative_budget_is_rejected_before_forwarding() {
    let upstream = spawn_upstream(StatusCode::OK, r#"{"plan": "unused"}"#).await;
    let app = app_forwarding_to(&upstream.url);

    let body = VALID_BODY.replace("\"budget\": 1000", "\"budget\": -5");
    let response = app.oneshot(trip_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bearer_credential_is_attached() {
    // Upstream that only answers 200 when the expected bearer token arrives.
    let app_upstream = Router::new().route(
        "/trip_planner_api",
        post(|headers: HeaderMap| async move {
            match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                Some("Bearer test-token") => (StatusCode::OK, r#"{"plan": "ok"}"#),
                _ => (StatusCode::UNAUTHORIZED, r#""bad token""#),
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app_upstream).await.unwrap();
    });

    let app = app_forwarding_to(&format!("http://{addr}/trip_planner_api"));
    let response = app.oneshot(trip_request(VALID_BODY)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}
