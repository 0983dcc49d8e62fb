use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use genie_core::{AssetId, GenerationRequest};
use genie_pipeline::{default_client, PipelineClient, PipelineError, RequestTimeouts};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default, Clone)]
struct Seen {
    idea_bodies: Arc<Mutex<Vec<Value>>>,
    expanded: Arc<Mutex<Vec<String>>>,
}

fn service_routes(seen: Seen) -> Router {
    Router::new()
        .route(
            "/api/v1/generate-idea",
            post({
                let bodies = seen.idea_bodies.clone();
                move |Json(body): Json<Value>| async move {
                    bodies.lock().unwrap().push(body);
                    Json(json!({"id": 7, "strategy": {"title": "Modern Growth", "type": "Checklist"}}))
                }
            }),
        )
        .route(
            "/api/v1/generate-full-asset/:id",
            post({
                let expanded = seen.expanded.clone();
                move |Path(id): Path<String>| async move {
                    expanded.lock().unwrap().push(id);
                    Json(json!({"status": "success"}))
                }
            }),
        )
        .route(
            "/api/v1/lead-magnets-all",
            get(|| async {
                Json(json!([
                    {"id": 3, "idea_type": "Report", "idea_title": "Newest", "conversion_score": 81},
                    {"id": 1, "idea_type": "Checklist", "idea_title": "Oldest", "conversion_score": null}
                ]))
            }),
        )
}

fn failing_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/generate-idea",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"No JSON found"}"#) }),
        )
        .route(
            "/api/v1/generate-full-asset/:id",
            post(|| async { (StatusCode::NOT_FOUND, r#"{"detail":"Not found"}"#) }),
        )
        .route(
            "/api/v1/lead-magnets-all",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        )
}

async fn start_server(app: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn timeouts() -> RequestTimeouts {
    RequestTimeouts {
        generation: Duration::from_secs(5),
        history: Duration::from_millis(200),
    }
}

#[tokio::test]
async fn create_idea_posts_composed_brief_with_fixed_params() {
    let seen = Seen::default();
    let (addr, handle) = start_server(service_routes(seen.clone())).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let params = GenerationRequest::new("fitness coaching funnel", "").idea_params();
    let created = client.create_idea(&params).await.unwrap();

    assert_eq!(created.id, AssetId::new("7"));
    assert_eq!(created.strategy["title"], "Modern Growth");

    let bodies = seen.idea_bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0]["icp_profile"],
        "fitness coaching funnel. Existing Content to Avoid: "
    );
    assert_eq!(bodies[0]["pain_points"], "Neural link established");
    assert_eq!(bodies[0]["brand_voice"], "Professional");
    assert_eq!(bodies[0]["offer_type"], "SaaS");
    assert_eq!(bodies[0]["conversion_goal"], "Direct Checkout");

    handle.abort();
}

#[tokio::test]
async fn expand_asset_targets_the_returned_id() {
    let seen = Seen::default();
    let (addr, handle) = start_server(service_routes(seen.clone())).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1/"), timeouts())
        .unwrap();

    client.expand_asset(&AssetId::new("7")).await.unwrap();
    assert_eq!(*seen.expanded.lock().unwrap(), vec!["7".to_string()]);

    handle.abort();
}

#[tokio::test]
async fn history_preserves_server_order() {
    let (addr, handle) = start_server(service_routes(Seen::default())).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let assets = client.list_history().await.unwrap();
    let titles: Vec<_> = assets.iter().map(|a| a.title().to_string()).collect();
    assert_eq!(titles, vec!["Newest", "Oldest"]);
    assert_eq!(assets[1].confidence(), 92);

    handle.abort();
}

#[tokio::test]
async fn non_success_statuses_map_to_service_errors() {
    let (addr, handle) = start_server(failing_routes()).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let params = GenerationRequest::new("x", "").idea_params();
    match client.create_idea(&params).await {
        Err(PipelineError::Service { status, detail }) => {
            assert_eq!(status, 500);
            assert!(detail.contains("No JSON found"));
        }
        other => panic!("expected service error, got {other:?}"),
    }

    match client.expand_asset(&AssetId::new("99")).await {
        Err(PipelineError::Service { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected service error, got {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn success_without_an_id_is_a_service_error() {
    let app = Router::new().route(
        "/api/v1/generate-idea",
        post(|| async { Json(json!({"error": "model offline"})) }),
    );
    let (addr, handle) = start_server(app).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let params = GenerationRequest::new("x", "").idea_params();
    let err = client.create_idea(&params).await.unwrap_err();
    assert!(matches!(err, PipelineError::Service { status: 200, .. }));

    handle.abort();
}

#[tokio::test]
async fn slow_history_times_out_as_transport_error() {
    let (addr, handle) = start_server(failing_routes()).await;
    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let err = client.list_history().await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");

    handle.abort();
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = default_client(reqwest::Client::new(), &format!("http://{addr}/api/v1"), timeouts())
        .unwrap();

    let params = GenerationRequest::new("x", "").idea_params();
    let err = client.create_idea(&params).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
    assert!(client.list_history().await.unwrap_err().is_transport());
}
