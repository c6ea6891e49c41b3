use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use portal_core::PortalError;
use portal_core::auth::{IdentityService, LogoutRequest, SessionService};
use portal_core::config::ApiConfig;
use portal_core::profile::{ProfilePayload, ProfileService};
use portal_infrastructure::{ApiClient, HttpIdentityService, HttpProfileService, HttpSessionService};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorded {
    logout_bodies: Arc<Mutex<Vec<Value>>>,
    stored_profiles: Arc<Mutex<Vec<Value>>>,
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn role(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers).as_deref() {
        Some("student-token") => (StatusCode::OK, Json(json!({ "role_name": "student" }))),
        Some("officer-token") => (
            StatusCode::OK,
            Json(json!({ "role_name": "placement_officer", "user_id": 9 })),
        ),
        Some("odd-token") => (StatusCode::OK, Json(json!({ "role": "student" }))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "bad token" }))),
    }
}

async fn logout(State(rec): State<Recorded>, Json(body): Json<Value>) -> StatusCode {
    rec.logout_bodies.lock().unwrap().push(body);
    StatusCode::OK
}

async fn fetch_profile(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some("student-token") {
        return (StatusCode::FORBIDDEN, Json(json!({})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "contact": { "full_name": "Asha Rao", "github_link": "https://github.com/asha" },
            "semesters": [
                { "id": 41, "semester_number": 3, "sgpa": 8.9, "result_link": "not a url" }
            ],
            "projects": "nothing here"
        })),
    )
}

async fn store_profile(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if bearer(&headers).is_none() {
        return StatusCode::UNAUTHORIZED;
    }
    rec.stored_profiles.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

async fn serve() -> (ApiClient, Recorded) {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/auth/role", get(role))
        .route("/auth/logout", post(logout))
        .route("/profile", get(fetch_profile).put(store_profile))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let api = ApiConfig {
        base_url: format!("http://{}/", addr),
        timeout_secs: 5,
        ..Default::default()
    };
    (ApiClient::new(api).unwrap(), recorded)
}

#[tokio::test]
async fn test_role_lookup_sends_bearer_token() {
    let (client, _) = serve().await;
    let identity = HttpIdentityService::new(client);

    let lookup = identity.lookup_role("officer-token").await.unwrap();
    assert_eq!(lookup.role_name, "placement_officer");

    let lookup = identity.lookup_role("student-token").await.unwrap();
    assert_eq!(lookup.role_name, "student");
}

#[tokio::test]
async fn test_role_lookup_non_success_status_is_transport_error() {
    let (client, _) = serve().await;
    let identity = HttpIdentityService::new(client);

    let err = identity.lookup_role("expired").await.unwrap_err();
    match err {
        PortalError::Transport {
            service, status, ..
        } => {
            assert_eq!(service, "identity");
            assert_eq!(status, Some(401));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_role_lookup_missing_role_name_is_error() {
    let (client, _) = serve().await;
    let identity = HttpIdentityService::new(client);

    let err = identity.lookup_role("odd-token").await.unwrap_err();
    assert!(err.is_serialization());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let api = ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let identity = HttpIdentityService::new(ApiClient::new(api).unwrap());

    let err = identity.lookup_role("student-token").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_logout_posts_jwt_token_body() {
    let (client, recorded) = serve().await;
    let sessions = HttpSessionService::new(client);

    sessions
        .logout(LogoutRequest {
            jwt_token: Some("student-token".to_string()),
        })
        .await
        .unwrap();
    sessions.logout(LogoutRequest { jwt_token: None }).await.unwrap();

    let bodies = recorded.logout_bodies.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![
            json!({ "jwt_token": "student-token" }),
            json!({ "jwt_token": null })
        ]
    );
}

#[tokio::test]
async fn test_profile_fetch_decodes_leniently() {
    let (client, _) = serve().await;
    let profiles = HttpProfileService::new(client);

    let payload = profiles.fetch_profile("student-token").await.unwrap();
    assert_eq!(payload.contact.full_name, "Asha Rao");
    assert_eq!(payload.semesters.len(), 1);
    assert_eq!(payload.semesters[0].academic_year, 0);
    assert_eq!(payload.semesters[0].result_link, "not a url");
    assert!(payload.projects.is_empty());
}

#[tokio::test]
async fn test_profile_fetch_forbidden_is_error() {
    let (client, _) = serve().await;
    let profiles = HttpProfileService::new(client);

    let err = profiles.fetch_profile("officer-token").await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_profile_store_puts_payload() {
    let (client, recorded) = serve().await;
    let profiles = HttpProfileService::new(client);

    let payload = profiles.fetch_profile("student-token").await.unwrap();
    profiles.store_profile("student-token", &payload).await.unwrap();

    let stored = recorded.stored_profiles.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["semesters"][0]["id"], json!(41));
    assert_eq!(stored[0]["semesters"][0]["academic_year"], json!(0));
    assert_eq!(ProfilePayload::from_value(stored[0].clone()), payload);
}
