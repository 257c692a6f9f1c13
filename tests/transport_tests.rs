//! reqwest transport against a wiremock backend

#![cfg(feature = "native")]

use serde_json::json;
use std::sync::Arc;
use teamsync::auth::AuthService;
use teamsync::types::{AppError, Project, RegisterRequest, Role};
use teamsync::{ApiClient, MemoryStore, ReqwestTransport, Session};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer, session: Session) -> ApiClient {
    ApiClient::new(&server.uri(), Arc::new(ReqwestTransport::new()), session)
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Portal", "status": "ONGOING"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(Arc::new(MemoryStore::with_token("abc")));
    let projects: Vec<Project> = api(&server, session).get("/api/projects").await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Portal");
}

#[tokio::test]
async fn test_trailing_slash_on_base_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(
        &format!("{}/", server.uri()),
        Arc::new(ReqwestTransport::new()),
        Session::in_memory(),
    );
    let projects: Vec<Project> = api.get("/api/projects").await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_error_status_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/7"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Admins only"})),
        )
        .mount(&server)
        .await;

    let err = api(&server, Session::in_memory())
        .delete("/api/projects/7")
        .await
        .unwrap_err();

    match err {
        AppError::Request { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Admins only");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = api(&server, Session::in_memory())
        .get::<serde_json::Value>("/api/admin/profile")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().ends_with("database unavailable"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let api = ApiClient::new(
        "http://127.0.0.1:9",
        Arc::new(ReqwestTransport::new()),
        Session::in_memory(),
    );
    let err = api.get::<serde_json::Value>("/api/projects").await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert!(!api.tracker().is_loading());
}

#[tokio::test]
async fn test_login_stores_token_and_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ann@example.com", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "jwt-1", "role": "ADMIN"})),
        )
        .mount(&server)
        .await;

    let session = Session::in_memory();
    let auth = AuthService::new(api(&server, session.clone()));
    auth.login(" ann@example.com ", "pw").await.unwrap();

    assert_eq!(session.token().as_deref(), Some("jwt-1"));
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.landing_path(), "/admin");

    auth.logout();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_failed_login_keeps_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Bad credentials"})),
        )
        .mount(&server)
        .await;

    let session = Session::in_memory();
    let err = AuthService::new(api(&server, session.clone()))
        .login("ann@example.com", "nope")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_register_posts_role() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "ann@example.com",
            "phone": "555",
            "password": "pw",
            "role": "CLIENT"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    AuthService::new(api(&server, Session::in_memory()))
        .register(&RegisterRequest {
            name: "Ann".into(),
            email: "ann@example.com".into(),
            phone: "555".into(),
            password: "pw".into(),
            role: Role::Client,
        })
        .await
        .unwrap();
}
