//! End-to-end gateway tests
//!
//! Drives the assembled router against a wiremock backend double, covering
//! the session lifecycle and every proxy capability.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as req_header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adviser_auth::{issue_session_token, Identity, SessionClaims, SessionConfig, SESSION_TTL_SECS};
use adviser_common::Config;

const TEST_SECRET: &str = "integration-test-secret";

fn gateway(backend_url: &str) -> Router {
    let config = Config {
        jwt_secret: TEST_SECRET.to_string(),
        backend_api_url: backend_url.to_string(),
        log_level: "info".to_string(),
        rust_log: "adviser=debug".to_string(),
        port: 3000,
    };
    adviser_app::create_app(&config)
}

fn session_config() -> SessionConfig {
    SessionConfig {
        jwt_secret: TEST_SECRET.to_string(),
    }
}

fn test_identity() -> Identity {
    Identity {
        id: uuid::Uuid::new_v4().to_string(),
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        role: "user".to_string(),
    }
}

fn valid_session_cookie() -> String {
    let token = issue_session_token(&test_identity(), &session_config()).unwrap();
    format!("token={token}")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn read_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}

#[tokio::test]
async fn sign_in_issues_cookie_with_exact_attributes() {
    let server = MockServer::start().await;
    let identity = test_identity();
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .and(body_json(json!({"email": "ada@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&identity))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(post_json(
            "/auth/sign-in",
            json!({"email": "ada@example.com", "password": "pw"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie should be set")
        .to_str()
        .unwrap()
        .to_string();

    // Attributes match exactly: HttpOnly, Secure, SameSite=Strict, Path=/,
    // Max-Age=604800
    let token = cookie
        .strip_prefix("token=")
        .expect("cookie should carry the token")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert_eq!(
        cookie,
        format!("token={token}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=604800")
    );

    // The embedded claims are the backend's identity, with a 1-day expiry
    let claims = adviser_auth::verify_session_token(&token, &session_config()).unwrap();
    assert_eq!(claims.identity(), identity);
    assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);

    assert_eq!(read_json(response).await, json!({"success": true}));
}

#[tokio::test]
async fn sign_in_with_invalid_credentials_sets_no_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "nope"})))
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(post_json(
            "/auth/sign-in",
            json!({"email": "ada@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(read_json(response).await, json!({"error": "nope"}));
}

#[tokio::test]
async fn sign_up_missing_name_is_rejected_before_backend() {
    let server = MockServer::start().await;

    let response = gateway(&server.uri())
        .oneshot(post_json(
            "/auth/sign-up",
            json!({"email": "new@example.com", "password": "pw"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn sign_up_issues_session_cookie() {
    let server = MockServer::start().await;
    let identity = test_identity();
    Mock::given(method("POST"))
        .and(path("/v1/auth/signup"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "pw",
            "name": "Ada",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&identity))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(post_json(
            "/auth/sign-up",
            json!({"email": "ada@example.com", "password": "pw", "name": "Ada"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
}

#[tokio::test]
async fn sign_out_clears_cookie_without_prior_session() {
    let server = MockServer::start().await;

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/sign-out")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(
        cookie,
        "token=; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=0"
    );
    assert_eq!(read_json(response).await, json!({"success": true}));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn protected_capabilities_reject_missing_session_before_backend() {
    let server = MockServer::start().await;
    let app = gateway(&server.uri());

    let requests = vec![
        post_json("/chat", json!({"message": "hi"})),
        Request::builder()
            .method("GET")
            .uri("/get-chats")
            .body(Body::empty())
            .unwrap(),
        post_json("/get-messages", json!({"chatId": "c1"})),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // No outbound call was made for any of them
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn expired_session_is_rejected_even_though_cookie_persists() {
    let server = MockServer::start().await;

    // Sign claims that expired well before the verifier's leeway
    let identity = test_identity();
    let iat = chrono::Utc::now().timestamp() as u64 - 3 * SESSION_TTL_SECS;
    let claims = SessionClaims {
        sub: identity.id.clone(),
        email: identity.email.clone(),
        name: identity.name.clone(),
        role: identity.role.clone(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_ref()),
    )
    .unwrap();

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/get-chats")
                .header(header::COOKIE, format!("token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn foreign_signature_is_treated_as_no_session() {
    let server = MockServer::start().await;

    let foreign = SessionConfig {
        jwt_secret: "some-other-service-secret".to_string(),
    };
    let token = issue_session_token(&test_identity(), &foreign).unwrap();

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/get-chats")
                .header(header::COOKIE, format!("token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn chat_streams_backend_body_unaltered() {
    let sse = "data: {\"delta\":\"one\"}\n\ndata: {\"delta\":\"two\"}\n\ndata: [DONE]\n\n";
    let cookie = valid_session_cookie();
    let token = cookie.strip_prefix("token=").unwrap().to_string();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(req_header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sse.as_bytes(), "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(r#"{"message": "hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/event-stream"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache"
    );

    // Byte-identical, order-preserving relay
    assert_eq!(read_body(response).await, sse.as_bytes());
}

#[tokio::test]
async fn get_chats_relays_backend_json_and_bearer() {
    let cookie = valid_session_cookie();
    let token = cookie.strip_prefix("token=").unwrap().to_string();
    let chats = json!([{"id": "c1", "title": "Retirement plan"}]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-chats"))
        .and(req_header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&chats))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/get-chats")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, chats);
}

#[tokio::test]
async fn backend_failure_status_is_relayed_on_get_chats() {
    let cookie = valid_session_cookie();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-chats"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/get-chats")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(read_json(response).await, json!({"error": "upstream down"}));
}

#[tokio::test]
async fn get_messages_forwards_body_and_bearer() {
    let cookie = valid_session_cookie();
    let token = cookie.strip_prefix("token=").unwrap().to_string();
    let messages = json!([{"role": "assistant", "content": "hello"}]);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-messages"))
        .and(req_header("authorization", format!("Bearer {token}").as_str()))
        .and(body_json(json!({"chatId": "c1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&messages))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server.uri())
        .oneshot(post_json("/get-messages", json!({"chatId": "c1"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // With the session cookie attached, the same request is relayed
    let response = gateway(&server.uri())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get-messages")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, &cookie)
                .body(Body::from(json!({"chatId": "c1"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, messages);
}
