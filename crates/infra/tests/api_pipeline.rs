//! End-to-end tests for the API request pipeline against a mock server.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workbridge_domain::constants::MSG_UNAUTHORIZED;
use workbridge_infra::api::{
    ApiClient, ApiClientConfig, CredentialStore, Notifier, RequestEnvelope,
};

struct FakeStore {
    primary: Option<String>,
    secondary: Option<String>,
}

impl FakeStore {
    fn with_primary(token: &str) -> Self {
        Self { primary: Some(token.to_string()), secondary: None }
    }

    fn with_secondary(token: &str) -> Self {
        Self { primary: None, secondary: Some(token.to_string()) }
    }

    fn empty() -> Self {
        Self { primary: None, secondary: None }
    }
}

#[async_trait]
impl CredentialStore for FakeStore {
    async fn primary(&self) -> Option<String> {
        self.primary.clone()
    }

    async fn secondary(&self) -> Option<String> {
        self.secondary.clone()
    }
}

#[derive(Default)]
struct CollectingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

fn client(
    base_url: &str,
    store: FakeStore,
    notifier: Arc<CollectingNotifier>,
) -> ApiClient {
    // Initialize tracing; repeated calls across tests are harmless.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    ApiClient::builder()
        .config(ApiClientConfig {
            base_url: base_url.to_string(),
            timeout: std::time::Duration::from_secs(5),
        })
        .credentials(Arc::new(store))
        .notifier(notifier)
        .build()
        .expect("client should build")
}

fn ok_body(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": data }))
}

#[tokio::test]
async fn primary_credential_becomes_bearer_header() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .and(header("authorization", "Bearer primary-token"))
        .respond_with(ok_body(json!({ "name": "admin" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("primary-token"), notifier.clone());
    let result = client.send(RequestEnvelope::get("/api/user/info")).await;

    assert_eq!(result.unwrap(), json!({ "name": "admin" }));
    assert!(notifier.messages.lock().is_empty());
}

#[tokio::test]
async fn secondary_credential_used_when_primary_empty() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .and(header("authorization", "Bearer durable-token"))
        .respond_with(ok_body(Value::Null))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_secondary("durable-token"), notifier);
    let result = client.send(RequestEnvelope::get("/api/user/info")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn unauthenticated_request_proceeds_without_header() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ok_body(json!({ "total": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::empty(), notifier.clone());
    let result = client.send(RequestEnvelope::get("/api/dashboard/stats")).await;

    assert!(result.is_ok());

    let requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "no credential means no authorization header"
    );
    assert!(notifier.messages.lock().is_empty());
}

#[tokio::test]
async fn embedded_code_overrides_wire_status() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    // A proxy can mangle the wire status while the gateway still embeds
    // the real outcome in the body.
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "code": 200, "data": [{ "id": 1 }] })),
        )
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("t"), notifier.clone());
    let result = client.send(RequestEnvelope::get("/api/users")).await;

    assert_eq!(result.unwrap(), json!([{ "id": 1 }]));
    assert!(notifier.messages.lock().is_empty());
}

#[tokio::test]
async fn embedded_unauthorized_is_silent_business_failure() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("POST"))
        .and(path("/api/user/logout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 401, "message": "token expired upstream" })),
        )
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("stale"), notifier.clone());
    let failure = client.send(RequestEnvelope::post("/api/user/logout")).await.unwrap_err();

    assert_eq!(failure.status, Some(401));
    assert_eq!(failure.message, MSG_UNAUTHORIZED);
    assert!(notifier.messages.lock().is_empty(), "business failures never notify");
}

#[tokio::test]
async fn embedded_server_error_notifies_exactly_once() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 500, "message": "database unavailable" })),
        )
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("t"), notifier.clone());
    let failure = client.send(RequestEnvelope::get("/api/roles")).await.unwrap_err();

    assert_eq!(failure.status, Some(500));
    assert_eq!(failure.message, "database unavailable");
    assert_eq!(*notifier.messages.lock(), vec!["database unavailable".to_string()]);
}

#[tokio::test]
async fn transport_failure_notifies_exactly_once() {
    // Bind then drop to get a port that refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let notifier = Arc::new(CollectingNotifier::default());
    let client = client(&format!("http://{addr}"), FakeStore::empty(), notifier.clone());

    let failure = client.send(RequestEnvelope::get("/api/users")).await.unwrap_err();

    assert_eq!(failure.status, None);
    assert!(failure.source.is_some());
    assert_eq!(notifier.messages.lock().len(), 1);
}

#[tokio::test]
async fn raw_string_body_surfaces_as_message() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway upstream"))
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("t"), notifier.clone());
    let failure = client.send(RequestEnvelope::get("/api/users")).await.unwrap_err();

    assert_eq!(failure.status, Some(502));
    assert_eq!(failure.message, "bad gateway upstream");
    assert_eq!(notifier.messages.lock().len(), 1);
}

#[tokio::test]
async fn query_and_body_are_forwarded() {
    let server = MockServer::start().await;
    let notifier = Arc::new(CollectingNotifier::default());

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(wiremock::matchers::query_param("notify", "true"))
        .and(wiremock::matchers::body_json(json!({ "username": "sam" })))
        .respond_with(ok_body(json!({ "id": 12 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), FakeStore::with_primary("t"), notifier);
    let envelope = RequestEnvelope::post("/api/users")
        .query("notify", "true")
        .json_body(json!({ "username": "sam" }));

    let result = client.send(envelope).await;
    assert_eq!(result.unwrap(), json!({ "id": 12 }));
}
