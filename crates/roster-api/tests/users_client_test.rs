#![allow(clippy::unwrap_used)]
// Integration tests for `UsersClient` using wiremock.

use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roster_api::{Error, SortOrder, TlsMode, TransportConfig, UserQuery, UsersClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, UsersClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = UsersClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn users_page(count: u64, total: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "firstName": format!("First{id}"),
                "lastName": "Doe",
                "age": 20 + id,
                "address": { "city": "Denver", "country": "United States" }
            })
        })
        .collect();
    json!({ "users": users, "total": total, "skip": 0, "limit": count })
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_plain_form() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_users(&UserQuery::page(10, 0)).await.unwrap();

    assert_eq!(page.users.len(), 10);
    assert_eq!(page.total, 57);
    assert_eq!(page.users[0].first_name.as_deref(), Some("First1"));
    assert_eq!(
        page.users[0]
            .address
            .as_ref()
            .and_then(|a| a.country.as_deref()),
        Some("United States")
    );

    let requests = server.received_requests().await.unwrap();
    let query: Vec<_> = requests[0].url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert!(!query.contains(&"sortBy".to_string()));
    assert!(!query.contains(&"key".to_string()));
}

#[tokio::test]
async fn test_list_users_sorted() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("sortBy", "age"))
        .and(query_param("order", "asc"))
        .and(query_param("skip", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(3, 23)))
        .expect(1)
        .mount(&server)
        .await;

    let query = UserQuery::page(10, 20).sort_by("age", SortOrder::Asc);
    let page = client.list_users(&query).await.unwrap();

    assert_eq!(page.users.len(), 3);
    assert_eq!(page.total, 23);
}

#[tokio::test]
async fn test_list_users_filter_form() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/filter"))
        .and(query_param("key", "lastName"))
        .and(query_param("value", "Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(2, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let query = UserQuery::page(10, 0).filter("lastName", "Doe");
    let page = client.list_users(&query).await.unwrap();

    assert_eq!(page.total, 2);
    assert!(page.users.iter().all(|u| u.last_name.as_deref() == Some("Doe")));
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_embeds_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = client.list_users(&UserQuery::page(10, 0)).await.unwrap_err();

    assert!(
        matches!(err, Error::Status { status: 500, .. }),
        "expected Status error, got: {err:?}"
    );
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = client.list_users(&UserQuery::page(10, 0)).await.unwrap_err();

    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>nope</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_page(1, 1))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig {
        tls: TlsMode::System,
        timeout: Duration::from_millis(100),
    };
    let client = UsersClient::new(Url::parse(&server.uri()).unwrap(), &transport).unwrap();

    let err = client.list_users(&UserQuery::page(10, 0)).await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
    assert!(matches!(err, Error::Timeout { timeout_secs: 0 }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) on localhost is essentially never listening.
    let client = UsersClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9").unwrap(),
    );

    let err = client.list_users(&UserQuery::page(10, 0)).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert_eq!(err.status(), None);
}
