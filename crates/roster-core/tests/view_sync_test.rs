#![allow(clippy::unwrap_used)]
// End-to-end view-state scenarios: store messages drive real HTTP requests
// against a wiremock server through `UserDirectory`.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roster_core::{
    ColumnKey, FilterPatch, Msg, SortOrder, SortSpec, Store, UserDirectory, ViewerConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, UserDirectory, Store) {
    let server = MockServer::start().await;
    let config = ViewerConfig::new(Url::parse(&server.uri()).unwrap());
    let directory = UserDirectory::new(&config).unwrap();
    (server, directory, Store::new(config.page_size))
}

fn users_page(count: u64, total: u64, skip: u64) -> serde_json::Value {
    let users: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": skip + i,
                "firstName": format!("User{}", skip + i),
                "lastName": "Doe",
                "age": 20 + i,
                "address": { "city": "Denver", "country": "United States" }
            })
        })
        .collect();
    json!({ "users": users, "total": total, "skip": skip, "limit": count })
}

/// Dispatch `msg`, run the resulting fetch (if any) and feed it back.
async fn drive(store: &mut Store, directory: &UserDirectory, msg: Msg) -> bool {
    let Some(request) = store.dispatch(msg) else {
        return false;
    };
    let done = directory.execute(request).await;
    store.dispatch(done);
    true
}

// ── Scenarios ───────────────────────────────────────────────────────

#[tokio::test]
async fn initial_load_shows_first_of_six_pages() {
    let (server, directory, mut store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 0)))
        .expect(1)
        .mount(&server)
        .await;

    assert!(drive(&mut store, &directory, Msg::Mounted).await);

    let page = store.state().fetch.page().unwrap();
    assert_eq!(page.len(), 10);
    let info = store.state().page_info(store.page_size());
    assert_eq!(info.label(), "Page 1 of 6");
    assert!(info.has_next());
    assert!(!info.has_prev());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let keys: Vec<_> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert!(!keys.iter().any(|k| k == "sortBy" || k == "key"));
}

#[tokio::test]
async fn age_header_sorts_ascending() {
    let (server, directory, mut store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("sortBy", "age"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 0)))
        .mount(&server)
        .await;

    drive(&mut store, &directory, Msg::Mounted).await;
    assert!(drive(&mut store, &directory, Msg::HeaderClicked(ColumnKey::Age)).await);

    assert_eq!(store.state().sort, SortSpec::by(ColumnKey::Age, SortOrder::Asc));
    assert!(store.state().fetch.page().is_some());
}

#[tokio::test]
async fn last_name_filter_uses_filter_endpoint() {
    let (server, directory, mut store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/filter"))
        .and(query_param("key", "lastName"))
        .and(query_param("value", "Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(3, 3, 0)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 0)))
        .mount(&server)
        .await;

    drive(&mut store, &directory, Msg::Mounted).await;
    assert!(
        !drive(
            &mut store,
            &directory,
            Msg::FilterChanged(FilterPatch::field(ColumnKey::LastName)),
        )
        .await,
        "field change alone does not refetch"
    );
    assert!(
        drive(
            &mut store,
            &directory,
            Msg::FilterChanged(FilterPatch::text("Doe")),
        )
        .await
    );

    let info = store.state().page_info(store.page_size());
    assert_eq!(info.label(), "Page 1 of 1");
    assert!(!info.has_next());
}

#[tokio::test]
async fn server_error_becomes_message() {
    let (server, directory, mut store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    drive(&mut store, &directory, Msg::Mounted).await;

    let message = store.state().fetch.error().unwrap();
    assert!(message.contains("500"), "got: {message}");
    assert!(store.state().fetch.page().is_none());
}

#[tokio::test]
async fn out_of_order_completion_is_dropped() {
    let (server, directory, mut store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 0)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(10, 57, 10)))
        .mount(&server)
        .await;

    let first = store.dispatch(Msg::Mounted).unwrap();
    let second = store.dispatch(Msg::PageRequested(1)).unwrap();

    // Second request finishes first.
    let second_done = directory.execute(second).await;
    let first_done = directory.execute(first).await;
    store.dispatch(second_done);
    store.dispatch(first_done);

    let page = store.state().fetch.page().unwrap();
    assert_eq!(page.skip, 10);
    assert_eq!(page.users[0].id, 11);
    assert_eq!(store.state().page_index, 1);
}
