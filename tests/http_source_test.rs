use std::time::Duration;

use roster::source::UserSource;
use roster::source::http::HttpSource;
use roster::store::UserStore;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_body() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": {
                "name": "Deckow-Crist",
                "catchPhrase": "Proactive didactic contingency",
                "bs": "synergize scalable supply-chains"
            }
        }
    ])
}

fn source_for(server: &MockServer) -> HttpSource {
    HttpSource::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_and_decodes_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .expect(1)
        .mount(&server)
        .await;

    let users = source_for(&server).fetch_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].address.city, "Wisokyburgh");
    assert_eq!(users[1].company.catch_phrase, "Proactive didactic contingency");
}

#[tokio::test]
async fn server_error_reports_failed_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_users().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch users");
}

#[tokio::test]
async fn not_found_reports_failed_fetch() {
    let server = MockServer::start().await;

    let err = source_for(&server).fetch_users().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch users");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_users().await.unwrap_err();
    assert!(err.to_string().contains("unexpected response"));
}

#[tokio::test]
async fn store_keeps_decode_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":1}]"#))
        .mount(&server)
        .await;

    let mut store = UserStore::new();
    store.fetch_users(&source_for(&server)).await;
    let error = store.state().error.clone().unwrap();
    assert!(error.starts_with("unexpected response from user endpoint: "));
    assert!(error.contains("missing field"), "{error}");
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let source = HttpSource::new(&server.uri(), Duration::from_millis(200)).unwrap();
    assert!(source.fetch_users().await.is_err());
}

#[tokio::test]
async fn store_records_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut store = UserStore::new();
    store.fetch_users(&source_for(&server)).await;
    assert_eq!(store.state().error.as_deref(), Some("Failed to fetch users"));
    assert!(!store.state().loading);
    assert!(store.state().users.is_empty());
}
