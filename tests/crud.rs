mod common;

use common::{query_param, setup};
use pretty_assertions::assert_eq;
use restide::{Error, Method};
use serde_json::{json, Value};

#[tokio::test]
async fn fetch_id_appends_the_id_to_the_path() {
    let (transport, client) = setup();
    transport.respond_with(json!({"id": 42, "name": "widget"}));

    let item = client.builder("/items").fetch_id(42).await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, "/api/items/42");
    assert_eq!(item.id().as_deref(), Some("42"));
    assert_eq!(item.field("name"), Some(&json!("widget")));
}

#[tokio::test]
async fn fetch_reads_the_seeded_path_as_is() {
    let (transport, client) = setup();
    transport.respond_with(json!({"id": 42}));

    client.builder("/items/42").fetch().await.unwrap();

    assert_eq!(transport.last_request().url, "/api/items/42");
}

#[tokio::test]
async fn fetch_rejects_a_non_object_response() {
    let (transport, client) = setup();
    transport.respond_with(json!([1, 2]));

    let err = client.builder("/items").fetch_id(1).await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape(_)));
}

#[tokio::test]
async fn list_wraps_every_element() {
    let (transport, client) = setup();
    transport.respond_with(json!([{"id": 1}, {"id": 2}]));

    let items = client.builder("/items").list().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id().as_deref(), Some("1"));
    assert_eq!(items[1].id().as_deref(), Some("2"));
}

#[tokio::test]
async fn list_rejects_a_non_array_response() {
    let (transport, client) = setup();
    transport.respond_with(json!({"id": 1}));

    let err = client.builder("/items").list().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape(_)));
}

#[tokio::test]
async fn first_forces_limit_one_and_tolerates_emptiness() {
    let (transport, client) = setup();
    transport.respond_with(json!([]));

    let none = client.builder("/items").first().await.unwrap();
    assert!(none.is_none());

    let q: Value =
        serde_json::from_str(&query_param(&transport.last_request().url, "q").unwrap()).unwrap();
    assert_eq!(q["limit"], json!(1));
}

#[tokio::test]
async fn first_returns_the_sole_element() {
    let (transport, client) = setup();
    transport.respond_with(json!([{"id": 9}]));

    let first = client.builder("/items").first().await.unwrap().unwrap();
    assert_eq!(first.id().as_deref(), Some("9"));
}

#[tokio::test]
async fn only_requires_exactly_one_result() {
    let (transport, client) = setup();

    transport.respond_with(json!([]));
    let err = client.builder("/items").only().await.unwrap_err();
    assert!(matches!(err, Error::Cardinality { got: 0 }));

    transport.respond_with(json!([{"id": 1}, {"id": 2}]));
    let err = client.builder("/items").only().await.unwrap_err();
    assert!(matches!(err, Error::Cardinality { got: 2 }));

    transport.respond_with(json!([{"id": 1}]));
    let sole = client.builder("/items").only().await.unwrap();
    assert_eq!(sole.id().as_deref(), Some("1"));
}

#[tokio::test]
async fn only_does_not_override_the_limit() {
    let (transport, client) = setup();
    transport.respond_with(json!([{"id": 1}]));

    client.builder("/items").only().await.unwrap();

    assert_eq!(query_param(&transport.last_request().url, "q"), None);
}

#[tokio::test]
async fn create_posts_the_serialized_body() {
    let (transport, client) = setup();
    transport.respond_with(json!({"id": 5, "name": "widget"}));

    let created = client
        .builder("/items")
        .create(&json!({"name": "widget"}))
        .await
        .unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "/api/items");
    assert_eq!(req.body.as_deref(), Some(r#"{"name":"widget"}"#));
    assert_eq!(created["id"], json!(5));
}

#[tokio::test]
async fn update_and_patch_use_their_verbs() {
    let (transport, client) = setup();

    client
        .builder("/items/5")
        .update(&json!({"name": "renamed"}))
        .await
        .unwrap();
    client
        .builder("/items/5")
        .patch(&json!({"name": "patched"}))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].url, "/api/items/5");
    assert_eq!(requests[1].method, Method::Patch);
    assert_eq!(requests[1].body.as_deref(), Some(r#"{"name":"patched"}"#));
}

#[tokio::test]
async fn destroy_issues_a_bodyless_delete() {
    let (transport, client) = setup();

    client.builder("/items/5").destroy().await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url, "/api/items/5");
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn typed_models_deserialize_from_wrapped_instances() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Item {
        id: u64,
        name: String,
    }

    let (transport, client) = setup();
    transport.respond_with(json!({"id": 42, "name": "widget"}));

    let item: Item = client
        .builder("/items")
        .fetch_id(42)
        .await
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(
        item,
        Item {
            id: 42,
            name: "widget".to_string()
        }
    );
}
