//! API integration tests
//!
//! Run against a live server (and MongoDB) with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its assigned id
async fn create_book(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/books/newbook", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book_assigns_id() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "Name": "Dune",
            "Price": 19.99,
            "Category": "SciFi",
            "Author": "Herbert"
        }),
    )
    .await;

    assert!(created["Id"].is_string());
    assert_eq!(created["Name"], "Dune");
    assert_eq!(created["Author"], "Herbert");
}

#[tokio::test]
#[ignore]
async fn test_create_book_empty_name_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/newbook", BASE_URL))
        .json(&json!({ "Price": 9.99 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_is_404() {
    let client = Client::new();

    // Valid ObjectId shape that matches nothing
    let response = client
        .post(format!("{}/books/getbook/ffffffffffffffffffffffff", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_get_malformed_id_is_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/getbook/not-an-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books/listbooks", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();

    // Create
    let created = create_book(
        &client,
        json!({
            "Name": "Dune",
            "Price": 19.99,
            "Category": "SciFi",
            "Author": "Herbert"
        }),
    )
    .await;
    let id = created["Id"].as_str().expect("No id in response").to_string();

    // Get returns the same fields
    let response = client
        .post(format!("{}/books/getbook/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request");
    assert!(response.status().is_success());
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["Name"], "Dune");
    assert_eq!(fetched["Price"], 19.99);
    assert_eq!(fetched["Category"], "SciFi");
    assert_eq!(fetched["Author"], "Herbert");

    // Listing includes it
    let response = client
        .post(format!("{}/books/listbooks", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request");
    let listing: Value = response.json().await.expect("Failed to parse response");
    assert!(listing
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["Id"] == id.as_str()));

    // Update is a full-record replacement
    let response = client
        .put(format!("{}/books", BASE_URL))
        .json(&json!({
            "Id": id,
            "Name": "Dune",
            "Price": 24.99,
            "Category": "SciFi",
            "Author": "Herbert"
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/books/getbook/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request");
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["Price"], 24.99);
    // Description was omitted from the replacement body, so it is reset
    assert_eq!(updated["Description"], "");

    // Delete, then the book is gone
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/books/getbook/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send get request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books", BASE_URL))
        .json(&json!({
            "Id": "ffffffffffffffffffffffff",
            "Name": "Ghost",
            "Price": 1.0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_book_is_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/ffffffffffffffffffffffff", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
