//! Full CRUD lifecycle tests against the live mock server.
//!
//! # Design
//! Each test starts its own mock server on an ephemeral port (so stores
//! never leak between tests), then exercises `EquipmentsClient` over real
//! HTTP. Validates request building, response decoding, and the error
//! mapping end-to-end.

use kitbase_api::EquipmentsClient;
use kitbase_core::{ApiError, EquipmentCreate, EquipmentUpdate};

/// Start a fresh mock server and return its base URL.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        kitbase_mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = start_server().await;
    let client = EquipmentsClient::with_base_url(&base_url).unwrap();

    // Step 1: list starts empty.
    let page = client.list(0, 100).await.unwrap();
    assert!(page.data.is_empty(), "expected empty catalog");
    assert_eq!(page.count, 0);

    // Step 2: create a record.
    let create_input =
        EquipmentCreate::new("Drill", "Power Tools", "Shelf A").with_description("Cordless");
    let created = client.create(&create_input).await.unwrap();
    assert_eq!(created.title, "Drill");
    assert_eq!(created.description.as_deref(), Some("Cordless"));
    assert_eq!(created.category, "Power Tools");
    assert_eq!(created.location, "Shelf A");
    let id = created.id;

    // Step 3: get the created record.
    let fetched = client.get(id).await.unwrap();
    assert_eq!(fetched, created);

    // Step 4: partial update, only the title changes.
    let update_input = EquipmentUpdate {
        title: Some("Hammer Drill".to_string()),
        ..Default::default()
    };
    let updated = client.update(id, &update_input).await.unwrap();
    assert_eq!(updated.title, "Hammer Drill");
    assert_eq!(updated.description.as_deref(), Some("Cordless"));
    assert_eq!(updated.category, "Power Tools");

    // Step 5: clearing the description sends an empty string, not an omission.
    let update_input = EquipmentUpdate {
        description: Some(String::new()),
        ..Default::default()
    };
    let updated = client.update(id, &update_input).await.unwrap();
    assert_eq!(updated.title, "Hammer Drill");
    assert_eq!(updated.description.as_deref(), Some(""));

    // Step 6: list has one record and the count matches.
    let page = client.list(0, 100).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.count, 1);

    // Step 7: delete.
    let message = client.delete(id).await.unwrap();
    assert_eq!(message.message, "Equipment deleted successfully");

    // Step 8: get after delete is a 404 with the backend detail text.
    let err = client.get(id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.detail(), Some("Equipment not found"));
    assert_eq!(err.user_message(), "Equipment not found");

    // Step 9: delete again, still 404.
    let err = client.delete(id).await.unwrap_err();
    assert!(err.is_not_found());

    // Step 10: list is empty again.
    let page = client.list(0, 100).await.unwrap();
    assert!(page.data.is_empty(), "expected empty catalog after delete");
}

#[tokio::test]
async fn list_pagination_window() {
    let base_url = start_server().await;
    let client = EquipmentsClient::with_base_url(&base_url).unwrap();

    for title in ["Drill", "Hammer", "Saw"] {
        let input = EquipmentCreate::new(title, "Hand Tools", "Shelf B");
        client.create(&input).await.unwrap();
    }

    // A window smaller than the catalog still reports the full count.
    let page = client.list(0, 2).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.count, 3);

    // The next window picks up where the first left off.
    let rest = client.list(2, 2).await.unwrap();
    assert_eq!(rest.data.len(), 1);
    assert_eq!(rest.count, 3);
}

#[tokio::test]
async fn update_missing_record_is_not_found() {
    let base_url = start_server().await;
    let client = EquipmentsClient::with_base_url(&base_url).unwrap();

    let update_input = EquipmentUpdate {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let err = client
        .update(uuid::Uuid::new_v4(), &update_input)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Equipment not found");
}

#[tokio::test]
async fn invalid_payload_is_rejected_with_detail() {
    let base_url = start_server().await;
    let client = EquipmentsClient::with_base_url(&base_url).unwrap();

    let err = client
        .create(&EquipmentCreate::new("", "Power Tools", "Shelf A"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(422));
    assert!(err.user_message().contains("title"));

    // A set-but-blank title on update is rejected the same way.
    let created = client
        .create(&EquipmentCreate::new("Drill", "Power Tools", "Shelf A"))
        .await
        .unwrap();
    let err = client
        .update(
            created.id,
            &EquipmentUpdate {
                title: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(422));
}

#[tokio::test]
async fn connection_failure_maps_to_network_error() {
    // Grab an ephemeral port, then drop the listener so nothing answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EquipmentsClient::with_base_url(&format!("http://{addr}")).unwrap();
    let err = client.list(0, 10).await.unwrap_err();

    assert!(err.is_network());
    assert!(!err.is_status());
    assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout));
}
