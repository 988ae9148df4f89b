//! In-memory mock of the equipment API
//!
//! Serves the same surface and wire shapes as the real backend: the
//! `/api/v1/equipments` CRUD routes, the `{data, count}` list envelope,
//! and JSON `{"detail": ...}` error bodies. Records live in a shared
//! in-memory map, so a fresh server always starts empty.
//!
//! Used by the client integration tests and as an offline backend for
//! local development.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

use kitbase_core::{
    Equipment, EquipmentCreate, EquipmentUpdate, EquipmentsPage, Message, Validatable,
};

/// Shared in-memory record store
pub type Db = Arc<RwLock<HashMap<Uuid, Equipment>>>;

/// Error body matching the real backend's shape
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

type ApiFailure = (StatusCode, Json<ErrorDetail>);

/// Query window for the list endpoint
#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    100
}

/// Build the mock application with an empty store
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route(
            "/api/v1/equipments/",
            get(list_equipments).post(create_equipment),
        )
        .route(
            "/api/v1/equipments/{id}",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
        .with_state(db)
}

/// Serve the mock on the given listener until the task is dropped
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// ============================================================================
// Handlers
// ============================================================================

async fn list_equipments(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<EquipmentsPage> {
    let records = db.read().await;
    Json(page_of(&records, params.skip, params.limit))
}

async fn get_equipment(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Equipment>, ApiFailure> {
    let records = db.read().await;
    records.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn create_equipment(
    State(db): State<Db>,
    Json(input): Json<EquipmentCreate>,
) -> Result<Json<Equipment>, ApiFailure> {
    reject_invalid(&input)?;

    let equipment = Equipment {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        category: input.category,
        location: input.location,
    };
    db.write().await.insert(equipment.id, equipment.clone());
    Ok(Json(equipment))
}

async fn update_equipment(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<EquipmentUpdate>,
) -> Result<Json<Equipment>, ApiFailure> {
    reject_invalid(&input)?;

    let mut records = db.write().await;
    let equipment = records.get_mut(&id).ok_or_else(not_found)?;
    equipment.apply_update(&input);
    Ok(Json(equipment.clone()))
}

async fn delete_equipment(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, ApiFailure> {
    let mut records = db.write().await;
    records.remove(&id).ok_or_else(not_found)?;
    Ok(Json(Message {
        message: "Equipment deleted successfully".to_string(),
    }))
}

// ============================================================================
// Helpers
// ============================================================================

/// Cut one listing page out of the store
///
/// Records are ordered by title so pages are stable across requests;
/// `count` is always the full store size.
fn page_of(records: &HashMap<Uuid, Equipment>, skip: usize, limit: usize) -> EquipmentsPage {
    let mut data: Vec<Equipment> = records.values().cloned().collect();
    data.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

    EquipmentsPage {
        count: data.len(),
        data: data.into_iter().skip(skip).take(limit).collect(),
    }
}

fn not_found() -> ApiFailure {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Equipment not found".to_string(),
        }),
    )
}

/// Reject payloads violating the catalog field rules with a 422
fn reject_invalid(payload: &impl Validatable) -> Result<(), ApiFailure> {
    let violations = payload.validation_errors();
    if violations.is_empty() {
        return Ok(());
    }
    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDetail {
            detail: violations.join("; "),
        }),
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(titles: &[&str]) -> HashMap<Uuid, Equipment> {
        titles
            .iter()
            .map(|title| {
                let equipment = Equipment::new(*title, "Tools", "Shelf A");
                (equipment.id, equipment)
            })
            .collect()
    }

    #[test]
    fn page_count_reports_store_size_not_page_size() {
        let records = store_of(&["Drill", "Hammer", "Saw"]);
        let page = page_of(&records, 0, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.count, 3);
    }

    #[test]
    fn page_window_skips_and_limits_in_title_order() {
        let records = store_of(&["Drill", "Hammer", "Saw"]);
        let page = page_of(&records, 1, 1);
        let titles: Vec<_> = page.data.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Hammer"]);
    }

    #[test]
    fn page_window_past_end_is_empty() {
        let records = store_of(&["Drill"]);
        let page = page_of(&records, 5, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.count, 1);
    }

    #[test]
    fn invalid_create_is_rejected_with_detail() {
        let payload = EquipmentCreate::new("", "Tools", "Shelf A");
        let (status, Json(body)) = reject_invalid(&payload).unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.detail.contains("title"));
    }

    #[test]
    fn valid_update_passes_validation() {
        let payload = EquipmentUpdate {
            title: Some("Hammer Drill".to_string()),
            ..Default::default()
        };
        assert!(reject_invalid(&payload).is_ok());
    }

    #[test]
    fn error_detail_serializes_like_the_backend() {
        let body = ErrorDetail {
            detail: "Equipment not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"detail":"Equipment not found"}"#);
    }
}
