use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use service::store::domain::{Store, StoreDeletion};

use crate::errors::ApiError;
use crate::state::AppState;

/// `{ "name": … }` for create and rename. A missing name fails validation.
#[derive(Debug, Deserialize)]
pub struct StoreBody {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct StoreEnvelope {
    pub store: Store,
}

#[derive(Debug, Serialize)]
pub struct StoresEnvelope {
    pub stores: Vec<Store>,
}

#[utoipa::path(
    post,
    path = "/api/user/{userId}/store",
    tag = "stores",
    params(("userId" = String, Path, description = "Owner id")),
    request_body = crate::openapi::StoreBodyDoc,
    responses(
        (status = 201, description = "Store created", body = crate::openapi::StoreEnvelopeDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<StoreBody>, ApiError>,
) -> Result<(StatusCode, Json<StoreEnvelope>), ApiError> {
    let store = state.users.create_store(&user_id, &body.name).await?;
    info!(%user_id, store_id = %store.id, "store_create_request");
    Ok((StatusCode::CREATED, Json(StoreEnvelope { store })))
}

#[utoipa::path(
    get,
    path = "/api/user/{userId}/store/{storeId}",
    tag = "stores",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id")
    ),
    responses(
        (status = 200, description = "Store", body = crate::openapi::StoreEnvelopeDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id)), _): WithRejection<Path<(String, Uuid)>, ApiError>,
) -> Result<Json<StoreEnvelope>, ApiError> {
    let store = state.users.get_store(&user_id, store_id).await?;
    Ok(Json(StoreEnvelope { store }))
}

#[utoipa::path(
    get,
    path = "/api/user/{userId}/store",
    tag = "stores",
    params(("userId" = String, Path, description = "Owner id")),
    responses(
        (status = 200, description = "First store of the user", body = crate::openapi::StoreEnvelopeDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_by_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<StoreEnvelope>, ApiError> {
    let store = state.users.get_store_by_user_id(&user_id).await?;
    Ok(Json(StoreEnvelope { store }))
}

#[utoipa::path(
    get,
    path = "/api/user/{userId}/stores",
    tag = "stores",
    params(("userId" = String, Path, description = "Owner id")),
    responses(
        (status = 200, description = "All stores of the user", body = crate::openapi::StoresEnvelopeDoc),
        (status = 404, description = "Stores not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<StoresEnvelope>, ApiError> {
    let stores = state.users.get_all_user_stores(&user_id).await?;
    info!(%user_id, count = stores.len(), "stores_listed");
    Ok(Json(StoresEnvelope { stores }))
}

#[utoipa::path(
    patch,
    path = "/api/user/{userId}/store/{storeId}",
    tag = "stores",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id")
    ),
    request_body = crate::openapi::StoreBodyDoc,
    responses(
        (status = 200, description = "Store renamed", body = crate::openapi::StoreEnvelopeDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id)), _): WithRejection<Path<(String, Uuid)>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<StoreBody>, ApiError>,
) -> Result<Json<StoreEnvelope>, ApiError> {
    let store = state.users.update_store(&user_id, store_id, &body.name).await?;
    Ok(Json(StoreEnvelope { store }))
}

#[utoipa::path(
    delete,
    path = "/api/user/{userId}/store/{storeId}",
    tag = "stores",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id")
    ),
    responses(
        (status = 200, description = "Store deleted", body = crate::openapi::StoreDeletionDoc),
        (status = 404, description = "Record to delete does not exist.", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id)), _): WithRejection<Path<(String, Uuid)>, ApiError>,
) -> Result<Json<StoreDeletion>, ApiError> {
    let deletion = state.users.delete_store(&user_id, store_id).await?;
    info!(%user_id, %store_id, "store_delete_request");
    Ok(Json(deletion))
}
