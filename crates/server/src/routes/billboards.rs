use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use service::billboard::domain::{Billboard, BillboardChanges, BillboardDeletion, BillboardEnvelope, BillboardInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BillboardsEnvelope {
    pub billboards: Vec<Billboard>,
}

type StorePath = WithRejection<Path<(String, Uuid)>, ApiError>;
type BillboardPath = WithRejection<Path<(String, Uuid, Uuid)>, ApiError>;

#[utoipa::path(
    post,
    path = "/api/user/{userId}/store/{storeId}/billboard",
    tag = "billboards",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id")
    ),
    request_body = crate::openapi::BillboardInputDoc,
    responses(
        (status = 201, description = "Billboard created", body = crate::openapi::BillboardEnvelopeDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc),
        (status = 401, description = "Store missing or not owned by the user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id)), _): StorePath,
    WithRejection(Json(input), _): WithRejection<Json<BillboardInput>, ApiError>,
) -> Result<(StatusCode, Json<BillboardEnvelope>), ApiError> {
    let envelope = state.billboards.create(&user_id, store_id, input).await?;
    info!(%user_id, %store_id, billboard_id = %envelope.billboard.id, "billboard_create_request");
    Ok((StatusCode::CREATED, Json(envelope)))
}

#[utoipa::path(
    get,
    path = "/api/user/{userId}/store/{storeId}/billboard",
    tag = "billboards",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id")
    ),
    responses(
        (status = 200, description = "Billboards of the store", body = crate::openapi::BillboardsEnvelopeDoc),
        (status = 404, description = "Store not found or no billboards", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id)), _): StorePath,
) -> Result<Json<BillboardsEnvelope>, ApiError> {
    let billboards = state.billboards.find_all(&user_id, store_id).await?;
    info!(%store_id, count = billboards.len(), "billboards_listed");
    Ok(Json(BillboardsEnvelope { billboards }))
}

#[utoipa::path(
    get,
    path = "/api/user/{userId}/store/{storeId}/billboard/{id}",
    tag = "billboards",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id"),
        ("id" = Uuid, Path, description = "Billboard id")
    ),
    responses(
        (status = 200, description = "Billboard", body = crate::openapi::BillboardEnvelopeDoc),
        (status = 404, description = "Store or billboard not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id, id)), _): BillboardPath,
) -> Result<Json<BillboardEnvelope>, ApiError> {
    Ok(Json(state.billboards.get(&user_id, store_id, id).await?))
}

#[utoipa::path(
    patch,
    path = "/api/user/{userId}/store/{storeId}/billboard/{id}",
    tag = "billboards",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id"),
        ("id" = Uuid, Path, description = "Billboard id")
    ),
    request_body = crate::openapi::BillboardChangesDoc,
    responses(
        (status = 200, description = "Billboard updated", body = crate::openapi::BillboardEnvelopeDoc),
        (status = 400, description = "Invalid body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Store or billboard not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id, id)), _): BillboardPath,
    WithRejection(Json(changes), _): WithRejection<Json<BillboardChanges>, ApiError>,
) -> Result<Json<BillboardEnvelope>, ApiError> {
    Ok(Json(state.billboards.update(&user_id, store_id, id, changes).await?))
}

#[utoipa::path(
    delete,
    path = "/api/user/{userId}/store/{storeId}/billboard/{id}",
    tag = "billboards",
    params(
        ("userId" = String, Path, description = "Owner id"),
        ("storeId" = Uuid, Path, description = "Store id"),
        ("id" = Uuid, Path, description = "Billboard id")
    ),
    responses(
        (status = 200, description = "Billboard deleted", body = crate::openapi::BillboardDeletionDoc),
        (status = 404, description = "Store or billboard not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path((user_id, store_id, id)), _): BillboardPath,
) -> Result<Json<BillboardDeletion>, ApiError> {
    let deletion = state.billboards.delete(&user_id, store_id, id).await?;
    info!(%user_id, %store_id, billboard_id = %id, "billboard_delete_request");
    Ok(Json(deletion))
}
