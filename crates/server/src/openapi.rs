use chrono::{DateTime, FixedOffset};
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorDoc { pub status_code: u16, pub message: String }

#[derive(ToSchema)]
pub struct DbHealthDoc { pub status: String, pub error: Option<String> }

#[derive(ToSchema)]
pub struct HealthDetailsDoc { pub db: DbHealthDoc }

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String, pub details: HealthDetailsDoc }

#[derive(ToSchema)]
pub struct StoreBodyDoc { pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct StoreDoc {
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(ToSchema)]
pub struct StoreEnvelopeDoc { pub store: StoreDoc }

#[derive(ToSchema)]
pub struct StoresEnvelopeDoc { pub stores: Vec<StoreDoc> }

#[derive(ToSchema)]
pub struct StoreDeletionDoc { pub deleted: StoreEnvelopeDoc }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BillboardInputDoc { pub label: String, pub image_url: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BillboardChangesDoc { pub label: Option<String>, pub image_url: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BillboardDoc {
    pub id: Uuid,
    pub label: String,
    pub image_url: String,
    pub store_id: Uuid,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(ToSchema)]
pub struct BillboardEnvelopeDoc { pub billboard: BillboardDoc }

#[derive(ToSchema)]
pub struct BillboardsEnvelopeDoc { pub billboards: Vec<BillboardDoc> }

#[derive(ToSchema)]
pub struct BillboardDeletionDoc { pub deleted: BillboardEnvelopeDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::stores::create,
        crate::routes::stores::get,
        crate::routes::stores::get_by_user,
        crate::routes::stores::list,
        crate::routes::stores::update,
        crate::routes::stores::delete,
        crate::routes::billboards::create,
        crate::routes::billboards::list,
        crate::routes::billboards::get,
        crate::routes::billboards::update,
        crate::routes::billboards::delete,
    ),
    components(
        schemas(
            ErrorDoc,
            DbHealthDoc,
            HealthDetailsDoc,
            HealthDoc,
            StoreBodyDoc,
            StoreDoc,
            StoreEnvelopeDoc,
            StoresEnvelopeDoc,
            StoreDeletionDoc,
            BillboardInputDoc,
            BillboardChangesDoc,
            BillboardDoc,
            BillboardEnvelopeDoc,
            BillboardsEnvelopeDoc,
            BillboardDeletionDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "stores"),
        (name = "billboards")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/api/health",
            "/api/user/{userId}/store",
            "/api/user/{userId}/stores",
            "/api/user/{userId}/store/{storeId}",
            "/api/user/{userId}/store/{storeId}/billboard",
            "/api/user/{userId}/store/{storeId}/billboard/{id}",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
