//! Image upload handler

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use catalog_service::{ImageUploadResponse, ServiceError, UploadService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field carrying the file
pub const IMAGE_FIELD: &str = "image";

/// Store an uploaded image
///
/// POST /image
///
/// Only the first `image` field is stored; other fields are skipped.
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<ImageUploadResponse>> {
    let mut multipart = multipart.map_err(|e| ApiError::invalid_multipart(e.body_text()))?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;

        let service = UploadService::new(state.service_context());
        let response = service.store_image(file_name.as_deref(), &data).await?;
        return Ok(Json(response));
    }

    Err(ServiceError::invalid_upload(format!("Missing multipart field \"{IMAGE_FIELD}\"")).into())
}
