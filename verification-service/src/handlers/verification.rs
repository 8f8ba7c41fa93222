use crate::services::analysis;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

/// Verify an uploaded document.
///
/// The upload is spooled to disk the way a real OCR pipeline would expect
/// it, then discarded untouched; the "extracted" fields come from the
/// canned table keyed by `doc_type`. Error paths between spool and discard
/// leak the spool file.
pub async fn verify_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;
    let mut doc_type = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        match field.name() {
            Some("document") => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::BadRequest(anyhow::anyhow!(
                            "Failed to read document bytes: {}",
                            e
                        ))
                    })?
                    .to_vec();
                upload = Some((file_name, data));
            }
            Some("doc_type") => {
                doc_type = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read doc_type field: {}", e))
                })?);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing document upload")))?;
    let doc_type =
        doc_type.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing doc_type field")))?;

    state.scratch.spool(&file_name, &data).await?;

    tracing::info!(
        file_name = %file_name,
        doc_type = %doc_type,
        size = data.len(),
        "Document verification requested"
    );

    let response = analysis::verify_document(&doc_type);

    state.scratch.discard(&file_name).await?;

    Ok(Json(response))
}
