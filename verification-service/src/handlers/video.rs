use crate::services::analysis;
use crate::startup::AppState;
use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// Analyze a recorded video answer against previously extracted document
/// fields.
///
/// The question being answered is derived from the uploaded filename
/// (`identity-q1.mp4` -> identity); the transcript is canned per question.
/// The upload is spooled before `document_data` is parsed, so a malformed
/// JSON body leaves the spool file behind; only the happy path cleans up.
pub async fn video_response_analysis(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;
    let mut document_data = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        match field.name() {
            Some("video_file") => {
                let file_name = field.file_name().unwrap_or("unnamed").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::BadRequest(anyhow::anyhow!("Failed to read video bytes: {}", e))
                    })?
                    .to_vec();
                upload = Some((file_name, data));
            }
            Some("document_data") => {
                document_data = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!(
                        "Failed to read document_data field: {}",
                        e
                    ))
                })?);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing video_file upload")))?;
    let document_data = document_data
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing document_data field")))?;

    state.scratch.spool(&file_name, &data).await?;

    let doc_data: Value = serde_json::from_str(&document_data).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Invalid document_data JSON: {}", e))
    })?;

    let response = analysis::analyze_video_answer(&file_name, &doc_data);

    tracing::info!(
        file_name = %file_name,
        question_type = %analysis::question_type(&file_name),
        verified = response.verified,
        "Video response analyzed"
    );

    state.scratch.discard(&file_name).await?;

    Ok(Json(response))
}
