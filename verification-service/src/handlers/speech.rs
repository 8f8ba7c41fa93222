use crate::services::analysis;
use axum::{extract::Multipart, response::IntoResponse, Json};
use service_core::error::AppError;

/// Accept an audio upload and return the canned transcript. The bytes are
/// drained so the client gets a clean response, but never inspected.
pub async fn speech_to_text(mut multipart: Multipart) -> Result<impl IntoResponse, AppError> {
    let mut audio = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() == Some("audio_file") {
            let file_name = field.file_name().unwrap_or("unnamed").to_string();
            let size = field
                .bytes()
                .await
                .map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read audio bytes: {}", e))
                })?
                .len();
            audio = Some((file_name, size));
        }
    }

    let (file_name, size) =
        audio.ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing audio_file upload")))?;

    tracing::info!(
        file_name = %file_name,
        size = size,
        "Speech-to-text requested"
    );

    Ok(Json(analysis::transcribe_audio()))
}
