use crate::models::SentimentRequest;
use crate::services::analysis;
use axum::{response::IntoResponse, Form, Json};

/// Sentiment is a demo fixture: every input scores positive.
pub async fn analyze_sentiment(Form(request): Form<SentimentRequest>) -> impl IntoResponse {
    tracing::info!(chars = request.text.len(), "Sentiment analysis requested");

    Json(analysis::analyze_sentiment())
}
