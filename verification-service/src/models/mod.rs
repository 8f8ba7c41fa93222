use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechToTextResponse {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub score: f64,
    pub magnitude: f64,
    pub sentiment: String,
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentVerificationResponse {
    pub verified: bool,
    pub confidence: f64,
    pub extracted_data: Map<String, Value>,
}

/// Result of cross-checking a recorded video answer against previously
/// extracted document fields. Keys are camelCase because the onboarding
/// frontend consumes this payload directly.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysisResponse {
    pub transcribed_text: String,
    pub verified: bool,
    pub confidence: f64,
    pub matched_document: Option<String>,
}
