//! Canned "AI" analysis results.
//!
//! This service is a demo mock: nothing here inspects uploaded bytes. Every
//! function returns the fixed payloads the onboarding frontend expects, with
//! branching keyed only on form fields and uploaded filenames. A production
//! deployment would swap these for real speech-to-text, NLP, and OCR
//! providers.

use crate::models::{
    DocumentVerificationResponse, SentimentResponse, SpeechToTextResponse, VideoAnalysisResponse,
};
use serde_json::{json, Map, Value};

/// Name the demo fixtures expect on identity documents.
const EXPECTED_NAME: &str = "Rishi Anand";
/// City the demo fixtures expect in the aadhaar address.
const EXPECTED_CITY: &str = "Bangalore";
/// Average balance above which the income answer counts as verified.
const MIN_AVERAGE_BALANCE: f64 = 30000.0;

pub fn transcribe_audio() -> SpeechToTextResponse {
    SpeechToTextResponse {
        text: "This is a placeholder for the transcribed text".to_string(),
        confidence: 0.95,
    }
}

pub fn analyze_sentiment() -> SentimentResponse {
    SentimentResponse {
        score: 0.8,
        magnitude: 0.6,
        sentiment: "positive".to_string(),
    }
}

/// Simulated OCR output, selected by exact match on `doc_type`. Unknown
/// document types yield an empty map.
pub fn extract_document_fields(doc_type: &str) -> Map<String, Value> {
    let fields = match doc_type {
        "aadhaar_card" => json!({
            "name": "Rishi Anand",
            "aadhaar_number": "3318-7769-4555",
            "dob": "07-10-2004",
            "address": "123 Main St, Bangalore, Karnataka",
            "gender": "Male"
        }),
        "pan_card" => json!({
            "name": "Rishi Anand",
            "pan_number": "ABCDE1234F",
            "dob": "07-10-2004",
            "father_name": "Anand"
        }),
        "bank_statement" => json!({
            "account_holder": "Rishi Anand",
            "account_number": "XXXXXXXX5678",
            "bank_name": "HDFC Bank",
            "branch": "Koramangala Branch",
            "average_balance": "125000",
            "statement_period": "Jan-Mar 2025"
        }),
        "photo_id" => json!({
            "name": "Rishi Anand",
            "id_type": "Voter ID",
            "id_number": "ABC1234567",
            "issue_date": "01-01-2020",
            "valid_until": "01-01-2030"
        }),
        _ => json!({}),
    };

    match fields {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Documents are always "verified" with fixed confidence; only the
/// extracted fields vary by document type.
pub fn verify_document(doc_type: &str) -> DocumentVerificationResponse {
    DocumentVerificationResponse {
        verified: true,
        confidence: 0.95,
        extracted_data: extract_document_fields(doc_type),
    }
}

/// The question a video answer responds to is encoded in the uploaded
/// filename as the portion before the first hyphen (`identity-q1.mp4`).
/// Filenames without a hyphen fall back to the generic branch.
pub fn question_type(filename: &str) -> &str {
    match filename.split_once('-') {
        Some((prefix, _)) => prefix,
        None => "generic",
    }
}

/// Cross-check a (canned) video answer transcript against the document
/// fields the caller previously extracted.
pub fn analyze_video_answer(filename: &str, document_data: &Value) -> VideoAnalysisResponse {
    match question_type(filename) {
        "identity" => {
            let matches = document_field(document_data, "aadhaar_card", "name")
                .is_some_and(|name| contains_ignore_case(name, EXPECTED_NAME));
            answer(
                "My name is John Doe and I was born on January 1st, 1990",
                matches,
                0.92,
                "aadhaar_card",
            )
        }
        "address" => {
            let matches = document_field(document_data, "aadhaar_card", "address")
                .is_some_and(|address| contains_ignore_case(address, EXPECTED_CITY));
            answer(
                "I live at 123 Main St in Bangalore, Karnataka",
                matches,
                0.89,
                "aadhaar_card",
            )
        }
        "income" => {
            let matches = document_data
                .get("bank_statement")
                .and_then(|section| section.get("average_balance"))
                .and_then(numeric)
                .is_some_and(|balance| balance > MIN_AVERAGE_BALANCE);
            answer(
                "My monthly income is around 60,000 rupees",
                matches,
                0.85,
                "bank_statement",
            )
        }
        _ => VideoAnalysisResponse {
            transcribed_text: "This is a sample response for testing purposes".to_string(),
            verified: true,
            confidence: 0.75,
            matched_document: None,
        },
    }
}

fn answer(
    transcript: &str,
    verified: bool,
    confidence: f64,
    matched: &str,
) -> VideoAnalysisResponse {
    VideoAnalysisResponse {
        transcribed_text: transcript.to_string(),
        verified,
        confidence: if verified { confidence } else { 0.0 },
        matched_document: verified.then(|| matched.to_string()),
    }
}

fn document_field<'a>(data: &'a Value, section: &str, key: &str) -> Option<&'a str> {
    data.get(section)?.get(key)?.as_str()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Accept both string-encoded and raw JSON numbers; anything else is
/// treated as not-a-number rather than an error.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_takes_prefix_before_first_hyphen() {
        assert_eq!(question_type("identity-q1.mp4"), "identity");
        assert_eq!(question_type("income-test.mp4"), "income");
        assert_eq!(question_type("address-2024-01.webm"), "address");
    }

    #[test]
    fn question_type_defaults_to_generic_without_hyphen() {
        assert_eq!(question_type("answer.mp4"), "generic");
        assert_eq!(question_type(""), "generic");
    }

    #[test]
    fn aadhaar_fields_match_fixtures() {
        let fields = extract_document_fields("aadhaar_card");
        assert_eq!(fields["name"], "Rishi Anand");
        assert_eq!(fields["aadhaar_number"], "3318-7769-4555");
        assert_eq!(fields["dob"], "07-10-2004");
        assert_eq!(fields["address"], "123 Main St, Bangalore, Karnataka");
        assert_eq!(fields["gender"], "Male");
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn unknown_doc_type_yields_empty_fields() {
        assert!(extract_document_fields("passport").is_empty());
        assert!(extract_document_fields("").is_empty());
    }

    #[test]
    fn document_verification_is_always_positive() {
        let response = verify_document("pan_card");
        assert!(response.verified);
        assert_eq!(response.confidence, 0.95);
        assert_eq!(response.extracted_data["pan_number"], "ABCDE1234F");
    }

    #[test]
    fn identity_answer_matches_case_insensitively() {
        let data = json!({ "aadhaar_card": { "name": "MR RISHI ANAND" } });
        let result = analyze_video_answer("identity-q1.mp4", &data);
        assert!(result.verified);
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.matched_document.as_deref(), Some("aadhaar_card"));
    }

    #[test]
    fn identity_answer_fails_without_matching_name() {
        let data = json!({ "aadhaar_card": { "name": "Someone Else" } });
        let result = analyze_video_answer("identity-q1.mp4", &data);
        assert!(!result.verified);
        assert_eq!(result.confidence, 0.0);
        assert!(result.matched_document.is_none());
    }

    #[test]
    fn identity_answer_fails_when_section_missing() {
        let result = analyze_video_answer("identity-q1.mp4", &json!({}));
        assert!(!result.verified);
    }

    #[test]
    fn address_answer_checks_city_substring() {
        let data = json!({ "aadhaar_card": { "address": "42 MG Road, bangalore" } });
        let result = analyze_video_answer("address-q2.mp4", &data);
        assert!(result.verified);
        assert_eq!(result.confidence, 0.89);
    }

    #[test]
    fn income_answer_verifies_balance_above_threshold() {
        let data = json!({ "bank_statement": { "average_balance": "40000" } });
        let result = analyze_video_answer("income-test.mp4", &data);
        assert!(result.verified);
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.matched_document.as_deref(), Some("bank_statement"));
    }

    #[test]
    fn income_answer_rejects_balance_at_or_below_threshold() {
        let data = json!({ "bank_statement": { "average_balance": "20000" } });
        let result = analyze_video_answer("income-test.mp4", &data);
        assert!(!result.verified);
        assert!(result.matched_document.is_none());

        let data = json!({ "bank_statement": { "average_balance": "30000" } });
        assert!(!analyze_video_answer("income-q3.mp4", &data).verified);
    }

    #[test]
    fn income_answer_treats_non_numeric_balance_as_unverified() {
        let data = json!({ "bank_statement": { "average_balance": "plenty" } });
        let result = analyze_video_answer("income-test.mp4", &data);
        assert!(!result.verified);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn income_answer_accepts_raw_json_numbers() {
        let data = json!({ "bank_statement": { "average_balance": 40000 } });
        assert!(analyze_video_answer("income-test.mp4", &data).verified);
    }

    #[test]
    fn unknown_question_is_always_verified() {
        let result = analyze_video_answer("smalltalk-q9.mp4", &json!({}));
        assert!(result.verified);
        assert_eq!(result.confidence, 0.75);
        assert!(result.matched_document.is_none());
    }
}
