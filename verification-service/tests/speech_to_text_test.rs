mod common;

use common::TestApp;
use reqwest::multipart;
use reqwest::StatusCode;

#[tokio::test]
async fn speech_to_text_returns_placeholder_transcript() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().part(
        "audio_file",
        multipart::Part::bytes(vec![0xAB; 2048])
            .file_name("answer.wav")
            .mime_str("audio/wav")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/speech-to-text", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["text"], "This is a placeholder for the transcribed text");
    assert_eq!(body["confidence"], 0.95);

    app.cleanup().await;
}

#[tokio::test]
async fn speech_to_text_ignores_upload_content() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    // An empty "audio" file gets the same canned answer
    let form = multipart::Form::new().part(
        "audio_file",
        multipart::Part::bytes(Vec::new())
            .file_name("silence.mp3")
            .mime_str("audio/mpeg")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/api/speech-to-text", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["text"], "This is a placeholder for the transcribed text");
    assert_eq!(body["confidence"], 0.95);

    app.cleanup().await;
}

#[tokio::test]
async fn speech_to_text_requires_an_audio_file() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let form = multipart::Form::new().text("something_else", "not a file");

    let response = client
        .post(format!("{}/api/speech-to-text", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    app.cleanup().await;
}
