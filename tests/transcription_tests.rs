//! Speech recognition integration tests against a mocked endpoint

use wiremock::matchers::{header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mindscribe::application::ports::VoiceError;
use mindscribe::infrastructure::GoogleVoiceInput;

/// The recognition endpoint answers with line-delimited JSON; the first
/// line is usually an empty result set.
const RESPONSE_BODY: &str = concat!(
    "{\"result\":[]}\n",
    "{\"result\":[{\"alternative\":[{\"transcript\":\"hello world\",\"confidence\":0.92}],\"final\":true}],\"result_index\":0}\n",
);

fn fake_flac() -> Vec<u8> {
    let mut data = b"fLaC".to_vec();
    data.extend_from_slice(&[0u8; 42]);
    data
}

#[tokio::test]
async fn recognize_extracts_first_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(query_param("client", "chromium"))
        .and(query_param("lang", "en-US"))
        .and(header("Content-Type", "audio/x-flac; rate=16000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE_BODY))
        .mount(&server)
        .await;

    let input = GoogleVoiceInput::with_api_key("test-key").with_base_url(server.uri());

    let transcript = input.recognize(fake_flac(), "en-US").await.unwrap();
    assert_eq!(transcript, "hello world");
}

#[tokio::test]
async fn recognize_passes_language_tag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(query_param("lang", "ja-JP"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESPONSE_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let input = GoogleVoiceInput::with_api_key("test-key").with_base_url(server.uri());

    input.recognize(fake_flac(), "ja-JP").await.unwrap();
}

#[tokio::test]
async fn empty_result_set_is_empty_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"result\":[]}\n"))
        .mount(&server)
        .await;

    let input = GoogleVoiceInput::with_api_key("test-key").with_base_url(server.uri());

    let transcript = input.recognize(fake_flac(), "en-US").await.unwrap();
    assert_eq!(transcript, "");
}

#[tokio::test]
async fn malformed_lines_are_skipped() {
    let server = MockServer::start().await;

    let body = "not json at all\n{\"result\":[{\"alternative\":[{\"transcript\":\"still works\"}]}]}\n";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let input = GoogleVoiceInput::with_api_key("test-key").with_base_url(server.uri());

    let transcript = input.recognize(fake_flac(), "en-US").await.unwrap();
    assert_eq!(transcript, "still works");
}

#[tokio::test]
async fn http_error_is_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let input = GoogleVoiceInput::with_api_key("test-key").with_base_url(server.uri());

    let result = input.recognize(fake_flac(), "en-US").await;
    assert!(matches!(result, Err(VoiceError::RequestFailed(_))));
}

#[tokio::test]
async fn unreachable_endpoint_is_request_failure() {
    let input =
        GoogleVoiceInput::with_api_key("test-key").with_base_url("http://127.0.0.1:1/recognize");

    let result = input.recognize(fake_flac(), "en-US").await;
    assert!(matches!(result, Err(VoiceError::RequestFailed(_))));
}
