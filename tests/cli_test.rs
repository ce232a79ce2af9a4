use serde_json::json;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the binary with a clean environment plus `vars`.
async fn jeeves(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_jeeves"));
    command.args(args).env_clear();
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().await.expect("Failed to run jeeves")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn reply(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1728933352,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content, "refusal": null },
            "logprobs": null,
            "finish_reason": "stop"
        }]
    })
}

/// Mock server that fails verification if it receives any request.
async fn silent_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_no_arguments_prints_usage() {
    let mock_server = silent_server().await;
    let base_url = mock_server.uri();

    let output = jeeves(
        &[],
        &[("OPENAI_API_KEY", "test-api-key"), ("JEEVES_OPENAI_BASE_URL", base_url.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: jeeves <prompt>"));
}

#[tokio::test]
async fn test_missing_api_key() {
    let mock_server = silent_server().await;
    let base_url = mock_server.uri();

    let output = jeeves(&["hello"], &[("JEEVES_OPENAI_BASE_URL", base_url.as_str())]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .starts_with("Error: OPENAI_API_KEY environment variable not found"));
}

#[tokio::test]
async fn test_prints_reply_framed_by_blank_lines() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "gpt-4o-mini",
            "store": true,
            "messages": [{ "role": "user", "content": "say hello world" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("hello world")))
        .expect(1)
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["say", "hello", "world"],
        &[("OPENAI_API_KEY", "test-api-key"), ("JEEVES_OPENAI_BASE_URL", base_url.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\nhello world\n\n");
}

#[tokio::test]
async fn test_model_from_environment() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_json(json!({
            "model": "gpt-4-turbo",
            "store": true,
            "messages": [{ "role": "user", "content": "hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("hey")))
        .expect(1)
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["hi"],
        &[
            ("OPENAI_API_KEY", "test-api-key"),
            ("JEEVES_OPENAI_MODEL", "gpt-4-turbo"),
            ("JEEVES_OPENAI_BASE_URL", base_url.as_str()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\nhey\n\n");
}

#[tokio::test]
async fn test_debug_level_prints_model_and_prompt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("hello world")))
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["what", "time", "is", "it"],
        &[
            ("OPENAI_API_KEY", "test-api-key"),
            ("JEEVES_LOG_LEVEL", "debug"),
            ("JEEVES_OPENAI_BASE_URL", base_url.as_str()),
        ],
    )
    .await;

    let text = stdout(&output);
    assert_eq!(output.status.code(), Some(0));
    assert!(text.contains("Using model: gpt-4o-mini"));
    assert!(text.contains("User prompt: what time is it"));
    assert!(text.contains("\nhello world\n\n"));
    for line in text.lines() {
        assert!(
            !line.contains("connect") && !line.contains("pooling"),
            "unexpected dependency log line: {line}"
        );
    }
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["hi"],
        &[("OPENAI_API_KEY", "test-api-key"), ("JEEVES_OPENAI_BASE_URL", base_url.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error: unmarshalling response body"));
}

#[tokio::test]
async fn test_empty_choices_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["hi"],
        &[("OPENAI_API_KEY", "test-api-key"), ("JEEVES_OPENAI_BASE_URL", base_url.as_str())],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Error: empty response"));
}

#[tokio::test]
async fn test_api_error_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "message": "The model `gpt-9` does not exist",
                "type": "invalid_request_error",
                "param": null,
                "code": "model_not_found"
            }
        })))
        .mount(&mock_server)
        .await;
    let base_url = format!("{}/v1", mock_server.uri());

    let output = jeeves(
        &["hi"],
        &[
            ("OPENAI_API_KEY", "test-api-key"),
            ("JEEVES_OPENAI_MODEL", "gpt-9"),
            ("JEEVES_OPENAI_BASE_URL", base_url.as_str()),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output)
        .starts_with("Error: OpenAI API error (404): The model `gpt-9` does not exist"));
}
