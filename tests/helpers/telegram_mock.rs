//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_BOT_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Start a server answering every method the bot uses successfully
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let mock = Self { server };

        mock.mock_send_message().await;
        mock.mock_answer_callback_query().await;
        mock
    }

    /// Base url handed to `Bot::set_api_url`
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    fn endpoint(method_name: &str) -> String {
        // teloxide sends method names in PascalCase (e.g. `SendMessage`)
        let mut chars = method_name.chars();
        let method_name: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        format!("/bot{}/{}", TEST_BOT_TOKEN, method_name)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self) {
        let response_body = json!({
            "ok": true,
            "result": {
                "message_id": 123,
                "from": {
                    "id": 12345,
                    "is_bot": true,
                    "first_name": "Stepup",
                    "username": "stepup_bot"
                },
                "chat": {
                    "id": 1,
                    "first_name": "Test",
                    "type": "private"
                },
                "date": 1640995200,
                "text": "Test message"
            }
        });

        Mock::given(method("POST"))
            .and(path(Self::endpoint("sendMessage")))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
            .mount(&self.server)
            .await;
    }

    /// Make sendMessage fail for one chat only
    pub async fn fail_send_message_to(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint("sendMessage")))
            .and(body_partial_json(json!({ "chat_id": chat_id })))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint("answerCallbackQuery")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": true
            })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request sent to `method_name`, oldest first
    pub async fn requests(&self, method_name: &str) -> Vec<Value> {
        let endpoint = Self::endpoint(method_name);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path() == endpoint)
            .map(|req| req.body_json::<Value>().expect("request body is JSON"))
            .collect()
    }

    /// Texts of all sendMessage calls
    pub async fn sent_texts(&self) -> Vec<String> {
        self.requests("sendMessage")
            .await
            .iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }

    /// Verify that an endpoint was called a specific number of times
    pub async fn verify_endpoint_called(&self, method_name: &str, times: usize) {
        let calls = self.requests(method_name).await.len();
        assert_eq!(
            calls, times,
            "Expected {} calls to {}, but got {}",
            times, method_name, calls
        );
    }

    /// Forget recorded requests, keeping the mounted mocks
    pub async fn reset_requests(&self) {
        self.server.reset().await;
        self.mock_send_message().await;
        self.mock_answer_callback_query().await;
    }
}
