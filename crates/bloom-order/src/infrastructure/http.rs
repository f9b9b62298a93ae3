//! HTTP order-intake adapter
//!
//! POSTs the JSON payload to a fixed endpoint. Both the success body and the
//! error body are expected to carry a `message` string.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::payload::{OrderPayload, OrderReceipt};
use crate::ports::outbound::{IntakeError, OrderIntake};

/// Local order-intake endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9009/api/order";

/// Used when a 2xx answer has no message
pub const FALLBACK_SUCCESS_MESSAGE: &str = "Order received";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeConfig {
    pub endpoint: String,
    /// `None` waits forever, which leaves the form in `Submitting` if the
    /// service hangs
    pub timeout: Option<Duration>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout: None }
    }
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// reqwest-backed `OrderIntake`
pub struct HttpOrderIntake {
    client: reqwest::Client,
    config: IntakeConfig,
}

impl HttpOrderIntake {
    pub fn new(config: IntakeConfig) -> Result<Self, IntakeError> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| IntakeError::Config(format!("invalid endpoint {}: {}", config.endpoint, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| IntakeError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl OrderIntake for HttpOrderIntake {
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, IntakeError> {
        tracing::debug!(endpoint = %self.config.endpoint, "POST order");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Order-intake request failed");
                IntakeError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| IntakeError::Transport(e.to_string()))?;
        let message = serde_json::from_slice::<MessageBody>(&body)
            .ok()
            .and_then(|b| b.message);

        if status.is_success() {
            let message = message.unwrap_or_else(|| {
                tracing::warn!(status = status.as_u16(), "Order accepted without a message");
                FALLBACK_SUCCESS_MESSAGE.to_string()
            });
            return Ok(OrderReceipt { message });
        }

        match message {
            Some(message) => Err(IntakeError::Rejected { status: status.as_u16(), message }),
            None => {
                tracing::error!(status = status.as_u16(), "Error response without a message");
                Err(IntakeError::MalformedResponse { status: status.as_u16() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> OrderPayload {
        OrderPayload {
            full_name: "Ann Lee".into(),
            size: "L".into(),
            toppings: vec!["1".into(), "5".into()],
        }
    }

    async fn intake_for(server: &MockServer) -> HttpOrderIntake {
        HttpOrderIntake::new(IntakeConfig {
            endpoint: format!("{}/api/order", server.uri()),
            timeout: Some(Duration::from_secs(5)),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/order"))
            .and(body_json(json!({ "fullName": "Ann Lee", "size": "L", "toppings": ["1", "5"] })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Order placed" })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = intake_for(&server).await.place_order(&payload()).await.unwrap();
        assert_eq!(receipt.message, "Order placed");
    }

    #[tokio::test]
    async fn test_success_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7 })))
            .mount(&server)
            .await;

        let receipt = intake_for(&server).await.place_order(&payload()).await.unwrap();
        assert_eq!(receipt.message, FALLBACK_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_rejection_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "Name already used" })))
            .mount(&server)
            .await;

        let err = intake_for(&server).await.place_order(&payload()).await.unwrap_err();
        assert_eq!(err, IntakeError::Rejected { status: 422, message: "Name already used".into() });
    }

    #[tokio::test]
    async fn test_rejection_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = intake_for(&server).await.place_order(&payload()).await.unwrap_err();
        assert_eq!(err, IntakeError::MalformedResponse { status: 500 });
        assert_eq!(err.user_message(), crate::ports::outbound::FALLBACK_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // grab a free port and release it so nothing is listening there
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let intake = HttpOrderIntake::new(IntakeConfig {
            endpoint: format!("http://127.0.0.1:{}/api/order", port),
            timeout: Some(Duration::from_secs(5)),
        })
        .unwrap();

        let err = intake.place_order(&payload()).await.unwrap_err();
        assert!(matches!(err, IntakeError::Transport(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = HttpOrderIntake::new(IntakeConfig { endpoint: "not a url".into(), timeout: None });
        assert!(matches!(result, Err(IntakeError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert_eq!(config.endpoint, "http://localhost:9009/api/order");
        assert_eq!(config.timeout, None);
    }
}
