//! # Transaction Operations
//!
//! The two payment operations against the Tinker API: initiate and query.
//! Every call authenticates through the shared token cache and returns a
//! typed `Transaction` built from the response body.

use crate::auth::AuthenticationManager;
use crate::config::{Config, PAYMENT_INITIATE_PATH, PAYMENT_QUERY_PATH};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tinker_core::{Error, InitiatePaymentRequest, QueryPaymentRequest, Result, Transaction};
use tracing::{debug, error, instrument};

/// Client for the payment initiate/query endpoints
pub struct TransactionClient {
    config: Config,
    client: Client,
    auth: Arc<AuthenticationManager>,
}

impl TransactionClient {
    /// Create a new transaction client sharing the HTTP client and token cache
    pub fn new(config: Config, client: Client, auth: Arc<AuthenticationManager>) -> Self {
        Self {
            config,
            client,
            auth,
        }
    }

    /// Initiate a payment.
    ///
    /// Returns a `Transaction` carrying the initiation payload
    /// (payment reference, status, optional authorization URL).
    #[instrument(
        skip(self, request),
        fields(merchant_reference = %request.merchant_reference, gateway = %request.gateway)
    )]
    pub async fn initiate(&self, request: &InitiatePaymentRequest) -> Result<Transaction> {
        let body = self.request(PAYMENT_INITIATE_PATH, request).await?;
        Transaction::from_initiation(&body)
    }

    /// Query a payment by reference.
    ///
    /// Returns a `Transaction` carrying the query payload
    /// (id, reference, amount, currency, channel, timestamps).
    #[instrument(
        skip(self, request),
        fields(payment_reference = %request.payment_reference, gateway = %request.gateway)
    )]
    pub async fn query(&self, request: &QueryPaymentRequest) -> Result<Transaction> {
        let body = self.request(PAYMENT_QUERY_PATH, request).await?;
        Transaction::from_query(&body)
    }

    /// POST a JSON payload to an API endpoint with bearer auth.
    ///
    /// A 2xx body that is empty or not JSON decodes to an empty object;
    /// the DTO layer then reports exactly which required field is missing.
    async fn request<T: Serialize>(&self, path: &str, payload: &T) -> Result<Value> {
        let token = self.auth.get_token().await?;
        let url = self.config.api_url(path);

        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to communicate with Tinker API: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to communicate with Tinker API: {e}")))?;

        if status.as_u16() >= 400 {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .or_else(|| v.get("error"))
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("Tinker API error: status={status}, message={message}");
            return Err(Error::Api(message));
        }

        Ok(serde_json::from_str(&body).unwrap_or_else(|_| Value::Object(Map::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tinker_core::{Gateway, PaymentStatus};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_auth(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/auth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok_123",
                "expires_in": 3600
            })))
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> TransactionClient {
        let config = Config::new("pk_test_123", "sk_test_456").with_base_url(server.uri());
        let http = Client::new();
        let auth = Arc::new(AuthenticationManager::new(config.clone(), http.clone()));
        TransactionClient::new(config, http, auth)
    }

    fn initiate_request() -> InitiatePaymentRequest {
        InitiatePaymentRequest::new(
            150.0,
            "KES",
            Gateway::Mpesa,
            "ORDER-001",
            "https://merchant.example/callback",
        )
        .with_customer_phone("+254700000000")
    }

    #[tokio::test]
    async fn test_initiate_builds_transaction() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/initiate"))
            .and(header("Authorization", "Bearer tok_123"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(json!({
                "amount": 150.0,
                "currency": "KES",
                "gateway": "mpesa",
                "merchantReference": "ORDER-001",
                "callbackUrl": "https://merchant.example/callback",
                "customerPhone": "+254700000000"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "payment_reference": "TXN-x",
                "status": "pending",
                "authorization_url": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transaction = client(&server).initiate(&initiate_request()).await.unwrap();

        assert_eq!(transaction.status(), PaymentStatus::Pending);
        let data = transaction.initiation_data().unwrap();
        assert_eq!(data.payment_reference, "TXN-x");
        assert_eq!(data.authorization_url, None);
    }

    #[tokio::test]
    async fn test_query_builds_transaction() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/query"))
            .and(header("Authorization", "Bearer tok_123"))
            .and(body_partial_json(json!({
                "payment_reference": "TXN-abc123xyz",
                "gateway": "mpesa"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pay_abc123",
                "status": "success",
                "reference": "TXN-abc123xyz",
                "amount": 100.00,
                "currency": "KES",
                "paid_at": "2024-01-15T10:30:00Z",
                "created_at": "2024-01-15T10:25:00Z",
                "channel": "mpesa"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = QueryPaymentRequest::new("TXN-abc123xyz", Gateway::Mpesa);
        let transaction = client(&server).query(&request).await.unwrap();

        assert!(transaction.is_successful());
        assert_eq!(transaction.query_data().unwrap().reference, "TXN-abc123xyz");
    }

    #[tokio::test]
    async fn test_api_error_carries_server_message() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/initiate"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid amount"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).initiate(&initiate_request()).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(err.to_string(), "API error: Invalid amount");
    }

    #[tokio::test]
    async fn test_api_error_falls_back_to_error_field() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/query"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"error": "Unknown reference"})),
            )
            .mount(&server)
            .await;

        let request = QueryPaymentRequest::new("TXN-missing", Gateway::Mpesa);
        let err = client(&server).query(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "API error: Unknown reference");
    }

    #[tokio::test]
    async fn test_api_error_without_body_uses_fallback() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/query"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let request = QueryPaymentRequest::new("TXN-x", Gateway::Stripe);
        let err = client(&server).query(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "API error: Unknown error");
    }

    #[tokio::test]
    async fn test_empty_success_body_reports_missing_field() {
        let server = MockServer::start().await;
        mount_auth(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/payment/query"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = QueryPaymentRequest::new("TXN-x", Gateway::Mpesa);
        let err = client(&server).query(&request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPayload(_)));
        assert!(err.to_string().contains("Missing required field: id"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_network_error() {
        // Auth succeeds against the mock, the API call then hits a dead port
        let server = MockServer::start().await;
        mount_auth(&server).await;

        let config = Config::new("pk_test_123", "sk_test_456").with_base_url(server.uri());
        let http = Client::new();
        let auth = Arc::new(AuthenticationManager::new(config.clone(), http.clone()));
        let dead = config.clone().with_base_url("http://127.0.0.1:9");
        let client = TransactionClient::new(dead, http, auth);

        let request = QueryPaymentRequest::new("TXN-x", Gateway::Mpesa);
        let err = client.query(&request).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert!(err
            .to_string()
            .contains("Failed to communicate with Tinker API"));
    }
}
