//! Transport layer abstraction.
//!
//! The client hands a fully encoded request to a [`Transport`] and gets the
//! raw status and body back, so the codec and operation dispatch can be
//! exercised without a network.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Content type of the JSON 1.1 protocol.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header naming the operation being invoked.
pub const TARGET_HEADER: &str = "X-Amz-Target";

/// An encoded operation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// `Route53Domains_v20140515.<Operation>`.
    pub target: String,
    pub body: Vec<u8>,
}

/// What came back over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl WireResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves encoded requests to the service and back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the response, whatever its status.
    ///
    /// Only failures to get any response at all are errors.
    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse>;
}

/// HTTP transport backed by `reqwest`.
///
/// Requests are not signed; point it at an endpoint that does not require
/// SigV4 (a local stub or a signing proxy).
pub struct HttpTransport {
    config: ClientConfig,
    client: Client,
}

impl HttpTransport {
    /// Creates a transport for the given configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse> {
        debug!("POST {} ({})", self.config.endpoint, request.target);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(TARGET_HEADER, &request.target)
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(request.body)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(format!("read response body failed: {e}")))?;

        Ok(WireResponse::new(status, body.to_vec()))
    }
}

/// In-memory transport for tests.
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use tokio::sync::Mutex;

    /// Replays queued responses in order and records every request.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<ClientResult<WireResponse>>>,
        requests: Mutex<Vec<WireRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a raw response.
        pub async fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
            self.responses
                .lock()
                .await
                .push_back(Ok(WireResponse::new(status, body)));
        }

        /// Queues a JSON response.
        pub async fn push_json(&self, status: u16, body: &serde_json::Value) {
            self.push_response(status, body.to_string()).await;
        }

        /// Queues a transport failure.
        pub async fn push_error(&self, error: ClientError) {
            self.responses.lock().await.push_back(Err(error));
        }

        /// Requests sent so far, oldest first.
        pub async fn requests(&self) -> Vec<WireRequest> {
            self.requests.lock().await.clone()
        }

        /// Number of queued responses not yet consumed.
        pub async fn pending(&self) -> usize {
            self.responses.lock().await.len()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: WireRequest) -> ClientResult<WireResponse> {
            self.requests.lock().await.push(request);
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Network("no response queued".into())))
        }
    }
}
