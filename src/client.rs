//! HTTP implementation of the signaling exchange
//!
//! This module provides the HTTP client that performs the one-shot
//! `:connectActiveConference` call against the conferencing API: submit a
//! local SDP offer, receive the remote SDP answer or a descriptive failure.
//!
//! # Usage
//!
//! ```ignore
//! use meet_signaling::{HttpSignalingClient, SignalingConfig, SignalingProtocol};
//!
//! let config = SignalingConfig::new("spaces/abc-defg-hij", access_token);
//! let client = HttpSignalingClient::new(config);
//! let response = client.connect_active_conference(&sdp_offer).await?;
//! ```

use crate::config::{SignalingConfig, DEFAULT_ENDPOINT};
use crate::error::{Error, Result};
use crate::protocol::{ConnectResponse, SignalingProtocol};
use async_trait::async_trait;
use futures::StreamExt;
use serde::Serialize;
use tracing::debug;

/// HTTP signaling client for the conferencing API
///
/// Issues one POST per [`SignalingProtocol::connect_active_conference`]
/// call. No state is shared between calls beyond the read-only
/// configuration, so a single client can serve concurrent exchanges.
pub struct HttpSignalingClient {
    /// Base endpoint URL the target is built on
    endpoint: String,

    /// Caller-supplied resource id and credential
    config: SignalingConfig,

    /// Reqwest HTTP client
    client: reqwest::Client,
}

/// Request body for the connect call
#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    /// SDP offer, passed through opaquely
    offer: &'a str,
}

impl HttpSignalingClient {
    /// Create a client against the production endpoint
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = HttpSignalingClient::new(SignalingConfig::new("spaces/abc", token));
    /// ```
    pub fn new(config: SignalingConfig) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Override the base endpoint (testing, alternate deployments)
    ///
    /// The target URL is built by direct concatenation of endpoint, space id
    /// and action suffix, so the endpoint must carry its trailing slash.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a preconfigured HTTP client
    ///
    /// This is where callers wire in timeouts, proxies or custom root
    /// certificates. The exchange itself imposes no deadline: a stalled call
    /// runs until the supplied client gives up or the future is dropped.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Target URL for the connect call
    fn connect_url(&self) -> String {
        format!(
            "{}{}:connectActiveConference",
            self.endpoint, self.config.meeting_space_id
        )
    }

    /// Drain a non-2xx response body chunk by chunk, concatenating in
    /// arrival order, and decode the accumulated bytes once the stream is
    /// exhausted
    async fn read_error_body(response: reqwest::Response) -> Result<String> {
        let mut stream = response.bytes_stream();
        let mut raw = Vec::new();
        while let Some(chunk) = stream.next().await {
            raw.extend_from_slice(&chunk?);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

#[async_trait]
impl SignalingProtocol for HttpSignalingClient {
    /// Exchange the SDP offer for the remote answer
    ///
    /// Sends `POST {endpoint}{space_id}:connectActiveConference` with a
    /// bearer Authorization header and an `{"offer": ...}` JSON body.
    async fn connect_active_conference(&self, sdp_offer: &str) -> Result<ConnectResponse> {
        let connect_url = self.connect_url();
        debug!(url = %connect_url, "connecting to active conference");

        let response = self
            .client
            .post(&connect_url)
            .header(
                "authorization",
                format!("Bearer {}", self.config.access_token),
            )
            .json(&ConnectRequest { offer: sdp_offer })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = Self::read_error_body(response).await?;
            debug!(%status, bytes = raw.len(), "conference rejected connect request");

            let body: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|source| Error::MalformedRejection {
                    status,
                    body: raw,
                    source,
                })?;
            return Err(Error::Rejected { status, body });
        }

        let connect_response: ConnectResponse = response.json().await?;
        debug!(
            answer_present = connect_response.answer.is_some(),
            "connect response parsed"
        );
        Ok(connect_response)
    }
}
