//! Protocol seam for the offer/answer exchange
//!
//! The production implementation is [`HttpSignalingClient`]; alternate
//! protocols (test doubles, proxied deployments) implement the same trait.
//!
//! [`HttpSignalingClient`]: crate::client::HttpSignalingClient

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful result of the exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectResponse {
    /// Remote SDP answer. `None` records a success body that carried no
    /// `answer` key; the server owns response-shape validation, so this is
    /// not treated as an error.
    pub answer: Option<String>,
}

/// A communication protocol capable of connecting to an active conference
#[async_trait]
pub trait SignalingProtocol: Send + Sync {
    /// Exchange a local SDP offer for the remote SDP answer
    ///
    /// The offer is passed through opaquely; exactly one exchange result is
    /// produced per call.
    async fn connect_active_conference(&self, sdp_offer: &str) -> Result<ConnectResponse>;
}
