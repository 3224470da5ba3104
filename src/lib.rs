//! HTTP signaling exchange for joining active conferences
//!
//! One-call client for the conferencing API's `:connectActiveConference`
//! method: submit a locally generated SDP offer, receive the remote SDP
//! answer. This crate covers signaling metadata only; the media transport
//! itself, credential acquisition and session lifecycle live elsewhere.
//!
//! # Features
//!
//! - **Single exchange**: POST the offer, get the answer, exactly one
//!   request per call
//! - **Descriptive rejections**: non-2xx error bodies are streamed,
//!   accumulated and re-surfaced pretty-printed in the failure
//! - **Endpoint override**: point the client at a test server or an
//!   alternate deployment
//! - **Protocol seam**: [`SignalingProtocol`] lets callers substitute the
//!   HTTP client with their own exchange mechanism
//!
//! # Usage
//!
//! ```ignore
//! use meet_signaling::{HttpSignalingClient, SignalingConfig, SignalingProtocol};
//!
//! let config = SignalingConfig::new("spaces/abc-defg-hij", access_token);
//! let client = HttpSignalingClient::new(config);
//!
//! let response = client.connect_active_conference(&sdp_offer).await?;
//! match response.answer {
//!     Some(answer) => apply_remote_answer(answer),
//!     None => tracing::warn!("conference accepted the offer without an answer"),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;

// Re-export main types
pub use client::HttpSignalingClient;
pub use config::{SignalingConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use protocol::{ConnectResponse, SignalingProtocol};
