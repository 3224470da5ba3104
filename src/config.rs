//! Configuration for the signaling exchange client

use serde::{Deserialize, Serialize};

/// Production endpoint of the conferencing API
///
/// Overridable per client with [`HttpSignalingClient::with_endpoint`]
/// (testing, alternate deployments).
///
/// [`HttpSignalingClient::with_endpoint`]: crate::client::HttpSignalingClient::with_endpoint
pub const DEFAULT_ENDPOINT: &str = "https://meet.googleapis.com/v2beta/";

/// Required configuration for connecting to an active conference
///
/// Both fields are mandatory. The client performs no local validation of
/// them: the remote service is the sole authority on whether a space id or
/// token is acceptable, so an empty or malformed value surfaces as a
/// server-side rejection rather than a local error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalingConfig {
    /// Resource name of the meeting space to join (e.g. `spaces/abc-defg-hij`)
    pub meeting_space_id: String,

    /// OAuth2 bearer token presented in the Authorization header
    pub access_token: String,
}

impl SignalingConfig {
    /// Create a configuration from the two required values
    pub fn new(meeting_space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            meeting_space_id: meeting_space_id.into(),
            access_token: access_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_both_fields() {
        let config = SignalingConfig::new("spaces/abc", "token-123");
        assert_eq!(config.meeting_space_id, "spaces/abc");
        assert_eq!(config.access_token, "token-123");
    }

    #[test]
    fn test_config_serialization() {
        let config = SignalingConfig::new("spaces/abc", "token-123");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SignalingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.meeting_space_id, deserialized.meeting_space_id);
        assert_eq!(config.access_token, deserialized.access_token);
    }
}
