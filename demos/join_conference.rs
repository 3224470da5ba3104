//! Join an active conference: exchange an SDP offer for the remote answer
//!
//! Reads the SDP offer from stdin and the target from the environment:
//!
//! ```text
//! MEET_SPACE_ID=spaces/abc-defg-hij \
//! MEET_ACCESS_TOKEN=$(gcloud auth print-access-token) \
//!     cargo run --example join_conference < offer.sdp
//! ```

use meet_signaling::{HttpSignalingClient, SignalingConfig, SignalingProtocol};
use std::io::Read;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let meeting_space_id = std::env::var("MEET_SPACE_ID")?;
    let access_token = std::env::var("MEET_ACCESS_TOKEN")?;

    let mut sdp_offer = String::new();
    std::io::stdin().read_to_string(&mut sdp_offer)?;

    let client = HttpSignalingClient::new(SignalingConfig::new(meeting_space_id, access_token));

    println!("Connecting to active conference...");
    let response = client.connect_active_conference(&sdp_offer).await?;

    match response.answer {
        Some(answer) => println!("SDP answer:\n{}", answer),
        None => println!("Conference accepted the offer but returned no answer"),
    }

    Ok(())
}
