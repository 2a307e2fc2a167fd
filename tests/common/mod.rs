//! Shared helpers for the integration tests.

use socialpredict_sdk::prelude::*;
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server with default settings.
pub fn client_for(server: &MockServer) -> SocialPredictClient {
    SocialPredictClient::builder()
        .base_url(&server.uri())
        .build()
        .expect("client should build")
}

/// A client pointed at a port nothing listens on. Used to prove that local
/// validation fires before any network call: if a request were attempted it
/// would surface as NETWORK_ERROR, not VALIDATION_ERROR.
pub fn unreachable_client() -> SocialPredictClient {
    SocialPredictClient::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .expect("client should build")
}

pub fn market_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "questionTitle": "Will it rain tomorrow?",
        "description": "Resolves YES if any rain is recorded.",
        "outcomeType": "BINARY",
        "resolutionDateTime": "2027-01-01T00:00:00Z",
        "isResolved": false,
        "initialProbability": 0.5,
        "creatorUsername": "alice"
    })
}

pub fn markets_response_json() -> serde_json::Value {
    serde_json::json!({
        "markets": [{
            "market": market_json(1),
            "lastProbability": 0.62,
            "numUsers": 4,
            "totalVolume": 380
        }]
    })
}
