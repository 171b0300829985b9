use serde::{Deserialize, Serialize};

/// Contents of the client's `config.json`, fetched once before any API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "SERVER_URL")]
    pub server_url: String,
    #[serde(rename = "SERVER_PORT")]
    pub server_port: u16,
}

impl ClientConfig {
    /// Base URL for API requests, e.g. `http://localhost:3000`.
    pub fn base_url(&self) -> String {
        format!(
            "{}:{}",
            self.server_url.trim_end_matches('/'),
            self.server_port
        )
    }
}
