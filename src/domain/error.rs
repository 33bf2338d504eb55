/// Failures talking to the SPLANTS backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API key is not configured")]
    ConfigurationMissing,

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}")]
    ServerRejected { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status when the server answered with a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerRejected { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
