use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },
}
