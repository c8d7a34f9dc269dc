use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode/decode: {0}")]
    Json(#[from] serde_json::Error),
}
