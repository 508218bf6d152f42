use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type FfResult<T> = Result<T, FretForgeError>;
