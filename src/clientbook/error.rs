use crate::model::ClientId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Client not found: {0}")]
    NotFound(ClientId),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Parse(String),
}

impl ClientError {
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
