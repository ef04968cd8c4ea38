use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtzError {
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtzError>;
