use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Todo title must not be empty")]
    EmptyTitle,

    #[error("Invalid todo id: {0:?}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
