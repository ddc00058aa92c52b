use thiserror::Error;

pub type Result<T> = std::result::Result<T, WikiError>;

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("GET {url} failed: {status} {status_text}")]
    Http {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for WikiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WikiError::Decode(err.to_string())
        } else {
            WikiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(err: serde_json::Error) -> Self {
        WikiError::Decode(err.to_string())
    }
}
