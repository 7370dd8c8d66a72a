use thiserror::Error;

/// Everything that can go wrong between issuing a GET and handing a record
/// list to the aggregation layer. The poll boundary collapses all variants
/// into a single failed outcome; the taxonomy exists for diagnostics only.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Payload(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
