use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` carries the
    /// `error` field of the response body, so it reads the way the server
    /// phrased it.
    #[error("{message}")]
    Api { status: u16, message: String },
}
