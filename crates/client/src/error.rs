use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response: connection refused,
    /// timeout, or an undecodable body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status; `message` is the decoded
    /// `{"message"}` body.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
