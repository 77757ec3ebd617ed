use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid manga data")]
    MissingTitle,
    #[error("comment cannot be empty")]
    EmptyComment,
    #[error("comment is longer than {0} characters")]
    CommentTooLong(usize),
    #[error("name is longer than {0} characters")]
    AuthorTooLong(usize),
}

impl Error {
    /// The request never produced a usable 2xx response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Status(_))
    }

    /// The response arrived but did not carry a usable record
    pub fn is_payload(&self) -> bool {
        matches!(self, Error::Malformed(_) | Error::MissingTitle)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Malformed(e.to_string())
    }
}
