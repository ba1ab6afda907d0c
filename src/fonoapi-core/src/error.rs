use crate::query::Query;

/// Every way a Fono API lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad caller input, rejected before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The blocking client could not start its async runtime.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The response did not match any shape the service is known to send.
    #[error("Invalid response from server: {0}")]
    Protocol(String),

    #[error("API token is invalid or blocked")]
    InvalidToken,

    /// A non-200 response, or a 200 response carrying an error message.
    #[error("HTTP Exception: Status code: {status}; Error: {error}, Message: {message}")]
    Server {
        status: u16,
        error: String,
        message: String,
    },

    /// Only returned when the caller asked for strict empty handling.
    #[error("No results found in the API for {query}")]
    NoResults { query: Query },
}

impl Error {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(err))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status attached to the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
