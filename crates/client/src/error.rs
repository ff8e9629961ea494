use gridfeed_atom::AtomError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the worksheet client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A feed document failed to parse.
    #[error(transparent)]
    Atom(#[from] AtomError),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The document carries no link with the required relation.
    #[error("No link with rel '{0}'")]
    LinkNotFound(String),

    /// No worksheet with the requested title.
    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),
}
