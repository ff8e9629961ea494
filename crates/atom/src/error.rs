use thiserror::Error;

/// Result type for feed document parsing.
pub type AtomResult<T> = Result<T, AtomError>;

/// Errors that can occur while parsing a feed document.
#[derive(Debug, Error)]
pub enum AtomError {
    /// Malformed XML input.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A required element was absent.
    #[error("Missing <{0}> element")]
    MissingElement(&'static str),

    /// A required attribute was absent.
    #[error("Missing {attr} attribute on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attr: &'static str,
    },

    /// An element or attribute that must hold an integer did not.
    #[error("Invalid integer in {element}: '{value}'")]
    InvalidInt {
        element: &'static str,
        value: String,
    },

    /// The `<updated>` element did not hold an RFC 3339 timestamp.
    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),
}
