use std::fmt;

/// Result type for gpicker-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised by the picker data model
#[derive(Debug)]
pub enum Error {
    /// Construction-time misuse (empty or non-view root, invalid config, unknown name)
    InvalidArgument(String),

    /// Removal of an element that is not part of a view group
    NotFound(String),

    /// A document record is missing, adding, or misshaping a field
    SchemaMismatch {
        /// Position of the offending record in the payload
        index: usize,
        field: String,
        reason: String,
    },

    /// Payload text is not valid JSON
    Json(serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn schema(index: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::SchemaMismatch {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::SchemaMismatch {
                index,
                field,
                reason,
            } => write!(
                f,
                "Schema mismatch in document #{} field '{}': {}",
                index, field, reason
            ),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidArgument(_) | Error::NotFound(_) | Error::SchemaMismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
