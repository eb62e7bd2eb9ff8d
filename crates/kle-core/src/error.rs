use serde_json::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expected an array of rows, got: {fragment}")]
    NotASequence { fragment: Value },

    #[error(
        "rotation can only be specified on the first key in a row (row {row}, cell {cell}): {fragment}"
    )]
    MisplacedRotation {
        row: usize,
        cell: usize,
        fragment: Value,
    },

    #[error("keyboard metadata must be the first element (found at index {index}): {fragment}")]
    MisplacedMetadata { index: usize, fragment: Value },

    #[error("unexpected element at index {index}: {fragment}")]
    UnexpectedElement { index: usize, fragment: Value },
}

impl Error {
    /// The raw input fragment that caused the failure.
    pub fn fragment(&self) -> &Value {
        match self {
            Error::NotASequence { fragment }
            | Error::MisplacedRotation { fragment, .. }
            | Error::MisplacedMetadata { fragment, .. }
            | Error::UnexpectedElement { fragment, .. } => fragment,
        }
    }
}
