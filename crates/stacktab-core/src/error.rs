use std::fmt;

/// Result type for stacktab-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A stack-size table entry was configured with a capacity of zero
    InvalidCapacity(String),

    /// Pager constructed with a page size of zero
    InvalidPageSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(name) => {
                write!(f, "Stack size for '{}' must be greater than zero", name)
            }
            Error::InvalidPageSize => write!(f, "Page size must be greater than zero"),
        }
    }
}

impl std::error::Error for Error {}
