use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("registry is full: already {capacity} items")]
    CapacityExceeded { capacity: usize },

    #[error("{key} is not registered")]
    Unregistered { key: String },

    #[error("{key} is already registered")]
    Duplicate { key: String },

    /// The key function failed. Only the underlying error's message is
    /// kept, so `Error` stays `Clone` and comparable.
    #[error("cannot canonicalize item: {0}")]
    Canonicalize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
