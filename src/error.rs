//! List Errors
//!
//! Failures a command can report back to the UI.

/// Common result type for list commands
pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Submitted text was empty
    EmptyItem,
    /// Text already present on the add path
    Duplicate(String),
    /// Key-value store rejected a write
    Storage(String),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::EmptyItem => write!(f, "Please add an item"),
            ListError::Duplicate(_) => write!(f, "That item already exists!"),
            ListError::Storage(msg) => write!(f, "Could not save items: {}", msg),
        }
    }
}

impl std::error::Error for ListError {}

impl From<serde_json::Error> for ListError {
    fn from(e: serde_json::Error) -> Self {
        ListError::Storage(e.to_string())
    }
}
