use thiserror::Error;

/// Errors surfaced by [`Entry`](crate::entry::Entry) and
/// [`EntryStore`](crate::store::EntryStore) operations.
///
/// All of these are recoverable conditions reported to the caller; the core
/// never terminates the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} must not be empty or contain only whitespace")]
    Validation(&'static str),
    #[error("an entry for '{website}' with username '{username}' already exists")]
    Duplicate { website: String, username: String },
    #[error("entry not found in the store")]
    NotFound,
    #[error("unknown field '{0}' (expected website, username or password)")]
    InvalidField(String),
}

/// Errors from the password generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("minimum length {min} is greater than maximum length {max}")]
    InvalidLengthRange { min: usize, max: usize },
    #[error("the word source contains no words")]
    EmptyWordList,
    #[error(
        "no acceptable password after {attempts} attempts; \
         the length bounds or excluded characters are too restrictive for this word source"
    )]
    UnsatisfiableConstraints { attempts: usize },
}

/// Errors from loading a word source file.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("unsupported word list format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type GeneratorResult<T> = Result<T, GeneratorError>;
