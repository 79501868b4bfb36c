use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic, ReadExecutor};

/// Error kinds for doculite operations.
///
/// Each kind describes one category of failure. The store itself never
/// errors (missing names degrade to no-ops); every kind here originates in
/// document validation or in the query console.
///
/// # Examples
///
/// ```rust,ignore
/// use doculite::errors::{DoculiteError, ErrorKind, DoculiteResult};
///
/// fn example() -> DoculiteResult<()> {
///     Err(DoculiteError::new("filter must be a JSON object", ErrorKind::FilterError))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Error while parsing or evaluating a query filter
    FilterError,
    /// Malformed query text (e.g. unbalanced parentheses)
    QueryParseError,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::QueryParseError => write!(f, "Query parse error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom doculite error type.
///
/// `DoculiteError` encapsulates the error message, kind, and optional cause.
/// It supports error chaining and backtraces for debugging.
///
/// # Type alias
///
/// The `DoculiteResult<T>` type alias is equivalent to `Result<T, DoculiteError>`
/// and is used throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct DoculiteError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DoculiteError>>,
    backtrace: Atomic<Backtrace>,
}

impl DoculiteError {
    /// Creates a new `DoculiteError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DoculiteError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `DoculiteError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for
    /// debugging.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DoculiteError) -> Self {
        DoculiteError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<DoculiteError>> {
        self.cause.as_ref()
    }
}

impl Display for DoculiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DoculiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => self.backtrace.read_with(|bt| write!(f, "{}\n{:?}", self.message, bt)),
        }
    }
}

impl Error for DoculiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for doculite operations.
///
/// `DoculiteResult<T>` is shorthand for `Result<T, DoculiteError>`.
pub type DoculiteResult<T> = Result<T, DoculiteError>;

// From trait implementations for automatic error conversion
impl From<serde_json::Error> for DoculiteError {
    fn from(err: serde_json::Error) -> Self {
        DoculiteError::new(&err.to_string(), ErrorKind::FilterError)
    }
}

impl From<String> for DoculiteError {
    fn from(msg: String) -> Self {
        DoculiteError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DoculiteError {
    fn from(msg: &str) -> Self {
        DoculiteError::new(msg, ErrorKind::InternalError)
    }
}
