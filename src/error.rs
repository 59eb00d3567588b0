use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while a CSP instance is being constructed.
///
/// All of these indicate a malformed problem definition. They are surfaced
/// at setup time so that an ill-formed instance can never reach the search
/// phase; a well-formed instance that merely has no solution is not an
/// error (the solver reports that as an empty search result).
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("variable `{0}` is already registered")]
    DuplicateVariable(String),
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        SolverError::from(err).into()
    }
}
