use rustyline::error::ReadlineError;
use std::{fmt, io};

/// Utility enum to package errors that stop the tutor.
///
/// Errors in a step are not included; they are reported and the tutor moves on to the next step.
#[derive(Debug)]
pub enum Error {
    /// The steps could not be read from the file or stdin.
    Io(io::Error),

    /// The interactive prompt failed.
    Readline(ReadlineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read steps: {}", err),
            Self::Readline(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
