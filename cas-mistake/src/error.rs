use ariadne::{Fmt, Report};
use cas_attrs::ErrorKind;
use cas_error::EXPR;
use std::{fmt, io, ops::Range};

/// A step was parsed successfully, but it is an expression, not an equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "steps must be equations",
    labels = [format!("this is an {}, not an equation", "expression".fg(EXPR))],
    help = "write both sides of the equation, separated by `=`",
)]
pub struct InvalidEquation;

/// The errors that can occur while diagnosing or correcting a step.
///
/// Both variants point into the text of the step that caused them; render them with the step as
/// the source.
#[derive(Debug)]
pub enum Error {
    /// The step could not be parsed.
    Parse(cas_error::Error),

    /// The step is not an equation.
    InvalidEquation(cas_error::Error),
}

impl Error {
    /// Creates an [`Error::InvalidEquation`] pointing at the whole step.
    pub fn invalid_equation(step: &str) -> Self {
        Self::InvalidEquation(cas_error::Error::whole(step, InvalidEquation))
    }

    /// Returns the underlying error with its spans.
    pub fn inner(&self) -> &cas_error::Error {
        match self {
            Self::Parse(err) | Self::InvalidEquation(err) => err,
        }
    }

    /// Builds the report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.inner().build_report(src_id)
    }

    /// Prints the report for this error to stderr, using `step` as the highlighted source.
    pub fn report_to_stderr(&self, src_id: &str, step: &str) -> io::Result<()> {
        self.inner().report_to_stderr(src_id, step)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(_) => write!(f, "the step could not be parsed"),
            Self::InvalidEquation(_) => write!(f, "steps must be equations"),
        }
    }
}

impl std::error::Error for Error {}

impl From<cas_error::Error> for Error {
    fn from(err: cas_error::Error) -> Self {
        Self::Parse(err)
    }
}
