//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every error raised while reading or checking a step is an [`Error`]: a boxed [`ErrorKind`]
//! plus the regions of the step text it points at. Kinds are usually declared with
//! `#[derive(ErrorKind)]` from `cas-attrs`.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that points at the whole of `src`.
    pub fn whole(src: &str, kind: impl ErrorKind + 'static) -> Self {
        Self::new(vec![0..src.len()], kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error into `out`, using `src` as the highlighted source.
    pub fn write_report(&self, src_id: &str, src: &str, out: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(src)), out)
    }

    /// Prints the report for this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, src: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(src)))
    }
}
