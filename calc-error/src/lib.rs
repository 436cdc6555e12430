//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that carries an error kind through every stage of the engine.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad category an error belongs to.
///
/// Every error is rendered at the system boundary as `"<category>: <message>."`, so the category
/// names double as the user-facing error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A substring of the input could not be classified as a token.
    Token,

    /// The statement is structurally invalid, or an operation is undefined on its shape.
    Expression,

    /// An unknown function was called, or a function was called with the wrong number of
    /// arguments.
    FunctionCall,

    /// A native function was given an argument outside of its domain.
    Argument,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Token => write!(f, "TokenError"),
            ErrorCategory::Expression => write!(f, "ExpressionError"),
            ErrorCategory::FunctionCall => write!(f, "FunctionCallError"),
            ErrorCategory::Argument => write!(f, "ArgumentError"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// The category of this error.
    fn category(&self) -> ErrorCategory;

    /// A single-line, uncolored description of this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised after parsing (for example, while evaluating a function body) may not have any
/// spans at all.
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

    /// Creates a new error that does not point at any region of the source code.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns the single-line message of this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the full report for this error, including the highlighted source, into a string.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        match self.build_report(src_id).write((src_id, Source::from(input)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Renders the error as `"<category>: <message>."`.
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}.", self.category(), self.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct OutOfCheese;

    impl ErrorKind for OutOfCheese {
        fn category(&self) -> ErrorCategory {
            ErrorCategory::Argument
        }

        fn message(&self) -> String {
            "out of cheese".to_string()
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            let offset = spans.first().map_or(0, |span| span.start);
            Report::build(ReportKind::Error, src_id, offset)
                .with_message(self.message())
                .with_labels(spans.iter().map(|span| Label::new((src_id, span.clone()))))
                .finish()
        }
    }

    #[test]
    fn render_category_and_message() {
        let err = Error::spanless(OutOfCheese);
        assert_eq!(err.to_string(), "ArgumentError: out of cheese.");
    }

    #[test]
    fn category_names() {
        assert_eq!(ErrorCategory::Token.to_string(), "TokenError");
        assert_eq!(ErrorCategory::Expression.to_string(), "ExpressionError");
        assert_eq!(ErrorCategory::FunctionCall.to_string(), "FunctionCallError");
        assert_eq!(ErrorCategory::Argument.to_string(), "ArgumentError");
    }

    #[test]
    fn report_contains_message() {
        let err = Error::new(vec![4..5], OutOfCheese);
        let report = err.report_to_string("input", "1 + $");
        assert!(report.contains("out of cheese"));
    }
}
