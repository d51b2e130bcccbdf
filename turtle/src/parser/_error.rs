//! I define [`ParserError`] and [`SyntaxError`].

use std::fmt;

/// Type alias for `Result` with [`ParserError`] as the error type.
pub type Parsed<T> = Result<T, ParserError>;

/// Error raised by a [parser](super::RdfParser).
///
/// Any error type can be converted into a `ParserError`
/// (keeping its message), so `?` works on I/O errors,
/// [`ModelError`](rdf_rs_api::ModelError)s, IRI errors, etc.
/// Syntax errors are built with [`ParserError::new`] or [`ParserError::at`],
/// which also record their [kind](SyntaxError).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserError {
    message: String,
    kind: Option<SyntaxError>,
    position: Option<(usize, usize)>,
}

impl ParserError {
    /// Construct a [`ParserError`] from a syntax error kind.
    pub fn new(kind: SyntaxError) -> Self {
        ParserError {
            message: kind.to_string(),
            kind: Some(kind),
            position: None,
        }
    }

    /// Construct a [`ParserError`] from a syntax error kind found at the given position.
    ///
    /// NB: lines and columns are numbered from 1.
    pub fn at(kind: SyntaxError, line: usize, col: usize) -> Self {
        ParserError {
            position: Some((line, col)),
            ..Self::new(kind)
        }
    }

    /// Record the position where this error was found.
    pub fn located(mut self, line: usize, col: usize) -> Self {
        self.position = Some((line, col));
        self
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The [kind](SyntaxError) of this error, if it is a syntax error.
    pub fn kind(&self) -> Option<&SyntaxError> {
        self.kind.as_ref()
    }

    /// The position (line, column) of the error in the input, if known.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.position
    }

    /// Display this error with context (typically a file name).
    pub fn in_context(&self, context: &str) -> String {
        match self.position {
            Some((line, col)) => format!("{context}:{line}:{col} {}", self.message),
            None => format!("{context}: {}", self.message),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((line, col)) => write!(f, "{} at {line}:{col}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

// ParserError can not implement std::error::Error itself:
// this impl would then overlap with `impl<T> From<T> for T`.
impl<E: std::error::Error> From<E> for ParserError {
    fn from(err: E) -> Self {
        ParserError {
            message: err.to_string(),
            kind: None,
            position: None,
        }
    }
}

/// Kind of syntax errors in a [`ParserError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// An IRI reference is missing its closing `>`.
    #[error("Unterminated IRI")]
    UnterminatedIri,
    /// A string literal is missing its closing quote(s).
    #[error("Unterminated string literal")]
    UnterminatedString,
    /// A token was found where something else was expected.
    #[error("Expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// What was expected.
        expected: String,
        /// The token that was found instead.
        found: String,
    },
    /// The input ended where something was expected.
    #[error("Unexpected end of input, expected {0}")]
    UnexpectedEof(String),
    /// A term is neither an IRI, a prefixed name nor a blank node.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),
    /// A term can not be used as the object of a triple.
    #[error("Invalid object: {0}")]
    InvalidObject(String),
    /// Unknown or truncated escape sequence in a string or IRI.
    #[error("Invalid escape sequence: {0}")]
    InvalidEscape(String),
    /// An `@prefix` or `@base` directive is not well formed.
    #[error("Malformed directive: {0}")]
    MalformedDirective(String),
    /// A `[` or `(` is never closed.
    #[error("Unbalanced '{0}'")]
    UnbalancedBrackets(char),
}
