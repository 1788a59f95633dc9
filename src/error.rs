//! Parse errors raised by the lexer and the parser.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::lexer::Location;

/// Which stage of parsing rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown character, unterminated string or malformed number.
    Lexical,
    /// Unexpected token, trailing input or a nesting limit.
    Syntactic,
}

/// A located parse failure.
///
/// Every error aborts the whole parse; no partial tree is ever returned.
///
/// # Examples
///
/// ```
/// use el_lang::{parse_strict, ErrorKind};
///
/// let err = parse_strict("1 +").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntactic);
/// assert!(err.message().contains("end of file"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}{message} ({location})", path_prefix(.path))]
pub struct ParseError {
    kind: ErrorKind,
    location: Location,
    message: String,
    path: Option<PathBuf>,
}

fn path_prefix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("{}: ", path.display()),
        None => String::new(),
    }
}

impl ParseError {
    pub fn lexical(location: Location, message: impl Into<String>) -> Self {
        ParseError {
            kind: ErrorKind::Lexical,
            location,
            message: message.into(),
            path: None,
        }
    }

    pub fn syntactic(location: Location, message: impl Into<String>) -> Self {
        ParseError {
            kind: ErrorKind::Syntactic,
            location,
            message: message.into(),
            path: None,
        }
    }

    /// Attaches the file the expression was read from.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
