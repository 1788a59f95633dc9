//! CLI support for el-lang
//!
//! Provides programmatic access to the `el` commands so other tools can
//! validate expressions the same way the binary does.

mod check;
mod docs;
mod tokens;

pub use check::{execute_check, CheckOptions, CheckOutput, CheckResult};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use tokens::{list_tokens, TokenLine};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Lexer or parser rejected the expression
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No expression given and nothing piped to stdin
    #[error("No expression provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'el docs' to see available categories.")]
    UnknownCategory(String),
}
