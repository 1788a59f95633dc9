//! Token listing for the `tokens` command

use std::fmt;

use super::CliError;
use crate::{Lexer, Location, TokenKind};

/// One scanned token, detached from the source text
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLine {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl fmt::Display for TokenLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}\t{}\t'{}'",
            self.location.line, self.location.column, self.kind, self.text
        )
    }
}

/// Scan `text` up to and including the end-of-file token
pub fn list_tokens(text: &str) -> Result<Vec<TokenLine>, CliError> {
    let mut lexer = Lexer::new(text);
    let mut lines = vec![];

    loop {
        let token = lexer.next_token()?;
        lines.push(TokenLine {
            kind: token.kind,
            text: token.text.to_string(),
            location: token.location,
        });
        if token.kind == TokenKind::Eof {
            return Ok(lines);
        }
    }
}
