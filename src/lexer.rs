use std::fmt;

use crate::ast::{Token, TokenKind};
use crate::error::ParseError;

/// Characters that may directly follow a number literal, besides whitespace
/// and the `.` that starts a range.
const NUMBER_DELIMITERS: &str = "(){}[],:+-*/%";

const KEYWORDS: [(&str, TokenKind); 3] = [
    ("true", TokenKind::Boolean),
    ("false", TokenKind::Boolean),
    ("null", TokenKind::Null),
];

/// A line/column position, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::new(1, 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Saved scan position of a [`Lexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerState {
    offset: usize,
    location: Location,
}

impl LexerState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// Cursor over EL source text producing one [`Token`] per call.
///
/// There is no separate tokenization pass: every call scans from the current
/// position, so [`Lexer::peek_token`] simply scans a copy of the cursor.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    location: Location,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_location(input, 1, 1)
    }

    /// Starts counting lines and columns at the given position, for text
    /// embedded in a larger file.
    pub fn with_location(input: &'a str, line: usize, column: usize) -> Self {
        Lexer {
            input,
            position: 0,
            location: Location::new(line, column),
        }
    }

    pub fn snapshot(&self) -> LexerState {
        LexerState {
            offset: self.position,
            location: self.location,
        }
    }

    pub fn restore(&mut self, state: LexerState) {
        self.position = state.offset;
        self.location = state.location;
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn offset(&self) -> usize {
        self.position
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The text that has not been scanned yet.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.remainder().chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.location.line += 1;
                self.location.column = 1;
            } else {
                self.location.column += 1;
            }
        }
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '/' && self.peek_char(1) == Some('/') {
                while self.current_char().is_some_and(|c| c != '\n' && c != '\r') {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn token(&self, kind: TokenKind, start: LexerState) -> Token<'a> {
        Token {
            kind,
            text: &self.input[start.offset..self.position],
            offset: start.offset,
            location: start.location,
        }
    }

    /// Consumes `len` characters and returns them as a token of `kind`.
    fn punctuation(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.snapshot();
        self.advance_by(len);
        self.token(kind, start)
    }

    /// Picks the two-character token when the next character is `second`.
    fn one_or_two(&mut self, single: TokenKind, second: char, double: TokenKind) -> Token<'a> {
        if self.peek_char(1) == Some(second) {
            self.punctuation(double, 2)
        } else {
            self.punctuation(single, 1)
        }
    }

    fn read_string(&mut self, quote: char) -> Result<Token<'a>, ParseError> {
        let start = self.snapshot();
        self.advance(); // opening quote
        let content_start = self.position;

        loop {
            match self.current_char() {
                None => {
                    return Err(ParseError::lexical(
                        start.location,
                        "Unterminated string literal",
                    ));
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == quote => {
                    let text = &self.input[content_start..self.position];
                    self.advance();
                    return Ok(Token {
                        kind: TokenKind::String,
                        text,
                        offset: start.offset,
                        location: start.location,
                    });
                }
                Some(_) => self.advance(),
            }
        }
    }

    fn read_digits(&mut self) -> usize {
        let mut count = 0;
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        count
    }

    fn at_number_delimiter(&self) -> bool {
        match self.current_char() {
            None | Some('.') => true,
            Some(c) => c.is_whitespace() || NUMBER_DELIMITERS.contains(c),
        }
    }

    /// Reads a number with a fraction or an exponent. A `.` that starts a
    /// range is never taken as the decimal point.
    fn read_decimal(&mut self) -> bool {
        let mut digits = self.read_digits();
        let mut is_decimal = false;

        if self.current_char() == Some('.') && self.peek_char(1) != Some('.') {
            self.advance();
            digits += self.read_digits();
            is_decimal = true;
        }
        if digits == 0 {
            return false;
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.current_char(), Some('+' | '-')) {
                self.advance();
            }
            if self.read_digits() == 0 {
                return false;
            }
            is_decimal = true;
        }

        is_decimal && self.at_number_delimiter()
    }

    fn read_integer(&mut self) -> bool {
        self.read_digits() > 0 && self.at_number_delimiter()
    }

    fn read_number(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        let start = self.snapshot();

        if self.read_decimal() {
            if self.current_char() == Some('.') && self.peek_char(1) != Some('.') {
                self.advance();
                return Err(ParseError::lexical(
                    start.location,
                    format!(
                        "Malformed number literal: '{}'",
                        &self.input[start.offset..self.position]
                    ),
                ));
            }
            return Ok(Some(self.token(TokenKind::Number, start)));
        }
        self.restore(start);

        if self.read_integer() {
            return Ok(Some(self.token(TokenKind::Number, start)));
        }
        self.restore(start);

        Ok(None)
    }

    /// Matches a keyword at the cursor. Keywords are prefixes, not whole
    /// words: `nullable` scans as `null` followed by the name `able`.
    fn read_keyword(&mut self) -> Option<Token<'a>> {
        let remainder = self.remainder();
        let (keyword, kind) = KEYWORDS
            .iter()
            .find(|(keyword, _)| remainder.starts_with(keyword))?;
        Some(self.punctuation(*kind, keyword.len()))
    }

    fn read_name(&mut self) -> Token<'a> {
        let start = self.snapshot();
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        self.token(TokenKind::Name, start)
    }

    /// Scans the generic tail: numbers, keywords and identifiers.
    fn read_other(&mut self, ch: char) -> Result<Token<'a>, ParseError> {
        if let Some(token) = self.read_number()? {
            return Ok(token);
        }
        if let Some(token) = self.read_keyword() {
            return Ok(token);
        }
        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.read_name());
        }
        Err(ParseError::lexical(
            self.location,
            format!("Unexpected character: '{ch}'"),
        ))
    }

    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        self.skip_whitespace_and_comments();

        let Some(ch) = self.current_char() else {
            return Ok(self.token(TokenKind::Eof, self.snapshot()));
        };

        let token = match ch {
            '[' => self.punctuation(TokenKind::OBracket, 1),
            ']' => self.punctuation(TokenKind::CBracket, 1),
            '{' => self.one_or_two(TokenKind::OBrace, '{', TokenKind::DoubleOBrace),
            '}' => self.one_or_two(TokenKind::CBrace, '}', TokenKind::DoubleCBrace),
            '(' => self.punctuation(TokenKind::OParen, 1),
            ')' => self.punctuation(TokenKind::CParen, 1),
            '+' => self.punctuation(TokenKind::Plus, 1),
            '-' => self.one_or_two(TokenKind::Minus, '>', TokenKind::Arrow),
            '*' => self.punctuation(TokenKind::Star, 1),
            '/' => self.punctuation(TokenKind::Slash, 1),
            '%' => self.punctuation(TokenKind::Percent, 1),
            '~' => self.punctuation(TokenKind::Tilde, 1),
            '^' => self.punctuation(TokenKind::Caret, 1),
            ':' => self.punctuation(TokenKind::Colon, 1),
            ',' => self.punctuation(TokenKind::Comma, 1),
            '&' => self.one_or_two(TokenKind::Ampersand, '&', TokenKind::AndAnd),
            '|' => self.one_or_two(TokenKind::Pipe, '|', TokenKind::OrOr),
            '!' => self.one_or_two(TokenKind::Exclamation, '=', TokenKind::NotEq),
            '<' => match self.peek_char(1) {
                Some('=') => self.punctuation(TokenKind::LtEq, 2),
                Some('<') => self.punctuation(TokenKind::ShiftLeft, 2),
                _ => self.punctuation(TokenKind::Lt, 1),
            },
            '>' => match self.peek_char(1) {
                Some('=') => self.punctuation(TokenKind::GtEq, 2),
                Some('>') => self.punctuation(TokenKind::ShiftRight, 2),
                _ => self.punctuation(TokenKind::Gt, 1),
            },
            '"' | '\'' => self.read_string(ch)?,
            '.' if self.peek_char(1) == Some('.') => self.punctuation(TokenKind::Range, 2),
            '=' if self.peek_char(1) == Some('=') => self.punctuation(TokenKind::EqEq, 2),
            _ => self.read_other(ch)?,
        };

        Ok(token)
    }

    /// Scans the next token without consuming it.
    pub fn peek_token(&self) -> Result<Token<'a>, ParseError> {
        self.clone().next_token()
    }
}
