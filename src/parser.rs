use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    ast::{
        literals, BinaryOp, Expression, ExpressionNode, Literal, Token, TokenKind, TokenSet,
        UnaryOp,
    },
    error::ParseError,
    lexer::{Lexer, LexerState},
};

/// Whether text may follow the parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// The whole input must be exactly one expression.
    #[default]
    Strict,
    /// Stop after the first complete expression; the rest is left for the
    /// caller, which resumes at [`Parser::lexer_state`].
    Lenient,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub mode: ParseMode,
    /// Line of the first character, for text embedded in a larger file.
    pub line: usize,
    /// Column of the first character.
    pub column: usize,
    /// File the text comes from, attached to every error.
    pub path: Option<PathBuf>,
    /// Maximum nesting depth; `None` recurses as deep as the input goes.
    pub max_depth: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            mode: ParseMode::Strict,
            line: 1,
            column: 1,
            path: None,
            max_depth: None,
        }
    }
}

/// Parses text that must consist of exactly one expression.
///
/// # Examples
///
/// ```
/// use el_lang::{parse_strict, ast::{BinaryOp, Expression}};
///
/// let tree = parse_strict("1 + 2 * 3").unwrap();
/// assert!(matches!(
///     tree.expression(),
///     Expression::Binary { op: BinaryOp::Multiplication, .. }
/// ));
/// assert!(parse_strict("1 2").is_err());
/// ```
pub fn parse_strict(text: &str) -> Result<ExpressionNode, ParseError> {
    Parser::new(ParseMode::Strict, Lexer::new(text)).parse()
}

/// Parses the first expression in `text` and ignores whatever follows it.
pub fn parse_lenient(text: &str) -> Result<ExpressionNode, ParseError> {
    Parser::new(ParseMode::Lenient, Lexer::new(text)).parse()
}

/// Numeric value of a number token; literals outside the finite `f64` range
/// are malformed.
fn number_value(token: &Token<'_>) -> Result<f64, ParseError> {
    token
        .text
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            ParseError::lexical(
                token.location,
                format!("Malformed number literal: '{}'", token.text),
            )
        })
}

/// LL(1) recursive-descent parser.
///
/// Every production peeks at one token to decide what to do, then consumes.
/// A parser is good for a single parse.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    mode: ParseMode,
    path: Option<PathBuf>,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mode: ParseMode, lexer: Lexer<'a>) -> Self {
        Parser {
            lexer,
            mode,
            path: None,
            max_depth: None,
            depth: 0,
        }
    }

    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Parser {
            lexer: Lexer::with_location(input, options.line, options.column),
            mode: options.mode,
            path: options.path,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Position right after the last consumed token.
    pub fn lexer_state(&self) -> LexerState {
        self.lexer.snapshot()
    }

    /// Hands the cursor back to an embedding grammar.
    pub fn into_lexer(self) -> Lexer<'a> {
        self.lexer
    }

    #[tracing::instrument(level = "trace", skip_all, fields(mode = ?self.mode))]
    pub fn parse(&mut self) -> Result<ExpressionNode, ParseError> {
        let result = self.parse_root();
        match result {
            Ok(expression) => {
                tracing::trace!(offset = self.lexer.offset(), "parsed expression");
                Ok(expression)
            }
            Err(error) => {
                let error = match &self.path {
                    Some(path) => error.with_path(path),
                    None => error,
                };
                tracing::debug!(%error, "expression rejected");
                Err(error)
            }
        }
    }

    fn parse_root(&mut self) -> Result<ExpressionNode, ParseError> {
        let expression = self.parse_expression()?;
        if self.mode == ParseMode::Strict {
            // trailing garbage
            let token = self.peek()?;
            self.expect(TokenKind::Eof, &token)?;
        }
        Ok(expression)
    }

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        self.lexer.next_token()
    }

    fn peek(&self) -> Result<Token<'a>, ParseError> {
        self.lexer.peek_token()
    }

    fn check(&self, set: impl Into<TokenSet>) -> Result<bool, ParseError> {
        Ok(self.peek()?.is(set))
    }

    fn expect(&self, set: impl Into<TokenSet>, token: &Token<'a>) -> Result<(), ParseError> {
        let set = set.into();
        if token.is(set) {
            return Ok(());
        }
        Err(ParseError::syntactic(
            token.location,
            format!(
                "Expected {}, but got {} (raw data: '{}')",
                set.describe(),
                token.kind.name(),
                token.text
            ),
        ))
    }

    fn parse_expression(&mut self) -> Result<ExpressionNode, ParseError> {
        if self.check(TokenKind::OParen)? {
            self.parse_grouped_term()
        } else {
            self.parse_term()
        }
    }

    fn parse_grouped_term(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::OParen, &token)?;
        let expression = self.parse_term()?;
        let close = self.next()?;
        self.expect(TokenKind::CParen, &close)?;

        let group = ExpressionNode::unary(UnaryOp::Group, expression, token.location);
        self.parse_compound_term(group)
    }

    fn parse_term(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.peek()?;
        self.expect(TokenSet::SIMPLE_TERM | TokenKind::DoubleOBrace, &token)?;

        let lhs = self.parse_simple_term_or_switch()?;
        self.parse_compound_term(lhs)
    }

    /// Every nested construct passes through here, which makes it the place
    /// to count depth.
    fn parse_simple_term_or_switch(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.peek()?;
        self.expect(TokenSet::SIMPLE_TERM | TokenKind::DoubleOBrace, &token)?;

        self.depth += 1;
        if let Some(max_depth) = self.max_depth {
            if self.depth > max_depth {
                self.depth -= 1;
                return Err(ParseError::syntactic(
                    token.location,
                    format!("Expression nesting exceeds the limit of {max_depth}"),
                ));
            }
        }

        let result = if token.is(TokenSet::SIMPLE_TERM) {
            self.parse_simple_term_or_subscript()
        } else {
            self.parse_switch()
        };
        self.depth -= 1;
        result
    }

    fn parse_simple_term_or_subscript(&mut self) -> Result<ExpressionNode, ParseError> {
        let mut term = self.parse_simple_term()?;
        while self.check(TokenKind::OBracket)? {
            term = self.parse_subscript(term)?;
        }
        Ok(term)
    }

    fn parse_simple_term(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.peek()?;
        self.expect(TokenSet::SIMPLE_TERM, &token)?;

        match token.kind {
            kind if TokenSet::UNARY_OPERATOR.contains(kind) => self.parse_unary_operator(),
            TokenKind::OParen => self.parse_grouped_term(),
            TokenKind::Name => self.parse_variable(),
            _ => self.parse_literal(),
        }
    }

    /// Parses `[ ... ]` after `lhs`. One index stays as is, several become an
    /// array of indices.
    fn parse_subscript(&mut self, lhs: ExpressionNode) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::OBracket, &token)?;

        let mut elements = self.parse_list(TokenKind::CBracket, Self::parse_expression_or_any_range)?;
        let index = if elements.len() == 1 {
            elements.remove(0)
        } else {
            ExpressionNode::new(Expression::Array(elements), token.location)
        };
        Ok(ExpressionNode::subscript(lhs, index, token.location))
    }

    /// Parses comma separated items up to and including `close`. The opening
    /// token has already been consumed.
    fn parse_list(
        &mut self,
        close: TokenKind,
        mut parse_item: impl FnMut(&mut Self) -> Result<ExpressionNode, ParseError>,
    ) -> Result<Vec<ExpressionNode>, ParseError> {
        let mut items = vec![];
        if self.check(close)? {
            self.next()?;
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            let token = self.next()?;
            self.expect(TokenKind::Comma | close, &token)?;
            if token.kind == close {
                return Ok(items);
            }
        }
    }

    fn parse_variable(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::Name, &token)?;
        Ok(ExpressionNode::new(
            Expression::Variable(token.text.to_string()),
            token.location,
        ))
    }

    fn parse_literal(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.peek()?;
        self.expect(TokenSet::LITERAL | TokenKind::OBracket | TokenKind::OBrace, &token)?;

        let literal = match token.kind {
            TokenKind::String => Literal::String(literals::unescape(token.text)),
            TokenKind::Number => Literal::Number(number_value(&token)?),
            TokenKind::Boolean => Literal::Boolean(token.text == "true"),
            TokenKind::Null => Literal::Null,
            TokenKind::OBracket => return self.parse_array(),
            _ => return self.parse_map(),
        };

        self.next()?;
        Ok(ExpressionNode::literal(literal, token.location))
    }

    fn parse_array(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::OBracket, &token)?;

        let elements =
            self.parse_list(TokenKind::CBracket, Self::parse_expression_or_bounded_range)?;
        Ok(ExpressionNode::new(Expression::Array(elements), token.location))
    }

    /// Array element: `expr` or `expr..expr`.
    fn parse_expression_or_bounded_range(&mut self) -> Result<ExpressionNode, ParseError> {
        let expression = self.parse_expression()?;
        if !self.check(TokenKind::Range)? {
            return Ok(expression);
        }

        let token = self.next()?;
        let upper = self.parse_expression()?;
        Ok(ExpressionNode::binary(
            BinaryOp::BoundedRange,
            expression,
            upper,
            token.location,
        ))
    }

    /// Subscript index: `expr`, `expr..expr`, `expr..` or `..expr`.
    fn parse_expression_or_any_range(&mut self) -> Result<ExpressionNode, ParseError> {
        if self.check(TokenKind::Range)? {
            let token = self.next()?;
            let upper = self.parse_expression()?;
            return Ok(ExpressionNode::unary(
                UnaryOp::RightBoundedRange,
                upper,
                token.location,
            ));
        }

        let expression = self.parse_expression()?;
        if !self.check(TokenKind::Range)? {
            return Ok(expression);
        }

        let token = self.next()?;
        if self.check(TokenSet::SIMPLE_TERM)? {
            let upper = self.parse_expression()?;
            Ok(ExpressionNode::binary(
                BinaryOp::BoundedRange,
                expression,
                upper,
                token.location,
            ))
        } else {
            Ok(ExpressionNode::unary(
                UnaryOp::LeftBoundedRange,
                expression,
                token.location,
            ))
        }
    }

    fn parse_map(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::OBrace, &token)?;

        let mut entries = BTreeMap::new();
        if self.check(TokenKind::CBrace)? {
            self.next()?;
        } else {
            loop {
                let key = self.next()?;
                self.expect(TokenKind::String | TokenKind::Name, &key)?;
                let key = match key.kind {
                    TokenKind::String => literals::unescape(key.text),
                    _ => key.text.to_string(),
                };

                let colon = self.next()?;
                self.expect(TokenKind::Colon, &colon)?;

                // last one wins
                let value = self.parse_expression()?;
                entries.insert(key, value);

                let separator = self.next()?;
                self.expect(TokenKind::Comma | TokenKind::CBrace, &separator)?;
                if separator.kind == TokenKind::CBrace {
                    break;
                }
            }
        }

        Ok(ExpressionNode::new(Expression::Map(entries), token.location))
    }

    fn parse_unary_operator(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenSet::UNARY_OPERATOR, &token)?;

        let op = UnaryOp::from_token(token.kind).ok_or_else(|| {
            ParseError::syntactic(
                token.location,
                format!("Unhandled unary operator: {}", token.kind.name()),
            )
        })?;
        let operand = self.parse_simple_term_or_switch()?;
        Ok(ExpressionNode::unary(op, operand, token.location))
    }

    fn parse_switch(&mut self) -> Result<ExpressionNode, ParseError> {
        let token = self.next()?;
        self.expect(TokenKind::DoubleOBrace, &token)?;

        let first = self.peek()?;
        self.expect(TokenSet::SIMPLE_TERM | TokenKind::DoubleCBrace, &first)?;

        let branches = self.parse_list(TokenKind::DoubleCBrace, Self::parse_expression)?;
        Ok(ExpressionNode::new(Expression::Switch(branches), token.location))
    }

    /// Chains binary operators onto `lhs`. There are no precedence levels:
    /// `a + b * c` is `(a + b) * c`.
    fn parse_compound_term(&mut self, mut lhs: ExpressionNode) -> Result<ExpressionNode, ParseError> {
        while self.check(TokenSet::COMPOUND_TERM)? {
            let token = self.next()?;
            let op = BinaryOp::from_token(token.kind).ok_or_else(|| {
                ParseError::syntactic(
                    token.location,
                    format!("Unhandled binary operator: {}", token.kind.name()),
                )
            })?;
            let rhs = self.parse_simple_term_or_switch()?;
            lhs = ExpressionNode::binary(op, lhs, rhs, token.location);
        }
        Ok(lhs)
    }
}
