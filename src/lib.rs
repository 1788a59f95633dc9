pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{BinaryOp, Expression, ExpressionNode, Literal, Token, TokenKind, UnaryOp};
pub use error::{ErrorKind, ParseError};
pub use lexer::{Lexer, LexerState, Location};
pub use output::{to_json, to_json_pretty};
pub use parser::{parse_lenient, parse_strict, ParseMode, Parser, ParserOptions};
