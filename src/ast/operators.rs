use crate::ast::TokenKind;

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
    /// `!x`
    LogicalNegation,
    /// `~x`
    BitwiseNegation,
    /// `( x )`, explicit parentheses
    Group,
    /// `x..`, open upper end (subscripts only)
    LeftBoundedRange,
    /// `..x`, open lower end (subscripts only)
    RightBoundedRange,
}

impl UnaryOp {
    /// Operator for a unary prefix token.
    pub const fn from_token(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Minus),
            TokenKind::Exclamation => Some(UnaryOp::LogicalNegation),
            TokenKind::Tilde => Some(UnaryOp::BitwiseNegation),
            _ => None,
        }
    }
}

/// Binary operators.
///
/// All of them bind equally tight and chain left to right; only
/// parentheses change the grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    /// `+`
    Addition,
    /// `-`
    Subtraction,
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `%`
    Modulus,

    // Logical
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,

    // Bitwise
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXOr,
    /// `<<`
    BitwiseShiftLeft,
    /// `>>`
    BitwiseShiftRight,

    // Comparison
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,

    /// `a..b`, only produced inside brackets
    BoundedRange,
    /// `condition -> result`, meaningful as a switch branch
    Case,
}

impl BinaryOp {
    /// Operator for a token that continues a compound term.
    ///
    /// `..` is absent on purpose: ranges are built by the bracket rules, never
    /// by operator chaining.
    pub const fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Addition),
            TokenKind::Minus => Some(BinaryOp::Subtraction),
            TokenKind::Star => Some(BinaryOp::Multiplication),
            TokenKind::Slash => Some(BinaryOp::Division),
            TokenKind::Percent => Some(BinaryOp::Modulus),
            TokenKind::AndAnd => Some(BinaryOp::LogicalAnd),
            TokenKind::OrOr => Some(BinaryOp::LogicalOr),
            TokenKind::Ampersand => Some(BinaryOp::BitwiseAnd),
            TokenKind::Pipe => Some(BinaryOp::BitwiseOr),
            TokenKind::Caret => Some(BinaryOp::BitwiseXOr),
            TokenKind::ShiftLeft => Some(BinaryOp::BitwiseShiftLeft),
            TokenKind::ShiftRight => Some(BinaryOp::BitwiseShiftRight),
            TokenKind::Lt => Some(BinaryOp::Less),
            TokenKind::LtEq => Some(BinaryOp::LessOrEqual),
            TokenKind::Gt => Some(BinaryOp::Greater),
            TokenKind::GtEq => Some(BinaryOp::GreaterOrEqual),
            TokenKind::EqEq => Some(BinaryOp::Equal),
            TokenKind::NotEq => Some(BinaryOp::NotEqual),
            TokenKind::Arrow => Some(BinaryOp::Case),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Addition => "+",
            BinaryOp::Subtraction => "-",
            BinaryOp::Multiplication => "*",
            BinaryOp::Division => "/",
            BinaryOp::Modulus => "%",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::BitwiseXOr => "^",
            BinaryOp::BitwiseShiftLeft => "<<",
            BinaryOp::BitwiseShiftRight => ">>",
            BinaryOp::Less => "<",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterOrEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::BoundedRange => "..",
            BinaryOp::Case => "->",
        }
    }
}
