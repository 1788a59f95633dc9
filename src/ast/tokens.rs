use std::fmt;

use crate::lexer::Location;

/// Lexical category of a [`Token`].
///
/// The declaration order is also the order in which kinds are listed in
/// "expected ..." diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier, refers to a variable supplied by the host
    ///
    /// # Examples
    /// ```text
    /// color
    /// _spawnflags
    /// size2
    /// ```
    Name,

    /// String literal in double or single quotes
    ///
    /// The token text is the raw content between the quotes, escapes included.
    String,

    /// Integer or decimal number
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 1.5
    /// .25
    /// 2e3
    /// ```
    Number,

    /// `true` or `false`
    Boolean,

    /// `null`
    Null,

    // Delimiters
    /// `[`, opens an array literal or a subscript
    OBracket,
    /// `]`
    CBracket,
    /// `{`, opens a map literal
    OBrace,
    /// `}`
    CBrace,
    /// `(`
    OParen,
    /// `)`
    CParen,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    // Structural
    /// `:` between a map key and its value
    Colon,
    /// `,`
    Comma,
    /// `..`, only legal inside brackets
    ///
    /// # Examples
    /// ```text
    /// [1..5]
    /// list[2..]
    /// list[..3]
    /// ```
    Range,

    // Logical
    /// `!`
    Exclamation,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,

    // Comparison
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `>=`
    GtEq,
    /// `>`
    Gt,

    /// `->`, separates a switch case condition from its result
    ///
    /// # Examples
    /// ```text
    /// {{ flag -> "on", "off" }}
    /// ```
    Arrow,

    // Bitwise
    /// `~`
    Tilde,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,

    /// `{{`, opens a switch expression
    DoubleOBrace,
    /// `}}`
    DoubleCBrace,

    /// End of input, returned again on every further call
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 38] = [
        TokenKind::Name,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Boolean,
        TokenKind::Null,
        TokenKind::OBracket,
        TokenKind::CBracket,
        TokenKind::OBrace,
        TokenKind::CBrace,
        TokenKind::OParen,
        TokenKind::CParen,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Range,
        TokenKind::Exclamation,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::GtEq,
        TokenKind::Gt,
        TokenKind::Arrow,
        TokenKind::Tilde,
        TokenKind::Ampersand,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::ShiftLeft,
        TokenKind::ShiftRight,
        TokenKind::DoubleOBrace,
        TokenKind::DoubleCBrace,
        TokenKind::Eof,
    ];

    /// Human readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Name => "variable",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "'null'",
            TokenKind::OBracket => "'['",
            TokenKind::CBracket => "']'",
            TokenKind::OBrace => "'{'",
            TokenKind::CBrace => "'}'",
            TokenKind::OParen => "'('",
            TokenKind::CParen => "')'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Range => "'..'",
            TokenKind::Exclamation => "'!'",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::GtEq => "'>='",
            TokenKind::Gt => "'>'",
            TokenKind::Arrow => "'->'",
            TokenKind::Tilde => "'~'",
            TokenKind::Ampersand => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::ShiftLeft => "'<<'",
            TokenKind::ShiftRight => "'>>'",
            TokenKind::DoubleOBrace => "'{{'",
            TokenKind::DoubleCBrace => "'}}'",
            TokenKind::Eof => "end of file",
        }
    }

    const fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of token kinds, used to decide productions and to report what the
/// parser expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const LITERAL: TokenSet = TokenSet::of(&[
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Boolean,
        TokenKind::Null,
    ]);

    pub const UNARY_OPERATOR: TokenSet = TokenSet::of(&[
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Exclamation,
        TokenKind::Tilde,
    ]);

    pub const SIMPLE_TERM: TokenSet = TokenSet::UNARY_OPERATOR
        .union(TokenSet::LITERAL)
        .union(TokenSet::of(&[
            TokenKind::OParen,
            TokenKind::Name,
            TokenKind::OBracket,
            TokenKind::OBrace,
        ]));

    /// Every token that continues a term as a binary operator.
    pub const COMPOUND_TERM: TokenSet = TokenSet::of(&[
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::AndAnd,
        TokenKind::OrOr,
        TokenKind::Ampersand,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::ShiftLeft,
        TokenKind::ShiftRight,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Arrow,
    ]);

    pub const fn single(kind: TokenKind) -> TokenSet {
        TokenSet(kind.bit())
    }

    pub const fn of(kinds: &[TokenKind]) -> TokenSet {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// Lists the member names as `a`, `a or b`, or `a, b, or c`.
    pub fn describe(self) -> String {
        let names: Vec<&str> = self.kinds().map(TokenKind::name).collect();
        match names.as_slice() {
            [] => "unknown token type".to_string(),
            [only] => only.to_string(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        TokenSet::single(kind)
    }
}

impl std::ops::BitOr for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenSet) -> TokenSet {
        self.union(rhs)
    }
}

impl std::ops::BitOr<TokenKind> for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenKind) -> TokenSet {
        self.union(TokenSet::single(rhs))
    }
}

impl std::ops::BitOr for TokenKind {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenKind) -> TokenSet {
        TokenSet::single(self).union(TokenSet::single(rhs))
    }
}

/// A classified, located slice of the input.
///
/// `text` borrows from the source. For strings it is the raw content between
/// the quotes while `offset` and `location` point at the opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
    pub location: Location,
}

impl<'a> Token<'a> {
    pub fn is(&self, set: impl Into<TokenSet>) -> bool {
        set.into().contains(self.kind)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
