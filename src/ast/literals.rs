/// Value of a literal expression.
///
/// EL has a single number type; integers are stored as `f64` as well.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String literal, already unescaped
    ///
    /// # Example
    /// ```text
    /// "light \"blue\""
    /// 'single quoted'
    /// ```
    String(String),

    /// Number literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// 0.75
    /// ```
    Number(f64),

    /// Boolean literal
    Boolean(bool),

    /// Null literal
    Null,
}

/// Resolves backslash escapes in the raw text of a string token.
///
/// Only `\\` and `\"` are escapes; any other escaped character, the single
/// quote included, keeps its backslash.
pub fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some(c @ ('\\' | '"')) => result.push(c),
            Some(c) => {
                result.push('\\');
                result.push(c);
            }
            None => result.push('\\'),
        }
    }
    result
}

/// Inverse of [`unescape`] for double-quoted output.
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '\\' || ch == '"' {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}
