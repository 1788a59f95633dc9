//! Rendering of expression trees.
//!
//! Two formats are provided:
//!
//! - **EL source** via [`Display`](std::fmt::Display) - prints the tree back
//!   in expression syntax; parsing the output yields an equal tree
//! - **JSON** via [`to_json()`], [`to_json_pretty()`] and [`to_json_value()`] -
//!   a tagged description of every node with its location, for tooling
//!
//! # Examples
//!
//! ```
//! use el_lang::parse_strict;
//!
//! let tree = parse_strict("{'b':2,a:[1,x..y]}").unwrap();
//! assert_eq!(tree.to_string(), r#"{ "a": [ 1, x..y ], "b": 2 }"#);
//! ```

use std::fmt;

use serde_json::{json, Value};

use crate::ast::{literals, BinaryOp, Expression, ExpressionNode, Literal, UnaryOp};

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", literals::escape(s)),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

fn write_list(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: &[ExpressionNode],
    close: &str,
) -> fmt::Result {
    if items.is_empty() {
        return write!(f, "{open}{close}");
    }
    write!(f, "{open} ")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, " {close}")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Variable(name) => f.write_str(name),
            Expression::Unary { op, operand } => match op {
                UnaryOp::Plus => write!(f, "+{operand}"),
                UnaryOp::Minus => write!(f, "-{operand}"),
                UnaryOp::LogicalNegation => write!(f, "!{operand}"),
                UnaryOp::BitwiseNegation => write!(f, "~{operand}"),
                UnaryOp::Group => write!(f, "( {operand} )"),
                UnaryOp::LeftBoundedRange => write!(f, "{operand}.."),
                UnaryOp::RightBoundedRange => write!(f, "..{operand}"),
            },
            Expression::Binary {
                op: BinaryOp::BoundedRange,
                left,
                right,
            } => write!(f, "{left}..{right}"),
            Expression::Binary { op, left, right } => {
                write!(f, "{left} {} {right}", op.symbol())
            }
            Expression::Array(elements) => write_list(f, "[", elements, "]"),
            Expression::Map(entries) => {
                if entries.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\": {value}", literals::escape(key))?;
                }
                f.write_str(" }")
            }
            Expression::Switch(branches) => write_list(f, "{{", branches, "}}"),
            Expression::Subscript { target, index } => match index.expression() {
                // a single-element array must keep its brackets to stay an array
                Expression::Array(indices) if indices.len() != 1 => {
                    write!(f, "{target}[")?;
                    for (i, item) in indices.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    f.write_str("]")
                }
                _ => write!(f, "{target}[{index}]"),
            },
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

fn literal_to_json(literal: &Literal) -> Value {
    match literal {
        Literal::String(s) => Value::String(s.clone()),
        Literal::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Null => Value::Null,
    }
}

fn list_to_json(items: &[ExpressionNode]) -> Value {
    Value::Array(items.iter().map(to_json_value).collect())
}

/// Describes a node and its subtree as JSON.
pub fn to_json_value(node: &ExpressionNode) -> Value {
    let mut value = match node.expression() {
        Expression::Literal(literal) => json!({
            "type": "literal",
            "value": literal_to_json(literal),
        }),
        Expression::Variable(name) => json!({
            "type": "variable",
            "name": name,
        }),
        Expression::Unary { op, operand } => json!({
            "type": "unary",
            "op": format!("{op:?}"),
            "operand": to_json_value(operand),
        }),
        Expression::Binary { op, left, right } => json!({
            "type": "binary",
            "op": format!("{op:?}"),
            "left": to_json_value(left),
            "right": to_json_value(right),
        }),
        Expression::Array(elements) => json!({
            "type": "array",
            "elements": list_to_json(elements),
        }),
        Expression::Map(entries) => json!({
            "type": "map",
            "entries": entries
                .iter()
                .map(|(key, value)| (key.clone(), to_json_value(value)))
                .collect::<serde_json::Map<_, _>>(),
        }),
        Expression::Switch(branches) => json!({
            "type": "switch",
            "branches": list_to_json(branches),
        }),
        Expression::Subscript { target, index } => json!({
            "type": "subscript",
            "target": to_json_value(target),
            "index": to_json_value(index),
        }),
    };

    if let Value::Object(fields) = &mut value {
        let location = node.location();
        fields.insert("line".to_string(), json!(location.line));
        fields.insert("column".to_string(), json!(location.column));
    }
    value
}

/// Compact JSON description of a tree.
pub fn to_json(node: &ExpressionNode) -> String {
    to_json_value(node).to_string()
}

/// JSON description of a tree with 2-space indentation.
pub fn to_json_pretty(node: &ExpressionNode) -> String {
    format!("{:#}", to_json_value(node))
}
