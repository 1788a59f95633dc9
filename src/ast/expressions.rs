use std::collections::{BTreeMap, BTreeSet};

use crate::ast::{BinaryOp, Literal, UnaryOp};
use crate::lexer::Location;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// The AST is the parser's output and what an evaluator walks. Each variant
/// owns its children; the tree is built bottom-up and never changed after.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value
    ///
    /// # Example
    /// ```text
    /// "red"
    /// 1.5
    /// null
    /// ```
    Literal(Literal),

    /// Variable reference, resolved by the host
    ///
    /// # Example
    /// ```text
    /// spawnflags
    /// ```
    Variable(String),

    /// Prefix operator, grouping parentheses or a half-open range
    ///
    /// # Examples
    /// ```text
    /// -x
    /// (a + b)
    /// list[2..]
    /// ```
    Unary {
        op: UnaryOp,
        operand: Box<ExpressionNode>,
    },

    /// Binary operation, including bounded ranges and switch cases
    ///
    /// # Examples
    /// ```text
    /// a + b
    /// [1..4]
    /// x -> "yes"
    /// ```
    Binary {
        op: BinaryOp,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },

    /// Array literal; elements may be bounded ranges
    ///
    /// # Example
    /// ```text
    /// [1, 2, 5..7]
    /// ```
    Array(Vec<ExpressionNode>),

    /// Map literal with unique keys; a repeated key keeps its last value
    ///
    /// # Example
    /// ```text
    /// { "r": 1, g: 0.5 }
    /// ```
    Map(BTreeMap<String, ExpressionNode>),

    /// Switch with ordered branches, usually `Case` nodes plus a fallback
    ///
    /// # Example
    /// ```text
    /// {{ a -> 1, b -> 2, 3 }}
    /// ```
    Switch(Vec<ExpressionNode>),

    /// Subscript access; several indices are collected in an `Array` node
    ///
    /// # Examples
    /// ```text
    /// list[0]
    /// list[0, 2]
    /// text[..3]
    /// ```
    Subscript {
        target: Box<ExpressionNode>,
        index: Box<ExpressionNode>,
    },
}

/// An [`Expression`] tagged with where it starts in the source.
///
/// Equality compares structure only, so the same text parsed at two
/// different positions yields equal trees.
#[derive(Debug, Clone)]
pub struct ExpressionNode {
    expression: Expression,
    location: Location,
}

impl PartialEq for ExpressionNode {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl ExpressionNode {
    pub fn new(expression: Expression, location: Location) -> Self {
        ExpressionNode {
            expression,
            location,
        }
    }

    pub fn literal(literal: Literal, location: Location) -> Self {
        Self::new(Expression::Literal(literal), location)
    }

    pub fn unary(op: UnaryOp, operand: ExpressionNode, location: Location) -> Self {
        Self::new(
            Expression::Unary {
                op,
                operand: Box::new(operand),
            },
            location,
        )
    }

    pub fn binary(
        op: BinaryOp,
        left: ExpressionNode,
        right: ExpressionNode,
        location: Location,
    ) -> Self {
        Self::new(
            Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            location,
        )
    }

    pub fn subscript(target: ExpressionNode, index: ExpressionNode, location: Location) -> Self {
        Self::new(
            Expression::Subscript {
                target: Box::new(target),
                index: Box::new(index),
            },
            location,
        )
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn into_expression(self) -> Expression {
        self.expression
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Direct children in source order (map values in key order).
    pub fn children(&self) -> Vec<&ExpressionNode> {
        match &self.expression {
            Expression::Literal(_) | Expression::Variable(_) => vec![],
            Expression::Unary { operand, .. } => vec![&**operand],
            Expression::Binary { left, right, .. } => vec![&**left, &**right],
            Expression::Array(elements) | Expression::Switch(elements) => {
                elements.iter().collect()
            }
            Expression::Map(entries) => entries.values().collect(),
            Expression::Subscript { target, index } => vec![&**target, &**index],
        }
    }

    /// Names of all variables the expression refers to, sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use el_lang::parse_strict;
    ///
    /// let tree = parse_strict("{{ size > 8 -> big, small }}").unwrap();
    /// let names: Vec<_> = tree.variables().into_iter().collect();
    /// assert_eq!(names, vec!["big", "size", "small"]);
    /// ```
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            if let Expression::Variable(name) = &node.expression {
                names.insert(name.as_str());
            }
            pending.extend(node.children());
        }
        names
    }
}
