//! # EL - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) of EL, the
//! small expression language hosts use to derive colors, numbers, strings and
//! switches from named variables.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and the token sets used for grammar dispatch
//! - **[expressions]** - Expression nodes and their source locations
//! - **[operators]** - Unary and binary operators with their token tables
//! - **[literals]** - Literal values and string escaping
//!
//! ## Quick Start
//!
//! ```text
//! {{ spawnflags & 1 -> "red", "white" }}
//! ```
//!
//! This switch yields `"red"` when the lowest spawnflag is set and `"white"`
//! otherwise.
//!
//! ## Core Concepts
//!
//! ### No Operator Precedence
//!
//! Binary operators chain strictly left to right:
//!
//! ```text
//! 1 + 2 * 3      // (1 + 2) * 3
//! 1 + (2 * 3)    // parentheses are the only way to regroup
//! ```
//!
//! Unary operators bind to the single term that follows them, so `-a + b` is
//! `(-a) + b`.
//!
//! ### Ranges
//!
//! Ranges only exist inside brackets:
//!
//! - `[1..4]` - bounded range as an array element
//! - `list[2..]` - from index 2 on
//! - `list[..2]` - up to index 2
//!
//! ### Switches
//!
//! `{{ ... }}` lists branches in order; `condition -> result` branches are
//! `Case` nodes and a bare expression acts as the fallback.
pub mod expressions;
pub mod literals;
pub mod operators;
pub mod tokens;

pub use expressions::{Expression, ExpressionNode};
pub use literals::Literal;
pub use operators::{BinaryOp, UnaryOp};
pub use tokens::{Token, TokenKind, TokenSet};
