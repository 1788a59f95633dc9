//! Validate expressions and render the resulting tree

use std::path::PathBuf;

use super::CliError;
use crate::{output, ParseMode, Parser, ParserOptions};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to parse
    pub expression: String,
    /// Accept text after the first complete expression
    pub lenient: bool,
    /// Render the tree as JSON instead of EL source
    pub json: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// File name reported in diagnostics
    pub path: Option<PathBuf>,
    /// Reject expressions nested deeper than this
    pub max_depth: Option<usize>,
}

/// Rendered tree
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutput {
    /// Normalized EL source
    Source(String),
    /// JSON description of the tree
    Json(serde_json::Value),
}

/// Result of a check operation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub output: CheckOutput,
    /// Free variables of the expression, sorted
    pub variables: Vec<String>,
    /// Text left after the expression; always empty in strict mode
    pub unconsumed: String,
}

/// Parse an expression and render it
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let mode = if options.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };

    let mut parser = Parser::with_options(
        &options.expression,
        ParserOptions {
            mode,
            path: options.path.clone(),
            max_depth: options.max_depth,
            ..ParserOptions::default()
        },
    );
    let tree = parser.parse()?;
    let unconsumed = options.expression[parser.lexer_state().offset()..]
        .trim()
        .to_string();

    let output = if options.json {
        CheckOutput::Json(output::to_json_value(&tree))
    } else {
        CheckOutput::Source(tree.to_string())
    };

    Ok(CheckResult {
        output,
        variables: tree.variables().into_iter().map(String::from).collect(),
        unconsumed,
    })
}
