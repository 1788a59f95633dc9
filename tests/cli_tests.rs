// tests/cli_tests.rs

use el_lang::cli::{
    execute_check, get_doc_category, get_docs_overview, list_tokens, CheckOptions, CheckOutput,
    CliError, DocCategory,
};
use el_lang::{ErrorKind, Location, TokenKind};
use std::path::PathBuf;

fn check(expression: &str) -> CheckOptions {
    CheckOptions {
        expression: expression.to_string(),
        ..CheckOptions::default()
    }
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_check_normalizes_source() {
    let result = execute_check(&check("a+b*2")).unwrap();
    assert_eq!(result.output, CheckOutput::Source("a + b * 2".to_string()));
    assert_eq!(result.variables, vec!["a", "b"]);
    assert!(result.unconsumed.is_empty());
}

#[test]
fn test_check_json_output() {
    let options = CheckOptions {
        json: true,
        ..check("x[1]")
    };
    let result = execute_check(&options).unwrap();
    match result.output {
        CheckOutput::Json(value) => {
            assert_eq!(value["type"], "subscript");
            assert_eq!(value["target"]["name"], "x");
        }
        other => panic!("Expected JSON output, got {other:?}"),
    }
}

#[test]
fn test_check_lenient_reports_unconsumed() {
    let options = CheckOptions {
        lenient: true,
        ..check("size * 2 ] rest of line ")
    };
    let result = execute_check(&options).unwrap();
    assert_eq!(result.output, CheckOutput::Source("size * 2".to_string()));
    assert_eq!(result.unconsumed, "] rest of line");
}

#[test]
fn test_check_strict_rejects_trailing_text() {
    let err = execute_check(&check("1 2")).unwrap_err();
    match err {
        CliError::Parse(e) => assert_eq!(e.kind(), ErrorKind::Syntactic),
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_check_error_names_path() {
    let options = CheckOptions {
        path: Some(PathBuf::from("defs/base.fgd")),
        ..check("[1,")
    };
    let err = execute_check(&options).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Parse error: defs/base.fgd: "), "{message}");
    assert!(message.contains("end of file"), "{message}");
}

#[test]
fn test_check_max_depth() {
    let options = CheckOptions {
        max_depth: Some(2),
        ..check("[[1]]")
    };
    assert!(execute_check(&options).is_err());

    let options = CheckOptions {
        max_depth: Some(2),
        ..check("[1]")
    };
    assert!(execute_check(&options).is_ok());
}

#[test]
fn test_check_variables_are_sorted_and_unique() {
    let result = execute_check(&check("{{ z > 1 -> a, z -> m[a], b }}")).unwrap();
    assert_eq!(result.variables, vec!["a", "b", "m", "z"]);
}

// ============================================================================
// Tokens
// ============================================================================

#[test]
fn test_list_tokens() {
    let lines = list_tokens("a ->\n  'b'").unwrap();
    let summary: Vec<(TokenKind, &str, Location)> = lines
        .iter()
        .map(|line| (line.kind, line.text.as_str(), line.location))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Name, "a", Location::new(1, 1)),
            (TokenKind::Arrow, "->", Location::new(1, 3)),
            (TokenKind::String, "b", Location::new(2, 3)),
            (TokenKind::Eof, "", Location::new(2, 6)),
        ]
    );
}

#[test]
fn test_token_line_display() {
    let lines = list_tokens("[").unwrap();
    assert_eq!(lines[0].to_string(), "1:1\t'['\t'['");
    assert_eq!(lines[1].to_string(), "1:2\tend of file\t''");
}

#[test]
fn test_list_tokens_stops_at_error() {
    let err = list_tokens("a # b").unwrap_err();
    assert!(err.to_string().contains("Unexpected character: '#'"));
}

// ============================================================================
// Docs
// ============================================================================

#[test]
fn test_docs_overview_lists_categories() {
    let overview = get_docs_overview();
    for category in ["syntax", "operators", "collections", "ranges", "switches"] {
        assert!(overview.contains(category), "missing {category}");
        assert!(get_doc_category(category).is_ok());
    }
}

#[test]
fn test_doc_category_aliases() {
    assert_eq!(DocCategory::from_name("Switch"), Some(DocCategory::Switches));
    assert_eq!(DocCategory::from_name("maps"), Some(DocCategory::Collections));
    assert_eq!(DocCategory::from_name("ops"), Some(DocCategory::Operators));
}

#[test]
fn test_unknown_doc_category() {
    let err = get_doc_category("lambdas").unwrap_err();
    assert!(matches!(err, CliError::UnknownCategory(ref name) if name == "lambdas"));
}
