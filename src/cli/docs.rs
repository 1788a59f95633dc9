//! Documentation content for the el CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Collections,
    Ranges,
    Switches,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "literals" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "collections" | "arrays" | "maps" | "subscripts" => Some(Self::Collections),
            "ranges" | "range" => Some(Self::Ranges),
            "switches" | "switch" | "cases" => Some(Self::Switches),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"EL DOCUMENTATION

EL is a small expression language for deriving values (colors, numbers,
strings, switches, ranges, collections) from named variables supplied by a
host application.

DOCUMENTATION CATEGORIES

  syntax            Literals, variables, comments and grouping
  operators         Unary and binary operators, and how they chain
  collections       Array and map literals, subscripts
  ranges            Bounded and half-open ranges inside brackets
  switches          {{ condition -> result, fallback }} expressions

QUICK REFERENCE

  "text" 'text'     String
  42  1.5  .5       Number
  true false null   Keywords
  name              Variable
  [1, 2]            Array
  { key: 1 }        Map
  list[0]           Subscript
  {{ a -> 1, 2 }}   Switch

Run 'el doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Collections) => Ok(COLLECTIONS_DOC),
        Some(DocCategory::Ranges) => Ok(RANGES_DOC),
        Some(DocCategory::Switches) => Ok(SWITCHES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Literals, Variables and Grouping

STRINGS
  "double quoted"   'single quoted'
    \" and \\ are escapes: "say \"hi\"". Inside single quotes \' does not
    end the string but keeps its backslash.
    A string must close with the quote it opened with.

NUMBERS
  42    1.5    .25    2e3
    All numbers are floating point. A number must be followed by whitespace,
    one of ( ) { } [ ] , : + - * / %  or a range '..'.

    Errors:
      1.2.3     Malformed number literal
      1e400     Malformed number literal (out of range)

KEYWORDS
  true  false  null
    Matched before names, so 'nullable' reads as null followed by 'able'.

VARIABLES
  color   _flags   size2
    A letter or underscore, then letters, digits or underscores. Values are
    supplied by the host when the expression is evaluated.

GROUPING
  ( expression )
    Parentheses are kept in the tree and are the only way to change how
    operators group.

COMMENTS
  // runs to the end of the line
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Unary and Binary

UNARY
  +x   -x   !x   ~x
    A unary operator applies to the single term right after it:
      -a + b     is   (-a) + b

BINARY
  Arithmetic    +  -  *  /  %
  Logical       &&  ||
  Bitwise       &  |  ^  <<  >>
  Comparison    <  <=  >  >=  ==  !=
  Case          ->   (see 'el doc switches')

NO PRECEDENCE
  All binary operators bind equally and chain from left to right:
    1 + 2 * 3          is   (1 + 2) * 3
    a < b && c         is   (a < b) && c
  Use parentheses to group differently:
    1 + (2 * 3)

  Constraints:
    - '=' alone is not an operator; equality is '=='
"#;

const COLLECTIONS_DOC: &str = r#"COLLECTIONS - Arrays, Maps and Subscripts

ARRAYS
  [ 1, "two", x ]
    Elements may also be bounded ranges: [ 1..3, 7 ].

MAPS
  { "key": value, other: 2 }
    Keys are strings or bare names. A repeated key keeps its last value:
      { a: 1, a: 2 }   is   { a: 2 }

    Constraints:
      - '{{' and '}}' always read as switch braces; write nested maps
        with a space: { a: { b: 1 } }

SUBSCRIPTS
  list[0]        single index
  list[0, 2]     several indices
  list[1..3]     range of indices
  grid[1][2]     chained, applies left to right
"#;

const RANGES_DOC: &str = r#"RANGES - Inside Brackets Only

  a..b     bounded range          [1..4]   list[1..4]
  a..      from a to the end      list[2..]
  ..b      from the start to b    list[..2]

  Constraints:
    - Ranges are not expressions on their own: '1..2' outside brackets is
      rejected
    - Half-open ranges are only allowed in subscripts
    - '1..5' reads as 1, '..', 5; a single stray dot after a number is an
      error
"#;

const SWITCHES_DOC: &str = r#"SWITCHES - Conditional Values

  {{ condition -> result, condition -> result, fallback }}
    Branches are kept in order. 'condition -> result' is a case; a bare
    expression is a fallback. Which branch wins is decided by the evaluator.

    Example:
      {{ spawnflags & 1 -> "red", spawnflags & 2 -> "green", "white" }}

  {{}}
    An empty switch is allowed.

  Constraints:
    - '->' is accepted anywhere by the parser; outside a switch the
      evaluator rejects it
"#;
