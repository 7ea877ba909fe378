/// The evaluator module walks the expression tree and computes results.
///
/// # Responsibilities
/// - Evaluates literals and binary operations in post-order.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input for the parser.
///
/// The lexer reads the raw text and produces tokens on demand, each paired
/// with its character position. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace and recognizes integers, operators and parentheses.
/// - Reports invalid characters and oversized integer literals.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser pulls tokens from the lexer one at a time, holding a single
/// token of look-ahead, and descends through the precedence levels.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Validates the grammar, including that the whole line was consumed.
pub mod parser;
/// The value module defines the numeric results of evaluation.
pub mod value;
