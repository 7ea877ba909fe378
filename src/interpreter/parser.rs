/// Parser state and the line-level entry point.
///
/// Holds the lexer and the single look-ahead token, and implements `eat`,
/// which consumes a token of an expected kind or fails with a syntax error.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, each folding left-associatively.
pub mod binary;

/// Primary expression parsing: integer literals and parenthesized groups.
pub mod primary;
