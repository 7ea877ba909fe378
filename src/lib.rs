//! # spi
//!
//! spi is a line-oriented arithmetic calculator written in Rust.
//! Each line goes through three stages: a lexer that produces tokens on
//! demand, a recursive-descent parser that builds an expression tree under
//! the usual precedence rules, and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::evaluate,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum, a closed tree of literals and binary
/// operations. The tree is built by the parser and traversed by the
/// evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per stage and a unifying [`error::Error`].
/// - Classifies every error into one of the reported failure kinds.
/// - Attaches character positions for user feedback.
pub mod error;
/// Orchestrates the three stages of the pipeline.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The read-eval-print loop.
///
/// Feeds lines from a reader through the pipeline and writes results and
/// errors to separate writers, recovering after every failed line.
pub mod repl;

/// Parses one line into an expression tree.
///
/// A fresh lexer and parser are built for every call, so no state is shared
/// between lines.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Syntax` when the line is not a valid
/// expression.
///
/// # Examples
/// ```
/// use spi::parse_line;
///
/// assert_eq!(parse_line("10 - 2 - 3").unwrap().to_string(), "(- (- 10 2) 3)");
/// assert!(parse_line("3 +").is_err());
/// ```
pub fn parse_line(source: &str) -> Result<Expr, Error> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Returns the value of one line of arithmetic.
///
/// This is the whole pipeline as a pure function: lex, parse, evaluate. The
/// tree is dropped when the call returns.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use spi::{error::ErrorKind, evaluate_line, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_line("1 + 2 * 3").unwrap(), Value::Integer(7));
/// assert_eq!(evaluate_line("7 / 2").unwrap(), Value::Real(3.5));
///
/// let err = evaluate_line("5 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_line(source: &str) -> Result<Value, Error> {
    let tree = parse_line(source)?;
    let value = evaluate(&tree)?;
    log::debug!("{tree} evaluated to {value}");
    Ok(value)
}
