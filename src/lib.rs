//! # imp
//!
//! imp is an interpreter for IMP, a minimal imperative teaching language
//! written in Rust. It lexes, parses and runs programs made of integer and
//! boolean expressions, assignment, sequencing, `if`, `while`, `skip` and
//! `print`.

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

use std::io::Write;

use tracing::debug;

pub use crate::{
    error::Error,
    interpreter::{evaluator::core::State, lexer::scan},
};
use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, lexer::Token, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the integer expression, boolean expression and
/// statement types that represent a program as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed enum per grammar category.
/// - Attaches source lines to statements for error reporting.
/// - Renders trees back to IMP source.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
pub mod interpreter;

/// Parses a scanned token stream into a program.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Examples
/// ```
/// use imp::{parse, scan};
///
/// let tokens = scan("skip; print 1").unwrap();
/// assert_eq!(parse(&tokens).unwrap().statements.len(), 2);
///
/// let tokens = scan("while true do skip").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_program(tokens)
}

/// Runs a parsed program, writing `print` output to `output`.
///
/// The program starts with an empty store; the store as it is when the last
/// statement finishes is returned.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised. Output written before the error
/// stays written.
pub fn execute<W: Write>(program: &Program, output: W) -> Result<State, RuntimeError> {
    let mut context = Context::new(output);
    context.execute(&program.statements)?;

    let state = context.into_state();
    debug!(variables = state.len(), "program finished");

    Ok(state)
}

/// Lexes, parses and runs `source`, writing `print` output to `output`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// let mut output = Vec::<u8>::new();
/// let state = imp::run("x := 1 + 2 * 3; print x", &mut output).unwrap();
///
/// assert_eq!(output, b"7\n");
/// assert_eq!(state.get("x"), 7);
///
/// // `@` is not part of the language.
/// assert!(imp::run("print @", std::io::sink()).is_err());
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<State, Error> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    Ok(execute(&program, output)?)
}
