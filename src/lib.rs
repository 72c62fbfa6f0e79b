//! # algo
//!
//! algo is an interpreter for a small, pseudocode-like teaching language
//! written in Rust. Programs declare typed constants, variables and 1-based
//! arrays up front, then run a block of `LET`, `PRINT`, `IF`, `WHILE`, `FOR`,
//! `REPEAT UNTIL`, `SWITCH` and `RESIZE` statements.
//!
//! ```text
//! PROGRAM Squares
//! VARIABLES
//!     I : INTEGER
//! BEGIN
//!     FOR I FROM 1 TO 3
//!         PRINT I, "squared is", I ^ 2
//!     ENDFOR
//! END
//! ```

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

use crate::{
    ast::Program,
    interpreter::{evaluator::Interpreter, lexer::Lexer, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the program, declaration, statement and expression
/// types that represent source code as a tree. The tree is built once by the
/// parser and only read by the evaluator.
///
/// # Responsibilities
/// - Defines one type per language construct.
/// - Tags every node with its category for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error family with a numbered catalog and a fixed
/// message template. The top-level [`Error`] wraps whichever family stopped
/// the run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Renders every error as `[<STAGE> ERROR] <message>.`
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the symbol table, values and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// These helpers are shared by the symbol table and the evaluator.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, `u32` and `f64` without silent
///   data loss.
/// - Map the language's 1-based indices to slice offsets.
pub mod util;

pub use error::Error;

/// Runs a program, printing its output to standard output.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Examples
/// ```
/// use algo::run;
///
/// let source = "PROGRAM Hello\nBEGIN\nPRINT \"Hello\" & \", world\"\nEND\n";
/// assert!(run(source).is_ok());
///
/// // `X` is never declared.
/// let source = "PROGRAM Broken\nBEGIN\nLET X = 1\nEND\n";
/// let err = run(source).unwrap_err();
/// assert_eq!(err.to_string(), "[INTERPRETING ERROR] Variable X not declared.");
/// ```
pub fn run(source: &str) -> Result<(), Error> {
    Interpreter::new(Parser::new(Lexer::new(source))?).interpret()
}

/// Runs a program, writing its output to `output`.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error. Output written before
/// the error stays in `output`.
///
/// # Examples
/// ```
/// use algo::run_with_output;
///
/// let source = "PROGRAM Div\nBEGIN\nPRINT 7 / 2, -7 / 2, 7 / 2.0\nEND\n";
/// let mut out = Vec::new();
/// run_with_output(source, &mut out).unwrap();
/// assert_eq!(out, b"3 -3 3.5\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, output: &mut W) -> Result<(), Error> {
    Interpreter::with_output(Parser::new(Lexer::new(source))?, output).interpret()
}

/// Lexes and parses a program without running it.
///
/// # Errors
/// Returns the first lexing or parsing error.
pub fn parse_program(source: &str) -> Result<Program, Error> {
    Ok(Parser::new(Lexer::new(source))?.parse()?)
}
