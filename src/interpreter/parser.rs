/// Binary operator parsing.
///
/// Implements the precedence-climbing levels for logical, comparison,
/// additive, multiplicative and exponent operators.
pub mod binary;
/// Core parser types and utilities.
///
/// Contains the `Parser` itself, token matching helpers, and the program and
/// compound-statement rules.
pub mod core;
/// Declaration parsing.
///
/// Parses the `CONSTANTS` and `VARIABLES` sections that precede `BEGIN`.
pub mod declaration;
/// Statement parsing.
///
/// Dispatches on the statement keyword and parses each of the eight statement
/// forms.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Handles literals, identifiers with optional index, parenthesized
/// sub-expressions, and the prefix operators `NOT`, `+` and `-`.
pub mod unary;

pub use self::core::{ParseResult, Parser};
