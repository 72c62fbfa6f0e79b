/// Binary operator evaluation logic.
///
/// Handles arithmetic with integer/float promotion, string concatenation,
/// equality and ordering comparisons, and the logical operators.
pub mod binary;

/// Evaluation of control-flow statements.
///
/// Implements `IF`, `WHILE`, `FOR`, `REPEAT UNTIL` and `SWITCH`.
pub mod control_flow;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the program entry point, expression dispatch,
/// and the result type shared by every evaluation function.
pub mod core;

/// Evaluation of declarations and simple statements.
///
/// Creates constants and variables, and executes `LET`, `PRINT` and
/// `RESIZE`.
pub mod statement;

/// Unary operator evaluation logic.
///
/// Implements logical `NOT`, unary plus, and numeric negation.
pub mod unary;

pub use self::core::{EvalResult, Interpreter};
