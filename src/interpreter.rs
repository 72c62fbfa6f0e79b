/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree produced by the parser depth-first. Expressions
/// evaluate to values; statements run for their effect on the symbol table and
/// on the output stream.
///
/// # Responsibilities
/// - Declares constants and variables before the body runs.
/// - Evaluates operators with their coercion and promotion rules.
/// - Executes assignments, output, branches and loops.
/// - Reports runtime errors such as type mismatches or out-of-range indices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// corresponding to a keyword, identifier, literal, operator, punctuation mark
/// or line break. Comments and horizontal whitespace are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Validates numeric, character and string literals.
/// - Reports lexical errors for unknown characters and malformed literals.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs a
/// [`Program`](crate::ast::Program) by recursive descent with a single token
/// of lookahead.
///
/// # Responsibilities
/// - Parses the program header, declaration sections and statement blocks.
/// - Encodes operator precedence and associativity.
/// - Reports the expected and the actual token on the first syntax error.
pub mod parser;
/// The symbol table holds every declared name of a program run.
///
/// It is the only mutable state shared by the evaluator, and it has a single
/// global scope.
pub mod symbol_table;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value variants produced by expressions (integers,
/// floats, characters, strings, booleans and array snapshots), their type
/// tags, boolean coercion, and the way values are printed.
pub mod value;
