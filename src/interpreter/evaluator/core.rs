use std::io::{self, Write};

use log::{debug, trace};

use crate::{
    ast::{Expr, NodeCategory},
    error::{Error, RuntimeError},
    interpreter::{parser::Parser, symbol_table::SymbolTable, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking interpreter for one program.
///
/// The interpreter owns the parser it was built from, the program's single
/// symbol table, and the stream `PRINT` writes to (standard output unless
/// another writer is supplied).
///
/// ## Usage
///
/// Construct it once per source string and call [`Interpreter::interpret`].
/// The first error anywhere stops the run; output already written and
/// assignments already made are kept.
///
/// ```
/// use algo::interpreter::{evaluator::Interpreter, lexer::Lexer, parser::Parser};
///
/// let source = "PROGRAM Demo\nBEGIN\nPRINT 7 / 2, 7 / 2.0\nEND\n";
/// let parser = Parser::new(Lexer::new(source)).unwrap();
///
/// let mut out = Vec::new();
/// Interpreter::with_output(parser, &mut out).interpret().unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3 3.5\n");
/// ```
pub struct Interpreter<'src, W: Write = io::Stdout> {
    parser:  Parser<'src>,
    symbols: SymbolTable,
    output:  W,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new(parser: Parser<'src>) -> Self {
        Self::with_output(parser, io::stdout())
    }
}

impl<'src, W: Write> Interpreter<'src, W> {
    /// Creates an interpreter that prints to `output`.
    #[must_use]
    pub fn with_output(parser: Parser<'src>, output: W) -> Self {
        Self { parser,
               symbols: SymbolTable::new(),
               output }
    }

    /// Parses the whole program, then executes it.
    ///
    /// Constants are declared before variables, then the body runs top to
    /// bottom.
    ///
    /// # Errors
    /// The first lexing, parsing or runtime error met. Nothing is executed if
    /// the program does not parse.
    pub fn interpret(&mut self) -> Result<(), Error> {
        let program = self.parser.parse()?;

        debug!("{} '{}': declaring {} constants and {} variables",
               NodeCategory::Program,
               program.name,
               program.declarations.constants.len(),
               program.declarations.variables.len());
        self.declare(&program.declarations)?;

        self.execute_compound(&program.body)?;
        self.output
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string() })?;

        debug!("{} '{}' finished", NodeCategory::Program, program.name);
        Ok(())
    }

    /// The symbol table, as left by the last run.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(in crate::interpreter::evaluator) const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub(in crate::interpreter::evaluator) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Evaluates an expression to a value.
    ///
    /// Operands are evaluated left to right; both sides of every binary
    /// operator are always evaluated, including `AND` and `OR`.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by a symbol read or an operator.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        trace!("eval {}", expr.category());

        match expr {
            Expr::Value(literal) => Ok(Value::from(literal)),
            Expr::Symbol { name, index: None } => self.symbols.read(name),
            Expr::Symbol { name,
                           index: Some(index), } => {
                let index = self.eval_index(index)?;
                self.symbols.read_index(name, index)
            },
            Expr::Unary { op, operand } => Self::eval_unary(*op, self.eval(operand)?),
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }

    /// Evaluates an array index expression.
    ///
    /// # Errors
    /// `RuntimeError::IndexNotInteger` if the index is not an integer.
    pub(in crate::interpreter::evaluator) fn eval_index(&self, index: &Expr) -> EvalResult<i64> {
        match self.eval(index)? {
            Value::Integer(i) => Ok(i),
            _ => Err(RuntimeError::IndexNotInteger),
        }
    }
}
