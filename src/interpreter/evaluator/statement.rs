use std::io::Write;

use log::trace;

use crate::{
    ast::{Compound, Declarations, Expr, NodeCategory, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        symbol_table::Symbol,
        value::Value,
    },
    util::num::array_length,
};

impl<W: Write> Interpreter<'_, W> {
    /// Creates every constant, then every variable.
    ///
    /// A constant takes the type of its initializer. A variable with a size
    /// expression becomes an array of that many unassigned slots; the size is
    /// evaluated before the name is checked for redeclaration.
    ///
    /// # Errors
    /// - `RuntimeError::AlreadyDeclared` for a name seen before.
    /// - `RuntimeError::InvalidArraySize` unless a size is a positive integer.
    /// - Any error raised while evaluating an initializer or a size.
    pub(in crate::interpreter::evaluator) fn declare(&mut self,
                                                     declarations: &Declarations)
                                                     -> EvalResult<()> {
        trace!("{} section", NodeCategory::Declare);

        for constant in &declarations.constants {
            trace!("{} {}", NodeCategory::Constant, constant.name);
            let value = self.eval(&constant.value)?;
            self.symbols_mut().declare(&constant.name, Symbol::constant(value))?;
        }

        for variable in &declarations.variables {
            trace!("{} {}", NodeCategory::Variable, variable.name);
            let symbol = match &variable.size {
                None => Symbol::scalar(variable.declared),
                Some(size) => match self.eval(size)? {
                    Value::Integer(n) => Symbol::array(variable.declared, array_length(n)?)?,
                    _ => return Err(RuntimeError::InvalidArraySize),
                },
            };
            self.symbols_mut().declare(&variable.name, symbol)?;
        }

        Ok(())
    }

    /// Executes statements in order, stopping at the first error.
    pub(in crate::interpreter::evaluator) fn execute_compound(&mut self,
                                                              compound: &Compound)
                                                              -> EvalResult<()> {
        trace!("{} of {} statements", NodeCategory::Compound, compound.statements.len());
        compound.statements
                .iter()
                .try_for_each(|statement| self.execute(statement))
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the statement or the expressions it
    /// evaluates.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!("execute {}", statement.category());

        match statement {
            Statement::Assign { name, index, value } => self.execute_assign(name, index.as_ref(), value),
            Statement::Print { values } => self.execute_print(values),
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                self.execute_if(condition, then_branch, else_branch.as_ref())
            },
            Statement::While { condition, body } => self.execute_while(condition, body),
            Statement::For { name,
                             from,
                             to,
                             step,
                             body, } => self.execute_for(name, from, to, step, body),
            Statement::Repeat { condition, body } => self.execute_repeat(condition, body),
            Statement::Switch { scrutinee,
                                cases,
                                default, } => self.execute_switch(scrutinee, cases, default.as_ref()),
            Statement::Resize { name, size } => self.execute_resize(name, size),
        }
    }

    /// `LET name = value` and `LET name[index] = value`.
    ///
    /// The target is looked up first, then the value is evaluated and coerced
    /// to the declared type, then the index is evaluated.
    fn execute_assign(&mut self, name: &str, index: Option<&Expr>, value: &Expr) -> EvalResult<()> {
        let symbol = self.symbols().get(name)?;
        let value = symbol.coerce(name, self.eval(value)?)?;

        match index {
            None => self.symbols_mut().assign(name, value),
            Some(index) => {
                let index = self.eval_index(index)?;
                self.symbols_mut().assign_index(name, index, value)
            },
        }
    }

    /// Writes the values of `values`, space-separated, as one line.
    fn execute_print(&mut self, values: &[Expr]) -> EvalResult<()> {
        let line = values.iter()
                         .map(|value| self.eval(value).map(|v| v.to_string()))
                         .collect::<EvalResult<Vec<_>>>()?
                         .join(" ");

        writeln!(self.output(), "{line}").map_err(|e| RuntimeError::Output { details: e.to_string() })
    }

    /// `RESIZE name TO size`.
    fn execute_resize(&mut self, name: &str, size: &Expr) -> EvalResult<()> {
        self.symbols().get(name)?;
        let size = self.eval(size)?;
        self.symbols_mut().resize(name, &size)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{
            evaluator::core::tests::{run, runtime_error},
            value::ValueType,
        },
    };

    #[test]
    fn test_print_joins_with_spaces() {
        assert_eq!(run("", "PRINT 1, 2.5, 'c', \"str\", TRUE").unwrap(), "1 2.5 c str true\n");
    }

    #[test]
    fn test_constants_come_before_variables() {
        let out = run("CONSTANTS\nN = 2\nVARIABLES\nA : INTEGER [N]", "LET A[N] = N\nPRINT A").unwrap();
        assert_eq!(out, "[2]\n");
    }

    #[test]
    fn test_constant_takes_initializer_type() {
        assert_eq!(run("CONSTANTS\nPI = 3.14\nNAME = \"algo\"", "PRINT PI, NAME").unwrap(),
                   "3.14 algo\n");
    }

    #[test]
    fn test_redeclaration() {
        assert_eq!(runtime_error("CONSTANTS\nX = 1\nX = 2", ""),
                   RuntimeError::AlreadyDeclared { name: "X".to_string() });
        assert_eq!(runtime_error("CONSTANTS\nX = 1\nVARIABLES\nX : INTEGER", ""),
                   RuntimeError::AlreadyDeclared { name: "X".to_string() });
    }

    #[test]
    fn test_invalid_array_sizes() {
        for size in ["0", "0 - 1", "2.0", "\"3\"", "1000000000000000000"] {
            assert_eq!(runtime_error(&format!("VARIABLES\nA : INTEGER [{size}]"), ""),
                       RuntimeError::InvalidArraySize,
                       "size {size}");
        }
    }

    #[test]
    fn test_size_checked_before_redeclaration() {
        assert_eq!(runtime_error("VARIABLES\nA : INTEGER\nA : INTEGER [0]", ""),
                   RuntimeError::InvalidArraySize);
    }

    #[test]
    fn test_constant_mutation() {
        assert_eq!(runtime_error("CONSTANTS\nX = 1", "LET X = 2"),
                   RuntimeError::ConstantMutation { name: "X".to_string() });
    }

    #[test]
    fn test_assignment_coercion() {
        let out = run("VARIABLES\nF : FLOAT\nB : BOOLEAN", "LET F = 2\nLET B = \"\"\nPRINT F, B").unwrap();
        assert_eq!(out, "2 false\n");
        assert_eq!(run("VARIABLES\nF : FLOAT", "LET F = 9007199254740993\nPRINT F").unwrap(),
                   "9007199254740992\n");

        assert_eq!(runtime_error("VARIABLES\nI : INTEGER", "LET I = 2.5"),
                   RuntimeError::TypeMismatch { name:     "I".to_string(),
                                                found:    ValueType::Float,
                                                declared: ValueType::Integer, });
    }

    #[test]
    fn test_character_is_not_a_string() {
        assert!(matches!(runtime_error("VARIABLES\nS : STRING", "LET S = 'a'"),
                         RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_array_assignment_errors() {
        let decl = "VARIABLES\nA : INTEGER [3]\nX : INTEGER";
        assert_eq!(runtime_error(decl, "LET A = 1"),
                   RuntimeError::IsAnArray { name: "A".to_string() });
        assert_eq!(runtime_error(decl, "LET X[1] = 1"),
                   RuntimeError::NotAnArray { name: "X".to_string() });
        assert_eq!(runtime_error(decl, "LET A[4] = 1"),
                   RuntimeError::IndexOutOfBounds { index: 4 });
        assert_eq!(runtime_error(decl, "LET A['1'] = 1"), RuntimeError::IndexNotInteger);
        assert_eq!(runtime_error(decl, "LET Y = 1"),
                   RuntimeError::NotDeclared { name: "Y".to_string() });
    }

    #[test]
    fn test_unassigned_reads() {
        assert_eq!(runtime_error("VARIABLES\nX : INTEGER", "PRINT X"),
                   RuntimeError::Unassigned { name: "X".to_string() });
        assert_eq!(runtime_error("VARIABLES\nA : INTEGER [2]", "PRINT A[2]"),
                   RuntimeError::Unassigned { name: "A[2]".to_string() });
    }

    #[test]
    fn test_whole_array_prints_present_elements() {
        let out = run("VARIABLES\nA : STRING [3]", "LET A[3] = \"c\"\nLET A[1] = \"a\"\nPRINT A").unwrap();
        assert_eq!(out, "[a, c]\n");
    }

    #[test]
    fn test_resize() {
        let decl = "VARIABLES\nA : INTEGER [3]\nI : INTEGER";
        let fill = "FOR I FROM 1 TO 3\nLET A[I] = I\nENDFOR";

        assert_eq!(run(decl, &format!("{fill}\nRESIZE A TO 2\nPRINT A")).unwrap(), "[1, 2]\n");
        assert_eq!(run(decl, &format!("{fill}\nRESIZE A TO 5\nLET A[5] = 5\nPRINT A")).unwrap(),
                   "[1, 2, 3, 5]\n");
        assert_eq!(runtime_error(decl, "RESIZE I TO 2"),
                   RuntimeError::NotAnArray { name: "I".to_string() });
        assert_eq!(runtime_error(decl, "RESIZE A TO 0"), RuntimeError::InvalidArraySize);
        assert_eq!(runtime_error(decl, "RESIZE B TO 1"),
                   RuntimeError::NotDeclared { name: "B".to_string() });
    }
}
