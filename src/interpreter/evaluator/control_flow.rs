use std::io::Write;

use log::trace;

use crate::{
    ast::{Case, Compound, Expr, NodeCategory},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{Value, ValueType},
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Runs the branch selected by `condition`. A missing `ELSE` does nothing.
    pub(in crate::interpreter::evaluator) fn execute_if(&mut self,
                                                        condition: &Expr,
                                                        then_branch: &Compound,
                                                        else_branch: Option<&Compound>)
                                                        -> EvalResult<()> {
        if self.eval(condition)?.as_condition()? {
            self.execute_compound(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute_compound(else_branch)
        } else {
            Ok(())
        }
    }

    /// Checks `condition` before every pass, including the first.
    pub(in crate::interpreter::evaluator) fn execute_while(&mut self,
                                                           condition: &Expr,
                                                           body: &Compound)
                                                           -> EvalResult<()> {
        while self.eval(condition)?.as_condition()? {
            self.execute_compound(body)?;
        }
        Ok(())
    }

    /// Runs `body` once, then again for as long as `condition` is false.
    pub(in crate::interpreter::evaluator) fn execute_repeat(&mut self,
                                                            condition: &Expr,
                                                            body: &Compound)
                                                            -> EvalResult<()> {
        loop {
            self.execute_compound(body)?;
            if self.eval(condition)?.as_condition()? {
                return Ok(());
            }
        }
    }

    /// Counts from `from` up to and including `to`, adding `step` after each
    /// pass.
    ///
    /// The loop variable must be a declared, non-array `INTEGER`. The loop
    /// keeps its own counter and writes it to the variable at the start of
    /// every pass, so assignments to the variable inside the body do not
    /// change the sequence. A `step` of zero or less with `from <= to` never
    /// ends; the loop stops if the counter would overflow.
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if the variable is unknown.
    /// - `RuntimeError::IsAnArray` if the variable is an array.
    /// - `RuntimeError::InvalidLoopType` if the variable or any bound is not
    ///   an integer.
    /// - `RuntimeError::ConstantMutation` if the variable is a constant and
    ///   the body would run.
    pub(in crate::interpreter::evaluator) fn execute_for(&mut self,
                                                         name: &str,
                                                         from: &Expr,
                                                         to: &Expr,
                                                         step: &Expr,
                                                         body: &Compound)
                                                         -> EvalResult<()> {
        let symbol = self.symbols().get(name)?;
        if symbol.is_array() {
            return Err(RuntimeError::IsAnArray { name: name.to_string() });
        }
        if symbol.declared != ValueType::Integer {
            return Err(RuntimeError::InvalidLoopType { found: symbol.declared });
        }

        let from = self.eval(from)?;
        let to = self.eval(to)?;
        let step = self.eval(step)?;
        let (from, to, step) = (loop_bound(&from)?, loop_bound(&to)?, loop_bound(&step)?);

        trace!("{} {name} from {from} to {to} step {step}", NodeCategory::For);

        let mut counter = from;
        while counter <= to {
            self.symbols_mut().assign(name, Value::Integer(counter))?;
            self.execute_compound(body)?;

            match counter.checked_add(step) {
                Some(next) => counter = next,
                None => break,
            }
        }
        Ok(())
    }

    /// Runs the first case whose value equals the scrutinee in both value and
    /// type, or the default when none does.
    ///
    /// Case values are evaluated in order and only until one matches.
    pub(in crate::interpreter::evaluator) fn execute_switch(&mut self,
                                                            scrutinee: &Expr,
                                                            cases: &[Case],
                                                            default: Option<&Compound>)
                                                            -> EvalResult<()> {
        let scrutinee = self.eval(scrutinee)?;

        for case in cases {
            if self.eval(&case.value)? == scrutinee {
                trace!("{} {scrutinee} matched", NodeCategory::Case);
                return self.execute_compound(&case.body);
            }
        }

        match default {
            Some(default) => self.execute_compound(default),
            None => Ok(()),
        }
    }
}

fn loop_bound(value: &Value) -> EvalResult<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        other => Err(RuntimeError::InvalidLoopType { found: other.value_type() }),
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

    const COUNTERS: &str = "VARIABLES\nI, N : INTEGER";

    #[test]
    fn test_if_else() {
        assert_eq!(run("", "IF 0 THEN\nPRINT 1\nELSE\nPRINT 2\nENDIF").unwrap(), "2\n");
        assert_eq!(run("", "IF \"x\" THEN\nPRINT 1\nENDIF").unwrap(), "1\n");
        assert_eq!(run("", "IF FALSE THEN\nPRINT 1\nENDIF").unwrap(), "");
    }

    #[test]
    fn test_condition_must_reduce_to_boolean() {
        assert_eq!(runtime_error("VARIABLES\nA : INTEGER [1]", "IF A THEN\nENDIF"),
                   RuntimeError::InvalidExpression);
    }

    #[test]
    fn test_while_checks_first() {
        assert_eq!(run(COUNTERS, "LET N = 0\nWHILE N DO\nPRINT N\nENDWHILE").unwrap(), "");
        assert_eq!(run(COUNTERS, "LET N = 3\nWHILE N > 0 DO\nPRINT N\nLET N = N - 1\nENDWHILE").unwrap(),
                   "3\n2\n1\n");
    }

    #[test]
    fn test_repeat_runs_at_least_once() {
        assert_eq!(run(COUNTERS, "LET N = 5\nREPEAT UNTIL TRUE\nPRINT N\nENDREPEAT").unwrap(), "5\n");
        assert_eq!(run(COUNTERS, "LET N = 0\nREPEAT UNTIL N == 3\nLET N = N + 1\nPRINT N\nENDREPEAT")
                       .unwrap(),
                   "1\n2\n3\n");
    }

    #[test]
    fn test_for_with_step() {
        assert_eq!(run(COUNTERS, "FOR I FROM 1 TO 5 STEP 2\nPRINT I\nENDFOR").unwrap(), "1\n3\n5\n");
        assert_eq!(run(COUNTERS, "FOR I FROM 3 TO 1\nPRINT I\nENDFOR").unwrap(), "");
    }

    #[test]
    fn test_for_keeps_its_own_counter() {
        assert_eq!(run(COUNTERS, "FOR I FROM 1 TO 3\nPRINT I\nLET I = 100\nENDFOR\nPRINT I").unwrap(),
                   "1\n2\n3\n100\n");
    }

    #[test]
    fn test_for_type_errors() {
        assert_eq!(runtime_error("VARIABLES\nF : FLOAT", "FOR F FROM 1 TO 2\nENDFOR"),
                   RuntimeError::InvalidLoopType { found: ValueType::Float });
        assert_eq!(runtime_error(COUNTERS, "FOR I FROM 1 TO 2.0\nENDFOR"),
                   RuntimeError::InvalidLoopType { found: ValueType::Float });
        assert_eq!(runtime_error("VARIABLES\nA : INTEGER [2]", "FOR A FROM 1 TO 2\nENDFOR"),
                   RuntimeError::IsAnArray { name: "A".to_string() });
        assert_eq!(runtime_error("CONSTANTS\nK = 1", "FOR K FROM 1 TO 2\nENDFOR"),
                   RuntimeError::ConstantMutation { name: "K".to_string() });
    }

    #[test]
    fn test_switch_matches_value_and_type() {
        let body = |scrutinee: &str| {
            format!("SWITCH {scrutinee}\nCASE 1:\nPRINT \"int\"\nCASE \"1\":\nPRINT \
                     \"str\"\nDEFAULT:\nPRINT \"other\"\nENDSWITCH")
        };

        assert_eq!(run("", &body("1")).unwrap(), "int\n");
        assert_eq!(run("", &body("\"1\"")).unwrap(), "str\n");
        assert_eq!(run("", &body("1.0")).unwrap(), "other\n");
    }

    #[test]
    fn test_switch_first_match_wins_and_stops_evaluating() {
        let out = run(COUNTERS,
                      "SWITCH 2\nCASE 2:\nPRINT \"a\"\nCASE 2:\nPRINT \"b\"\nCASE N:\nENDSWITCH").unwrap();
        assert_eq!(out, "a\n");
    }

    #[test]
    fn test_switch_without_default() {
        assert_eq!(run("", "SWITCH 3\nCASE 1:\nPRINT 1\nENDSWITCH").unwrap(), "");
    }
}
