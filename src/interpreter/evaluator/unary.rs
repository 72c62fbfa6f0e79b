use std::io::Write;

use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: boolean negation after coercion with [`Value::typecast`].
    /// - `Plus`: identity.
    /// - `Negate`: numeric negation for integers and floats.
    ///
    /// # Example
    /// ```
    /// use algo::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Negate, Value::Integer(5));
    /// assert_eq!(v.unwrap(), Value::Integer(-5));
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Not, Value::from(""));
    /// assert_eq!(v.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Boolean(!value.as_condition()?)),
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow),
                Value::Float(x) => Ok(Value::Float(-x)),
                _ => Err(RuntimeError::InvalidExpression),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::RuntimeError, interpreter::evaluator::core::tests::run};

    #[test]
    fn test_negation() {
        assert_eq!(run("", "PRINT -3, -2.5, - -1").unwrap(), "-3 -2.5 1\n");
        assert_eq!(run("", "PRINT -\"a\"").unwrap_err().code(), RuntimeError::InvalidExpression.code());
    }

    #[test]
    fn test_not_negates_a_comparison() {
        assert_eq!(run("", "PRINT NOT 1 == 2, NOT 0, NOT \"x\"").unwrap(), "true true false\n");
    }

    #[test]
    fn test_sign_binds_before_power() {
        assert_eq!(run("", "PRINT -2 ^ 2").unwrap(), "4\n");
    }
}
