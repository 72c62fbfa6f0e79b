use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
    util::num::{exponent_to_u32, f64_to_i64_truncated},
};

impl<W: Write> Interpreter<'_, W> {
    /// Evaluates a binary operation between two values.
    ///
    /// - `+ - * /` and `^` need numeric operands. The result is an integer
    ///   when both operands are integers and a float otherwise; integer `/`
    ///   truncates toward zero.
    /// - `%` needs two integers.
    /// - `&` needs two characters or strings and yields a string.
    /// - `==` and `!=` compare numbers with numbers, text with text, and
    ///   booleans with booleans. Any other pairing is simply unequal.
    /// - `> >= < <=` compare numbers numerically and text lexicographically,
    ///   and fail for any other pairing.
    /// - `AND` and `OR` coerce both operands to boolean.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidExpression` for operand types the operator does
    ///   not accept.
    /// - `RuntimeError::Overflow` when integer arithmetic overflows.
    /// - `RuntimeError::DivisionByZero` for integer `/` or `%` by zero.
    ///
    /// # Example
    /// ```
    /// use algo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Interpreter, value::Value},
    /// };
    ///
    /// let result = Interpreter::<Vec<u8>>::eval_binary(BinaryOperator::Div,
    ///                                                  Value::Integer(-7),
    ///                                                  Value::Integer(2));
    /// assert_eq!(result.unwrap(), Value::Integer(-3));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Concat, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, &left, &right),
            Mod => match (&left, &right) {
                (Value::Integer(_), Value::Integer(0)) => Err(RuntimeError::DivisionByZero),
                (Value::Integer(a), Value::Integer(b)) => {
                    a.checked_rem(*b).map(Value::Integer).ok_or(RuntimeError::Overflow)
                },
                _ => Err(RuntimeError::InvalidExpression),
            },
            Pow => Self::eval_pow(&left, &right),
            Concat => match (left.as_text(), right.as_text()) {
                (Some(a), Some(b)) => Ok(Value::String(format!("{a}{b}"))),
                _ => Err(RuntimeError::InvalidExpression),
            },
            Equal => Ok(Value::Boolean(Self::values_equal(&left, &right)?)),
            NotEqual => Ok(Value::Boolean(!Self::values_equal(&left, &right)?)),
            Greater | GreaterEqual | Less | LessEqual => Self::eval_ordering(op, &left, &right),
            And => Ok(Value::Boolean(left.as_condition()? & right.as_condition()?)),
            Or => Ok(Value::Boolean(left.as_condition()? | right.as_condition()?)),
        }
    }

    fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let result = match op {
                BinaryOperator::Add => a.checked_add(*b),
                BinaryOperator::Sub => a.checked_sub(*b),
                BinaryOperator::Mul => a.checked_mul(*b),
                _ if *b == 0 => return Err(RuntimeError::DivisionByZero),
                _ => a.checked_div(*b),
            };
            return result.map(Value::Integer).ok_or(RuntimeError::Overflow);
        }

        let (a, b) = Self::promote(left, right)?;
        Ok(Value::Float(match op {
                            BinaryOperator::Add => a + b,
                            BinaryOperator::Sub => a - b,
                            BinaryOperator::Mul => a * b,
                            _ => a / b,
                        }))
    }

    /// Evaluates `base ^ exponent`.
    ///
    /// Two integers use checked integer exponentiation; a negative integer
    /// exponent is computed in floating point and truncated toward zero, so
    /// the result stays an integer. Any float operand gives a float.
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Integer(_), Value::Integer(e)) if *e < 0 => {
                let (b, e) = Self::promote(base, exponent)?;
                f64_to_i64_truncated(b.powf(e)).map(Value::Integer)
            },
            (Value::Integer(b), Value::Integer(e)) => b.checked_pow(exponent_to_u32(*e)?)
                                                       .map(Value::Integer)
                                                       .ok_or(RuntimeError::Overflow),
            _ => {
                let (b, e) = Self::promote(base, exponent)?;
                Ok(Value::Float(b.powf(e)))
            },
        }
    }

    fn values_equal(left: &Value, right: &Value) -> EvalResult<bool> {
        Ok(match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            _ if left.value_type().is_numeric() && right.value_type().is_numeric() => {
                let (a, b) = Self::promote(left, right)?;
                a == b
            },
            _ => match (left.as_text(), right.as_text()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        })
    }

    fn eval_ordering(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, a: &T, b: &T) -> bool {
            match op {
                BinaryOperator::Greater => a > b,
                BinaryOperator::GreaterEqual => a >= b,
                BinaryOperator::Less => a < b,
                _ => a <= b,
            }
        }

        let result = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => compare(op, a, b),
            _ if left.value_type().is_numeric() && right.value_type().is_numeric() => {
                let (a, b) = Self::promote(left, right)?;
                compare(op, &a, &b)
            },
            _ => match (left.as_text(), right.as_text()) {
                (Some(a), Some(b)) => compare(op, &*a, &*b),
                _ => return Err(RuntimeError::InvalidExpression),
            },
        };
        Ok(Value::Boolean(result))
    }

    /// Converts two numeric operands to `f64`.
    fn promote(left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
        Ok((left.as_f64()?, right.as_f64()?))
    }
}
