use std::borrow::Cow;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// The runtime type tag of a value.
///
/// Also used as the declared type of a variable; `Array` only ever appears as
/// the type of a whole-array read, never as a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Float,
    /// A single character.
    Character,
    /// A string of characters.
    String,
    /// `TRUE` or `FALSE`.
    Boolean,
    /// A whole array, as produced by reading an array name without an index.
    Array,
}

impl ValueType {
    /// Returns the type marker used in runtime diagnostics (`INT_TYPE`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INT_TYPE",
            Self::Float => "FLOAT_TYPE",
            Self::Character => "CHAR_TYPE",
            Self::String => "STR_TYPE",
            Self::Boolean => "BOOL_TYPE",
            Self::Array => "ARR_TYPE",
        }
    }

    /// `true` for the integer and float types.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// `true` for the character and string types.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Character | Self::String)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a runtime value in the interpreter.
///
/// Expressions evaluate to a `Value`; its [`ValueType`] is recovered with
/// [`Value::value_type`], so every value travels as a `(value, type)` pair.
/// An absent value (a declared but unassigned variable or array slot) is
/// modelled as `None` by the symbol table rather than as a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A single character.
    Character(char),
    /// A string.
    String(String),
    /// A boolean.
    Boolean(bool),
    /// A snapshot of a whole array; `None` marks a slot that was never
    /// assigned.
    Array(Vec<Option<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Character(c) => Self::Character(*c),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Boolean(b) => Self::Boolean(*b),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Float(_) => ValueType::Float,
            Self::Character(_) => ValueType::Character,
            Self::String(_) => ValueType::String,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Array(_) => ValueType::Array,
        }
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest float.
    ///
    /// # Errors
    /// `RuntimeError::InvalidExpression` if the value is not numeric.
    pub fn as_f64(&self) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::InvalidExpression),
        }
    }

    /// Borrows a character or string value as text.
    ///
    /// Returns `None` for every other type.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(s) => Some(Cow::Borrowed(s)),
            Self::Character(c) => Some(Cow::Owned(c.to_string())),
            _ => None,
        }
    }

    /// Coerces the value to a boolean where a rule exists.
    ///
    /// - Integers and floats become `value != 0`.
    /// - Characters and strings become `value != ""`.
    /// - Booleans and arrays are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use algo::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(0).typecast(), Value::Boolean(false));
    /// assert_eq!(Value::from("x").typecast(), Value::Boolean(true));
    /// assert_eq!(Value::Boolean(true).typecast(), Value::Boolean(true));
    /// ```
    #[must_use]
    pub fn typecast(self) -> Self {
        match self {
            Self::Integer(n) => Self::Boolean(n != 0),
            Self::Float(x) => Self::Boolean(x != 0.0),
            Self::Character(_) => Self::Boolean(true),
            Self::String(s) => Self::Boolean(!s.is_empty()),
            other => other,
        }
    }

    /// Coerces the value with [`Value::typecast`] and requires a boolean.
    ///
    /// Used for every condition and by the logical operators.
    ///
    /// # Errors
    /// `RuntimeError::InvalidExpression` if the coerced value is still not a
    /// boolean (an array).
    pub fn as_condition(self) -> EvalResult<bool> {
        match self.typecast() {
            Self::Boolean(b) => Ok(b),
            _ => Err(RuntimeError::InvalidExpression),
        }
    }
}

/// Renders a float the way program output expects: the shortest digits that
/// round-trip, integral values without a fractional part, infinities spelled
/// out.
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form with a
/// signed exponent (`1e+21`, `1.5e-7`).
fn format_float(f: &mut std::fmt::Formatter<'_>, x: f64) -> std::fmt::Result {
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return f.write_str("0");
    }

    let magnitude = x.abs();
    if !(1e-6..1e21).contains(&magnitude) && magnitude.is_finite() {
        let exponent_form = format!("{x:e}");
        if let Some((mantissa, exponent)) = exponent_form.split_once('e') {
            let sign = if exponent.starts_with('-') { "" } else { "+" };
            return write!(f, "{mantissa}e{sign}{exponent}");
        }
    }
    write!(f, "{x}")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => format_float(f, *x),
            Self::Character(c) => write!(f, "{c}"),
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(slots) => {
                f.write_str("[")?;
                for (i, value) in slots.iter().flatten().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
        }
    }
}
