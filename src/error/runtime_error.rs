use crate::interpreter::value::ValueType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a name that was never declared.
    NotDeclared {
        /// The name of the variable.
        name: String,
    },
    /// Declared a name that already exists (constant or variable).
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
    },
    /// An operator was applied to operands it does not accept, or a condition
    /// did not reduce to a boolean.
    InvalidExpression,
    /// Tried to write to a constant.
    ConstantMutation {
        /// The name of the constant.
        name: String,
    },
    /// Read a scalar or array slot that was never assigned.
    Unassigned {
        /// The name of the variable, with the index for array slots
        /// (`A[2]`).
        name: String,
    },
    /// The assigned value's type does not fit the variable's declared type.
    TypeMismatch {
        /// The name of the target variable.
        name:     String,
        /// The type of the value being assigned.
        found:    ValueType,
        /// The declared type of the variable.
        declared: ValueType,
    },
    /// A `FOR` loop variable or bound was not an integer.
    InvalidLoopType {
        /// The type that was found instead.
        found: ValueType,
    },
    /// An array size was not a positive integer.
    InvalidArraySize,
    /// An index fell outside `1..=length`.
    IndexOutOfBounds {
        /// The requested (1-based) index.
        index: i64,
    },
    /// Indexed or resized a variable that is not an array.
    NotAnArray {
        /// The name of the variable.
        name: String,
    },
    /// Used an array variable where a scalar is required.
    IsAnArray {
        /// The name of the variable.
        name: String,
    },
    /// An index expression did not evaluate to an integer.
    IndexNotInteger,
    /// Integer arithmetic overflowed.
    Overflow,
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Writing `PRINT` output failed.
    Output {
        /// Details reported by the output stream.
        details: String,
    },
}

impl RuntimeError {
    /// Catalog number of the error (`200..300`).
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::NotDeclared { .. } => 200,
            Self::AlreadyDeclared { .. } => 201,
            Self::InvalidExpression => 202,
            Self::ConstantMutation { .. } => 203,
            Self::Unassigned { .. } => 204,
            Self::TypeMismatch { .. } => 205,
            Self::InvalidLoopType { .. } => 206,
            Self::InvalidArraySize => 207,
            Self::IndexOutOfBounds { .. } => 208,
            Self::NotAnArray { .. } => 209,
            Self::IsAnArray { .. } => 210,
            Self::IndexNotInteger => 211,
            Self::Overflow => 212,
            Self::DivisionByZero => 213,
            Self::Output { .. } => 214,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[INTERPRETING ERROR] ")?;
        match self {
            Self::NotDeclared { name } => write!(f, "Variable {name} not declared"),
            Self::AlreadyDeclared { name } => write!(f, "Variable {name} already declared"),
            Self::InvalidExpression => write!(f, "Invalid expression"),
            Self::ConstantMutation { name } => write!(f, "Cannot change constant {name}"),
            Self::Unassigned { name } => write!(f, "Variable {name} has no assigned value"),
            Self::TypeMismatch { name,
                                 found,
                                 declared, } => write!(f,
                                                       "Cannot assign type {found} to variable {name} of type {declared}"),
            Self::InvalidLoopType { found } => {
                write!(f, "Can only loop using INT_TYPE, found {found}")
            },
            Self::InvalidArraySize => {
                write!(f, "Array size must be an INT_TYPE and greater than 0")
            },
            Self::IndexOutOfBounds { index } => write!(f, "Index {index} is out of bounds"),
            Self::NotAnArray { name } => write!(f, "Variable {name} is not an ARRAY"),
            Self::IsAnArray { name } => write!(f, "Variable {name} is an ARRAY"),
            Self::IndexNotInteger => write!(f, "Index must be an INT_TYPE"),
            Self::Overflow => write!(f, "Integer overflow"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Output { details } => write!(f, "Could not write output: {details}"),
        }?;
        write!(f, ".")
    }
}

impl std::error::Error for RuntimeError {}
