use crate::interpreter::value::ValueType;

/// A literal value as written in source code.
///
/// `LiteralValue` covers the raw constants that can appear directly in an
/// expression: numbers, characters, strings and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `2.5`.
    Float(f64),
    /// A character literal, such as `'a'`.
    Character(char),
    /// A string literal without its quotes.
    String(String),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
}

/// The category of a syntax tree node.
///
/// Every node belongs to exactly one category; the evaluator dispatches on the
/// node enums themselves, and the category is used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    /// The whole program.
    Program,
    /// The `CONSTANTS` and `VARIABLES` sections.
    Declare,
    /// One constant declaration.
    Constant,
    /// One variable declaration.
    Variable,
    /// A binary operation.
    Binary,
    /// A unary operation.
    Unary,
    /// A literal value.
    Value,
    /// A variable read, optionally indexed.
    Symbol,
    /// A statement sequence.
    Compound,
    /// `LET`
    Assign,
    /// `PRINT`
    Print,
    /// `IF ... ENDIF`
    If,
    /// `WHILE ... ENDWHILE`
    While,
    /// `FOR ... ENDFOR`
    For,
    /// `REPEAT UNTIL ... ENDREPEAT`
    Repeat,
    /// `SWITCH ... ENDSWITCH`
    Switch,
    /// One `CASE` arm.
    Case,
    /// `RESIZE`
    Resize,
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Program => "PROGRAM",
            Self::Declare => "DECLARE",
            Self::Constant => "CONSTANT",
            Self::Variable => "VARIABLE",
            Self::Binary => "BINARY",
            Self::Unary => "UNARY",
            Self::Value => "VALUE",
            Self::Symbol => "SYMBOL",
            Self::Compound => "COMPOUND",
            Self::Assign => "ASSIGN",
            Self::Print => "PRINT",
            Self::If => "IF",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Repeat => "REPEAT",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Resize => "RESIZE",
        };
        f.write_str(name)
    }
}

/// A parsed program: `PROGRAM <name>`, its declarations and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The identifier after `PROGRAM`.
    pub name:         String,
    /// The `CONSTANTS` and `VARIABLES` sections.
    pub declarations: Declarations,
    /// The statements between `BEGIN` and `END`.
    pub body:         Compound,
}

/// The declaration sections of a program.
///
/// Constants are always evaluated before variables, regardless of how the
/// evaluator walks the rest of the tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declarations {
    /// Entries of the `CONSTANTS` section, in source order.
    pub constants: Vec<ConstantDecl>,
    /// Entries of the `VARIABLES` section, one per declared name.
    pub variables: Vec<VariableDecl>,
}

/// `<name> = <expr>` inside `CONSTANTS`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDecl {
    /// Name of the constant.
    pub name:  String,
    /// Its initializer; the constant takes the type of this value.
    pub value: Expr,
}

/// One name from `<name>, ... : <TYPE> [<size>]` inside `VARIABLES`.
///
/// A comma-separated declaration produces one `VariableDecl` per name, each
/// holding its own copy of the size expression.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    /// Name of the variable.
    pub name:     String,
    /// The declared element type.
    pub declared: ValueType,
    /// The array size expression; `None` declares a scalar.
    pub size:     Option<Expr>,
}

/// A sequence of statements executed in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// One `CASE <value>:` arm of a `SWITCH`.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The value compared against the scrutinee.
    pub value: Expr,
    /// The statements run when the value matches.
    pub body:  Compound,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions evaluate to a value; they never change program state.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Value(LiteralValue),
    /// A variable read: `name` or `name[index]`.
    Symbol {
        /// Name of the variable.
        name:  String,
        /// The index expression, for array element reads.
        index: Option<Box<Self>>,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Returns the node category of the expression.
    #[must_use]
    pub const fn category(&self) -> NodeCategory {
        match self {
            Self::Value(_) => NodeCategory::Value,
            Self::Symbol { .. } => NodeCategory::Symbol,
            Self::Unary { .. } => NodeCategory::Unary,
            Self::Binary { .. } => NodeCategory::Binary,
        }
    }
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `LET name = value` or `LET name[index] = value`.
    Assign {
        /// Name of the target variable.
        name:  String,
        /// The element index, for array element writes.
        index: Option<Expr>,
        /// The value to store.
        value: Expr,
    },
    /// `PRINT a, b, ...`
    Print {
        /// The expressions to print, left to right.
        values: Vec<Expr>,
    },
    /// `IF cond THEN ... [ELSE ...] ENDIF`
    If {
        /// The condition, coerced to boolean.
        condition:   Expr,
        /// Run when the condition holds.
        then_branch: Compound,
        /// Run when it does not; `None` when there is no `ELSE`.
        else_branch: Option<Compound>,
    },
    /// `WHILE cond DO ... ENDWHILE`
    While {
        /// Checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Compound,
    },
    /// `FOR name FROM a TO b [STEP c] ... ENDFOR`
    For {
        /// The loop variable; must already be a declared integer scalar.
        name: String,
        /// First value.
        from: Expr,
        /// Inclusive upper bound.
        to:   Expr,
        /// Increment; the literal `1` when `STEP` is omitted.
        step: Expr,
        /// The loop body.
        body: Compound,
    },
    /// `REPEAT UNTIL cond ... ENDREPEAT`
    Repeat {
        /// Checked after every iteration; the loop ends once it holds.
        condition: Expr,
        /// The loop body, run at least once.
        body:      Compound,
    },
    /// `SWITCH expr CASE v: ... DEFAULT: ... ENDSWITCH`
    Switch {
        /// The value compared against each case.
        scrutinee: Expr,
        /// The arms, tried in order.
        cases:     Vec<Case>,
        /// Run when no case matched; `None` when there is no `DEFAULT`.
        default:   Option<Compound>,
    },
    /// `RESIZE name TO size`
    Resize {
        /// Name of the array.
        name: String,
        /// The new length.
        size: Expr,
    },
}

impl Statement {
    /// Returns the node category of the statement.
    #[must_use]
    pub const fn category(&self) -> NodeCategory {
        match self {
            Self::Assign { .. } => NodeCategory::Assign,
            Self::Print { .. } => NodeCategory::Print,
            Self::If { .. } => NodeCategory::If,
            Self::While { .. } => NodeCategory::While,
            Self::For { .. } => NodeCategory::For,
            Self::Repeat { .. } => NodeCategory::Repeat,
            Self::Switch { .. } => NodeCategory::Switch,
            Self::Resize { .. } => NodeCategory::Resize,
        }
    }
}

/// Binary operators, in the order of the precedence levels that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `&`, string concatenation.
    Concat,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Concat => "&",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `NOT`, logical negation after boolean coercion.
    Not,
    /// `+`, identity.
    Plus,
    /// `-`, numeric negation.
    Negate,
}
