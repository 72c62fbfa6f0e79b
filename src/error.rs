/// Lexing errors.
///
/// Defines every failure the scanner can raise while turning source text into
/// tokens: unknown characters and malformed literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Lexing errors raised while the parser pulls tokens are carried through
/// unchanged.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undeclared or redeclared variables, constant
/// mutation, type mismatches, array misuse and arithmetic faults.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The first failure of a run, tagged with the stage that detected it.
///
/// Every public entry point of the crate returns this type. Each stage has its
/// own error family; `?` lifts any of them into `Error` through the `From`
/// implementations below.
#[derive(Debug)]
pub enum Error {
    /// Raised by the lexer.
    Lex(LexError),
    /// Raised by the parser.
    Parse(ParseError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the catalog number of the underlying error.
    ///
    /// Lexing errors occupy `0..100`, parsing errors `100..200` and runtime
    /// errors `200..300`.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Lex(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }

    /// Returns the source line the error was detected on, when known.
    ///
    /// Runtime errors are raised while walking the tree, which carries no
    /// positions, so they never report one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.line()),
            Self::Parse(e) => Some(e.line()),
            Self::Runtime(_) => None,
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lexing(inner) => Self::Lex(inner),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
