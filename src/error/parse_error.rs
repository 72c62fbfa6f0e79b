use crate::{error::LexError, interpreter::lexer::TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer failed while the parser was pulling the next token.
    Lexing(LexError),
    /// Found a token other than the one(s) the grammar allows here.
    UnexpectedToken {
        /// Every token kind that would have been accepted.
        expected: Vec<TokenKind>,
        /// The token kind actually found.
        got:      TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Input continued after the closing `END` of the program.
    BadSyntax {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Catalog number of the error (`100..200`, or the lexing code).
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Lexing(e) => e.code(),
            Self::UnexpectedToken { .. } => 100,
            Self::BadSyntax { .. } => 101,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexing(e) => e.line(),
            Self::UnexpectedToken { line, .. } | Self::BadSyntax { line } => *line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lexing(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexing(e) => e.fmt(f),
            Self::UnexpectedToken { expected, got, .. } => {
                let expected = expected.iter()
                                       .map(|kind| kind.display_name())
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[PARSING ERROR] Expected {expected}, got {got}.")
            },
            Self::BadSyntax { .. } => write!(f, "[PARSING ERROR] Bad syntax."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexing(e) => Some(e),
            _ => None,
        }
    }
}
