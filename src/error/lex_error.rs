/// The reason logos rejected a slice of input.
///
/// This is the lexer's internal error type: the token callbacks return it and
/// logos falls back to [`LexFault::UnknownToken`] for unmatched input.
/// [`crate::interpreter::lexer::Lexer`] turns it into a [`LexError`] once the
/// offending slice and line are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    /// No token pattern matched.
    #[default]
    UnknownToken,
    /// A string literal ran to the end of input.
    UnterminatedString,
    /// A `.` after a digit run was not followed by a digit.
    InvalidFloat,
    /// A character literal was not exactly one character between quotes.
    InvalidChar,
    /// An integer literal does not fit a 64-bit signed integer.
    InvalidInteger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that starts no token.
    UnknownToken {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal without its closing `"`.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A float literal such as `3.` with no digits after the point.
    InvalidFloat {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A malformed character literal such as `'ab'` or `''`.
    InvalidChar {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal that overflows a 64-bit signed integer.
    InvalidInteger {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl LexError {
    /// Builds the public error from a logos fault and the slice it covered.
    #[must_use]
    pub fn from_fault(fault: LexFault, slice: &str, line: usize) -> Self {
        match fault {
            LexFault::UnknownToken => {
                Self::UnknownToken { character: slice.chars().next().unwrap_or('\0'),
                                     line }
            },
            LexFault::UnterminatedString => Self::UnterminatedString { line },
            LexFault::InvalidFloat => Self::InvalidFloat { line },
            LexFault::InvalidChar => Self::InvalidChar { line },
            LexFault::InvalidInteger => Self::InvalidInteger { line },
        }
    }

    /// Catalog number of the error (`0..100`).
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UnknownToken { .. } => 0,
            Self::UnterminatedString { .. } => 1,
            Self::InvalidFloat { .. } => 2,
            Self::InvalidChar { .. } => 3,
            Self::InvalidInteger { .. } => 4,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownToken { line, .. }
            | Self::UnterminatedString { line }
            | Self::InvalidFloat { line }
            | Self::InvalidChar { line }
            | Self::InvalidInteger { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { character, .. } => {
                write!(f, "[LEXING ERROR] Unknown TOKEN ({character}).")
            },
            Self::UnterminatedString { .. } => {
                write!(f, "[LEXING ERROR] Expected \" at end of STRING.")
            },
            Self::InvalidFloat { .. } => write!(f, "[LEXING ERROR] Invalid FLOAT format."),
            Self::InvalidChar { .. } => write!(f, "[LEXING ERROR] Invalid CHAR format."),
            Self::InvalidInteger { .. } => write!(f, "[LEXING ERROR] Invalid INT format."),
        }
    }
}

impl std::error::Error for LexError {}
