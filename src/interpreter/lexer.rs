use log::trace;
use logos::Logos;

use crate::error::{LexError, lex_error::LexFault};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// The enum is derived with `logos`; every variant except [`TokenKind::Eof`]
/// is produced by a pattern below. Keywords are matched case-sensitively and
/// take priority over the identifier pattern for lexemes of equal length, so
/// `PRINT` is a keyword while `PRINTED` and `print` are identifiers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum TokenKind {
    /// End of input. Never matched by a pattern; returned by
    /// [`Lexer::next_token`] once the source is exhausted.
    Eof,
    /// A line break. Statements are newline-terminated.
    #[token("\n", |lex| lex.extras.line += 1)]
    Newline,
    /// Identifier tokens; names such as `total` or `_tmp2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// Integer literal, such as `42`.
    #[regex(r"[0-9]+", check_integer)]
    IntLiteral,
    /// Float literal, such as `3.25`.
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatLiteral,
    /// Character literal, such as `'a'` or `'''`.
    #[token("'", scan_char)]
    CharLiteral,
    /// String literal, such as `"hello"`. The lexeme keeps its quotes.
    #[token("\"", scan_string)]
    StrLiteral,

    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `PROGRAM`
    #[token("PROGRAM")]
    Program,
    /// `BEGIN`
    #[token("BEGIN")]
    Begin,
    /// `END`
    #[token("END")]
    End,
    /// `VARIABLES`
    #[token("VARIABLES")]
    Variables,
    /// `CONSTANTS`
    #[token("CONSTANTS")]
    Constants,
    /// `INTEGER`
    #[token("INTEGER")]
    Integer,
    /// `FLOAT`
    #[token("FLOAT")]
    Float,
    /// `CHARACTER`
    #[token("CHARACTER")]
    Character,
    /// `STRING`
    #[token("STRING")]
    String,
    /// `BOOLEAN`
    #[token("BOOLEAN")]
    Boolean,
    /// `TRUE`
    #[token("TRUE")]
    True,
    /// `FALSE`
    #[token("FALSE")]
    False,
    /// `LET`
    #[token("LET")]
    Let,
    /// `PRINT`
    #[token("PRINT")]
    Print,
    /// `IF`
    #[token("IF")]
    If,
    /// `THEN`
    #[token("THEN")]
    Then,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `ENDIF`
    #[token("ENDIF")]
    EndIf,
    /// `WHILE`
    #[token("WHILE")]
    While,
    /// `DO`
    #[token("DO")]
    Do,
    /// `ENDWHILE`
    #[token("ENDWHILE")]
    EndWhile,
    /// `FOR`
    #[token("FOR")]
    For,
    /// `FROM`
    #[token("FROM")]
    From,
    /// `TO`
    #[token("TO")]
    To,
    /// `STEP`
    #[token("STEP")]
    Step,
    /// `ENDFOR`
    #[token("ENDFOR")]
    EndFor,
    /// `REPEAT`
    #[token("REPEAT")]
    Repeat,
    /// `UNTIL`
    #[token("UNTIL")]
    Until,
    /// `ENDREPEAT`
    #[token("ENDREPEAT")]
    EndRepeat,
    /// `SWITCH`
    #[token("SWITCH")]
    Switch,
    /// `CASE`
    #[token("CASE")]
    Case,
    /// `DEFAULT`
    #[token("DEFAULT")]
    Default,
    /// `ENDSWITCH`
    #[token("ENDSWITCH")]
    EndSwitch,
    /// `RESIZE`
    #[token("RESIZE")]
    Resize,

    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// `# Comments` up to the end of the line.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns the text used for this kind in parser diagnostics.
    ///
    /// Literal kinds use their type marker (`INT_TYPE`, `STR_TYPE`, ...),
    /// punctuation and operators their symbol, keywords their spelling.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Newline => "NEWLINE",
            Self::Ident => "IDENT",
            Self::IntLiteral => "INT_TYPE",
            Self::FloatLiteral => "FLOAT_TYPE",
            Self::CharLiteral => "CHAR_TYPE",
            Self::StrLiteral => "STR_TYPE",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Program => "PROGRAM",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Variables => "VARIABLES",
            Self::Constants => "CONSTANTS",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Character => "CHARACTER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Let => "LET",
            Self::Print => "PRINT",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::EndIf => "ENDIF",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::EndWhile => "ENDWHILE",
            Self::For => "FOR",
            Self::From => "FROM",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::EndFor => "ENDFOR",
            Self::Repeat => "REPEAT",
            Self::Until => "UNTIL",
            Self::EndRepeat => "ENDREPEAT",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Default => "DEFAULT",
            Self::EndSwitch => "ENDSWITCH",
            Self::Resize => "RESIZE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Comment => "COMMENT",
            Self::Ignored => "WHITESPACE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics. Incremented by the newline
/// pattern and by string literals that span lines.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A lexical token: the matched slice of source and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The exact source text of the token. Empty for [`TokenKind::Eof`].
    pub lexeme: &'src str,
    /// What the lexeme was recognised as.
    pub kind:   TokenKind,
    /// The 1-based line the token starts on.
    pub line:   usize,
}

/// Pull-based scanner over one source string.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted every further call yields [`TokenKind::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// Returns a [`LexError`] for an unknown character, an unterminated
    /// string, or a malformed float, character or integer literal. The lexer
    /// does not recover: the caller is expected to stop at the first error.
    pub fn next_token(&mut self) -> LexResult<Token<'src>> {
        let line = self.inner.extras.line;

        match self.inner.next() {
            None => Ok(Token { lexeme: "",
                               kind: TokenKind::Eof,
                               line }),
            Some(Ok(kind)) => {
                let lexeme = self.inner.slice();
                trace!("line {line}: {kind} {lexeme:?}");
                Ok(Token { lexeme, kind, line })
            },
            Some(Err(fault)) => Err(LexError::from_fault(fault, self.inner.slice(), line)),
        }
    }
}

/// Rejects digit runs that are followed by a dangling `.` or that overflow
/// `i64`.
///
/// `3.5` is matched whole by the float pattern, so an integer match that is
/// still followed by `.` means the point had no digits after it.
fn check_integer(lex: &logos::Lexer<TokenKind>) -> Result<(), LexFault> {
    if lex.remainder().starts_with('.') {
        return Err(LexFault::InvalidFloat);
    }
    lex.slice().parse::<i64>().map(|_| ()).map_err(|_| LexFault::InvalidInteger)
}

/// Consumes the body and closing quote of a string literal.
fn scan_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexFault> {
    let rest = lex.remainder();

    match rest.find('"') {
        Some(end) => {
            lex.extras.line += rest[..end].matches('\n').count();
            lex.bump(end + 1);
            Ok(())
        },
        None => {
            lex.bump(rest.len());
            Err(LexFault::UnterminatedString)
        },
    }
}

/// Consumes the body and closing quote of a character literal.
///
/// Accepts exactly one character followed by `'`; a doubled quote (`'''`)
/// stands for the quote character itself.
fn scan_char(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexFault> {
    let mut chars = lex.remainder().chars();

    match (chars.next(), chars.next()) {
        (Some(c), Some('\'')) if c != '\n' => {
            lex.bump(c.len_utf8() + 1);
            Ok(())
        },
        _ => Err(LexFault::InvalidChar),
    }
}
