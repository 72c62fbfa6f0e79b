use log::debug;

use crate::{
    ast::{Compound, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a pull-based token stream.
///
/// The parser holds exactly one token of lookahead, the current token, and
/// never backtracks. Tokens are pulled from the lexer one at a time as grammar
/// decisions are made; no token list is retained.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token from `lexer`.
    ///
    /// # Errors
    /// Propagates a lexing error raised by the first token.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a whole program and requires that nothing follows it.
    ///
    /// Grammar:
    /// ```text
    /// program := NEWLINE* 'PROGRAM' IDENT NEWLINE+ declare
    ///            'BEGIN' NEWLINE+ compound 'END' NEWLINE* EOF
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` at the first token the grammar does not allow.
    /// - `BadSyntax` if input remains after `END`.
    /// - Any lexing error met along the way.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.program()?;

        if self.check(TokenKind::Eof) {
            debug!("parsed program '{}' with {} top-level statements",
                   program.name,
                   program.body.statements.len());
            Ok(program)
        } else {
            Err(ParseError::BadSyntax { line: self.current.line })
        }
    }

    fn program(&mut self) -> ParseResult<Program> {
        self.newline(false)?;
        self.expect(TokenKind::Program)?;
        let name = self.expect(TokenKind::Ident)?.lexeme.to_string();
        self.newline(true)?;

        let declarations = self.declarations()?;

        self.expect(TokenKind::Begin)?;
        self.newline(true)?;

        let body = self.compound(&[TokenKind::End])?;

        self.expect(TokenKind::End)?;
        self.newline(false)?;

        Ok(Program { name,
                     declarations,
                     body })
    }

    /// Parses newline-terminated statements until one of `terminators` (or
    /// end of input) is the current token.
    ///
    /// The terminator itself is left for the caller to consume.
    pub(in crate::interpreter::parser) fn compound(&mut self,
                                                   terminators: &[TokenKind])
                                                   -> ParseResult<Compound> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::Eof) && !self.check_any(terminators) {
            statements.push(self.statement()?);
            self.newline(true)?;
        }

        Ok(Compound { statements })
    }

    /// Returns the current token.
    pub(in crate::interpreter::parser) const fn current(&self) -> Token<'src> {
        self.current
    }

    /// Moves to the next token and returns the one just passed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// `true` if the current token has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// `true` if the current token has any of the given kinds.
    pub(in crate::interpreter::parser) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `kind` and the token actually found.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind)
                                                 -> ParseResult<Token<'src>> {
        self.expect_any(&[kind])
    }

    /// Consumes the current token if it has any of the given kinds.
    ///
    /// # Errors
    /// `UnexpectedToken` listing every kind in `kinds` and the token actually
    /// found.
    pub(in crate::interpreter::parser) fn expect_any(&mut self,
                                                     kinds: &[TokenKind])
                                                     -> ParseResult<Token<'src>> {
        if self.check_any(kinds) {
            self.advance()
        } else {
            Err(self.unexpected(kinds))
        }
    }

    /// Builds the error for an unexpected current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_vec(),
                                      got:      self.current.kind,
                                      line:     self.current.line, }
    }

    /// Skips blank lines. With `required`, at least one newline must be
    /// present.
    pub(in crate::interpreter::parser) fn newline(&mut self, required: bool) -> ParseResult<()> {
        if required {
            self.expect(TokenKind::Newline)?;
        }
        while self.check(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, LiteralValue, Statement};

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::new(Lexer::new(source))?.parse()
    }

    #[test]
    fn test_minimal_program() {
        let program = parse("\n\nPROGRAM Empty\nBEGIN\nEND\n\n").unwrap();
        assert_eq!(program.name, "Empty");
        assert!(program.body.statements.is_empty());
    }

    #[test]
    fn test_missing_program_keyword() {
        let err = parse("BEGIN\nEND").unwrap_err();
        assert_eq!(err.to_string(), "[PARSING ERROR] Expected PROGRAM, got BEGIN.");
        assert_eq!(err.code(), 100);
    }

    #[test]
    fn test_trailing_tokens_are_bad_syntax() {
        let err = parse("PROGRAM P\nBEGIN\nEND\nPRINT").unwrap_err();
        assert!(matches!(err, ParseError::BadSyntax { line: 4 }));
        assert_eq!(err.to_string(), "[PARSING ERROR] Bad syntax.");
    }

    #[test]
    fn test_statement_needs_newline() {
        let err = parse("PROGRAM P\nBEGIN\nPRINT 1 END").unwrap_err();
        assert_eq!(err.to_string(), "[PARSING ERROR] Expected NEWLINE, got END.");
    }

    #[test]
    fn test_blank_lines_between_statements() {
        let program = parse("PROGRAM P\nBEGIN\n\nPRINT 1\n\n\nPRINT 2\nEND").unwrap();
        assert_eq!(program.body.statements.len(), 2);
        assert_eq!(program.body.statements[1],
                   Statement::Print { values: vec![Expr::Value(LiteralValue::Integer(2))] });
    }

    #[test]
    fn test_lexing_error_surfaces_through_parser() {
        let err = parse("PROGRAM P\nBEGIN\nPRINT 1 @ 2\nEND").unwrap_err();
        assert_eq!(err.to_string(), "[LEXING ERROR] Unknown TOKEN (@).");
        assert_eq!(err.code(), 0);
    }
}
