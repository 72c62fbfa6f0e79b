use crate::{
    ast::{ConstantDecl, Declarations, VariableDecl},
    interpreter::{
        lexer::TokenKind,
        parser::{ParseResult, Parser},
        value::ValueType,
    },
};

/// Keywords accepted after the `:` of a variable declaration.
const TYPE_KEYWORDS: [TokenKind; 5] = [TokenKind::Integer,
                                       TokenKind::Float,
                                       TokenKind::Character,
                                       TokenKind::String,
                                       TokenKind::Boolean];

impl Parser<'_> {
    /// Parses the optional `CONSTANTS` section followed by the optional
    /// `VARIABLES` section.
    ///
    /// Grammar:
    /// ```text
    /// declare   := constants? variables?
    /// constants := 'CONSTANTS' NEWLINE+ (IDENT '=' expr NEWLINE+)*
    /// variables := 'VARIABLES' NEWLINE+
    ///              (IDENT (',' IDENT)* ':' TYPE ('[' expr ']')? NEWLINE+)*
    /// ```
    pub(in crate::interpreter::parser) fn declarations(&mut self) -> ParseResult<Declarations> {
        let mut declarations = Declarations::default();

        if self.check(TokenKind::Constants) {
            self.advance()?;
            self.newline(true)?;

            while !self.check_any(&[TokenKind::Variables, TokenKind::Begin]) {
                declarations.constants.push(self.constant()?);
                self.newline(true)?;
            }
        }

        if self.check(TokenKind::Variables) {
            self.advance()?;
            self.newline(true)?;

            while !self.check(TokenKind::Begin) {
                declarations.variables.extend(self.variables()?);
                self.newline(true)?;
            }
        }

        Ok(declarations)
    }

    fn constant(&mut self) -> ParseResult<ConstantDecl> {
        let name = self.expect(TokenKind::Ident)?.lexeme.to_string();
        self.expect(TokenKind::Equals)?;
        let value = self.expression()?;

        Ok(ConstantDecl { name, value })
    }

    /// One declaration line; every listed name gets its own copy of the size.
    fn variables(&mut self) -> ParseResult<Vec<VariableDecl>> {
        let mut names = vec![self.expect(TokenKind::Ident)?.lexeme.to_string()];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            names.push(self.expect(TokenKind::Ident)?.lexeme.to_string());
        }

        self.expect(TokenKind::Colon)?;
        let declared = self.type_name()?;

        let size = if self.check(TokenKind::LBracket) {
            self.advance()?;
            let size = self.expression()?;
            self.expect(TokenKind::RBracket)?;
            Some(size)
        } else {
            None
        };

        Ok(names.into_iter()
                .map(|name| VariableDecl { name,
                                           declared,
                                           size: size.clone() })
                .collect())
    }

    fn type_name(&mut self) -> ParseResult<ValueType> {
        let token = self.expect_any(&TYPE_KEYWORDS)?;

        Ok(match token.kind {
            TokenKind::Float => ValueType::Float,
            TokenKind::Character => ValueType::Character,
            TokenKind::String => ValueType::String,
            TokenKind::Boolean => ValueType::Boolean,
            _ => ValueType::Integer,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, LiteralValue, Program},
        interpreter::{
            lexer::Lexer,
            parser::{ParseResult, Parser},
            value::ValueType,
        },
    };

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::new(Lexer::new(source))?.parse()
    }

    #[test]
    fn test_constants_and_variables() {
        let program = parse("PROGRAM P\nCONSTANTS\nN = 3\n\nVARIABLES\nA, B : INTEGER\nS : \
                             STRING [N + 1]\nBEGIN\nEND")
            .unwrap();

        let constants = &program.declarations.constants;
        assert_eq!(constants.len(), 1);
        assert_eq!(constants[0].name, "N");
        assert_eq!(constants[0].value, Expr::Value(LiteralValue::Integer(3)));

        let variables = &program.declarations.variables;
        assert_eq!(variables.len(), 3);
        assert_eq!(variables[0].name, "A");
        assert_eq!(variables[1].name, "B");
        assert_eq!(variables[1].declared, ValueType::Integer);
        assert!(variables[1].size.is_none());
        assert_eq!(variables[2].declared, ValueType::String);
        assert!(variables[2].size.is_some());
    }

    #[test]
    fn test_shared_size_is_copied() {
        let program = parse("PROGRAM P\nVARIABLES\nX, Y : FLOAT [2]\nBEGIN\nEND").unwrap();
        let variables = &program.declarations.variables;
        assert_eq!(variables[0].size, variables[1].size);
        assert_eq!(variables[0].declared, ValueType::Float);
    }

    #[test]
    fn test_unknown_type_keyword() {
        let err = parse("PROGRAM P\nVARIABLES\nX : NUMBER\nBEGIN\nEND").unwrap_err();
        assert_eq!(err.to_string(),
                   "[PARSING ERROR] Expected INTEGER, FLOAT, CHARACTER, STRING, BOOLEAN, got IDENT.");
    }

    #[test]
    fn test_constants_after_variables_rejected() {
        let err = parse("PROGRAM P\nVARIABLES\nCONSTANTS\nBEGIN\nEND").unwrap_err();
        assert_eq!(err.code(), 100);
    }
}
