use crate::{
    ast::{Case, Compound, Expr, LiteralValue, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{ParseResult, Parser},
    },
};

/// Keywords that can start a statement.
const STATEMENT_KEYWORDS: [TokenKind; 8] = [TokenKind::Let,
                                            TokenKind::Print,
                                            TokenKind::If,
                                            TokenKind::While,
                                            TokenKind::For,
                                            TokenKind::Repeat,
                                            TokenKind::Switch,
                                            TokenKind::Resize];

impl Parser<'_> {
    /// Parses one statement, dispatching on its leading keyword.
    ///
    /// # Errors
    /// `UnexpectedToken` listing every statement keyword if the current token
    /// cannot start a statement.
    pub(in crate::interpreter::parser) fn statement(&mut self) -> ParseResult<Statement> {
        let kind = self.current().kind;
        if !STATEMENT_KEYWORDS.contains(&kind) {
            return Err(self.unexpected(&STATEMENT_KEYWORDS));
        }
        self.advance()?;

        match kind {
            TokenKind::Let => self.assign(),
            TokenKind::Print => self.print(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Repeat => self.repeat_statement(),
            TokenKind::Switch => self.switch_statement(),
            _ => self.resize(),
        }
    }

    /// `LET IDENT ('[' expr ']')? '=' expr`
    fn assign(&mut self) -> ParseResult<Statement> {
        let name = self.expect(TokenKind::Ident)?.lexeme.to_string();
        let index = self.index()?;
        self.expect(TokenKind::Equals)?;
        let value = self.expression()?;

        Ok(Statement::Assign { name, index, value })
    }

    /// `PRINT expr (',' expr)*`
    fn print(&mut self) -> ParseResult<Statement> {
        let mut values = vec![self.expression()?];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            values.push(self.expression()?);
        }

        Ok(Statement::Print { values })
    }

    /// `IF expr THEN NEWLINE+ compound ('ELSE' NEWLINE+ compound)? 'ENDIF'`
    fn if_statement(&mut self) -> ParseResult<Statement> {
        let condition = self.expression()?;
        self.expect(TokenKind::Then)?;
        self.newline(true)?;

        let then_branch = self.compound(&[TokenKind::Else, TokenKind::EndIf])?;

        let else_branch = if self.check(TokenKind::Else) {
            self.advance()?;
            self.newline(true)?;
            Some(self.compound(&[TokenKind::EndIf])?)
        } else {
            None
        };

        self.expect(TokenKind::EndIf)?;

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch })
    }

    /// `WHILE expr DO NEWLINE+ compound 'ENDWHILE'`
    fn while_statement(&mut self) -> ParseResult<Statement> {
        let condition = self.expression()?;
        self.expect(TokenKind::Do)?;
        let body = self.block(TokenKind::EndWhile)?;

        Ok(Statement::While { condition, body })
    }

    /// `FOR IDENT 'FROM' expr 'TO' expr ('STEP' expr)? NEWLINE+ compound
    /// 'ENDFOR'`
    fn for_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect(TokenKind::Ident)?.lexeme.to_string();
        self.expect(TokenKind::From)?;
        let from = self.expression()?;
        self.expect(TokenKind::To)?;
        let to = self.expression()?;

        let step = if self.check(TokenKind::Step) {
            self.advance()?;
            self.expression()?
        } else {
            Expr::Value(LiteralValue::Integer(1))
        };

        let body = self.block(TokenKind::EndFor)?;

        Ok(Statement::For { name,
                            from,
                            to,
                            step,
                            body })
    }

    /// `REPEAT 'UNTIL' expr NEWLINE+ compound 'ENDREPEAT'`
    fn repeat_statement(&mut self) -> ParseResult<Statement> {
        self.expect(TokenKind::Until)?;
        let condition = self.expression()?;
        let body = self.block(TokenKind::EndRepeat)?;

        Ok(Statement::Repeat { condition, body })
    }

    /// ```text
    /// SWITCH expr NEWLINE+
    ///     ('CASE' expr ':' NEWLINE+ compound)*
    ///     ('DEFAULT' ':' NEWLINE+ compound)?
    /// 'ENDSWITCH'
    /// ```
    fn switch_statement(&mut self) -> ParseResult<Statement> {
        let scrutinee = self.expression()?;
        self.newline(true)?;

        let arm_end = [TokenKind::Case, TokenKind::Default, TokenKind::EndSwitch];

        let mut cases = Vec::new();
        while self.check(TokenKind::Case) {
            self.advance()?;
            let value = self.expression()?;
            self.expect(TokenKind::Colon)?;
            self.newline(true)?;
            let body = self.compound(&arm_end)?;
            cases.push(Case { value, body });
        }

        let default = if self.check(TokenKind::Default) {
            self.advance()?;
            self.expect(TokenKind::Colon)?;
            self.newline(true)?;
            Some(self.compound(&[TokenKind::EndSwitch])?)
        } else {
            None
        };

        self.expect(TokenKind::EndSwitch)?;

        Ok(Statement::Switch { scrutinee,
                               cases,
                               default })
    }

    /// `RESIZE IDENT 'TO' expr`
    fn resize(&mut self) -> ParseResult<Statement> {
        let name = self.expect(TokenKind::Ident)?.lexeme.to_string();
        self.expect(TokenKind::To)?;
        let size = self.expression()?;

        Ok(Statement::Resize { name, size })
    }

    /// A loop body: the required line break, the statements, and the closing
    /// keyword.
    fn block(&mut self, terminator: TokenKind) -> ParseResult<Compound> {
        self.newline(true)?;
        let body = self.compound(&[terminator])?;
        self.expect(terminator)?;
        Ok(body)
    }

    /// An optional `'[' expr ']'` suffix.
    pub(in crate::interpreter::parser) fn index(&mut self) -> ParseResult<Option<Expr>> {
        if !self.check(TokenKind::LBracket) {
            return Ok(None);
        }
        self.advance()?;
        let index = self.expression()?;
        self.expect(TokenKind::RBracket)?;
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue, Statement},
        interpreter::{
            lexer::Lexer,
            parser::{ParseResult, Parser},
        },
    };

    fn body(statements: &str) -> ParseResult<Vec<Statement>> {
        let source = format!("PROGRAM T\nBEGIN\n{statements}\nEND\n");
        Ok(Parser::new(Lexer::new(&source))?.parse()?.body.statements)
    }

    fn int(value: i64) -> Expr {
        Expr::Value(LiteralValue::Integer(value))
    }

    #[test]
    fn test_assign_with_index() {
        let statements = body("LET A[2] = 7").unwrap();
        assert_eq!(statements,
                   vec![Statement::Assign { name:  "A".to_string(),
                                            index: Some(int(2)),
                                            value: int(7), }]);
    }

    #[test]
    fn test_print_list() {
        let statements = body("PRINT 1, \"two\", '3'").unwrap();
        assert_eq!(statements,
                   vec![Statement::Print { values: vec![int(1),
                                                        Expr::Value(LiteralValue::String("two".to_string())),
                                                        Expr::Value(LiteralValue::Character('3'))] }]);
    }

    #[test]
    fn test_if_without_else() {
        let statements = body("IF TRUE THEN\nPRINT 1\nENDIF").unwrap();
        match &statements[0] {
            Statement::If { then_branch,
                            else_branch,
                            .. } => {
                assert_eq!(then_branch.statements.len(), 1);
                assert!(else_branch.is_none());
            },
            other => panic!("expected IF, got {other:?}"),
        }
    }

    #[test]
    fn test_if_with_empty_else() {
        let statements = body("IF TRUE THEN\nELSE\nENDIF").unwrap();
        assert!(matches!(&statements[0],
                         Statement::If { else_branch: Some(branch), .. } if branch.statements.is_empty()));
    }

    #[test]
    fn test_for_default_step() {
        let statements = body("FOR I FROM 1 TO 10\nPRINT I\nENDFOR").unwrap();
        match &statements[0] {
            Statement::For { name, step, .. } => {
                assert_eq!(name, "I");
                assert_eq!(*step, int(1));
            },
            other => panic!("expected FOR, got {other:?}"),
        }
    }

    #[test]
    fn test_for_explicit_step() {
        let statements = body("FOR I FROM 10 TO 1 STEP 0 - 2\nENDFOR").unwrap();
        match &statements[0] {
            Statement::For { step, .. } => {
                assert!(matches!(step, Expr::Binary { op: BinaryOperator::Sub, .. }));
            },
            other => panic!("expected FOR, got {other:?}"),
        }
    }

    #[test]
    fn test_repeat_requires_until() {
        let err = body("REPEAT X > 1\nENDREPEAT").unwrap_err();
        assert_eq!(err.to_string(), "[PARSING ERROR] Expected UNTIL, got IDENT.");
    }

    #[test]
    fn test_switch_cases_and_default() {
        let statements =
            body("SWITCH X\nCASE 1:\nPRINT 1\nCASE 2:\nDEFAULT:\nPRINT 0\nENDSWITCH").unwrap();
        match &statements[0] {
            Statement::Switch { cases, default, .. } => {
                assert_eq!(cases.len(), 2);
                assert!(cases[1].body.statements.is_empty());
                assert_eq!(default.as_ref().map(|d| d.statements.len()), Some(1));
            },
            other => panic!("expected SWITCH, got {other:?}"),
        }
    }

    #[test]
    fn test_resize() {
        let statements = body("RESIZE A TO 5").unwrap();
        assert_eq!(statements,
                   vec![Statement::Resize { name: "A".to_string(),
                                            size: int(5), }]);
    }

    #[test]
    fn test_unknown_statement_lists_keywords() {
        let err = body("X = 1").unwrap_err();
        assert_eq!(err.to_string(),
                   "[PARSING ERROR] Expected LET, PRINT, IF, WHILE, FOR, REPEAT, SWITCH, RESIZE, \
                    got IDENT.");
    }

    #[test]
    fn test_unclosed_while() {
        let err = body("WHILE TRUE DO\nPRINT 1").unwrap_err();
        assert_eq!(err.to_string(),
                   "[PARSING ERROR] Expected LET, PRINT, IF, WHILE, FOR, REPEAT, SWITCH, RESIZE, \
                    got END.");
    }
}
