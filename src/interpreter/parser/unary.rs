use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::LexError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{ParseResult, Parser},
    },
};

/// Token kinds that can start a primary expression.
const PRIMARY_START: [TokenKind; 11] = [TokenKind::IntLiteral,
                                        TokenKind::FloatLiteral,
                                        TokenKind::CharLiteral,
                                        TokenKind::StrLiteral,
                                        TokenKind::True,
                                        TokenKind::False,
                                        TokenKind::Ident,
                                        TokenKind::Not,
                                        TokenKind::Plus,
                                        TokenKind::Minus,
                                        TokenKind::LParen];

impl Parser<'_> {
    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := INT | FLOAT | CHAR | STRING | 'TRUE' | 'FALSE'
    ///          | IDENT ('[' expr ']')?
    ///          | 'NOT' comparison
    ///          | ('+' | '-') primary
    ///          | '(' expr ')'
    /// ```
    /// `NOT` negates a whole comparison, so `NOT a == b` reads as
    /// `NOT (a == b)`; the sign operators bind to a single primary, so `-2 ^ 2`
    /// reads as `(-2) ^ 2`.
    ///
    /// # Errors
    /// `UnexpectedToken` listing every token that can start a primary.
    pub(in crate::interpreter::parser) fn primary(&mut self) -> ParseResult<Expr> {
        if !self.check_any(&PRIMARY_START) {
            return Err(self.unexpected(&PRIMARY_START));
        }
        let token = self.advance()?;

        match token.kind {
            TokenKind::Ident => {
                let index = self.index()?.map(Box::new);
                Ok(Expr::Symbol { name: token.lexeme.to_string(),
                                  index })
            },
            TokenKind::Not => {
                let operand = self.comparison()?;
                Ok(unary(UnaryOperator::Not, operand))
            },
            TokenKind::Plus => Ok(unary(UnaryOperator::Plus, self.primary()?)),
            TokenKind::Minus => Ok(unary(UnaryOperator::Negate, self.primary()?)),
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            },
            _ => literal(token).map(Expr::Value),
        }
    }
}

fn unary(op: UnaryOperator, operand: Expr) -> Expr {
    Expr::Unary { op,
                  operand: Box::new(operand) }
}

/// Converts a literal token into its value.
///
/// The lexer has already validated the lexeme; the conversions here only fail
/// if that validation and this function disagree.
fn literal(token: Token<'_>) -> ParseResult<LiteralValue> {
    let line = token.line;
    let lexeme = token.lexeme;

    match token.kind {
        TokenKind::True => Ok(LiteralValue::Boolean(true)),
        TokenKind::False => Ok(LiteralValue::Boolean(false)),
        TokenKind::IntLiteral => lexeme.parse()
                                       .map(LiteralValue::Integer)
                                       .map_err(|_| LexError::InvalidInteger { line }.into()),
        TokenKind::FloatLiteral => lexeme.parse()
                                         .map(LiteralValue::Float)
                                         .map_err(|_| LexError::InvalidFloat { line }.into()),
        TokenKind::CharLiteral => unquote(lexeme, '\'').and_then(|body| body.chars().next())
                                                       .map(LiteralValue::Character)
                                                       .ok_or_else(|| LexError::InvalidChar { line }.into()),
        _ => unquote(lexeme, '"').map(|body| LiteralValue::String(body.to_string()))
                                 .ok_or_else(|| LexError::UnterminatedString { line }.into()),
    }
}

/// Strips one `quote` from each end of `lexeme`.
fn unquote(lexeme: &str, quote: char) -> Option<&str> {
    lexeme.strip_prefix(quote)?.strip_suffix(quote)
}
