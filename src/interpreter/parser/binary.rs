use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{ParseResult, Parser},
    },
};

/// Converts a token kind to its corresponding binary operator.
///
/// # Parameters
/// - `kind`: The token kind to convert.
///
/// # Returns
/// The matching operator, or `None` if the token is not a binary operator.
/// `=` is not an operator; it only appears in `LET` and `CONSTANTS`.
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Ampersand => BinaryOperator::Concat,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::Caret => BinaryOperator::Pow,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// Precedence, loosest first:
    /// ```text
    /// expr           := comparison (('AND' | 'OR') comparison)*
    /// comparison     := additive (COMPARE additive)?
    /// additive       := multiplicative (('+' | '-' | '&') multiplicative)*
    /// multiplicative := exponent (('*' | '/' | '%') exponent)*
    /// exponent       := primary ('^' primary)*
    /// ```
    /// `AND` and `OR` share one level and associate to the left. `^` is
    /// right-associative. A comparison applies at most once per level, so
    /// `a < b < c` stops after `a < b`.
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.left_assoc(Self::comparison, &[BinaryOperator::And, BinaryOperator::Or])
    }

    /// Parses one optional comparison between two additive expressions.
    pub(in crate::interpreter::parser) fn comparison(&mut self) -> ParseResult<Expr> {
        let left = self.additive()?;

        if let Some(op) = self.operator_in(&[BinaryOperator::Equal,
                                             BinaryOperator::NotEqual,
                                             BinaryOperator::Greater,
                                             BinaryOperator::GreaterEqual,
                                             BinaryOperator::Less,
                                             BinaryOperator::LessEqual])
        {
            self.advance()?;
            let right = self.additive()?;
            return Ok(binary(left, op, right));
        }

        Ok(left)
    }

    fn additive(&mut self) -> ParseResult<Expr> {
        self.left_assoc(Self::multiplicative,
                        &[BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Concat])
    }

    fn multiplicative(&mut self) -> ParseResult<Expr> {
        self.left_assoc(Self::exponent,
                        &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
    }

    /// Parses a chain of `^`, folding from the right: `2 ^ 3 ^ 2` is
    /// `2 ^ (3 ^ 2)`.
    fn exponent(&mut self) -> ParseResult<Expr> {
        let first = self.primary()?;

        let mut rest = Vec::new();
        while self.check(TokenKind::Caret) {
            self.advance()?;
            rest.push(self.primary()?);
        }

        let Some(mut node) = rest.pop() else {
            return Ok(first);
        };
        while let Some(base) = rest.pop() {
            node = binary(base, BinaryOperator::Pow, node);
        }

        Ok(binary(first, BinaryOperator::Pow, node))
    }

    /// Parses `operand (op operand)*` for the given operators, building a
    /// left-leaning tree.
    fn left_assoc(&mut self,
                  operand: fn(&mut Self) -> ParseResult<Expr>,
                  operators: &[BinaryOperator])
                  -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self.operator_in(operators) {
            self.advance()?;
            let right = operand(self)?;
            left = binary(left, op, right);
        }

        Ok(left)
    }

    /// The operator spelled by the current token, if it is one of `operators`.
    fn operator_in(&self, operators: &[BinaryOperator]) -> Option<BinaryOperator> {
        token_to_binary_operator(self.current().kind).filter(|op| operators.contains(op))
    }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary { left: Box::new(left),
                   op,
                   right: Box::new(right) }
}
