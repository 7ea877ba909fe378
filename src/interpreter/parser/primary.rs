use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := INTEGER
    ///              | "(" expression ")"
    /// ```
    /// # Errors
    /// Returns `SyntaxError::UnexpectedToken` expecting an integer or `(` when
    /// the look-ahead starts neither, and `SyntaxError::NestingTooDeep` when
    /// parentheses nest past [`MAX_NESTING_DEPTH`].
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current_token() {
            Token::Integer(value) => {
                let (_, position) = self.eat(TokenKind::Integer)?;
                Ok(Expr::Literal { value, position })
            },
            Token::LeftParen => self.parse_grouping(),
            _ => Err(self.unexpected(vec![TokenKind::Integer, TokenKind::LeftParen])),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar `grouping := "(" expression ")"`
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node).
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let (_, position) = self.eat(TokenKind::LeftParen)?;

        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                     position }.into());
        }

        let expr = self.parse_expression()?;
        self.eat(TokenKind::RightParen)?;
        self.depth -= 1;

        Ok(expr)
    }
}
