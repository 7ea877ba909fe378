use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_OPERATORS, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(&self.current_token())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (_, position) = self.advance()?;
            self.count_operator(position)?;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(left, op, right, position);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*` and `/`.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/") primary)*`
    ///
    /// # Returns
    /// A binary expression tree combining primary-level nodes.
    pub fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;
        while let Some(op) = token_to_binary_operator(&self.current_token())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (_, position) = self.advance()?;
            self.count_operator(position)?;
            let right = self.parse_primary()?;
            left = Expr::binary(left, op, right, position);
        }
        Ok(left)
    }

    fn count_operator(&mut self, position: usize) -> ParseResult<()> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(SyntaxError::ExpressionTooLarge { limit: MAX_OPERATORS,
                                                         position }.into());
        }
        Ok(())
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not operators.
///
/// # Example
/// ```
/// use spi::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Multiply => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
