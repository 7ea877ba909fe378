use crate::{
    ast::Expr,
    error::{Error, SyntaxError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, Error>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;
/// Largest number of binary operators accepted on one line. Bounds the
/// depth of the tree, and with it the recursion of `evaluate`.
pub const MAX_OPERATORS: usize = 4096;

/// A recursive-descent parser over one line of input.
///
/// The parser owns its [`Lexer`] and holds exactly one look-ahead token. It
/// pulls the next token from the lexer only when the current one is
/// consumed.
pub struct Parser<'src> {
    lexer:            Lexer<'src>,
    current_token:    Token,
    current_position: usize,
    /// Parentheses currently open.
    pub(in crate::interpreter::parser) depth:     usize,
    /// Binary operators folded so far.
    pub(in crate::interpreter::parser) operators: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and pulls the first token from `lexer`.
    ///
    /// # Errors
    /// Returns `Error::Lex` if the first token cannot be read.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let (current_token, current_position) = lexer.next_token()?;
        Ok(Self { lexer,
                  current_token,
                  current_position,
                  depth: 0,
                  operators: 0 })
    }

    /// Parses a full line.
    ///
    /// Grammar: `line := expression END`
    ///
    /// The whole token stream must be consumed: a complete expression followed
    /// by anything other than the end of input is rejected.
    ///
    /// # Errors
    /// - `Error::Syntax` when the grammar is violated or tokens remain.
    /// - `Error::Lex` when the lexer fails while tokens are pulled.
    ///
    /// # Example
    /// ```
    /// use spi::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let tree = Parser::new(Lexer::new("1 + 2 * 3")).and_then(|mut p| p.parse())
    ///                                                .unwrap();
    /// assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
    ///
    /// assert!(Parser::new(Lexer::new("3 + 4 )")).and_then(|mut p| p.parse())
    ///                                           .is_err());
    /// ```
    pub fn parse(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        match self.current_token {
            Token::EndOfInput => {
                log::debug!("parsed {expr}");
                Ok(expr)
            },
            token => Err(SyntaxError::UnexpectedTrailingTokens { found:    token.kind(),
                                                                 position: self.current_position, }.into()),
        }
    }

    /// Consumes the look-ahead token if it has the expected kind.
    ///
    /// Returns the consumed token and its position, and pulls the next token
    /// from the lexer.
    ///
    /// # Errors
    /// - `SyntaxError::UnexpectedToken` if the look-ahead has another kind.
    /// - `Error::Lex` if pulling the next token fails.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<(Token, usize)> {
        if self.current_token.kind() == expected {
            self.advance()
        } else {
            Err(self.unexpected(vec![expected]))
        }
    }

    /// Returns the look-ahead token without consuming it.
    #[must_use]
    pub const fn current_token(&self) -> Token {
        self.current_token
    }

    /// Returns the character position of the look-ahead token.
    #[must_use]
    pub const fn current_position(&self) -> usize {
        self.current_position
    }

    /// Consumes the look-ahead token unconditionally.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<(Token, usize)> {
        let consumed = (self.current_token, self.current_position);
        let (token, position) = self.lexer.next_token()?;
        self.current_token = token;
        self.current_position = position;
        Ok(consumed)
    }

    /// Builds a syntax error describing the look-ahead token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: Vec<TokenKind>) -> Error {
        SyntaxError::UnexpectedToken { found: self.current_token.kind(),
                                       expected,
                                       position: self.current_position }.into()
    }
}
