use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Returned once the input is exhausted, and on every call after that.
    EndOfInput,
}

/// The tag of a [`Token`] without its payload.
///
/// Syntax errors use it to name what was found and what was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// The end of the line.
    EndOfInput,
}

impl Token {
    /// Returns the tag of the token.
    ///
    /// # Example
    /// ```
    /// use spi::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(3).kind(), TokenKind::Integer);
    /// assert_eq!(Token::LeftParen.kind(), TokenKind::LeftParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "Integer({n})"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{kind}")
    }
}

/// Why the generated lexer rejected a slice of input.
///
/// The [`Lexer`] turns this into a [`LexError`] carrying the slice and its
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    InvalidCharacter,
    /// A digit run does not fit into an `i64`.
    Overflow,
}

/// Parses an integer literal from the current token slice.
///
/// The slice is a run of ASCII digits, so parsing can only fail because the
/// value is out of range.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::Overflow)
}

/// A pull-based tokenizer over a single line of input.
///
/// Each call to [`Lexer::next_token`] skips whitespace and returns the next
/// token together with its 0-based character position. Once the input is
/// exhausted, `EndOfInput` is returned forever.
pub struct Lexer<'src> {
    inner:      logos::Lexer<'src, Token>,
    source:     &'src str,
    /// Byte offset up to which `chars_seen` has been counted.
    byte_mark:  usize,
    /// Number of characters in `source[..byte_mark]`.
    chars_seen: usize,
    exhausted:  bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer(source),
               source,
               byte_mark: 0,
               chars_seen: 0,
               exhausted: false }
    }

    /// Returns the next token and its character position.
    ///
    /// # Errors
    /// - `LexError::InvalidCharacter` for a character that starts no token.
    /// - `LexError::Overflow` for an integer literal larger than `i64::MAX`.
    ///
    /// # Example
    /// ```
    /// use spi::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 +");
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(12), 0));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Plus, 3));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 4));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::EndOfInput, 4));
    /// ```
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        if self.exhausted {
            return Ok((Token::EndOfInput, self.char_position(self.source.len())));
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let position = self.char_position(self.inner.span().start);
                log::trace!("token {token} at {position}");
                Ok((token, position))
            },
            Some(Err(kind)) => {
                let position = self.char_position(self.inner.span().start);
                let slice = self.inner.slice();
                Err(match kind {
                    LexErrorKind::Overflow => LexError::Overflow { literal: slice.to_string(),
                                                                   position },
                    LexErrorKind::InvalidCharacter => {
                        LexError::InvalidCharacter { character: slice.chars()
                                                                     .next()
                                                                     .unwrap_or('\u{FFFD}'),
                                                     position }
                    },
                })
            },
            None => {
                self.exhausted = true;
                Ok((Token::EndOfInput, self.char_position(self.source.len())))
            },
        }
    }

    /// Converts a byte offset into a character position.
    ///
    /// Offsets only ever move forward, so the count is carried over from the
    /// previous call.
    fn char_position(&mut self, byte_offset: usize) -> usize {
        if byte_offset > self.byte_mark {
            self.chars_seen += self.source[self.byte_mark..byte_offset].chars().count();
            self.byte_mark = byte_offset;
        }
        self.chars_seen
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<(Token, usize)>;

    /// Yields tokens up to, but not including, `EndOfInput`.
    ///
    /// Iteration stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((Token::EndOfInput, _)) => None,
            Ok(located) => Some(Ok(located)),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            },
        }
    }
}

/// Tokenizes a whole line eagerly.
///
/// The result does not include the trailing `EndOfInput`.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use spi::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1+2)").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds,
///            vec![Token::LeftParen,
///                 Token::Integer(1),
///                 Token::Plus,
///                 Token::Integer(2),
///                 Token::RightParen]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    Lexer::new(source).collect()
}
