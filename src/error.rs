/// Tokenizing errors.
///
/// Raised by the lexer when a character starts no token or when an integer
/// literal does not fit the numeric type.
pub mod lex_error;
/// Parsing errors.
///
/// Raised by the parser when the token stream does not match the grammar,
/// including input left over after a complete expression.
pub mod syntax_error;
/// Runtime errors.
///
/// Raised by the evaluator, for division by zero and arithmetic overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The failure kinds a line can end with.
///
/// Every [`Error`] maps to exactly one kind, which is what the driver reports
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character during tokenization.
    Lex,
    /// The token stream does not match the grammar.
    Syntax,
    /// `/` with a zero right operand.
    DivisionByZero,
    /// A literal or a result that does not fit the numeric types.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Lex => "LexError",
            Self::Syntax => "SyntaxError",
            Self::DivisionByZero => "DivisionByZero",
            Self::Overflow => "Overflow",
        };
        write!(f, "{kind}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error that can end the processing of a single line.
pub enum Error {
    /// The lexer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// The evaluator could not compute a result.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use spi::error::{Error, ErrorKind, LexError, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { position: 2 });
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = Error::from(LexError::Overflow { literal:  "99999999999999999999".to_string(),
    ///                                            position: 0, });
    /// assert_eq!(err.kind(), ErrorKind::Overflow);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::Lex,
            Self::Lex(LexError::Overflow { .. }) | Self::Runtime(RuntimeError::Overflow { .. }) => {
                ErrorKind::Overflow
            },
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
        }
    }

    /// Returns the 0-based character position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
