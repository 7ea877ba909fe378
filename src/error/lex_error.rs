#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The 0-based character position in the line.
        position:  usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    Overflow {
        /// The digits of the literal as written.
        literal:  String,
        /// The 0-based character position in the line.
        position: usize,
    },
}

impl LexError {
    /// Returns the position at which tokenizing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::Overflow { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Lex error at position {position}: Invalid character '{}'.",
                                                                     character.escape_debug()),
            Self::Overflow { literal, position } => write!(f,
                                                           "Overflow at position {position}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
