use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum SyntaxError {
    /// The look-ahead token does not fit the grammar at this point.
    UnexpectedToken {
        /// The kind of token actually found.
        found:    TokenKind,
        /// The kinds of token that would have been accepted.
        expected: Vec<TokenKind>,
        /// The 0-based character position of the found token.
        position: usize,
    },
    /// A complete expression was parsed but input remains.
    UnexpectedTrailingTokens {
        /// The first token after the expression.
        found:    TokenKind,
        /// The 0-based character position of that token.
        position: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// The position of the parenthesis that crossed the limit.
        position: usize,
    },
    /// The line holds more binary operators than the evaluator can nest.
    ///
    /// Not a grammar violation: `+`, `-`, `*` and `/` chains fold into a
    /// left-deep tree, and evaluating or dropping that tree recurses once per
    /// operator.
    ExpressionTooLarge {
        /// The maximum operator count.
        limit:    usize,
        /// The position of the operator that crossed the limit.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the position at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::ExpressionTooLarge { position, .. } => *position,
        }
    }
}

/// Joins token kinds the way they read in a sentence: `a`, `a or b`,
/// `a, b or c`.
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(", ");
            format!("{init} or {last}")
        },
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => write!(f,
                                                          "Syntax error at position {position}: Expected {}, found {found}.",
                                                          describe_expected(expected)),
            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Syntax error at position {position}: Extra tokens after expression, found {found}."),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Syntax error at position {position}: Parentheses nest deeper than {limit} levels."),
            Self::ExpressionTooLarge { limit, position } => write!(f,
                                                                   "Expression too large at position {position}: A line may hold at most {limit} operators."),
        }
    }
}

impl std::error::Error for SyntaxError {}
