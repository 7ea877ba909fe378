#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// The position of the `/` operator.
        position: usize,
    },
    /// Arithmetic left the representable range.
    Overflow {
        /// The position of the operator whose result overflowed.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the position of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => write!(f, "Division by zero at position {position}."),
            Self::Overflow { position } => write!(f,
                                                  "Overflow at position {position}: Result is too large to represent."),
        }
    }
}

impl std::error::Error for RuntimeError {}
