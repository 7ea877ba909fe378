/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is closed over two variants: an integer literal, and a binary
/// operation that exclusively owns its two operands. The parser builds nodes
/// bottom-up and never mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Literal {
        /// The constant value.
        value:    i64,
        /// Character position of the literal in the line.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character position of the operator in the line.
        position: usize,
    },
}

impl Expr {
    /// Builds a binary operation node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Gets the character position from `self`.
    /// ## Example
    /// ```
    /// use spi::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    7,
    ///                            position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Renders the tree in fully parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
///
/// # Example
/// ```
/// use spi::ast::{BinaryOperator, Expr};
///
/// let one = Expr::Literal { value:    1,
///                           position: 0, };
/// let two = Expr::Literal { value:    2,
///                           position: 4, };
///
/// assert_eq!(Expr::binary(one, BinaryOperator::Sub, two, 2).to_string(), "(- 1 2)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
