/// Represents a runtime value in the interpreter.
///
/// Literals evaluate to integers, and `+`, `-`, `*` keep integers integral.
/// Division always produces a real, and any operation with a real operand
/// produces a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond 2^53 round to the nearest representable real.
    ///
    /// # Example
    /// ```
    /// use spi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_real(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => *n as f64,
        }
    }

    /// Returns `true` when the value is numerically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns `true` for `Value::Real`.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Returns `true` for `Value::Integer`.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

/// Integers print as written. Reals print in their shortest round-trip
/// form, with a `.0` suffix when they are whole.
///
/// # Example
/// ```
/// use spi::interpreter::value::core::Value;
///
/// assert_eq!(Value::Integer(7).to_string(), "7");
/// assert_eq!(Value::Real(3.5).to_string(), "3.5");
/// assert_eq!(Value::Real(3.0).to_string(), "3.0");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.fract() == 0.0 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
