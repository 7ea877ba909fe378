/// Core evaluation logic.
///
/// Contains the tree walk and the evaluator's result type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic for `+`, `-`, `*` and `/`, including integer
/// overflow checks, promotion to real, and the division-by-zero check.
pub mod binary;
