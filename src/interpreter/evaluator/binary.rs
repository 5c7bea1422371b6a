/// Operator dispatch.
pub mod core;
/// Element-wise application of operators across arrays.
pub mod array;
/// Scalar arithmetic with real-to-complex promotion.
pub mod scalar;
/// Exponentiation.
pub mod power;
/// Relational and equality operators.
pub mod comparison;
/// `and` / `or`.
pub mod logic;
/// Dot and matrix products for `*` between arrays.
pub mod matmul;
