/// Operator routing and the shared type mismatch error.
pub mod core;
/// `+`, `-`, `*`, `/` and `%` on integers and floats.
pub mod arithmetic;
/// Equality and relational comparisons.
pub mod comparison;
/// Logical `&&` and `||`.
pub mod logic;
/// Bitwise operators and shifts on integers.
pub mod bitwise;
