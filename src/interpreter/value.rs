/// Runtime value representation.
///
/// Defines the `Value` enum, its kinds, truthiness and display rules.
pub mod core;
/// Operand promotion for binary operators.
///
/// Pairs two values into one common representation (integers, floats,
/// strings or identifiers) so that each operator is implemented once per
/// representation instead of once per pair of kinds.
pub mod promotion;
