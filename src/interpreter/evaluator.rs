/// Core evaluation logic.
///
/// Contains the evaluator, the dispatch over node kinds, variable resolution
/// and per-argument evaluation of whole commands.
pub mod core;

/// Unary operator evaluation.
///
/// Implements `+`, `-`, `!` and `~` according to the runtime kind of the
/// operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Routes each operator family to its handler after both operands have been
/// evaluated.
pub mod binary;
