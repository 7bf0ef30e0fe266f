use crate::{interpreter::value::core::Value, util::num::i64_to_f64};

/// Two operands brought to a common representation.
///
/// This is the single place where mixed kinds are reconciled: an integer
/// next to a float becomes a float, never the other way around. Text only
/// pairs with text of the same kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<'a> {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a float; the other was promoted if needed.
    Floats(f64, f64),
    /// Both operands were strings.
    Strings(&'a str, &'a str),
    /// Both operands were identifiers.
    Identifiers(&'a str, &'a str),
}

/// Pairs two values for a binary operator.
///
/// Returns `None` when the kinds cannot be reconciled, which the caller
/// turns into a type mismatch.
///
/// # Example
/// ```
/// use asmrepl::interpreter::value::{
///     core::Value,
///     promotion::{Operands, promote},
/// };
///
/// let left = Value::Integer(1);
/// let right = Value::Float(2.5);
/// assert_eq!(promote(&left, &right), Some(Operands::Floats(1.0, 2.5)));
///
/// let text = Value::String("a".to_string());
/// assert_eq!(promote(&text, &left), None);
/// ```
#[must_use]
pub fn promote<'a>(left: &'a Value, right: &'a Value) -> Option<Operands<'a>> {
    use Value::{Float, Identifier, Integer, String};

    match (left, right) {
        (Integer(a), Integer(b)) => Some(Operands::Integers(*a, *b)),
        (Float(a), Float(b)) => Some(Operands::Floats(*a, *b)),
        (Integer(a), Float(b)) => Some(Operands::Floats(i64_to_f64(*a), *b)),
        (Float(a), Integer(b)) => Some(Operands::Floats(*a, i64_to_f64(*b))),
        (String(a), String(b)) => Some(Operands::Strings(a, b)),
        (Identifier(a), Identifier(b)) => Some(Operands::Identifiers(a, b)),
        _ => None,
    }
}
