use crate::{
    ast::{BinaryOperator, Span},
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{EvalResult, Evaluator},
        },
        value::{
            core::Value,
            promotion::{Operands, promote},
        },
    },
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value, inverting it for `NotEqual`.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Numbers are compared after promotion, so `1 == 1.0` holds. Strings
    /// and identifiers compare by content, and only for `==` and `!=`.
    /// The result is `Integer(1)` or `Integer(0)`.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{BinaryOperator, Span},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(4, 5);
    /// let a = Value::from("a");
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Equal, &a, &a, span);
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Less, &a, &a, span);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           span: Span)
                           -> EvalResult<Value> {
        let result = match promote(left, right) {
            Some(Operands::Integers(a, b)) => compare(op, &a, &b),
            Some(Operands::Floats(a, b)) => compare(op, &a, &b),
            Some(Operands::Strings(a, b) | Operands::Identifiers(a, b))
                if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
            {
                equality_op_result(op, a == b)
            },
            _ => return Err(type_mismatch(op, left, right, span)),
        };

        Ok(Value::from(result))
    }
}

fn compare<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> bool {
    match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => equality_op_result(op, a == b),
        BinaryOperator::Greater => a > b,
        BinaryOperator::Less => a < b,
        BinaryOperator::GreaterEqual => a >= b,
        BinaryOperator::LessEqual => a <= b,
        _ => unreachable!("compare used with non comparison operator"),
    }
}
