use crate::{
    ast::{BinaryOperator, Span},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
    util::num::shift_amount,
};

impl Evaluator<'_> {
    /// Evaluates `&`, `|`, `^`, `<<` or `>>` on two integers.
    ///
    /// `>>` is an arithmetic shift and keeps the sign. Shift counts outside
    /// `0..64` are arithmetic faults.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{BinaryOperator, Span},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(2, 3);
    /// let result = Evaluator::eval_bitwise(BinaryOperator::Shr,
    ///                                      &Value::Integer(-16),
    ///                                      &Value::Integer(2),
    ///                                      span);
    ///
    /// assert_eq!(result.unwrap(), Value::Integer(-4));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        span: Span)
                        -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(type_mismatch(op, left, right, span));
        };
        let (a, b) = (*a, *b);

        let result = match op {
            BinaryOperator::BitAnd => a & b,
            BinaryOperator::BitOr => a | b,
            BinaryOperator::BitXor => a ^ b,
            BinaryOperator::Shl | BinaryOperator::Shr => {
                let amount =
                    shift_amount(b).ok_or(RuntimeError::ShiftOutOfRange { amount: b, span })?;
                if op == BinaryOperator::Shl { a << amount } else { a >> amount }
            },
            _ => unreachable!(),
        };

        Ok(Value::Integer(result))
    }
}
