use crate::{
    ast::{BinaryOperator, Span},
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a logical operation between two numbers.
    ///
    /// Both operands have already been evaluated by the time this runs;
    /// `&&` and `||` never skip their right-hand side. Operands are read by
    /// truthiness and the result is 1 or 0.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{BinaryOperator, Span},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(2, 3);
    /// let result = Evaluator::eval_logic(BinaryOperator::Or,
    ///                                    &Value::Integer(0),
    ///                                    &Value::Float(0.5),
    ///                                    span);
    ///
    /// assert_eq!(result.unwrap(), Value::Integer(1));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      span: Span)
                      -> EvalResult<Value> {
        if !left.is_numeric() || !right.is_numeric() {
            return Err(type_mismatch(op, left, right, span));
        }

        let (l, r) = (left.is_truthy(), right.is_truthy());
        Ok(Value::from(match op {
                           BinaryOperator::And => l && r,
                           BinaryOperator::Or => l || r,
                           _ => unreachable!(),
                       }))
    }
}
