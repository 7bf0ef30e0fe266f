use crate::{
    ast::{Span, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity on integers and floats.
    /// - `Negate`: arithmetic negation on integers (wrapping) and floats.
    /// - `BitNot`: bitwise complement on integers.
    /// - `Not`: 1 if the operand is falsy, 0 otherwise; defined for every
    ///   kind.
    ///
    /// Other combinations are type mismatches reported at `span`.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{Span, UnaryOperator},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(0, 1);
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), span).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::BitNot, &Value::Integer(0), span).unwrap();
    /// assert_eq!(v, Value::Integer(-1));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::String(String::new()), span);
    /// assert_eq!(v.unwrap(), Value::Integer(1));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Negate, &Value::from("a"), span).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, span: Span) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Not, _) => Ok(Value::from(!value.is_truthy())),
            (UnaryOperator::Plus, Value::Integer(_) | Value::Float(_)) => Ok(value.clone()),
            (UnaryOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
            (UnaryOperator::Negate, Value::Float(r)) => Ok(Value::Float(-r)),
            (UnaryOperator::BitNot, Value::Integer(n)) => Ok(Value::Integer(!n)),
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply `{op}` to {}",
                                                                  value.kind()),
                                                 span })
            },
        }
    }
}
