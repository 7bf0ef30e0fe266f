use crate::{
    ast::{BinaryOperator, Span},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operator to the handler for its family. Each handler
    /// pairs the operands through
    /// [`promote`](crate::interpreter::value::promotion::promote), so the
    /// rules for mixed kinds live in one place:
    /// - arithmetic: integers stay integers, any float makes the result a
    ///   float;
    /// - comparisons: numbers compare after promotion; strings and
    ///   identifiers only support `==` and `!=`;
    /// - logic: numbers only, by truthiness;
    /// - bitwise and shifts: integers only.
    ///
    /// Comparison and logical results are the integers 1 and 0.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `span`: Location of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{BinaryOperator, Span},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(2, 2);
    /// let result = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                     &Value::Integer(1),
    ///                                     &Value::Float(2.5),
    ///                                     span);
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       span: Span)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Shl, Shr, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, span),
            Equal | NotEqual | Greater | Less | GreaterEqual | LessEqual => {
                Self::eval_comparison(op, left, right, span)
            },
            And | Or => Self::eval_logic(op, left, right, span),
            BitAnd | BitOr | BitXor | Shl | Shr => Self::eval_bitwise(op, left, right, span),
        }
    }
}

/// Builds the error for an operator applied to kinds it does not accept.
pub(in crate::interpreter::evaluator) fn type_mismatch(op: BinaryOperator,
                                                       left: &Value,
                                                       right: &Value,
                                                       span: Span)
                                                       -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply `{op}` to {} and {}",
                                                  left.kind(),
                                                  right.kind()),
                                 span }
}
