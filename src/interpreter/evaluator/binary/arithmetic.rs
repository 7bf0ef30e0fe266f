use crate::{
    ast::{BinaryOperator, Span},
    error::RuntimeError,
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

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*`, `/` or `%`.
    ///
    /// Integer arithmetic wraps around on overflow, like the registers it
    /// usually describes. A float on either side turns the operation into
    /// float arithmetic. Division and modulo by zero fail for both integers
    /// and floats. Text operands are type mismatches.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     ast::{BinaryOperator, Span},
    ///     error::RuntimeErrorKind,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let span = Span::new(2, 2);
    ///
    /// let x = Evaluator::eval_arithmetic(BinaryOperator::Mod,
    ///                                    &Value::Integer(7),
    ///                                    &Value::Integer(3),
    ///                                    span);
    /// assert_eq!(x.unwrap(), Value::Integer(1));
    ///
    /// let err = Evaluator::eval_arithmetic(BinaryOperator::Div,
    ///                                      &Value::Float(1.0),
    ///                                      &Value::Integer(0),
    ///                                      span).unwrap_err();
    /// assert_eq!(err.kind(), RuntimeErrorKind::ArithmeticFault);
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           span: Span)
                           -> EvalResult<Value> {
        match promote(left, right) {
            Some(Operands::Integers(a, b)) => integer_arithmetic(op, a, b, span).map(Value::Integer),
            Some(Operands::Floats(a, b)) => float_arithmetic(op, a, b, span).map(Value::Float),
            _ => Err(type_mismatch(op, left, right, span)),
        }
    }
}

fn integer_arithmetic(op: BinaryOperator, a: i64, b: i64, span: Span) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    match op {
        Add => Ok(a.wrapping_add(b)),
        Sub => Ok(a.wrapping_sub(b)),
        Mul => Ok(a.wrapping_mul(b)),
        Div | Mod if b == 0 => Err(RuntimeError::DivisionByZero { span }),
        Div => Ok(a.wrapping_div(b)),
        Mod => Ok(a.wrapping_rem(b)),
        _ => unreachable!("integer_arithmetic used with non arithmetic operator"),
    }
}

fn float_arithmetic(op: BinaryOperator, a: f64, b: f64, span: Span) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    match op {
        Add => Ok(a + b),
        Sub => Ok(a - b),
        Mul => Ok(a * b),
        Div | Mod if b == 0.0 => Err(RuntimeError::DivisionByZero { span }),
        Div => Ok(a / b),
        Mod => Ok(a % b),
        _ => unreachable!("float_arithmetic used with non arithmetic operator"),
    }
}
