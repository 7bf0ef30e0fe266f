use crate::{
    ast::{Command, Expr, Span},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces expression trees to values.
///
/// The evaluator borrows the environment for the duration of one command;
/// evaluation itself never changes it.
pub struct Evaluator<'e> {
    environment: &'e dyn Environment,
}

impl<'e> Evaluator<'e> {
    /// Creates an evaluator resolving variables through `environment`.
    #[must_use]
    pub fn new(environment: &'e dyn Environment) -> Self {
        Self { environment }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals evaluate to a copy of themselves. Variables are resolved
    /// through the environment. Operator nodes evaluate their operands
    /// first, left before right and always both, then apply the operator to
    /// the resulting kinds.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     diagnostic::CollectingSink,
    ///     interpreter::{
    ///         environment::Bindings, evaluator::core::Evaluator, parser::core::Parser,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut sink = CollectingSink::default();
    /// let expr = Parser::new("1 + 2 * 3", &mut sink).parse_expression().unwrap();
    /// let bindings = Bindings::new();
    ///
    /// assert_eq!(Evaluator::new(&bindings).eval(&expr).unwrap(), Value::Integer(7));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Variable { name, span } => self.eval_variable(name, *span),
            Expr::UnaryOp { op, expr, span } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, &operand, *span)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             op_span,
                             .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *op_span)
            },
        }
    }

    /// Evaluates every argument of `command` independently.
    ///
    /// The result has one entry per argument, in order. A failing argument
    /// does not keep the others from being evaluated.
    #[must_use]
    pub fn eval_command(&self, command: &Command) -> Vec<EvalResult<Value>> {
        command.args().iter().map(|arg| self.eval(arg)).collect()
    }

    /// Resolves a variable to a number.
    fn eval_variable(&self, name: &str, span: Span) -> EvalResult<Value> {
        match self.environment.resolve(name) {
            Some(value) if value.is_numeric() => Ok(value),
            Some(_) => Err(RuntimeError::NonNumericVariable { name: name.to_string(),
                                                              span }),
            None => Err(RuntimeError::UnresolvedReference { name: name.to_string(),
                                                            span }),
        }
    }
}

impl Expr {
    /// Evaluates the expression against `environment`.
    ///
    /// # Errors
    /// Returns the first unresolved reference, type mismatch or arithmetic
    /// fault met while reducing the tree.
    pub fn eval(&self, environment: &dyn Environment) -> EvalResult<Value> {
        Evaluator::new(environment).eval(self)
    }
}

/// Evaluates each argument of `command`, one result per argument.
///
/// # Example
/// ```
/// use asmrepl::{
///     diagnostic::CollectingSink,
///     error::RuntimeErrorKind,
///     interpreter::{
///         environment::Bindings, evaluator::core::evaluate, parser::parse_line,
///         value::core::Value,
///     },
/// };
///
/// let mut sink = CollectingSink::default();
/// let command = parse_line("print (5 / 0) 4", &mut sink).unwrap();
/// let results = evaluate(&command, &Bindings::new());
///
/// assert_eq!(results[0].as_ref().unwrap_err().kind(), RuntimeErrorKind::ArithmeticFault);
/// assert_eq!(results[1], Ok(Value::Integer(4)));
/// ```
#[must_use]
pub fn evaluate(command: &Command, environment: &dyn Environment) -> Vec<EvalResult<Value>> {
    Evaluator::new(environment).eval_command(command)
}
