use crate::ast::Span;

/// The three categories of evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeErrorKind {
    /// A variable the environment does not know.
    UnresolvedReference,
    /// An operator applied to value kinds it is not defined for.
    TypeMismatch,
    /// Division or modulo by zero, or an out of range shift.
    ArithmeticFault,
}

/// Represents all errors that can occur while evaluating an argument.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to read a variable that is not defined.
    #[error("unresolved reference to `${name}`")]
    UnresolvedReference {
        /// Name of the variable, without the `$`.
        name: String,
        /// Location of the reference.
        span: Span,
    },
    /// A variable is bound to something other than a number.
    #[error("variable `${name}` does not hold a number")]
    NonNumericVariable {
        /// Name of the variable, without the `$`.
        name: String,
        /// Location of the reference.
        span: Span,
    },
    /// An operator does not accept the kinds of its operands.
    #[error("type mismatch: {details}")]
    TypeMismatch {
        /// Which operator and which kinds were involved.
        details: String,
        /// Location of the operator.
        span:    Span,
    },
    /// Division or modulo with a zero right-hand side.
    #[error("division by zero")]
    DivisionByZero {
        /// Location of the operator.
        span: Span,
    },
    /// A shift count outside `0..64`.
    #[error("shift amount {amount} out of range")]
    ShiftOutOfRange {
        /// The requested shift count.
        amount: i64,
        /// Location of the operator.
        span:   Span,
    },
}

impl RuntimeError {
    /// Which category the error belongs to.
    ///
    /// ```
    /// use asmrepl::{
    ///     ast::Span,
    ///     error::{RuntimeError, RuntimeErrorKind},
    /// };
    ///
    /// let err = RuntimeError::DivisionByZero { span: Span::new(2, 2) };
    /// assert_eq!(err.kind(), RuntimeErrorKind::ArithmeticFault);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> RuntimeErrorKind {
        match self {
            Self::UnresolvedReference { .. } => RuntimeErrorKind::UnresolvedReference,
            Self::NonNumericVariable { .. } | Self::TypeMismatch { .. } => {
                RuntimeErrorKind::TypeMismatch
            },
            Self::DivisionByZero { .. } | Self::ShiftOutOfRange { .. } => {
                RuntimeErrorKind::ArithmeticFault
            },
        }
    }

    /// Source location the error refers to.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnresolvedReference { span, .. }
            | Self::NonNumericVariable { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::DivisionByZero { span }
            | Self::ShiftOutOfRange { span, .. } => *span,
        }
    }

    /// Column the error should be reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.span().start
    }
}
