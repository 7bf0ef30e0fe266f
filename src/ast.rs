use std::fmt;

use crate::interpreter::value::core::Value;

/// An inclusive range of columns on one input line.
///
/// Columns are 0-based character offsets into the line the node was parsed
/// from. `end` is the column of the last character, not one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Column of the first character.
    pub start: usize,
    /// Column of the last character.
    pub end:   usize,
}

impl Span {
    /// Creates a span covering `start..=end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// ```
    /// use asmrepl::ast::Span;
    ///
    /// let joined = Span::new(4, 6).to(Span::new(10, 12));
    /// assert_eq!(joined, Span::new(4, 12));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start: self.start,
               end:   other.end, }
    }
}

/// An abstract syntax tree node for one expression on a command line.
///
/// Every node owns its children; the tree is never shared and never cyclic,
/// so dropping the root frees the whole expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value that is already reduced: identifier, integer, float or string.
    Literal {
        /// The constant value.
        value: Value,
        /// Source columns of the literal.
        span:  Span,
    },
    /// A `$name` reference, resolved through the environment at evaluation
    /// time.
    Variable {
        /// Name of the variable, without the leading `$`.
        name: String,
        /// Source columns of the reference, including the `$`.
        span: Span,
    },
    /// A prefix operator applied to an operand.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// From the operator to the end of the operand.
        span: Span,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// Left operand.
        left:    Box<Self>,
        /// The operator.
        op:      BinaryOperator,
        /// Right operand.
        right:   Box<Self>,
        /// Source columns of the operator token.
        op_span: Span,
        /// From the start of `left` to the end of `right`.
        span:    Span,
    },
}

impl Expr {
    /// Gets the source span of `self`.
    ///
    /// ```
    /// use asmrepl::ast::{Expr, Span};
    ///
    /// let expr = Expr::Variable { name: "rax".to_string(),
    ///                             span: Span::new(6, 9), };
    ///
    /// assert_eq!(expr.span(), Span::new(6, 9));
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::Variable { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. } => *span,
        }
    }

    /// Returns `self` relocated to `span`, keeping the node otherwise intact.
    ///
    /// ```
    /// use asmrepl::ast::{Expr, Span};
    ///
    /// let expr = Expr::Variable { name: "rax".to_string(),
    ///                             span: Span::new(1, 4), };
    ///
    /// assert_eq!(expr.with_span(Span::new(0, 5)).span(), Span::new(0, 5));
    /// ```
    #[must_use]
    pub fn with_span(mut self, new_span: Span) -> Self {
        match &mut self {
            Self::Literal { span, .. }
            | Self::Variable { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. } => *span = new_span,
        }
        self
    }

    /// Column of the first character of the expression.
    #[must_use]
    pub const fn column_start(&self) -> usize {
        self.span().start
    }

    /// Column of the last character of the expression.
    #[must_use]
    pub const fn column_end(&self) -> usize {
        self.span().end
    }
}

/// Renders the expression fully parenthesized, which makes the tree shape
/// visible: `1 + 2 * 3` displays as `(1 + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "${name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// One parsed command line: a command name followed by its arguments.
///
/// The name and location are fixed at construction. The command owns every
/// argument tree, and no argument outlives it.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: String,
    span: Span,
    args: Vec<Expr>,
}

impl Command {
    /// Creates a command from its name, the span of the name token and the
    /// arguments in the order they were typed.
    #[must_use]
    pub const fn new(name: String, span: Span, args: Vec<Expr>) -> Self {
        Self { name, span, args }
    }

    /// The command name as typed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source columns of the command name.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// The arguments that parsed successfully, in source order.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    Shl,
    /// Arithmetic right shift (`>>`)
    Shr,
}

/// Precedence given to "no operator": lower than every real operator, so a
/// binary chain always stops in front of a token that is not an operator.
pub const NO_PRECEDENCE: i32 = -1;

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// `&`, `^` and `|` bind looser than the comparisons, so `a & b == c`
    /// groups as `a & (b == c)`.
    ///
    /// ```
    /// use asmrepl::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::BitAnd.precedence() < BinaryOperator::Equal.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> i32 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 700,
            Self::Add | Self::Sub => 600,
            Self::Shl | Self::Shr => 500,
            Self::Greater | Self::Less | Self::GreaterEqual | Self::LessEqual => 400,
            Self::Equal | Self::NotEqual => 300,
            Self::BitAnd => 266,
            Self::BitXor => 233,
            Self::BitOr => 200,
            Self::And => 150,
            Self::Or => 100,
        }
    }
}

/// Precedence of an optional operator, [`NO_PRECEDENCE`] when absent.
#[must_use]
pub const fn binary_precedence(op: Option<BinaryOperator>) -> i32 {
    match op {
        Some(op) => op.precedence(),
        None => NO_PRECEDENCE,
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity on numbers.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical not (`!x`).
    Not,
    /// Bitwise complement (`~x`).
    BitNot,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual,
            Mod, Mul, NotEqual, Or, Shl, Shr, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            And => "&&",
            Or => "||",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
        };
        write!(f, "{operator}")
    }
}
