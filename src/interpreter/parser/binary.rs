use crate::{
    ast::{BinaryOperator, Expr, binary_precedence},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not an infix operator, which the
/// precedence table ranks below all real operators.
///
/// # Example
/// ```
/// use asmrepl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::DoubleLess), Some(BinaryOperator::Shl));
/// assert_eq!(token_to_binary_operator(TokenKind::Tilde), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::DoubleEqual => Some(BinaryOperator::Equal),
        TokenKind::ExclamationEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::DoubleAmpersand => Some(BinaryOperator::And),
        TokenKind::DoublePipe => Some(BinaryOperator::Or),
        TokenKind::Ampersand => Some(BinaryOperator::BitAnd),
        TokenKind::Pipe => Some(BinaryOperator::BitOr),
        TokenKind::Caret => Some(BinaryOperator::BitXor),
        TokenKind::DoubleLess => Some(BinaryOperator::Shl),
        TokenKind::DoubleGreater => Some(BinaryOperator::Shr),
        _ => None,
    }
}

impl Parser<'_> {
    /// Folds the binary operators that follow `lhs` into a tree.
    ///
    /// Operators binding weaker than `min_precedence` end the chain and are
    /// left for the caller. Operators of equal precedence fold to the left;
    /// when the operator after the right operand binds strictly tighter, the
    /// right operand is first extended with a raised floor.
    ///
    /// `1 - 2 - 3` folds as `((1 - 2) - 3)` and `1 + 2 * 3 - 4` as
    /// `((1 + (2 * 3)) - 4)`.
    ///
    /// # Errors
    /// Propagates the first error of a right operand; the partially built
    /// tree is dropped. `NestedTooDeeply` at the operator whose node would
    /// make the tree taller than [`MAX_NESTING`].
    ///
    /// [`MAX_NESTING`]: crate::interpreter::parser::core::MAX_NESTING
    pub fn parse_binary_rhs(&mut self, min_precedence: i32, mut lhs: Expr) -> ParseResult<Expr> {
        let mut lhs_height = self.height();
        loop {
            let op = token_to_binary_operator(self.current().kind);
            let precedence = binary_precedence(op);

            let Some(op) = op.filter(|_| precedence >= min_precedence) else {
                self.set_height(lhs_height);
                return Ok(lhs);
            };

            let op_span = self.current_span();
            self.advance();

            let mut rhs = self.parse_unary()?;

            let next_precedence = binary_precedence(token_to_binary_operator(self.current().kind));
            if precedence < next_precedence {
                rhs = self.parse_binary_rhs(precedence + 1, rhs)?;
            }
            lhs_height = self.grow(lhs_height.max(self.height()), op_span.start)?;

            let span = lhs.span().to(rhs.span());
            lhs = Expr::BinaryOp { left: Box::new(lhs),
                                   op,
                                   right: Box::new(rhs),
                                   op_span,
                                   span };
        }
    }
}
