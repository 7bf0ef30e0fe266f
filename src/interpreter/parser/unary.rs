use crate::{
    ast::{Expr, Span, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    util::num::parse_integer_literal,
};

/// Maps a token to the prefix operator it spells, if any.
///
/// # Example
/// ```
/// use asmrepl::{
///     ast::UnaryOperator,
///     interpreter::{lexer::TokenKind, parser::unary::token_to_unary_operator},
/// };
///
/// assert_eq!(token_to_unary_operator(TokenKind::Tilde), Some(UnaryOperator::BitNot));
/// assert_eq!(token_to_unary_operator(TokenKind::Star), None);
/// ```
#[must_use]
pub const fn token_to_unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Minus => Some(UnaryOperator::Negate),
        TokenKind::Exclamation => Some(UnaryOperator::Not),
        TokenKind::Tilde => Some(UnaryOperator::BitNot),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Prefix operators are right-associative and all apply to the primary
    /// that eventually follows them, so `- ~x` is `-(~x)`. The node spans
    /// from the operator to the end of its operand.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-" | "!" | "~") unary
    ///            | primary
    /// ```
    ///
    /// # Errors
    /// Propagates errors from the operand; a failed operand discards the
    /// operator node as well. `NestedTooDeeply` once operators and
    /// parentheses are nested more than [`MAX_NESTING`] levels deep.
    ///
    /// [`MAX_NESTING`]: crate::interpreter::parser::core::MAX_NESTING
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        let result = self.parse_prefixed();
        self.leave();
        result
    }

    fn parse_prefixed(&mut self) -> ParseResult<Expr> {
        let Some(op) = token_to_unary_operator(self.current().kind) else {
            return self.parse_primary();
        };

        let start = self.current().column_start;
        self.advance();

        let operand = self.parse_unary()?;
        self.grow(self.height(), start)?;
        let span = Span::new(start, operand.column_end());

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(operand),
                           span })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := identifier | integer | float | string | variable
    ///              | "(" expression ")"
    /// ```
    ///
    /// On success exactly the tokens of the primary are consumed. On failure
    /// the offending token is left in place.
    ///
    /// # Errors
    /// - `UnmatchedParentheses` at a stray `)`.
    /// - `InvalidCharacter` at a character no token starts with.
    /// - `UnterminatedString` at a string missing its closing quote.
    /// - `IntegerOutOfRange` / `InvalidFloat` for literals that do not
    ///   convert.
    /// - `ExpectedPrimary` for anything else, end of input included.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.current();
        let column = token.column_start;
        let span = self.current_span();

        let expr = match token.kind {
            TokenKind::Identifier => Expr::Literal { value: Value::Identifier(token.text.clone()),
                                                     span },
            TokenKind::Integer => {
                let value = parse_integer_literal(&token.text)
                    .ok_or(ParseError::IntegerOutOfRange { column })?;
                Expr::Literal { value: Value::Integer(value),
                                span }
            },
            TokenKind::Float => {
                let value = token.text
                                 .parse::<f64>()
                                 .map_err(|_| ParseError::InvalidFloat { column })?;
                Expr::Literal { value: Value::Float(value),
                                span }
            },
            TokenKind::String => Expr::Literal { value: Value::String(token.text.clone()),
                                                 span },
            TokenKind::Variable => Expr::Variable { name: token.text.clone(),
                                                    span },
            TokenKind::OpenParen => return self.parse_grouping(),
            TokenKind::CloseParen => return Err(ParseError::UnmatchedParentheses { column }),
            TokenKind::Unknown => return Err(ParseError::InvalidCharacter { column }),
            TokenKind::UnterminatedString => {
                return Err(ParseError::UnterminatedString { column });
            },
            _ => return Err(ParseError::ExpectedPrimary { column }),
        };

        self.set_height(1);
        self.advance();
        Ok(expr)
    }

    /// Parses a parenthesized expression.
    ///
    /// The parentheses only group: the returned node is the inner expression,
    /// widened to span both parentheses.
    ///
    /// # Errors
    /// `UnmatchedParentheses`, located at the opening `(`, when the closing
    /// `)` is missing. Errors of the inner expression are propagated.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let open_column = self.current().column_start;
        self.advance();

        let expr = self.parse_expression()?;

        if self.current().kind != TokenKind::CloseParen {
            return Err(ParseError::UnmatchedParentheses { column: open_column });
        }

        let close_column = self.current().column_end;
        self.advance();
        Ok(expr.with_span(Span::new(open_column, close_column)))
    }
}
