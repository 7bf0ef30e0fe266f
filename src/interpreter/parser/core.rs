use crate::{
    ast::{Command, Expr, Span},
    diagnostic::DiagnosticSink,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::unary::token_to_unary_operator,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Limit on the height of an argument's tree and on the number of prefix
/// operators and parentheses enclosing any of its tokens.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser over the tokens of one command line.
///
/// The parser looks at exactly one token ahead, the current one. Consuming
/// the end-of-input token is a no-op, so the current token is always valid.
pub struct Parser<'a> {
    tokens:   Vec<Token>,
    position: usize,
    sink:     &'a mut dyn DiagnosticSink,
    /// Unary expressions currently being parsed.
    depth:    usize,
    /// Height of the expression parsed last.
    height:   usize,
}

impl<'a> Parser<'a> {
    /// Tokenizes `line` and positions the parser on its first token.
    pub fn new(line: &str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self::from_tokens(tokenize(line), sink)
    }

    /// Creates a parser over an existing token stream.
    ///
    /// A stream that does not end with [`TokenKind::Eof`] gets one appended
    /// right after its last token.
    pub fn from_tokens(mut tokens: Vec<Token>, sink: &'a mut dyn DiagnosticSink) -> Self {
        if tokens.last().is_none_or(|token| token.kind != TokenKind::Eof) {
            let column = tokens.last().map_or(0, |token| token.column_end + 1);
            tokens.push(Token { kind:         TokenKind::Eof,
                                column_start: column,
                                column_end:   column,
                                text:         String::new(), });
        }

        Self { tokens,
               position: 0,
               sink,
               depth: 0,
               height: 0 }
    }

    /// Parses a command line: a command name followed by its arguments.
    ///
    /// Each argument is a unary expression, so binary operators at the top
    /// level are not combined; `print 1 + 2` has the arguments `1` and `+2`,
    /// and `print (1 + 2)` has the single argument `1 + 2`.
    ///
    /// A bad argument is reported once and the token that caused the failure
    /// is skipped before parsing continues. An argument nested deeper than
    /// [`MAX_NESTING`] is skipped whole instead: its prefix operators, then
    /// either one token or a balanced parenthesized group. A command is returned whenever
    /// the name parses, holding whichever arguments succeeded. Without a
    /// leading identifier, "expected command" is reported and `None` is
    /// returned.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{diagnostic::CollectingSink, interpreter::parser::core::Parser};
    ///
    /// let mut sink = CollectingSink::default();
    /// let command = Parser::new("print 1 ) 2", &mut sink).parse_command().unwrap();
    ///
    /// assert_eq!(command.args().len(), 2);
    /// assert_eq!(sink.diagnostics()[0].message, "unmatched parentheses");
    /// assert_eq!(sink.diagnostics()[0].column, 8);
    /// ```
    pub fn parse_command(&mut self) -> Option<Command> {
        if self.current().kind != TokenKind::Identifier {
            let err = ParseError::ExpectedCommand { column: self.current().column_start };
            self.report(&err);
            return None;
        }

        let name = self.current().text.clone();
        let span = self.current_span();
        self.advance();

        let mut args = Vec::new();
        while self.current().kind != TokenKind::Eof {
            let start = self.position;
            match self.parse_unary() {
                Ok(arg) => args.push(arg),
                Err(err @ ParseError::NestedTooDeeply { .. }) => {
                    self.report(&err);
                    self.position = start;
                    self.skip_argument();
                },
                Err(err) => {
                    self.report(&err);
                    self.advance();
                },
            }
        }

        Some(Command::new(name, span, args))
    }

    /// Parses a full expression, binary operators included.
    ///
    /// Command arguments only reach this through parentheses.
    ///
    /// Grammar: `expression := unary (binary_op unary)*`
    ///
    /// # Errors
    /// Propagates the first syntax error; nothing is reported to the sink.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_unary()?;
        self.parse_binary_rhs(0, lhs)
    }

    /// The current lookahead token.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    /// Span of the current lookahead token.
    pub(in crate::interpreter::parser) fn current_span(&self) -> Span {
        let token = self.current();
        Span::new(token.column_start, token.column_end)
    }

    /// Moves to the next token, staying put on end of input.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        if self.current().kind != TokenKind::Eof {
            self.position += 1;
        }
    }

    /// Records a node built one level above a subtree of height `below`.
    ///
    /// # Errors
    /// `NestedTooDeeply` at `column` when the node would exceed
    /// [`MAX_NESTING`].
    pub(in crate::interpreter::parser) fn grow(&mut self,
                                               below: usize,
                                               column: usize)
                                               -> ParseResult<usize> {
        let height = below + 1;
        if height > MAX_NESTING {
            return Err(ParseError::NestedTooDeeply { column });
        }
        self.height = height;
        Ok(height)
    }

    pub(in crate::interpreter::parser) const fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub(in crate::interpreter::parser) const fn height(&self) -> usize {
        self.height
    }

    /// Enters one more level of unary nesting.
    ///
    /// # Errors
    /// `NestedTooDeeply` at the current token once [`MAX_NESTING`] levels are
    /// open.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestedTooDeeply { column: self.current().column_start });
        }
        self.depth += 1;
        Ok(())
    }

    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Skips one argument without building it.
    fn skip_argument(&mut self) {
        while token_to_unary_operator(self.current().kind).is_some() {
            self.advance();
        }

        if self.current().kind != TokenKind::OpenParen {
            self.advance();
            return;
        }

        let mut open = 0_usize;
        loop {
            match self.current().kind {
                TokenKind::OpenParen => open += 1,
                TokenKind::CloseParen => open -= 1,
                TokenKind::Eof => return,
                _ => {},
            }
            self.advance();
            if open == 0 {
                return;
            }
        }
    }

    fn report(&mut self, err: &ParseError) {
        self.sink.report(&err.to_string(), err.column());
    }
}
