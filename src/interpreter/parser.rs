/// Parser state, entry points and error recovery.
///
/// Holds the token stream with its single token of lookahead, parses whole
/// command lines and recovers from a bad argument by skipping the token that
/// caused it.
pub mod core;
/// Unary and primary expressions.
///
/// Prefix operators, literals, identifiers, variables and parenthesized
/// sub-expressions.
pub mod unary;
/// Binary operator chains.
///
/// The token to operator table and precedence climbing over the operator
/// precedence table.
pub mod binary;

use crate::{ast::Command, diagnostic::DiagnosticSink, interpreter::parser::core::Parser};

/// Parses one command line, reporting syntax errors to `sink`.
///
/// Returns `None` only when the line does not start with a command name.
///
/// # Example
/// ```
/// use asmrepl::{diagnostic::CollectingSink, interpreter::parser::parse_line};
///
/// let mut sink = CollectingSink::default();
/// let command = parse_line("print (1 + 2) $rax", &mut sink).unwrap();
///
/// assert_eq!(command.name(), "print");
/// assert_eq!(command.args().len(), 2);
/// assert!(sink.is_empty());
/// ```
pub fn parse_line(line: &str, sink: &mut dyn DiagnosticSink) -> Option<Command> {
    Parser::new(line, sink).parse_command()
}
