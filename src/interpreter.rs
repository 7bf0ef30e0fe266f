/// The environment module resolves variables during evaluation.
///
/// Declares the `Environment` trait consulted for every `$name` reference and
/// `Bindings`, the map-backed implementation the session uses.
pub mod environment;
/// The evaluator module reduces argument trees to values.
///
/// # Responsibilities
/// - Evaluates every node kind, operands before operators, left before right.
/// - Applies operators according to the runtime kinds of their operands.
/// - Reports unresolved references, type mismatches and arithmetic faults at
///   the column they occurred.
pub mod evaluator;
/// The lexer module tokenizes a command line.
///
/// Produces kinds, columns and decoded text for every terminal, and always
/// ends the stream with an end-of-input token. Unrecognized characters become
/// tokens of their own instead of errors.
pub mod lexer;
/// The parser module builds command trees from tokens.
///
/// # Responsibilities
/// - Parses a command name followed by unary-level arguments.
/// - Combines binary operators by precedence inside parentheses.
/// - Reports each syntax error once and recovers at the next token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares `Value` and the promotion rules that reconcile two operands of
/// different kinds.
pub mod value;
