//! # asmrepl
//!
//! asmrepl is an interactive assembler shell. Every line typed at the prompt
//! is assembled for the selected target and its encoding printed in hex.
//! Lines starting with `:` are builtin commands instead, whose arguments are
//! small expressions over integers, floats, strings, identifiers and `$name`
//! variables.
//!
//! The command language is also usable on its own: parse a line with
//! [`interpreter::parser::parse_line`] and evaluate its arguments against any
//! [`interpreter::environment::Environment`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Command,
    diagnostic::DiagnosticSink,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, evaluate},
        parser::parse_line,
        value::core::Value,
    },
};

/// Machine code generation behind a narrow interface.
///
/// Declares the target configuration, the `Assembler` trait that backends
/// implement and the fallback used when no backend exists for a target.
pub mod assembler;
/// Defines the structure of parsed command lines.
///
/// This module declares the `Expr` tree, the `Command` that owns a line's
/// arguments and the operator enums with their precedence table. Every node
/// carries the columns it was parsed from for error reporting.
pub mod ast;
/// Column-anchored error reporting.
///
/// The `DiagnosticSink` trait, a sink that collects messages for tests and
/// embedders, and the console sink that renders them under the offending
/// line with a caret.
pub mod diagnostic;
/// Provides unified error types for parsing, evaluation and input.
///
/// # Responsibilities
/// - Defines one error enum per phase: syntax, evaluation, input, assembly.
/// - Attaches columns to every error that points into a line.
pub mod error;
/// Where lines come from.
///
/// The terminal with history, stacked under any number of script files up to
/// a fixed depth.
pub mod input;
/// The command language.
///
/// Lexing, parsing, values, the environment and evaluation of builtin command
/// arguments.
pub mod interpreter;
/// The interactive session and its builtin commands.
pub mod repl;
/// Numeric helpers shared by the parser and the evaluator.
pub mod util;

/// Parses `line` and evaluates each of its arguments.
///
/// Syntax errors are reported to `sink`; the arguments that parsed are still
/// evaluated. Returns `None` when the line has no command name.
///
/// # Examples
/// ```
/// use asmrepl::{
///     diagnostic::CollectingSink,
///     interpret_line,
///     interpreter::{environment::Bindings, value::core::Value},
/// };
///
/// let mut bindings = Bindings::new();
/// bindings.define("rsp", Value::Integer(0x7ff0));
///
/// let mut sink = CollectingSink::default();
/// let (command, results) = interpret_line("print ($rsp - 8) \"ok\"", &bindings, &mut sink).unwrap();
///
/// assert_eq!(command.name(), "print");
/// assert_eq!(results, [Ok(Value::Integer(0x7fe8)), Ok(Value::from("ok"))]);
/// assert!(sink.is_empty());
/// ```
pub fn interpret_line(line: &str,
                      environment: &dyn Environment,
                      sink: &mut dyn DiagnosticSink)
                      -> Option<(Command, Vec<EvalResult<Value>>)> {
    let command = parse_line(line, sink)?;
    let results = evaluate(&command, environment);
    Some((command, results))
}
