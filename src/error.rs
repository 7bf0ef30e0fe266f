/// Syntax errors.
///
/// Raised while turning a command line into an AST. Every variant carries the
/// column of the token that provoked it, so the diagnostic can point at it.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while reducing an argument to a value: unresolved references, type
/// mismatches and arithmetic faults. None of them stops the evaluation of
/// sibling arguments.
pub mod runtime_error;
/// Input errors.
///
/// Failures of the input source stack: redirection too deep, unreadable
/// script files and terminal failures.
pub mod input_error;
/// Assembler errors.
///
/// A rejected instruction line, with the column the backend complained
/// about.
pub mod assemble_error;

pub use assemble_error::AssembleError;
pub use input_error::InputError;
pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
