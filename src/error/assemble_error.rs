/// An instruction line the assembler rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssembleError {
    /// What the backend reported.
    pub message: String,
    /// Column of the offending text within the line.
    pub column:  usize,
}

impl AssembleError {
    /// Creates an error reported at `column`.
    #[must_use]
    pub fn new(message: impl Into<String>, column: usize) -> Self {
        Self { message: message.into(),
               column }
    }
}
