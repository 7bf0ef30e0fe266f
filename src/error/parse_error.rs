/// Represents all syntax errors a command line can contain.
///
/// The parser reports each of these once, at `column`, and then either skips
/// the offending argument or, for [`ParseError::ExpectedCommand`], gives up on
/// the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line did not start with a command name.
    #[error("expected command")]
    ExpectedCommand {
        /// Column of the token found instead.
        column: usize,
    },
    /// A `)` without a matching `(`, or a `(` that was never closed.
    #[error("unmatched parentheses")]
    UnmatchedParentheses {
        /// Column of the stray `)` or of the unclosed `(`.
        column: usize,
    },
    /// A character that cannot start any token.
    #[error("invalid character in input")]
    InvalidCharacter {
        /// Column of the character.
        column: usize,
    },
    /// A string literal without its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// Column of the opening quote.
        column: usize,
    },
    /// Any other token where an operand was expected.
    #[error("expected primary expression")]
    ExpectedPrimary {
        /// Column of the unexpected token.
        column: usize,
    },
    /// An integer literal that does not fit in 64 signed bits.
    #[error("integer literal out of range")]
    IntegerOutOfRange {
        /// Column of the literal.
        column: usize,
    },
    /// An argument whose tree would be deeper than the parser allows.
    #[error("expression nested too deeply")]
    NestedTooDeeply {
        /// Column of the token that went past the limit.
        column: usize,
    },
    /// A floating-point literal that could not be converted.
    #[error("invalid floating-point literal")]
    InvalidFloat {
        /// Column of the literal.
        column: usize,
    },
}

impl ParseError {
    /// Column the error should be reported at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::ExpectedCommand { column }
            | Self::UnmatchedParentheses { column }
            | Self::InvalidCharacter { column }
            | Self::UnterminatedString { column }
            | Self::ExpectedPrimary { column }
            | Self::IntegerOutOfRange { column }
            | Self::NestedTooDeeply { column }
            | Self::InvalidFloat { column } => *column,
        }
    }
}
