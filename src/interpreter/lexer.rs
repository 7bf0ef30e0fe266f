use logos::Logos;

/// Terminal kinds produced by [`tokenize`] and consumed by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare names such as command names and mnemonics: `print`, `eax`.
    Identifier,
    /// Integer literals in decimal, `0x` hex, `0b` binary or `0o` octal.
    Integer,
    /// Floating-point literals such as `1.5`, `.5` or `2e10`.
    Float,
    /// Double-quoted string literal; the token text holds the unescaped
    /// contents.
    String,
    /// `$name` reference; the token text holds the name without the `$`.
    Variable,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `==`
    DoubleEqual,
    /// `!=`
    ExclamationEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `&&`
    DoubleAmpersand,
    /// `||`
    DoublePipe,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `<<`
    DoubleLess,
    /// `>>`
    DoubleGreater,
    /// `!`
    Exclamation,
    /// `~`
    Tilde,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A string literal missing its closing quote.
    UnterminatedString,
    /// Any character that does not start a valid token.
    Unknown,
    /// End of the line. Always the last token of a stream.
    Eof,
}

/// A terminal with its source location.
///
/// Columns are 0-based character offsets; `column_end` is inclusive. The
/// end-of-input token sits one column past the last character and has
/// `column_start == column_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of terminal this is.
    pub kind:         TokenKind,
    /// Column of the first character.
    pub column_start: usize,
    /// Column of the last character.
    pub column_end:   usize,
    /// Source text, or the decoded payload for strings and variables.
    pub text:         String,
}

/// Raw lexemes recognized by `logos`. Mapped onto [`TokenKind`], which adds
/// the kinds the scanner never produces itself.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Whitespace,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[bB][01]+")]
    #[regex(r"0[oO][0-7]+")]
    Integer,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*")]
    Identifier,
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    #[regex(r#""([^"\\]|\\.)*""#, allow_greedy = true)]
    String,
    #[regex(r#""([^"\\]|\\.)*"#, allow_greedy = true)]
    UnterminatedString,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    DoubleEqual,
    #[token("!=")]
    ExclamationEqual,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,
    #[token("&&")]
    DoubleAmpersand,
    #[token("||")]
    DoublePipe,
    #[token("&")]
    Ampersand,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    DoubleLess,
    #[token(">>")]
    DoubleGreater,
    #[token("!")]
    Exclamation,
    #[token("~")]
    Tilde,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Float => Self::Float,
            Lexeme::Integer => Self::Integer,
            Lexeme::Identifier => Self::Identifier,
            Lexeme::Variable => Self::Variable,
            Lexeme::String => Self::String,
            Lexeme::UnterminatedString => Self::UnterminatedString,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::Percent => Self::Percent,
            Lexeme::DoubleEqual => Self::DoubleEqual,
            Lexeme::ExclamationEqual => Self::ExclamationEqual,
            Lexeme::Greater => Self::Greater,
            Lexeme::Less => Self::Less,
            Lexeme::GreaterEqual => Self::GreaterEqual,
            Lexeme::LessEqual => Self::LessEqual,
            Lexeme::DoubleAmpersand => Self::DoubleAmpersand,
            Lexeme::DoublePipe => Self::DoublePipe,
            Lexeme::Ampersand => Self::Ampersand,
            Lexeme::Pipe => Self::Pipe,
            Lexeme::Caret => Self::Caret,
            Lexeme::DoubleLess => Self::DoubleLess,
            Lexeme::DoubleGreater => Self::DoubleGreater,
            Lexeme::Exclamation => Self::Exclamation,
            Lexeme::Tilde => Self::Tilde,
            Lexeme::OpenParen => Self::OpenParen,
            Lexeme::CloseParen => Self::CloseParen,
            Lexeme::Whitespace => unreachable!("whitespace is skipped by the lexer"),
        }
    }
}

/// Splits one input line into tokens, ending with [`TokenKind::Eof`].
///
/// Scanning never fails: characters that cannot start a token become
/// [`TokenKind::Unknown`] tokens so the parser can report them at their
/// column.
///
/// # Example
/// ```
/// use asmrepl::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("print $rax + 0x10");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Variable,
///             TokenKind::Plus,
///             TokenKind::Integer,
///             TokenKind::Eof]);
/// assert_eq!(tokens[1].text, "rax");
/// assert_eq!((tokens[1].column_start, tokens[1].column_end), (6, 9));
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(line);
    let mut columns = ColumnCounter::default();

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let column_start = columns.advance_to(line, span.start);
        let column_end = column_start + slice.chars().count().saturating_sub(1);

        let (kind, text) = match lexeme {
            Ok(Lexeme::String) => (TokenKind::String, unescape(&slice[1..slice.len() - 1])),
            Ok(Lexeme::Variable) => (TokenKind::Variable, slice[1..].to_string()),
            Ok(lexeme) => (lexeme.into(), slice.to_string()),
            Err(()) => (TokenKind::Unknown, slice.to_string()),
        };

        tokens.push(Token { kind,
                            column_start,
                            column_end,
                            text });
    }

    let eof_column = line.chars().count();
    tokens.push(Token { kind:         TokenKind::Eof,
                        column_start: eof_column,
                        column_end:   eof_column,
                        text:         String::new(), });
    tokens
}

/// Converts increasing byte offsets into character columns, counting each
/// character of the line once.
#[derive(Default)]
struct ColumnCounter {
    byte:   usize,
    column: usize,
}

impl ColumnCounter {
    fn advance_to(&mut self, line: &str, byte_offset: usize) -> usize {
        self.column += line[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        self.column
    }
}

/// Decodes the escape sequences of a string literal body.
///
/// Recognized escapes are `\\`, `\"`, `\n`, `\t` and `\0`; any other escaped
/// character stands for itself.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
