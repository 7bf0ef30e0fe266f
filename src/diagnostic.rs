use std::io::{self, Write};

use colored::Colorize;

/// Receives column-anchored error messages.
///
/// The parser and the REPL report every error exactly once; the sink decides
/// how to render it against the line currently being processed.
pub trait DiagnosticSink {
    /// Reports `message` at `column` (0-based) of the current line.
    fn report(&mut self, message: &str, column: usize);
}

/// A reported message and its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The error message.
    pub message: String,
    /// 0-based column the message refers to.
    pub column:  usize,
}

/// A sink that keeps every diagnostic in memory.
///
/// # Example
/// ```
/// use asmrepl::diagnostic::{CollectingSink, DiagnosticSink};
///
/// let mut sink = CollectingSink::default();
/// sink.report("unmatched parentheses", 6);
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.diagnostics()[0].column, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Everything reported so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of reported diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Removes and returns every diagnostic.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, message: &str, column: usize) {
        self.diagnostics.push(Diagnostic { message: message.to_string(),
                                           column });
    }
}

/// The line a diagnostic is rendered against, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLine {
    /// Display name of the input source, such as `<stdin>` or a script path.
    pub name:        String,
    /// 1-based line number within that source.
    pub line_number: usize,
    /// The text of the line.
    pub text:        String,
}

/// Renders a diagnostic in the familiar compiler layout.
///
/// ```text
/// script.txt:3:7: error: unmatched parentheses
/// :print (1 + 2
///       ^
/// ```
///
/// The printed column is 1-based. Tabs before the caret are kept so the caret
/// lines up with the source text.
///
/// # Example
/// ```
/// use asmrepl::diagnostic::{SourceLine, render_diagnostic};
///
/// let source = SourceLine { name:        "<stdin>".to_string(),
///                           line_number: 1,
///                           text:        ":print 1 * 2".to_string(), };
/// let out = render_diagnostic(&source, "expected primary expression", 9, false);
///
/// assert_eq!(out,
///            "<stdin>:1:10: error: expected primary expression\n:print 1 * 2\n         ^\n");
/// ```
#[must_use]
pub fn render_diagnostic(source: &SourceLine, message: &str, column: usize, use_color: bool)
                         -> String {
    let location = format!("{}:{}:{}:", source.name, source.line_number, column + 1);
    let mut padding: String = source.text
                                    .chars()
                                    .take(column)
                                    .map(|c| if c == '\t' { '\t' } else { ' ' })
                                    .collect();
    let shortfall = column.saturating_sub(padding.chars().count());
    padding.extend(std::iter::repeat_n(' ', shortfall));

    if use_color {
        format!("{} {} {}\n{}\n{}{}\n",
                location.bold(),
                "error:".bright_red().bold(),
                message.bold(),
                source.text,
                padding,
                "^".bright_green().bold())
    } else {
        format!("{location} error: {message}\n{}\n{padding}^\n", source.text)
    }
}

/// A sink that writes rendered diagnostics to a stream, normally stderr.
pub struct ConsoleSink<W: Write> {
    writer:    W,
    source:    SourceLine,
    use_color: bool,
}

impl ConsoleSink<io::Stderr> {
    /// A sink writing to standard error.
    #[must_use]
    pub fn stderr(use_color: bool) -> Self {
        Self::new(io::stderr(), use_color)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// A sink writing to `writer`.
    pub fn new(writer: W, use_color: bool) -> Self {
        Self { writer,
               source: SourceLine::default(),
               use_color }
    }

    /// Sets the line subsequent diagnostics are rendered against.
    pub fn set_source(&mut self, source: SourceLine) {
        self.source = source;
    }

    /// Writes an error that has no column, such as a failed redirection.
    pub fn error(&mut self, message: &str) {
        let line = if self.use_color {
            format!("{} {message}\n", "error:".bright_red().bold())
        } else {
            format!("error: {message}\n")
        };
        self.emit(&line);
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        // Nowhere left to report a failing diagnostics stream.
        let _ = self.writer.write_all(text.as_bytes());
        let _ = self.writer.flush();
    }
}

impl<W: Write> DiagnosticSink for ConsoleSink<W> {
    fn report(&mut self, message: &str, column: usize) {
        let rendered = render_diagnostic(&self.source, message, column, self.use_color);
        self.emit(&rendered);
    }
}
