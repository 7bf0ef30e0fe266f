/// The `:` commands understood by the session.
pub mod builtins;

use std::{
    io::{self, Stderr, Stdout, Write},
    path::PathBuf,
};

use colored::Colorize;

use crate::{
    assembler::{Assembler, AssemblerConfig, UnsupportedAssembler, format_bytes},
    diagnostic::{ConsoleSink, DiagnosticSink},
    error::InputError,
    input::{InputResult, InputStack, Terminal},
    interpreter::{environment::Bindings, parser::parse_line},
};

/// Prompt shown by the terminal.
pub const PROMPT: &str = "asm> ";

/// Everything the command line can change about a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Target of the assembler.
    pub assembler: AssemblerConfig,
    /// Scripts to run, in order, before the first prompt.
    pub scripts:   Vec<PathBuf>,
    /// Whether output and diagnostics are colored.
    pub use_color: bool,
    /// Skip the banner.
    pub quiet:     bool,
}

/// What the session should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// End the session.
    Quit,
}

/// An interactive assembler session.
///
/// Lines that start with `:` are builtin commands: they are parsed and
/// evaluated against the session's variables. Every other non-blank line is
/// handed to the assembler and the resulting machine code is printed.
/// Results go to `O`, diagnostics to `E`.
pub struct Session<O: Write, E: Write> {
    input:     InputStack,
    assembler: Box<dyn Assembler>,
    bindings:  Bindings,
    sink:      ConsoleSink<E>,
    out:       O,
    use_color: bool,
    quiet:     bool,
}

impl Session<Stdout, Stderr> {
    /// Opens a session on the terminal with the given configuration.
    ///
    /// The configured scripts are stacked so the first one runs first. A
    /// script that cannot be opened is reported and skipped.
    ///
    /// # Errors
    /// Fails when the terminal cannot be set up.
    pub fn interactive(config: SessionConfig) -> InputResult<Self> {
        let input = InputStack::new(Box::new(Terminal::new()?));
        let assembler = Box::new(UnsupportedAssembler::new(config.assembler));
        let mut session = Self::new(input, assembler, io::stdout(), io::stderr(), config.use_color);
        session.quiet = config.quiet;

        for script in config.scripts.iter().rev() {
            if let Err(err) = session.input.redirect(script) {
                session.sink.error(&err.to_string());
            }
        }

        Ok(session)
    }
}

impl<O: Write, E: Write> Session<O, E> {
    /// Creates a session from its parts.
    pub fn new(input: InputStack,
               assembler: Box<dyn Assembler>,
               out: O,
               err: E,
               use_color: bool)
               -> Self {
        Self { input,
               assembler,
               bindings: Bindings::new(),
               sink: ConsoleSink::new(err, use_color),
               out,
               use_color,
               quiet: true }
    }

    /// Reads and executes lines until `:quit` or the end of the terminal
    /// input.
    ///
    /// # Errors
    /// Only terminal failures end the session with an error. A script that
    /// fails mid-read is reported and reading continues below it.
    pub fn run(&mut self) -> InputResult<()> {
        if !self.quiet {
            self.banner();
        }

        loop {
            let line = match self.input.read_line(PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err @ InputError::Terminal(_)) => return Err(err),
                Err(err) => {
                    self.sink.error(&err.to_string());
                    continue;
                },
            };

            if self.execute_line(&line) == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Executes one line as if it had been read from the active source.
    ///
    /// # Example
    /// ```
    /// use asmrepl::{
    ///     assembler::UnsupportedAssembler,
    ///     input::{InputStack, MemoryReader},
    ///     repl::{Flow, Session},
    /// };
    ///
    /// let input = InputStack::new(Box::new(MemoryReader::default()));
    /// let assembler = Box::new(UnsupportedAssembler::default());
    /// let mut session = Session::new(input, assembler, Vec::new(), Vec::new(), false);
    ///
    /// assert_eq!(session.execute_line(":print (2 + 3) -4"), Flow::Continue);
    /// assert_eq!(session.execute_line(":quit"), Flow::Quit);
    ///
    /// let (out, err) = session.into_writers();
    /// assert_eq!(String::from_utf8(out).unwrap(), "5 -4\n");
    /// assert!(err.is_empty());
    /// ```
    pub fn execute_line(&mut self, line: &str) -> Flow {
        self.sink.set_source(self.input.source_line(line));

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Flow::Continue;
        }

        if trimmed.starts_with(':') {
            // Blank out the ':' so token columns still index into `line`.
            let colon = line.len() - trimmed.len();
            let mut text = line.to_string();
            text.replace_range(colon..=colon, " ");

            return match parse_line(&text, &mut self.sink) {
                Some(command) => self.run_builtin(&command),
                None => Flow::Continue,
            };
        }

        match self.assembler.assemble(line) {
            Ok(bytes) if bytes.is_empty() => {},
            Ok(bytes) => self.println(&format_bytes(&bytes)),
            Err(err) => self.sink.report(&err.message, err.column),
        }
        Flow::Continue
    }

    /// The variables defined with `:set`.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Ends the session, giving back the output and diagnostics writers.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.sink.into_inner())
    }

    fn banner(&mut self) {
        let target = self.assembler.config().to_string();
        if self.use_color {
            let title = format!("asmrepl {}", env!("CARGO_PKG_VERSION"));
            let line = format!("{} for {}. Type {} for commands.",
                               title.bright_cyan().bold(),
                               target.bright_yellow(),
                               ":help".bright_green());
            self.println(&line);
        } else {
            let line = format!("asmrepl {} for {target}. Type :help for commands.",
                               env!("CARGO_PKG_VERSION"));
            self.println(&line);
        }
    }

    fn println(&mut self, text: &str) {
        // Output is best effort, like the diagnostics stream.
        let _ = writeln!(self.out, "{text}");
    }
}
