use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{diagnostic::SourceLine, error::InputError};

/// Maximum number of scripts that can be stacked on top of the terminal.
pub const MAX_DEPTH: usize = 128;

/// Display name of the terminal in diagnostics.
pub const TERMINAL_NAME: &str = "<stdin>";

/// Result type used by the input layer.
pub type InputResult<T> = Result<T, InputError>;

/// A source of interactive lines, read one at a time.
///
/// The session talks to the terminal through this trait only, which lets
/// it be driven from memory.
pub trait LineReader {
    /// Reads the next line without its terminator, or `None` at end of
    /// input.
    fn read_line(&mut self, prompt: &str) -> InputResult<Option<String>>;
}

/// The interactive terminal, with line editing and history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    /// Opens the terminal.
    pub fn new() -> InputResult<Self> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl LineReader for Terminal {
    fn read_line(&mut self, prompt: &str) -> InputResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            },
            // Ctrl-C discards the line being edited.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Lines held in memory, handed out in order.
///
/// # Example
/// ```
/// use asmrepl::input::{LineReader, MemoryReader};
///
/// let mut reader = MemoryReader::new(":print 1\n:quit\n");
///
/// assert_eq!(reader.read_line("> ").unwrap(), Some(":print 1".to_string()));
/// assert_eq!(reader.read_line("> ").unwrap(), Some(":quit".to_string()));
/// assert_eq!(reader.read_line("> ").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    lines: VecDeque<String>,
}

impl MemoryReader {
    /// Splits `text` into lines.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { lines: text.lines().map(str::to_string).collect() }
    }
}

impl LineReader for MemoryReader {
    fn read_line(&mut self, _prompt: &str) -> InputResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

struct Script {
    name:        String,
    reader:      Box<dyn BufRead>,
    line_number: usize,
}

/// The stack of places lines are read from.
///
/// The terminal sits at the bottom. Each redirection pushes a script on
/// top, and lines come from the topmost script until it runs dry, at which
/// point it is closed and reading resumes from the one below it.
pub struct InputStack {
    terminal:      Box<dyn LineReader>,
    terminal_line: usize,
    scripts:       Vec<Script>,
}

impl InputStack {
    /// Creates a stack with only `terminal` on it.
    #[must_use]
    pub fn new(terminal: Box<dyn LineReader>) -> Self {
        Self { terminal,
               terminal_line: 0,
               scripts: Vec::new() }
    }

    /// Pushes the script at `path`, so the next line read comes from it.
    ///
    /// # Errors
    /// [`InputError::TooDeep`] when [`MAX_DEPTH`] scripts are already
    /// stacked, [`InputError::Open`] when the file cannot be opened.
    pub fn redirect(&mut self, path: impl AsRef<Path>) -> InputResult<()> {
        let path = path.as_ref();
        self.check_depth()?;
        let file = File::open(path).map_err(|source| InputError::Open { path: path.to_path_buf(),
                                                                        source })?;
        self.push_reader(path.display().to_string(), BufReader::new(file))
    }

    /// Pushes an already open script under the display name `name`.
    ///
    /// # Errors
    /// [`InputError::TooDeep`] when [`MAX_DEPTH`] scripts are already
    /// stacked.
    ///
    /// # Example
    /// ```
    /// use asmrepl::input::{InputStack, MemoryReader};
    ///
    /// let mut input = InputStack::new(Box::new(MemoryReader::new("from terminal")));
    /// input.push_reader("inline", ":print 1\r\n".as_bytes()).unwrap();
    ///
    /// assert_eq!(input.read_line("> ").unwrap().as_deref(), Some(":print 1"));
    /// assert_eq!(input.current(), ("inline", 1));
    /// assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("from terminal"));
    /// assert_eq!(input.current(), ("<stdin>", 1));
    /// ```
    pub fn push_reader(&mut self,
                       name: impl Into<String>,
                       reader: impl BufRead + 'static)
                       -> InputResult<()> {
        self.check_depth()?;
        self.scripts.push(Script { name:        name.into(),
                                   reader:      Box::new(reader),
                                   line_number: 0, });
        Ok(())
    }

    /// Reads the next line from the top of the stack.
    ///
    /// Exhausted scripts are popped until a line turns up or the terminal is
    /// reached. The line terminator is removed, and bytes that are not valid
    /// UTF-8 become U+FFFD. `None` means the terminal itself has no more
    /// input.
    ///
    /// # Errors
    /// A script that fails mid-read is popped and reported as
    /// [`InputError::Read`]; terminal failures are passed through.
    pub fn read_line(&mut self, prompt: &str) -> InputResult<Option<String>> {
        while let Some(script) = self.scripts.last_mut() {
            let mut bytes = Vec::new();
            match script.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => {
                    self.scripts.pop();
                },
                Ok(_) => {
                    script.line_number += 1;
                    strip_terminator(&mut bytes);
                    return Ok(Some(String::from_utf8_lossy(&bytes).into_owned()));
                },
                Err(source) => {
                    let name = script.name.clone();
                    self.scripts.pop();
                    return Err(InputError::Read { name, source });
                },
            }
        }

        let line = self.terminal.read_line(prompt)?;
        if line.is_some() {
            self.terminal_line += 1;
        }
        Ok(line)
    }

    /// Name and 1-based line number of the line most recently read from the
    /// active source.
    #[must_use]
    pub fn current(&self) -> (&str, usize) {
        self.scripts
            .last()
            .map_or((TERMINAL_NAME, self.terminal_line), |script| {
                (script.name.as_str(), script.line_number)
            })
    }

    /// Describes `text` as a line of the active source, for diagnostics.
    #[must_use]
    pub fn source_line(&self, text: &str) -> SourceLine {
        let (name, line_number) = self.current();
        SourceLine { name: name.to_string(),
                     line_number,
                     text: text.to_string() }
    }

    /// Number of scripts stacked above the terminal.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scripts.len()
    }

    fn check_depth(&self) -> InputResult<()> {
        if self.scripts.len() >= MAX_DEPTH {
            return Err(InputError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }
}

fn strip_terminator(line: &mut Vec<u8>) {
    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
}
