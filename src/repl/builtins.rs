use std::io::Write;

use colored::Colorize;

use crate::{
    ast::{Command, Expr},
    diagnostic::DiagnosticSink,
    error::RuntimeError,
    interpreter::evaluator::core::Evaluator,
    repl::{Flow, Session},
};

/// Builtin commands with their usage and a one-line description.
pub const BUILTINS: &[(&str, &str)] = &[(":help", "show this message"),
                                        (":quit, :exit", "end the session"),
                                        (":print args...", "evaluate and print each argument"),
                                        (":set $name value", "bind a variable to a number"),
                                        (":unset $name", "remove a variable"),
                                        (":vars", "list the defined variables"),
                                        (":source path", "read lines from a script file"),
                                        (":target", "show the assembler target")];

impl<O: Write, E: Write> Session<O, E> {
    /// Runs a parsed builtin command line.
    pub(crate) fn run_builtin(&mut self, command: &Command) -> Flow {
        match command.name() {
            "help" => self.help(command),
            "quit" | "exit" => return Flow::Quit,
            "print" => self.print(command),
            "set" => self.set(command),
            "unset" => self.unset(command),
            "vars" => self.vars(command),
            "source" => self.source(command),
            "target" => self.target(command),
            _ => self.sink.report("unknown command", command.span().start),
        }
        Flow::Continue
    }

    /// `:help`
    fn help(&mut self, command: &Command) {
        if !self.check_arity(command, 0) {
            return;
        }
        for (usage, description) in BUILTINS {
            let line = if self.use_color {
                format!("  {:<18} {description}", usage.bright_yellow())
            } else {
                format!("  {usage:<18} {description}")
            };
            self.println(&line);
        }
        self.println("Any other line is assembled and its encoding printed in hex.");
    }

    /// `:print args...`
    ///
    /// Arguments that fail are reported and left out; the rest are printed on
    /// one line.
    fn print(&mut self, command: &Command) {
        let results = Evaluator::new(&self.bindings).eval_command(command);
        let mut printed = Vec::with_capacity(results.len());

        for result in results {
            match result {
                Ok(value) => printed.push(value.to_string()),
                Err(err) => self.report_runtime(&err),
            }
        }

        if !printed.is_empty() {
            self.println(&printed.join(" "));
        }
    }

    /// `:set $name value`
    fn set(&mut self, command: &Command) {
        if !self.check_arity(command, 2) {
            return;
        }
        let Some(name) = self.expect_variable(&command.args()[0]) else {
            return;
        };

        let arg = &command.args()[1];
        let result = Evaluator::new(&self.bindings).eval(arg);
        match result {
            Ok(value) if value.is_numeric() => {
                self.bindings.define(name, value);
            },
            Ok(value) => {
                let message = format!("`set` expects a number, found {}", value.kind());
                self.sink.report(&message, arg.column_start());
            },
            Err(err) => self.report_runtime(&err),
        }
    }

    /// `:unset $name`
    fn unset(&mut self, command: &Command) {
        if !self.check_arity(command, 1) {
            return;
        }
        let arg = &command.args()[0];
        let Some(name) = self.expect_variable(arg) else {
            return;
        };

        if self.bindings.remove(&name).is_none() {
            let err = RuntimeError::UnresolvedReference { name,
                                                          span: arg.span() };
            self.report_runtime(&err);
        }
    }

    /// `:vars`
    fn vars(&mut self, command: &Command) {
        if !self.check_arity(command, 0) {
            return;
        }
        let lines: Vec<String> = self.bindings
                                     .sorted()
                                     .into_iter()
                                     .map(|(name, value)| format!("${name} = {value}"))
                                     .collect();
        for line in lines {
            self.println(&line);
        }
    }

    /// `:source path`
    ///
    /// The path is a string literal, or a bare name such as `init.s`.
    fn source(&mut self, command: &Command) {
        if !self.check_arity(command, 1) {
            return;
        }
        let arg = &command.args()[0];
        let result = Evaluator::new(&self.bindings).eval(arg);
        let value = match result {
            Ok(value) => value,
            Err(err) => {
                self.report_runtime(&err);
                return;
            },
        };
        let Some(path) = value.as_text() else {
            let message = format!("`source` expects a file name, found {}", value.kind());
            self.sink.report(&message, arg.column_start());
            return;
        };

        if let Err(err) = self.input.redirect(path) {
            self.sink.report(&err.to_string(), arg.column_start());
        }
    }

    /// `:target`
    fn target(&mut self, command: &Command) {
        if !self.check_arity(command, 0) {
            return;
        }
        let config = self.assembler.config();
        let (triple, cpu) = (config.triple.to_string(), config.cpu.clone());
        self.println(&format!("triple: {triple}"));
        self.println(&format!("cpu:    {cpu}"));
    }

    /// Reports a wrong argument count. Missing arguments are reported at the
    /// command name, extra ones at the first argument too many.
    fn check_arity(&mut self, command: &Command, expected: usize) -> bool {
        let args = command.args();
        if args.len() == expected {
            return true;
        }

        let plural = if expected == 1 { "" } else { "s" };
        let message = format!("`{}` expects {expected} argument{plural}, found {}",
                              command.name(),
                              args.len());
        let column = args.get(expected)
                         .map_or(command.span().start, Expr::column_start);
        self.sink.report(&message, column);
        false
    }

    fn expect_variable(&mut self, arg: &Expr) -> Option<String> {
        if let Expr::Variable { name, .. } = arg {
            Some(name.clone())
        } else {
            self.sink.report("expected a variable", arg.column_start());
            None
        }
    }

    fn report_runtime(&mut self, err: &RuntimeError) {
        self.sink.report(&err.to_string(), err.column());
    }
}
