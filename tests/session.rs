use std::io::Cursor;

use asmrepl::{
    assembler::{Assembler, AssemblerConfig, UnsupportedAssembler},
    error::{AssembleError, InputError},
    input::{InputStack, MAX_DEPTH, MemoryReader},
    interpreter::value::core::Value,
    repl::{Flow, Session},
};
use target_lexicon::Triple;

/// Knows two x86 instructions.
struct TinyAssembler {
    config: AssemblerConfig,
}

impl Assembler for TinyAssembler {
    fn assemble(&mut self, line: &str) -> Result<Vec<u8>, AssembleError> {
        let mnemonic = line.trim();
        match mnemonic {
            "nop" => Ok(vec![0x90]),
            "ret" => Ok(vec![0xc3]),
            "" => Ok(Vec::new()),
            _ => Err(AssembleError::new("invalid instruction mnemonic",
                                        line.len() - line.trim_start().len())),
        }
    }

    fn config(&self) -> &AssemblerConfig {
        &self.config
    }
}

fn tiny_assembler() -> Box<dyn Assembler> {
    let triple: Triple = "x86_64-unknown-linux-gnu".parse().unwrap();
    Box::new(TinyAssembler { config: AssemblerConfig::new(triple, "skylake") })
}

/// Runs `script` as terminal input and returns what was printed and what was
/// reported.
fn run(script: &str) -> (String, String) {
    let input = InputStack::new(Box::new(MemoryReader::new(script)));
    let mut session = Session::new(input, tiny_assembler(), Vec::new(), Vec::new(), false);
    session.run().unwrap();

    let (out, err) = session.into_writers();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn assert_output(script: &str, expected: &str) {
    let (out, err) = run(script);
    assert!(err.is_empty(), "unexpected diagnostics:\n{err}");
    assert_eq!(out, expected);
}

#[test]
fn instructions_print_their_encoding() {
    assert_output("nop\nret\n", "90\nc3\n");
}

#[test]
fn assembler_errors_point_at_the_column() {
    let (out, err) = run("  bogus");

    assert!(out.is_empty());
    assert_eq!(err, "<stdin>:1:3: error: invalid instruction mnemonic\n  bogus\n  ^\n");
}

#[test]
fn blank_lines_are_ignored() {
    assert_output("\n   \n:print 1\n", "1\n");
}

#[test]
fn print_evaluates_every_argument() {
    assert_output(":print 1 (2 + 3) 1.5 rax \"hi\"", "1 5 1.5 rax \"hi\"\n");
}

#[test]
fn leading_blanks_before_the_colon_keep_columns() {
    let (out, err) = run("  :print (1 / 0) 2");

    assert_eq!(out, "2\n");
    assert_eq!(err, "<stdin>:1:13: error: division by zero\n  :print (1 / 0) 2\n            ^\n");
}

#[test]
fn syntax_errors_are_reported_once_per_argument() {
    let (out, err) = run(":print 1 ) 2");

    assert_eq!(out, "1 2\n");
    assert_eq!(err, "<stdin>:1:10: error: unmatched parentheses\n:print 1 ) 2\n         ^\n");
}

#[test]
fn variables_can_be_set_printed_and_unset() {
    assert_output(":set $base 0x1000\n:set $off 8\n:print ($base + $off)\n:vars\n:unset $off\n:vars",
                  "4104\n$base = 4096\n$off = 8\n$base = 4096\n");
}

#[test]
fn set_rejects_non_numbers() {
    let (_, err) = run(":set $x \"text\"\n:set x 1");

    assert_eq!(err,
               "<stdin>:1:9: error: `set` expects a number, found string\n:set $x \"text\"\n        ^\n\
                <stdin>:2:6: error: expected a variable\n:set x 1\n     ^\n");
}

#[test]
fn unresolved_variables_are_reported() {
    let (out, err) = run(":print $nope 1\n:unset $nope");

    assert_eq!(out, "1\n");
    assert_eq!(err,
               "<stdin>:1:8: error: unresolved reference to `$nope`\n:print $nope 1\n       ^\n\
                <stdin>:2:8: error: unresolved reference to `$nope`\n:unset $nope\n       ^\n");
}

#[test]
fn wrong_argument_counts() {
    let (_, err) = run(":set $x\n:vars 1");

    assert_eq!(err,
               "<stdin>:1:2: error: `set` expects 2 arguments, found 1\n:set $x\n ^\n\
                <stdin>:2:7: error: `vars` expects 0 arguments, found 1\n:vars 1\n      ^\n");
}

#[test]
fn unknown_commands_are_reported_at_the_name() {
    let (_, err) = run(":frobnicate 1");

    assert_eq!(err, "<stdin>:1:2: error: unknown command\n:frobnicate 1\n ^\n");
}

#[test]
fn missing_command_name() {
    let (_, err) = run(":(1)");

    assert_eq!(err, "<stdin>:1:2: error: expected command\n:(1)\n ^\n");
}

#[test]
fn quit_stops_reading() {
    assert_output(":print 1\n:quit\n:print 2\n", "1\n");
    assert_output(":exit\nnop\n", "");
}

#[test]
fn target_shows_the_configuration() {
    assert_output(":target", "triple: x86_64-unknown-linux-gnu\ncpu:    skylake\n");
}

#[test]
fn help_lists_every_builtin() {
    let (out, _) = run(":help");

    for name in [":help", ":quit", ":print", ":set", ":unset", ":vars", ":source", ":target"] {
        assert!(out.contains(name), "missing {name} in:\n{out}");
    }
}

#[test]
fn source_runs_a_script_before_the_next_terminal_line() {
    assert_output(":source \"tests/scripts/include/registers.asm\"\n:print $rsp\n",
                  "90\n4096\n");
}

#[test]
fn source_reports_missing_files() {
    let (_, err) = run(":source \"no/such/file.asm\"");

    assert!(err.starts_with("<stdin>:1:9: error: could not open file `no/such/file.asm`"),
            "{err}");
}

#[test]
fn diagnostics_name_the_script_and_line() {
    let mut input = InputStack::new(Box::new(MemoryReader::default()));
    input.push_reader("boot.asm", Cursor::new("nop\n\nbad\n")).unwrap();
    let mut session = Session::new(input, tiny_assembler(), Vec::new(), Vec::new(), false);
    session.run().unwrap();

    let (out, err) = session.into_writers();
    assert_eq!(String::from_utf8(out).unwrap(), "90\n");
    assert_eq!(String::from_utf8(err).unwrap(),
               "boot.asm:3:1: error: invalid instruction mnemonic\nbad\n^\n");
}

#[test]
fn invalid_utf8_lines_do_not_end_the_script() {
    let mut input = InputStack::new(Box::new(MemoryReader::default()));
    input.push_reader("bin", Cursor::new(b"nop\n\xff\xfe\n:print 1\n".to_vec()))
         .unwrap();
    let mut session = Session::new(input, tiny_assembler(), Vec::new(), Vec::new(), false);
    session.run().unwrap();

    let (out, err) = session.into_writers();
    assert_eq!(String::from_utf8(out).unwrap(), "90\n1\n");
    assert_eq!(String::from_utf8(err).unwrap(),
               "bin:2:1: error: invalid instruction mnemonic\n\u{fffd}\u{fffd}\n^\n");
}

#[test]
fn redirection_depth_is_bounded() {
    let mut input = InputStack::new(Box::new(MemoryReader::default()));
    for i in 0..MAX_DEPTH {
        input.push_reader(format!("script{i}"), Cursor::new("")).unwrap();
    }

    assert_eq!(input.depth(), MAX_DEPTH);
    let err = input.push_reader("one too many", Cursor::new("")).unwrap_err();
    assert!(matches!(err, InputError::TooDeep { limit: MAX_DEPTH }));
    assert!(err.to_string().starts_with("input redirection stack too deep"));

    assert_eq!(input.read_line("").unwrap(), None);
    assert_eq!(input.depth(), 0);
}

#[test]
fn execute_line_reports_flow() {
    let input = InputStack::new(Box::new(MemoryReader::default()));
    let mut session = Session::new(input, tiny_assembler(), Vec::new(), Vec::new(), false);

    assert_eq!(session.execute_line(":set $rax 1"), Flow::Continue);
    assert_eq!(session.bindings().sorted(), [("rax", &Value::Integer(1))]);
    assert_eq!(session.execute_line(":quit"), Flow::Quit);
}

#[test]
fn unsupported_targets_reject_instructions() {
    let triple: Triple = "riscv64gc-unknown-linux-gnu".parse().unwrap();
    let assembler = Box::new(UnsupportedAssembler::new(AssemblerConfig::new(triple, "generic")));
    let input = InputStack::new(Box::new(MemoryReader::new("nop\n:print 1")));
    let mut session = Session::new(input, assembler, Vec::new(), Vec::new(), false);
    session.run().unwrap();

    let (out, err) = session.into_writers();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    assert!(String::from_utf8(err).unwrap()
                                  .starts_with("<stdin>:1:1: error: no code generation backend for \
                                                target `riscv64gc-unknown-linux-gnu`"));
}
