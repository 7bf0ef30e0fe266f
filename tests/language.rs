use asmrepl::{
    ast::{Expr, Span},
    diagnostic::{CollectingSink, Diagnostic},
    error::RuntimeErrorKind,
    interpreter::{
        environment::Bindings,
        evaluator::core::{EvalResult, evaluate},
        lexer::{TokenKind, tokenize},
        parser::{core::Parser, parse_line},
        value::core::Value,
    },
};

fn parse(src: &str) -> Expr {
    let mut sink = CollectingSink::default();
    let expr = Parser::new(src, &mut sink).parse_expression()
                                          .unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"));
    assert!(sink.is_empty(), "`{src}` reported {:?}", sink.diagnostics());
    expr
}

fn eval_with(src: &str, bindings: &Bindings) -> EvalResult<Value> {
    parse(src).eval(bindings)
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    let expected = expected.into();
    match eval_with(src, &Bindings::new()) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: RuntimeErrorKind) {
    match eval_with(src, &Bindings::new()) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "`{src}` failed with {e}"),
    }
}

fn parse_command(line: &str) -> (Option<asmrepl::ast::Command>, Vec<Diagnostic>) {
    let mut sink = CollectingSink::default();
    let command = parse_line(line, &mut sink);
    (command, sink.take())
}

fn diagnostic(message: &str, column: usize) -> Diagnostic {
    Diagnostic { message: message.to_string(),
                 column }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1 + 2 * 3", 7);
    assert_value("1 * 2 + 3", 5);
    assert_value("(1 + 2) * 3", 9);
    assert_value("2 * 3 % 4", 2);
}

#[test]
fn operators_are_left_associative() {
    assert_value("10 - 4 - 3", 3);
    assert_value("64 / 4 / 2", 8);
    assert_value("1 << 2 << 3", 32);
    assert_eq!(parse("10 - 4 - 3").to_string(), "((10 - 4) - 3)");
}

#[test]
fn precedence_table_ordering() {
    assert_eq!(parse("1 + 2 * 3 - 4").to_string(), "((1 + (2 * 3)) - 4)");
    assert_value("1 << 2 + 1", 8);
    assert_value("1 + 2 == 3", 1);
    assert_value("1 < 2 == 1", 1);
    assert_value("1 & 3 == 3", 1);
    assert_value("1 | 2 ^ 3 & 4", 3);
    assert_value("0 || 1 && 0", 0);
    assert_eq!(parse("$a || $b && $c | $d").to_string(), "($a || ($b && ($c | $d)))");
}

#[test]
fn unary_operators_nest() {
    assert_value("- - 5", 5);
    assert_value("-(2 + 3)", -5);
    assert_value("+7", 7);
    assert_value("~0", -1);
    assert_value("!0", 1);
    assert_value("!2.5", 0);
    assert_value("!\"\"", 1);
    assert_value("!rax", 0);
    assert_value("-1.5", -1.5);
    assert_eq!(parse("- -5").to_string(), "(-(-5))");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_value("0x7fffffffffffffff + 1", i64::MIN);
    assert_value("-0x8000000000000000", i64::MIN);
    assert_value("-0x8000000000000000 / -1", i64::MIN);
    assert_value("0xffffffffffffffff", -1);
}

#[test]
fn integer_division_truncates() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("-7 % 3", -1);
}

#[test]
fn floats_promote_integers() {
    assert_value("1 + 2.5", 3.5);
    assert_value("7.0 / 2", 3.5);
    assert_value("2 * .5", 1.0);
    assert_value("1e3 - 1", 999.0);
    assert_value("5.5 % 2", 1.5);
    assert_value("1 == 1.0", 1);
    assert_value("2 > 1.5", 1);
}

#[test]
fn radix_literals() {
    assert_value("0x10 + 0b101 + 0o17", 36);
    assert_value("0XFF", 255);
}

#[test]
fn division_by_zero_is_an_arithmetic_fault() {
    assert_failure("5 / 0", RuntimeErrorKind::ArithmeticFault);
    assert_failure("5 % 0", RuntimeErrorKind::ArithmeticFault);
    assert_failure("1.0 / 0", RuntimeErrorKind::ArithmeticFault);
    assert_failure("1 % 0.0", RuntimeErrorKind::ArithmeticFault);
}

#[test]
fn shifts() {
    assert_value("1 << 63", i64::MIN);
    assert_value("-16 >> 2", -4);
    assert_value("0x10 >> 4", 1);
    assert_failure("1 << 64", RuntimeErrorKind::ArithmeticFault);
    assert_failure("1 >> -1", RuntimeErrorKind::ArithmeticFault);
    assert_failure("1.0 << 1", RuntimeErrorKind::TypeMismatch);
}

#[test]
fn bitwise_operators_need_integers() {
    assert_value("0xf0 | 0x0f", 0xff);
    assert_value("0xff & 0x0f", 0x0f);
    assert_value("0xff ^ 0x0f", 0xf0);
    assert_failure("1 & 1.0", RuntimeErrorKind::TypeMismatch);
    assert_failure("~1.5", RuntimeErrorKind::TypeMismatch);
}

#[test]
fn comparisons_yield_integers() {
    assert_value("3 > 2", 1);
    assert_value("3 < 2", 0);
    assert_value("2 >= 2", 1);
    assert_value("2 <= 1", 0);
    assert_value("2 != 2", 0);
}

#[test]
fn strings_and_identifiers_only_compare_for_equality() {
    assert_value("\"a\" == \"a\"", 1);
    assert_value("\"a\" != \"b\"", 1);
    assert_value("rax == rax", 1);
    assert_value("rax == rbx", 0);
    assert_failure("\"a\" + 1", RuntimeErrorKind::TypeMismatch);
    assert_failure("\"a\" < \"b\"", RuntimeErrorKind::TypeMismatch);
    assert_failure("rax == \"rax\"", RuntimeErrorKind::TypeMismatch);
    assert_failure("-\"x\"", RuntimeErrorKind::TypeMismatch);
    assert_failure("+rax", RuntimeErrorKind::TypeMismatch);
}

#[test]
fn string_escapes_are_decoded() {
    assert_value("\"a\\tb\\\"c\\\\\"", Value::String("a\tb\"c\\".to_string()));
}

#[test]
fn logical_operators_use_truthiness() {
    assert_value("2 && 0.5", 1);
    assert_value("0 || 0.0", 0);
    assert_value("0 || 3", 1);
    assert_failure("\"a\" && 1", RuntimeErrorKind::TypeMismatch);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_failure("0 && $missing", RuntimeErrorKind::UnresolvedReference);
    assert_failure("1 || 1 / 0", RuntimeErrorKind::ArithmeticFault);
}

#[test]
fn variables_resolve_through_the_environment() {
    let mut bindings = Bindings::new();
    bindings.define("rsp", Value::Integer(0x1000));
    bindings.define("scale", Value::Float(0.5));
    bindings.define("name", Value::from("text"));

    assert_eq!(eval_with("$rsp - 8", &bindings), Ok(Value::Integer(0xff8)));
    assert_eq!(eval_with("$rsp * $scale", &bindings), Ok(Value::Float(2048.0)));

    let err = eval_with("$rbp + 1", &bindings).unwrap_err();
    assert_eq!(err.kind(), RuntimeErrorKind::UnresolvedReference);
    assert_eq!(err.to_string(), "unresolved reference to `$rbp`");

    let err = eval_with("$name", &bindings).unwrap_err();
    assert_eq!(err.kind(), RuntimeErrorKind::TypeMismatch);
}

#[test]
fn spans_cover_their_source() {
    assert_eq!(parse("(1 + 2)").span(), Span::new(0, 6));
    assert_eq!(parse("-5").span(), Span::new(0, 1));
    assert_eq!(parse("$abc == 10").span(), Span::new(0, 9));
    assert_eq!(parse("~ (1)").span(), Span::new(0, 4));
    assert_eq!(parse("(1) + 2").span(), Span::new(0, 6));
    assert_eq!(parse("-(2 + 3)").span(), Span::new(0, 7));
    assert_eq!(parse("((rax))").span(), Span::new(0, 6));

    let Expr::BinaryOp { op_span, .. } = parse("12 << 3") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op_span, Span::new(3, 4));

    let Expr::BinaryOp { op_span, span, .. } = parse("(1 + 2)") else {
        panic!("expected a binary operation");
    };
    assert_eq!((op_span, span), (Span::new(3, 3), Span::new(0, 6)));
}

#[test]
fn unary_span_encloses_a_parenthesized_operand() {
    let Expr::UnaryOp { expr, span, .. } = parse("- (4)") else {
        panic!("expected a unary operation");
    };
    assert_eq!(span, Span::new(0, 4));
    assert_eq!(expr.span(), Span::new(2, 4));
}

#[test]
fn errors_point_at_the_operator() {
    let mut sink = CollectingSink::default();
    let command = parse_line("print (5 / 0) (1 + $x)", &mut sink).unwrap();
    let results = evaluate(&command, &Bindings::new());

    assert_eq!(results[0].as_ref().unwrap_err().column(), 9);
    assert_eq!(results[1].as_ref().unwrap_err().column(), 19);
}

#[test]
fn parenthesized_argument_is_one_argument() {
    let (command, diagnostics) = parse_command("cmd (1 + 2)");
    let command = command.unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(command.args().len(), 1);
    assert_eq!(evaluate(&command, &Bindings::new()), [Ok(Value::Integer(3))]);
}

#[test]
fn bare_arguments_stop_at_binary_operators() {
    let (command, diagnostics) = parse_command("cmd 1 + 2");
    let command = command.unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(evaluate(&command, &Bindings::new()),
               [Ok(Value::Integer(1)), Ok(Value::Integer(2))]);

    let (command, diagnostics) = parse_command("cmd 1 * 2");
    assert_eq!(command.unwrap().args().len(), 2);
    assert_eq!(diagnostics, [diagnostic("expected primary expression", 6)]);
}

#[test]
fn command_name_is_required() {
    let (command, diagnostics) = parse_command("(1 + 2)");
    assert!(command.is_none());
    assert_eq!(diagnostics, [diagnostic("expected command", 0)]);

    let (command, diagnostics) = parse_command("");
    assert!(command.is_none());
    assert_eq!(diagnostics, [diagnostic("expected command", 0)]);
}

#[test]
fn name_only_command_is_valid() {
    let (command, diagnostics) = parse_command("  vars");
    let command = command.unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(command.name(), "vars");
    assert_eq!(command.span(), Span::new(2, 5));
    assert!(command.args().is_empty());
}

#[test]
fn unclosed_paren_is_reported_at_the_open_paren() {
    let (command, diagnostics) = parse_command("print 1 (1 + 2");

    assert_eq!(command.unwrap().args().len(), 1);
    assert_eq!(diagnostics, [diagnostic("unmatched parentheses", 8)]);
}

#[test]
fn each_bad_argument_is_reported_once() {
    let (command, diagnostics) = parse_command("print @ 1 ) 2 +");

    let command = command.unwrap();
    assert_eq!(command.args().len(), 2);
    assert_eq!(diagnostics,
               [diagnostic("invalid character in input", 6),
                diagnostic("unmatched parentheses", 10),
                diagnostic("expected primary expression", 15)]);
}

#[test]
fn inner_error_skips_one_token() {
    let (command, diagnostics) = parse_command("print (1 2) 3");

    let args: Vec<String> = command.unwrap().args().iter().map(ToString::to_string).collect();
    assert_eq!(args, ["3"]);
    assert_eq!(diagnostics,
               [diagnostic("unmatched parentheses", 6), diagnostic("unmatched parentheses", 10)]);
}

#[test]
fn literal_errors() {
    let (_, diagnostics) = parse_command("print 99999999999999999999 \"open");
    assert_eq!(diagnostics,
               [diagnostic("integer literal out of range", 6),
                diagnostic("unterminated string literal", 27)]);
}

#[test]
fn arguments_keep_their_order() {
    let (command, _) = parse_command("print rax \"s\" 2.5 $v -1");
    let args: Vec<String> = command.unwrap().args().iter().map(ToString::to_string).collect();

    assert_eq!(args, ["rax", "\"s\"", "2.5", "$v", "(-1)"]);
}

#[test]
fn failing_arguments_do_not_stop_the_others() {
    let (command, _) = parse_command("print 1 (2 / 0) 3");
    let results = evaluate(&command.unwrap(), &Bindings::new());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Ok(Value::Integer(1)));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(Value::Integer(3)));
}

#[test]
fn long_prefix_chain_is_rejected_once() {
    let line = format!("print {}1 2", "-".repeat(200_000));
    let (command, diagnostics) = parse_command(&line);

    let args: Vec<String> = command.unwrap().args().iter().map(ToString::to_string).collect();
    assert_eq!(args, ["2"]);
    assert_eq!(diagnostics, [diagnostic("expression nested too deeply", 6 + 256)]);
}

#[test]
fn deep_parentheses_are_skipped_as_one_argument() {
    let line = format!("print {}1{} 7", "(".repeat(5000), ")".repeat(5000));
    let (command, diagnostics) = parse_command(&line);

    let args: Vec<String> = command.unwrap().args().iter().map(ToString::to_string).collect();
    assert_eq!(args, ["7"]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expression nested too deeply");
}

#[test]
fn tall_operator_chain_is_rejected() {
    let chain = vec!["1"; 300].join(" + ");
    let (command, diagnostics) = parse_command(&format!("print ({chain}) 5"));

    let args: Vec<String> = command.unwrap().args().iter().map(ToString::to_string).collect();
    assert_eq!(args, ["5"]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "expression nested too deeply");

    let chain = vec!["1"; 200].join(" + ");
    assert_value(&format!("({chain})"), 200);
}

#[test]
fn moderate_nesting_still_parses() {
    let line = format!("{}-1{}", "(".repeat(100), ")".repeat(100));
    assert_value(&line, -1);
    assert_value(&format!("{}5", "- ".repeat(100)), 5);
}

#[test]
fn columns_count_characters_not_bytes() {
    let tokens = tokenize("print \"é\" é $x 1");
    let columns: Vec<(TokenKind, usize, usize)> =
        tokens.iter().map(|t| (t.kind, t.column_start, t.column_end)).collect();

    assert_eq!(columns,
               [(TokenKind::Identifier, 0, 4),
                (TokenKind::String, 6, 8),
                (TokenKind::Unknown, 10, 10),
                (TokenKind::Variable, 12, 13),
                (TokenKind::Integer, 15, 15),
                (TokenKind::Eof, 16, 16)]);
}

#[test]
fn columns_stay_exact_on_long_lines() {
    let line = format!("{}$x", "é ".repeat(50_000));
    let tokens = tokenize(&line);

    assert_eq!(tokens.len(), 50_002);
    assert_eq!(tokens[49_999].column_start, 99_998);
    let variable = &tokens[50_000];
    assert_eq!((variable.kind, variable.column_start, variable.column_end),
               (TokenKind::Variable, 100_000, 100_001));
}
