//! Property-based tests with proptest.
//!
//! Random operator chains are parsed and evaluated, then checked against a
//! reference fold that applies the precedence table directly. Random lines
//! check that the tokenizer and the recovering parser stay inside the line.

use asmrepl::{
    ast::BinaryOperator,
    diagnostic::CollectingSink,
    error::RuntimeError,
    interpreter::{
        environment::Bindings,
        evaluator::core::evaluate,
        lexer::{TokenKind, tokenize},
        parser::{core::Parser, parse_line},
        value::core::Value,
    },
};
use proptest::prelude::*;

/// Integer operators that cannot fault.
fn operator() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::BitAnd),
                Just(BinaryOperator::BitOr),
                Just(BinaryOperator::BitXor),
                Just(BinaryOperator::Equal),
                Just(BinaryOperator::Less),]
}

fn apply(op: BinaryOperator, a: i64, b: i64) -> i64 {
    match op {
        BinaryOperator::Add => a.wrapping_add(b),
        BinaryOperator::Sub => a.wrapping_sub(b),
        BinaryOperator::Mul => a.wrapping_mul(b),
        BinaryOperator::BitAnd => a & b,
        BinaryOperator::BitOr => a | b,
        BinaryOperator::BitXor => a ^ b,
        BinaryOperator::Equal => i64::from(a == b),
        BinaryOperator::Less => i64::from(a < b),
        _ => unreachable!(),
    }
}

fn eval(src: &str) -> Value {
    let mut sink = CollectingSink::default();
    let expr = Parser::new(src, &mut sink).parse_expression().unwrap();
    expr.eval(&Bindings::new()).unwrap()
}

/// Characters that exercise every token kind and the error paths.
fn line() -> impl Strategy<Value = String> {
    "[a-z0-9$\"()+*/%<>=!&|^~ .@#é-]{0,40}"
}

proptest! {
    #[test]
    fn two_operator_chains_follow_precedence(a in 0i64..1000,
                                             b in 0i64..1000,
                                             c in 0i64..1000,
                                             op1 in operator(),
                                             op2 in operator()) {
        let expected = if op2.precedence() > op1.precedence() {
            apply(op1, a, apply(op2, b, c))
        } else {
            apply(op2, apply(op1, a, b), c)
        };

        let src = format!("{a} {op1} {b} {op2} {c}");
        prop_assert_eq!(eval(&src), Value::Integer(expected));
    }

    #[test]
    fn parentheses_override_precedence(a in 0i64..1000,
                                       b in 0i64..1000,
                                       c in 0i64..1000,
                                       op1 in operator(),
                                       op2 in operator()) {
        let src = format!("{a} {op1} ({b} {op2} {c})");
        prop_assert_eq!(eval(&src), Value::Integer(apply(op1, a, apply(op2, b, c))));
    }

    #[test]
    fn subtraction_folds_left(values in prop::collection::vec(0i64..1_000_000, 1..8)) {
        let src = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" - ");
        let expected = values[1..].iter().fold(values[0], |acc, v| acc - v);

        prop_assert_eq!(eval(&src), Value::Integer(expected));
    }

    #[test]
    fn bare_integers_are_separate_arguments(values in prop::collection::vec(0i64..i64::MAX, 0..6)) {
        let line = format!("cmd {}", values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
        let mut sink = CollectingSink::default();
        let command = parse_line(&line, &mut sink).unwrap();
        let results = evaluate(&command, &Bindings::new());

        prop_assert!(sink.is_empty());
        let expected: Vec<Result<Value, RuntimeError>> = values.into_iter().map(|v| Ok(Value::Integer(v))).collect();
        prop_assert_eq!(results, expected);
    }

    #[test]
    fn tokens_stay_inside_the_line(src in line()) {
        let tokens = tokenize(&src);
        let length = src.chars().count();

        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert_eq!(last.column_start, length);

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].column_start <= pair[0].column_end);
            prop_assert!(pair[0].column_end < pair[1].column_start);
        }
    }

    #[test]
    fn diagnostics_point_into_the_line(src in line()) {
        let line = format!("cmd {src}");
        let mut sink = CollectingSink::default();
        let command = parse_line(&line, &mut sink);
        let length = line.chars().count();

        prop_assert!(command.is_some());
        for diagnostic in sink.diagnostics() {
            prop_assert!(diagnostic.column <= length);
        }
        for arg in command.unwrap().args() {
            prop_assert!(arg.column_end() < length);
        }
    }
}
