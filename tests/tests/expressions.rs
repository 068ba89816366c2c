// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use parlante_interpreter::Value;
use rstest::rstest;
use tests::{interpret_and_return_value, interpret_expression, interpret_with_interpreter};

#[rstest]
#[case("10", Value::Number(10.0))]
#[case("5 + 2", Value::Number(7.0))]
#[case("4 * 9", Value::Number(36.0))]
#[case("52 % 30", Value::Number(22.0))]
#[case("7 / 2", Value::Number(3.5))]
#[case("2 ^ 0.5", Value::Number(2f64.powf(0.5)))]
#[case("5.5 % 2", Value::Number(1.5))]
#[case("-5", Value::Number(-5.0))]
#[case("10 - 5", Value::Number(5.0))]
fn binary_operations(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("10 * 4 + 5", Value::Number(45.0))]
#[case("10 + 4 + 5", Value::Number(19.0))]
#[case("10 + 4 * 5", Value::Number(30.0))]
#[case("(10 + 4) * 5", Value::Number(70.0))]
#[case("2 * 3 ^ 2", Value::Number(18.0))]
#[case("1 + 2 == 3", Value::Bool(true))]
#[case("1 < 2 y 2 < 3", Value::Bool(true))]
fn pemdas(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case(2.0, 10.0)]
#[case(1.5, -2.0)]
#[case(-3.0, 3.0)]
#[case(9.0, 0.5)]
fn power_and_remainder_follow_ieee(#[case] a: f64, #[case] b: f64) {
    let power = interpret_expression(&format!("{a} ^ {b}"));
    assert_eq!(power, Value::Number(a.powf(b)));

    let remainder = interpret_expression(&format!("{a} % {b}"));
    assert_eq!(remainder, Value::Number(a % b));
}

#[rstest]
#[case("\"a\" == \"a\"", Value::Bool(true))]
#[case("\"a\" != \"b\"", Value::Bool(true))]
#[case("nulo == nulo", Value::Bool(true))]
#[case("0 == falso", Value::Bool(false))]
#[case("imprimir == imprimir", Value::Bool(true))]
#[case("\"par\" + \"lante\"", Value::Text("parlante".into()))]
fn equality_and_text(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[test]
fn program_value_is_last_expression() {
    let value = interpret_and_return_value("
        fun suma(a: Numero, b: Numero): Numero {
            devolver a + b;
        }
        suma(2, 3);
    ");

    assert_eq!(value, Value::Number(5.0));
}

#[test]
fn terminating_loop_evaluates_to_null() {
    let value = interpret_and_return_value("mientras (verdadero) hacer { romper; }");
    assert_eq!(value, Value::Null);
}

#[test]
fn globals_survive_the_program() {
    let interpreter = interpret_with_interpreter("
        var total = 0;
        var i = 1;
        mientras (i <= 4) hacer {
            total = total + i;
            i = i + 1;
        }
    ");

    assert_eq!(interpreter.globals().lookup("total"), Ok(Value::Number(10.0)));
    assert!(interpreter.into_output().is_empty());
}
