// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use parlante::{ErrorCategory, FileLocation};
use parlante_interpreter::Error;
use rstest::rstest;
use tests::{interpret_and_return_error, interpret_and_return_error_category, with_large_stack};

#[rstest]
#[case("imprimir(\"hola);")]
#[case("var a = 1 # 2;")]
#[case("var x;")]
#[case("const x: Numero;")]
#[case("sino { }")]
#[case("mientras (verdadero) { }")]
#[case("imprimir(1)")]
#[case("1 = 2;")]
#[case("var a = 1 -2;")]
fn syntax_errors(#[case] input: &str) {
    assert_eq!(interpret_and_return_error_category(input), ErrorCategory::SyntaxError);
}

#[rstest]
#[case("imprimir(y);")]
#[case("var a: Numero; imprimir(a);")]
#[case("const o = { x: 1 }; imprimir(o.y);")]
#[case("z = 1;")]
#[case("si (verdadero) { var local = 1; } imprimir(local);")]
fn reference_errors(#[case] input: &str) {
    assert_eq!(interpret_and_return_error_category(input), ErrorCategory::ReferenceError);
}

#[rstest]
#[case("const x = 1; x = 2;")]
#[case("var a = 1; a = \"uno\";")]
#[case("var a = 1; var a = 2;")]
#[case("var a: Texto = 1;")]
#[case("fun f(a: Numero): Nulo { } f(1, 2);")]
#[case("fun f(a: Numero): Nulo { } f(\"1\");")]
#[case("fun f(): Nulo { } f = 1;")]
#[case("var n = 1; n();")]
#[case("1 + verdadero;")]
#[case("verdadero y 1;")]
#[case("mientras (1) hacer { }")]
#[case("devolver 1;")]
#[case("continuar;")]
#[case("Numero(\"abc\");")]
#[case("tipo_de();")]
#[case("verdadero = falso;")]
fn type_errors(#[case] input: &str) {
    assert_eq!(interpret_and_return_error_category(input), ErrorCategory::TypeError);
}

#[test]
fn call_depth_is_limited() {
    let category = with_large_stack(|| {
        interpret_and_return_error_category("
            fun infinito(n: Numero): Numero {
                devolver infinito(n + 1);
            }
            infinito(0);
        ")
    });

    assert_eq!(category, ErrorCategory::InternalError);
}

#[test]
fn arity_is_checked_before_arguments_run() {
    let (error, lines) = interpret_and_return_error("
        fun f(a: Numero): Nulo { }
        f(imprimir(\"no\"), 2);
    ");

    assert_eq!(error.category(), ErrorCategory::TypeError);
    assert!(lines.is_empty(), "{lines:?}");
}

#[test]
fn output_before_error_is_kept() {
    let (error, lines) = interpret_and_return_error("
        imprimir(\"uno\");
        const x = 1;
        x = 2;
        imprimir(\"dos\");
    ");

    assert_eq!(error.category(), ErrorCategory::TypeError);
    assert_eq!(lines, vec!["uno".to_string()]);
}

#[test]
fn syntax_error_stops_before_running() {
    let (error, lines) = interpret_and_return_error("imprimir(1); imprimir(2)");

    assert!(matches!(error, Error::Parse(..)));
    assert!(lines.is_empty());
}

#[test]
fn undeclared_error_points_at_name() {
    let (error, _) = interpret_and_return_error("var a = 1;\nimprimir(b);");

    let range = error.range();
    assert_eq!(range.start(), FileLocation::new(20, 2, 10));
    assert_eq!(range.len(), 1);
}

#[test]
fn rendered_error_mentions_location() {
    let (error, _) = interpret_and_return_error("var a = 1;\nimprimir(b);");
    let source_code = parlante::SourceCode::new_test("var a = 1;\nimprimir(b);");

    let mut buffer = Vec::new();
    error.printer(&source_code)
        .color(false)
        .print_to(&mut buffer)
        .unwrap();

    let rendered = String::from_utf8(buffer).unwrap();
    assert!(rendered.starts_with("Error de referencia: "), "{rendered}");
    assert!(rendered.contains("2 | imprimir(b);"), "{rendered}");
    assert!(rendered.contains("En prueba.par:2:10"), "{rendered}");
}
