// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::{interpret_and_return_stdout, with_large_stack};

#[rstest]
#[case(
    r#"
        imprimir("¡Hola!");
    "#,
    &[
        "¡Hola!",
    ],
)]
#[case(
    r#"
        fun suma(a: Numero, b: Numero): Numero {
            devolver a + b;
        }

        imprimir(suma(2, 3));
    "#,
    &[
        "5",
    ],
)]
#[case(
    r#"
        var i = 0;
        mientras (i < 3) hacer {
            imprimir(i);
            i = i + 1;
        }
    "#,
    &[
        "0",
        "1",
        "2",
    ],
)]
#[case(
    r#"
        var i = 0;
        mientras (verdadero) hacer {
            si (i == 2) {
                romper;
            }

            imprimir(i);
            i = i + 1;
        }
        imprimir("fin");
    "#,
    &[
        "0",
        "1",
        "fin",
    ],
)]
#[case(
    r#"
        var i = 0;
        mientras (i < 5) hacer {
            i = i + 1;
            si (i % 2 == 0) {
                continuar;
            }
            imprimir(i);
        }
    "#,
    &[
        "1",
        "3",
        "5",
    ],
)]
#[case(
    r#"
        fun clasificar(n: Numero): Texto {
            si (n < 0) {
                devolver "negativo";
            } pero_si (n == 0) {
                devolver "cero";
            } sino {
                devolver "positivo";
            }
        }

        imprimir(clasificar(-3));
        imprimir(clasificar(0));
        imprimir(clasificar(7));
    "#,
    &[
        "negativo",
        "cero",
        "positivo",
    ],
)]
#[case(
    r#"
        fun factorial(n: Numero): Numero {
            si (n <= 1) {
                devolver 1;
            }

            devolver n * factorial(n - 1);
        }

        imprimir(factorial(5));
    "#,
    &[
        "120",
    ],
)]
#[case(
    r#"
        /* a /* b */ c */ imprimir(1);
        // imprimir(2);
    "#,
    &[
        "1",
    ],
)]
#[case(
    r#"
        var a = 1;
        si (verdadero) {
            var a = 2;
            imprimir(a);
        }
        imprimir(a);
    "#,
    &[
        "2",
        "1",
    ],
)]
fn control_flow(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.into_iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        fun crear_contador(): Funcion {
            var cuenta = 0;
            devolver fun (): Numero {
                cuenta = cuenta + 1;
                devolver cuenta;
            };
        }

        const contador = crear_contador();
        imprimir(contador());
        imprimir(contador());

        const otro = crear_contador();
        imprimir(otro());
        imprimir(contador());
    "#,
    &[
        "1",
        "2",
        "1",
        "3",
    ],
)]
#[case(
    r#"
        var mensaje = "antes";
        fun leer(): Texto {
            devolver mensaje;
        }

        mensaje = "después";
        imprimir(leer());
    "#,
    &[
        "después",
    ],
)]
#[case(
    r#"
        fun sumador(a: Numero): Funcion {
            devolver fun (b: Numero): Numero {
                devolver a + b;
            };
        }

        imprimir(sumador(2)(40));
    "#,
    &[
        "42",
    ],
)]
#[case(
    r#"
        var x = 1;
        fun mostrar(): Nulo {
            imprimir(x);
        }

        fun llamar(): Nulo {
            var x = 2;
            mostrar();
        }

        llamar();
    "#,
    &[
        "1",
    ],
)]
fn closures(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.into_iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        const o = { x: 1 };
        o.x = 2;
        imprimir(o.x);
        imprimir(o["x"]);
    "#,
    &[
        "2",
        "2",
    ],
)]
#[case(
    r#"
        var x = 5;
        const o = { x, y: { z: "a" } };
        imprimir(o);
        imprimir({ });
    "#,
    &[
        r#"{ x: 5, y: { z: "a" } }"#,
        "{}",
    ],
)]
#[case(
    r#"
        const o = { interno: { valor: 1 } };
        o.interno["valor"] = o.interno.valor + 1;
        imprimir(o.interno.valor);
    "#,
    &[
        "2",
    ],
)]
#[case(
    r#"
        const a = { n: 1 };
        const b = a;
        const c = { n: 9 };
        b.n = 9;
        imprimir(a.n, a == b, a == c);
    "#,
    &[
        "9 verdadero falso",
    ],
)]
#[case(
    r#"
        const o = { saludar: fun (nombre: Texto): Texto { devolver "hola " + nombre; } };
        imprimir(o.saludar("ana"));
    "#,
    &[
        "hola ana",
    ],
)]
#[case(
    r#"
        var y = verdadero;
        const o = { y: falso };
        imprimir(y o o.y, y y o.y);
    "#,
    &[
        "verdadero falso",
    ],
)]
fn objects(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.into_iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"imprimir(tipo_de(1), tipo_de("a"), tipo_de(nulo), tipo_de({ }), tipo_de(imprimir), tipo_de(falso));"#,
    &[
        "Numero Texto Nulo Objeto Funcion Booleano",
    ],
)]
#[case(
    r#"
        fun suma(a: Numero, b: Numero): Numero {
            devolver a + b;
        }
        imprimir(suma);
        imprimir(fun (t: Texto) { });
        imprimir(imprimir);
    "#,
    &[
        "fun suma(a: Numero, b: Numero): Numero",
        "fun (t: Texto)",
        "fun imprimir(...)",
    ],
)]
#[case(
    r#"
        imprimir(Texto(1.5) + "!");
        imprimir(Numero(" 42 ") + 1);
        imprimir(Booleano(""), Booleano("a"), Booleano(0));
    "#,
    &[
        "1.5!",
        "43",
        "falso verdadero falso",
    ],
)]
#[case(
    r#"
        imprimir("a\tb");
        imprimir("dijo \"hola\"");
        imprimir();
        imprimir(1 / 0, -1 / 0);
    "#,
    &[
        "a\tb",
        "dijo \"hola\"",
        "",
        "Infinito -Infinito",
    ],
)]
#[case(
    r#"
        var año: Numero;
        año = 2025;
        imprimir(año);
    "#,
    &[
        "2025",
    ],
)]
fn builtins(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.into_iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn deep_recursion() {
    let lines = with_large_stack(|| {
        interpret_and_return_stdout("
            fun suma(n: Numero): Numero {
                si (n == 0) {
                    devolver 0;
                }

                devolver n + suma(n - 1);
            }

            imprimir(suma(1000));
        ")
    });

    assert_eq!(lines, vec!["500500".to_string()]);
}
