// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use parlante::{ErrorCategory, SourceCode};
use parlante_interpreter::{Error, Interpreter, Value, INTERPRETER_STACK_SIZE};

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter(None, log::LevelFilter::max())
        .try_init();
}

fn run(input: &str) -> (Result<Value, Error>, Vec<String>) {
    init_logger();

    let source_code = SourceCode::new_test(input);
    let mut buffer = Vec::new();
    let result = parlante_interpreter::run(&source_code, &mut buffer);

    let stdout = String::from_utf8(buffer).expect("la salida debe ser UTF-8");
    let lines = stdout.lines().map(|line| line.to_string()).collect();

    (result, lines)
}

/// Runs the program and returns every line it printed.
pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    match run(input) {
        (Ok(..), lines) => lines,
        (Err(e), lines) => panic!("Error inesperado: {e} (salida hasta ahora: {lines:?})"),
    }
}

/// Runs the program and returns its final value, i.e. the value of its last
/// expression statement.
pub fn interpret_and_return_value(input: &str) -> Value {
    match run(input) {
        (Ok(value), _) => value,
        (Err(e), _) => panic!("Error inesperado: {e}"),
    }
}

/// Evaluates a single expression.
pub fn interpret_expression(input: &str) -> Value {
    interpret_and_return_value(&format!("{input};"))
}

/// Runs a program that is expected to fail, and returns the error together
/// with the lines it printed before failing.
pub fn interpret_and_return_error(input: &str) -> (Error, Vec<String>) {
    match run(input) {
        (Ok(value), lines) => panic!("Se esperaba un error, pero el programa devolvió {value} (salida: {lines:?})"),
        (Err(e), lines) => (e, lines),
    }
}

/// Runs a program that is expected to fail and returns the category of the
/// error.
pub fn interpret_and_return_error_category(input: &str) -> ErrorCategory {
    interpret_and_return_error(input).0.category()
}

/// Runs `input` with a fresh interpreter that is kept around, so tests can
/// inspect the globals afterwards.
pub fn interpret_with_interpreter(input: &str) -> Interpreter<Vec<u8>> {
    init_logger();

    let tokens = parlante::Lexer::new(input).tokenize().expect("lexer");
    let program = parlante::Parser::new(&tokens).parse_program().expect("parser");

    let mut interpreter = Interpreter::new(Vec::new());
    if let Err(e) = interpreter.execute_program(&program) {
        panic!("Error inesperado: {e}");
    }

    interpreter
}

/// Runs `f` on a thread with the stack the `parlante` binary uses, for
/// programs that recurse deeply.
pub fn with_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(INTERPRETER_STACK_SIZE)
        .spawn(f)
        .expect("no se pudo crear el hilo")
        .join()
        .expect("el hilo del intérprete falló")
}
