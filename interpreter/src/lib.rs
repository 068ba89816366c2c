// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod builtin;
mod config;
mod environment;
mod error;
mod interpreter;
mod logger;
mod value;

use std::io::Write;

use log::debug;
use parlante::{Lexer, Parser, SourceCode};

pub use parlante;

pub use self::{
    builtin::{Builtin, BuiltinFunction, BuiltinFunctionSignature, NativeContext},
    config::{ConfigRoot, ConfigSectionLog, ConfigSectionOutput},
    environment::{Environment, ScopeKind},
    error::{Error, ErrorPrinter, RuntimeError, RuntimeErrorKind},
    interpreter::{Interpreter, Signal},
    logger::Logger,
    value::{FunctionValue, ObjectFields, Value},
};

/// Stack size for the thread running a program. Every nested call of the
/// program takes several native frames, see [`Interpreter::MAX_CALL_DEPTH`].
pub const INTERPRETER_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Lexes, parses and executes `source_code`, writing program output to
/// `output`. Returns the value of the program.
pub fn run<W: Write>(source_code: &SourceCode, output: W) -> Result<Value, Error> {
    let tokens = Lexer::new(source_code.contents()).tokenize()?;
    debug!("{} tokens in {}", tokens.len(), source_code.path().display());

    let program = Parser::new(&tokens).parse_program()?;
    debug!("{} top-level statements", program.statements.len());

    let mut interpreter = Interpreter::new(output);
    Ok(interpreter.execute_program(&program)?)
}
