// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod functions;

use log::trace;
use parlante::ValueType;

pub use self::functions::{BuiltinFunction, BuiltinFunctionSignature, NativeContext};

use crate::{Environment, RuntimeErrorKind, Value};

pub struct Builtin;

impl Builtin {
    pub const FUNCTIONS: &'static [BuiltinFunction] = &[
        BuiltinFunction {
            name: "imprimir",
            documentation: "Escribe los argumentos, separados por espacios, en la salida",
            function: &functions::imprimir,
        },
        BuiltinFunction {
            name: "tipo_de",
            documentation: "Devuelve el nombre del tipo del valor como Texto",
            function: &functions::tipo_de,
        },
        BuiltinFunction {
            name: "Numero",
            documentation: "Convierte un valor a Numero",
            function: &functions::numero,
        },
        BuiltinFunction {
            name: "Texto",
            documentation: "Convierte un valor a Texto",
            function: &functions::texto,
        },
        BuiltinFunction {
            name: "Booleano",
            documentation: "Convierte un valor a Booleano",
            function: &functions::booleano,
        },
    ];

    #[must_use]
    pub fn values() -> [(&'static str, Value); 3] {
        [
            ("nulo", Value::Null),
            ("verdadero", Value::Bool(true)),
            ("falso", Value::Bool(false)),
        ]
    }

    /// Declares every built-in value and function as a constant in `env`.
    pub fn install(env: &Environment) -> Result<(), RuntimeErrorKind> {
        for (name, value) in Self::values() {
            env.declare(name, Some(value), None, true)?;
        }

        for function in Self::FUNCTIONS {
            env.declare(function.name, Some(Value::NativeFunction(function)), Some(ValueType::Function), true)?;
        }

        trace!("Installed {} built-in functions", Self::FUNCTIONS.len());
        Ok(())
    }
}
