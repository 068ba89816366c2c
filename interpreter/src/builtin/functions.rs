// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::{Debug, Display}, io::Write, rc::Rc};

use parlante::ValueType;

use crate::{Environment, RuntimeErrorKind, Value};

pub type BuiltinFunctionSignature = &'static dyn Fn(&mut NativeContext<'_>, Vec<Value>) -> Result<Value, RuntimeErrorKind>;

/// What a native function can reach while it runs.
pub struct NativeContext<'ctx> {
    pub output: &'ctx mut dyn Write,
    pub environment: &'ctx Rc<Environment>,
}

pub struct BuiltinFunction {
    pub name: &'static str,
    pub documentation: &'static str,
    pub function: BuiltinFunctionSignature,
}

impl Display for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}()", self.name))
    }
}

impl Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("documentation", &self.documentation)
            .field("function", &"(nativa)")
            .finish()
    }
}

pub fn imprimir(ctx: &mut NativeContext<'_>, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    for (arg_idx, arg) in args.into_iter().enumerate() {
        if arg_idx != 0 {
            write!(ctx.output, " ")?;
        }

        write!(ctx.output, "{arg}")?;
    }

    writeln!(ctx.output)?;

    Ok(Value::Null)
}

pub fn tipo_de(_: &mut NativeContext<'_>, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    let value = single_argument("tipo_de", args)?;
    Ok(Value::Text(value.value_type().name().to_string()))
}

pub fn numero(_: &mut NativeContext<'_>, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    let number = match single_argument("Numero", args)? {
        Value::Number(number) => number,
        Value::Bool(b) => if b { 1.0 } else { 0.0 },
        Value::Null => 0.0,

        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                match trimmed.parse::<f64>() {
                    Ok(number) if !number.is_nan() => number,
                    _ => return Err(RuntimeErrorKind::InvalidNumberConversion { value: format!("\"{text}\"") }),
                }
            }
        }

        other => {
            return Err(RuntimeErrorKind::InvalidConversion {
                found: other.value_type(),
                target: ValueType::Number,
            });
        }
    };

    Ok(Value::Number(number))
}

pub fn texto(_: &mut NativeContext<'_>, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    let value = single_argument("Texto", args)?;

    Ok(match value {
        Value::Text(text) => Value::Text(text),
        other => Value::Text(other.to_string()),
    })
}

pub fn booleano(_: &mut NativeContext<'_>, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    let value = single_argument("Booleano", args)?;
    Ok(Value::Bool(value.is_truthy()))
}

fn single_argument(name: &'static str, args: Vec<Value>) -> Result<Value, RuntimeErrorKind> {
    let found = args.len();

    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(RuntimeErrorKind::ArityMismatch {
            name: name.to_string(),
            expected: 1,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn call(function: fn(&mut NativeContext<'_>, Vec<Value>) -> Result<Value, RuntimeErrorKind>, args: Vec<Value>) -> (Result<Value, RuntimeErrorKind>, String) {
        let environment = Environment::new_global();
        let mut output = Vec::new();

        let result = {
            let mut ctx = NativeContext {
                output: &mut output,
                environment: &environment,
            };
            function(&mut ctx, args)
        };

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn imprimir_separates_with_spaces() {
        let (result, output) = call(imprimir, vec![
            Value::Text("a".into()),
            Value::Number(1.5),
            Value::Bool(false),
            Value::Null,
        ]);

        assert_eq!(result, Ok(Value::Null));
        assert_eq!(output, "a 1.5 falso nulo\n");
    }

    #[test]
    fn imprimir_without_arguments_prints_empty_line() {
        let (_, output) = call(imprimir, Vec::new());
        assert_eq!(output, "\n");
    }

    #[rstest]
    #[case(Value::Null, "Nulo")]
    #[case(Value::Bool(true), "Booleano")]
    #[case(Value::Number(3.0), "Numero")]
    #[case(Value::Text(String::new()), "Texto")]
    fn tipo_de_names(#[case] value: Value, #[case] expected: &str) {
        let (result, _) = call(tipo_de, vec![value]);
        assert_eq!(result, Ok(Value::Text(expected.into())));
    }

    #[rstest]
    #[case(Value::Text(" 42 ".into()), 42.0)]
    #[case(Value::Text("-2.5".into()), -2.5)]
    #[case(Value::Text(String::new()), 0.0)]
    #[case(Value::Bool(true), 1.0)]
    #[case(Value::Null, 0.0)]
    #[case(Value::Number(7.0), 7.0)]
    fn numero_conversions(#[case] value: Value, #[case] expected: f64) {
        let (result, _) = call(numero, vec![value]);
        assert_eq!(result, Ok(Value::Number(expected)));
    }

    #[rstest]
    #[case(Value::Text("hola".into()))]
    #[case(Value::Text("NaN".into()))]
    #[case(Value::new_object(Default::default()))]
    fn numero_rejects(#[case] value: Value) {
        let (result, _) = call(numero, vec![value]);
        assert!(result.is_err());
    }

    #[test]
    fn texto_renders() {
        let (result, _) = call(texto, vec![Value::Number(10.0)]);
        assert_eq!(result, Ok(Value::Text("10".into())));
    }

    #[rstest]
    #[case(Vec::new(), 0)]
    #[case(vec![Value::Null, Value::Null], 2)]
    fn casts_require_one_argument(#[case] args: Vec<Value>, #[case] found: usize) {
        let (result, _) = call(booleano, args);
        assert_eq!(result, Err(RuntimeErrorKind::ArityMismatch { name: "Booleano".into(), expected: 1, found }));
    }
}
