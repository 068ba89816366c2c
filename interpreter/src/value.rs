// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::BTreeMap, fmt::{Debug, Display, Write}, rc::Rc};

use parlante::{FunctionDefinition, ValueType};

use crate::{BuiltinFunction, Environment};

pub type ObjectFields = Rc<RefCell<BTreeMap<String, Value>>>;

#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),

    /// Objects are shared: assigning one to another variable aliases it.
    Object(ObjectFields),

    NativeFunction(&'static BuiltinFunction),
    Function(Rc<FunctionValue>),
}

impl Value {
    #[must_use]
    pub fn new_object(fields: BTreeMap<String, Value>) -> Self {
        Self::Object(Rc::new(RefCell::new(fields)))
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(..) => ValueType::Boolean,
            Self::Number(..) => ValueType::Number,
            Self::Text(..) => ValueType::Text,
            Self::Object(..) => ValueType::Object,
            Self::NativeFunction(..) => ValueType::Function,
            Self::Function(..) => ValueType::Function,
        }
    }

    /// Equality as seen by `==`. Values of differing types are never equal,
    /// objects and functions compare by identity.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(this), Self::Bool(that)) => this == that,
            (Self::Number(this), Self::Number(that)) => this == that,
            (Self::Text(this), Self::Text(that)) => this == that,
            (Self::Object(this), Self::Object(that)) => Rc::ptr_eq(this, that),
            (Self::NativeFunction(this), Self::NativeFunction(that)) => this.name == that.name,
            (Self::Function(this), Self::Function(that)) => Rc::ptr_eq(this, that),
            _ => false,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Used by `Booleano(..)`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::Object(..) | Self::NativeFunction(..) | Self::Function(..) => true,
        }
    }

    fn fmt_nested(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => {
                f.write_char('"')?;
                f.write_str(text)?;
                f.write_char('"')
            }

            _ => Display::fmt(self, f),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("nulo"),
            Self::Bool(true) => f.write_str("verdadero"),
            Self::Bool(false) => f.write_str("falso"),
            Self::Number(number) => fmt_number(*number, f),
            Self::Text(text) => f.write_str(text),

            Self::Object(fields) => {
                let fields = fields.borrow();
                if fields.is_empty() {
                    return f.write_str("{}");
                }

                f.write_str("{ ")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }

                    f.write_str(key)?;
                    f.write_str(": ")?;
                    value.fmt_nested(f)?;
                }
                f.write_str(" }")
            }

            Self::NativeFunction(function) => {
                f.write_fmt(format_args!("fun {}(...)", function.name))
            }

            Self::Function(function) => Display::fmt(function, f),
        }
    }
}

fn fmt_number(number: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if number.is_nan() {
        f.write_str("NaN")
    } else if number == f64::INFINITY {
        f.write_str("Infinito")
    } else if number == f64::NEG_INFINITY {
        f.write_str("-Infinito")
    } else {
        Display::fmt(&number, f)
    }
}

/// A function created by a declaration or a literal, together with the
/// scope it was created in.
pub struct FunctionValue {
    pub name: Option<String>,
    pub definition: Rc<FunctionDefinition>,
    pub parameters: Vec<(String, ValueType)>,
    pub return_type: Option<ValueType>,
    pub closure: Rc<Environment>,
}

impl FunctionValue {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anónima>")
    }
}

impl Display for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("fun ")?;

        if let Some(name) = &self.name {
            f.write_str(name)?;
        }

        f.write_char('(')?;
        for (idx, (name, ty)) in self.parameters.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            f.write_fmt(format_args!("{name}: {ty}"))?;
        }
        f.write_char(')')?;

        if let Some(return_type) = &self.return_type {
            f.write_fmt(format_args!(": {return_type}"))?;
        }

        Ok(())
    }
}

impl Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .field("closure", &self.closure.kind())
            .finish_non_exhaustive()
    }
}
