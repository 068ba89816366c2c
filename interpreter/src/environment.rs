// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, fmt::Debug, rc::Rc};

use log::trace;
use parlante::{BlockKind, ValueType};

use crate::{RuntimeErrorKind, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    If,
    While,
}

impl From<BlockKind> for ScopeKind {
    fn from(value: BlockKind) -> Self {
        match value {
            BlockKind::Function => Self::Function,
            BlockKind::If => Self::If,
            BlockKind::While => Self::While,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Binding {
    /// A `var`, whose type is fixed at declaration but whose value may be
    /// absent until the first assignment.
    Variable {
        ty: ValueType,
        value: Option<Value>,
    },

    Constant {
        ty: ValueType,
        value: Value,
    },
}

impl Binding {
    const fn value(&self) -> Option<&Value> {
        match self {
            Self::Variable { value, .. } => value.as_ref(),
            Self::Constant { value, .. } => Some(value),
        }
    }

    fn set(&mut self, name: &str, new_value: Value) -> Result<(), RuntimeErrorKind> {
        match self {
            Self::Constant { .. } => Err(RuntimeErrorKind::AssignToConstant {
                name: name.to_string(),
            }),

            Self::Variable { ty, value } => {
                let found = new_value.value_type();
                if found != *ty {
                    return Err(RuntimeErrorKind::TypeMismatch {
                        name: name.to_string(),
                        expected: *ty,
                        found,
                    });
                }

                *value = Some(new_value);
                Ok(())
            }
        }
    }
}

/// A single lexical scope. Scopes form a tree through their parent links;
/// the global scope is the root and the only one without a parent.
///
/// Parents are shared, so a function value that captured a scope keeps the
/// whole chain up to the global scope alive.
pub struct Environment {
    parent: Option<Rc<Environment>>,
    kind: ScopeKind,
    bindings: RefCell<HashMap<String, Binding>>,
}

impl Environment {
    #[must_use]
    pub fn new_global() -> Rc<Self> {
        Rc::new(Self {
            parent: None,
            kind: ScopeKind::Global,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    #[must_use]
    pub fn with_parent(parent: &Rc<Self>, kind: ScopeKind) -> Rc<Self> {
        trace!("Creating {kind:?} scope at depth {}", parent.depth() + 1);

        Rc::new(Self {
            parent: Some(Rc::clone(parent)),
            kind,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ScopeKind {
        self.kind
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        match &self.parent {
            Some(parent) => 1 + parent.depth(),
            None => 1,
        }
    }

    /// Introduces `name` in this scope. The type is the annotation if one
    /// was given, otherwise the type of the initial value.
    pub fn declare(&self, name: &str, value: Option<Value>, ty: Option<ValueType>, constant: bool) -> Result<(), RuntimeErrorKind> {
        let mut bindings = self.bindings.borrow_mut();

        if bindings.contains_key(name) {
            return Err(RuntimeErrorKind::AlreadyDeclared { name: name.to_string() });
        }

        let Some(ty) = ty.or_else(|| value.as_ref().map(Value::value_type)) else {
            return Err(RuntimeErrorKind::MissingType { name: name.to_string() });
        };

        if let Some(value) = &value {
            let found = value.value_type();
            if found != ty {
                return Err(RuntimeErrorKind::TypeMismatch {
                    name: name.to_string(),
                    expected: ty,
                    found,
                });
            }
        }

        let binding = if constant {
            let Some(value) = value else {
                return Err(RuntimeErrorKind::ConstantWithoutValue { name: name.to_string() });
            };

            Binding::Constant { ty, value }
        } else {
            Binding::Variable { ty, value }
        };

        bindings.insert(name.to_string(), binding);
        Ok(())
    }

    /// Replaces the value of the nearest binding called `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), RuntimeErrorKind> {
        if let Some(binding) = self.bindings.borrow_mut().get_mut(name) {
            return binding.set(name, value);
        }

        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => Err(RuntimeErrorKind::Undeclared { name: name.to_string() }),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        if let Some(binding) = self.bindings.borrow().get(name) {
            return binding.value()
                .cloned()
                .ok_or_else(|| RuntimeErrorKind::Uninitialized { name: name.to_string() });
        }

        match &self.parent {
            Some(parent) => parent.lookup(name),
            None => Err(RuntimeErrorKind::Undeclared { name: name.to_string() }),
        }
    }

    /// Whether a `devolver` executed here has a function to return from.
    #[must_use]
    pub fn is_inside_function(&self) -> bool {
        match self.kind {
            ScopeKind::Function => true,
            ScopeKind::Global => false,
            ScopeKind::If | ScopeKind::While => self.parent.as_ref().is_some_and(|x| x.is_inside_function()),
        }
    }

    /// Whether `romper` or `continuar` executed here reaches a loop before
    /// crossing a function boundary.
    #[must_use]
    pub fn is_inside_loop(&self) -> bool {
        match self.kind {
            ScopeKind::While => true,
            ScopeKind::Function | ScopeKind::Global => false,
            ScopeKind::If => self.parent.as_ref().is_some_and(|x| x.is_inside_loop()),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings = self.bindings.borrow();
        let mut names: Vec<&String> = bindings.keys().collect();
        names.sort();

        f.debug_struct("Environment")
            .field("kind", &self.kind)
            .field("depth", &self.depth())
            .field("bindings", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn depth() {
        let global = Environment::new_global();
        assert_eq!(global.depth(), 1);

        let function = Environment::with_parent(&global, ScopeKind::Function);
        let branch = Environment::with_parent(&function, ScopeKind::If);
        assert_eq!(function.depth(), 2);
        assert_eq!(branch.depth(), 3);
        assert!(branch.is_inside_function());
    }

    #[test]
    fn declare_infers_type_from_value() {
        let env = Environment::new_global();
        env.declare("a", Some(Value::Number(10.0)), None, false).unwrap();

        assert_eq!(env.lookup("a"), Ok(Value::Number(10.0)));
        assert_eq!(
            env.assign("a", Value::Text("diez".into())),
            Err(RuntimeErrorKind::TypeMismatch {
                name: "a".into(),
                expected: ValueType::Number,
                found: ValueType::Text,
            })
        );
    }

    #[rstest]
    #[case(None, None, false, RuntimeErrorKind::MissingType { name: "a".into() })]
    #[case(None, Some(ValueType::Number), true, RuntimeErrorKind::ConstantWithoutValue { name: "a".into() })]
    #[case(
        Some(Value::Bool(true)),
        Some(ValueType::Number),
        false,
        RuntimeErrorKind::TypeMismatch { name: "a".into(), expected: ValueType::Number, found: ValueType::Boolean },
    )]
    fn declare_errors(
        #[case] value: Option<Value>,
        #[case] ty: Option<ValueType>,
        #[case] constant: bool,
        #[case] expected: RuntimeErrorKind,
    ) {
        let env = Environment::new_global();
        assert_eq!(env.declare("a", value, ty, constant), Err(expected));
        assert_eq!(env.lookup("a"), Err(RuntimeErrorKind::Undeclared { name: "a".into() }));
    }

    #[test]
    fn redeclaration_in_same_scope_fails() {
        let env = Environment::new_global();
        env.declare("a", Some(Value::Null), None, false).unwrap();

        assert_eq!(
            env.declare("a", Some(Value::Null), None, false),
            Err(RuntimeErrorKind::AlreadyDeclared { name: "a".into() })
        );
    }

    #[test]
    fn shadowing_in_child_scope() {
        let global = Environment::new_global();
        global.declare("a", Some(Value::Number(1.0)), None, true).unwrap();

        let child = Environment::with_parent(&global, ScopeKind::If);
        child.declare("a", Some(Value::Text("hola".into())), None, false).unwrap();

        assert_eq!(child.lookup("a"), Ok(Value::Text("hola".into())));
        assert_eq!(global.lookup("a"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_walks_to_parent() {
        let global = Environment::new_global();
        global.declare("contador", Some(Value::Number(0.0)), None, false).unwrap();

        let child = Environment::with_parent(&global, ScopeKind::While);
        child.assign("contador", Value::Number(1.0)).unwrap();

        assert_eq!(global.lookup("contador"), Ok(Value::Number(1.0)));
        let sibling = Environment::with_parent(&global, ScopeKind::If);
        assert_eq!(sibling.lookup("contador"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_to_constant_fails() {
        let env = Environment::new_global();
        env.declare("x", Some(Value::Number(1.0)), None, true).unwrap();

        assert_eq!(
            env.assign("x", Value::Number(2.0)),
            Err(RuntimeErrorKind::AssignToConstant { name: "x".into() })
        );
        assert_eq!(env.lookup("x"), Ok(Value::Number(1.0)));
    }

    #[test]
    fn undeclared_names() {
        let env = Environment::with_parent(&Environment::new_global(), ScopeKind::Function);

        assert_eq!(env.lookup("y"), Err(RuntimeErrorKind::Undeclared { name: "y".into() }));
        assert_eq!(env.assign("y", Value::Null), Err(RuntimeErrorKind::Undeclared { name: "y".into() }));
    }

    #[test]
    fn uninitialized_variable() {
        let env = Environment::new_global();
        env.declare("t", None, Some(ValueType::Text), false).unwrap();

        assert_eq!(env.lookup("t"), Err(RuntimeErrorKind::Uninitialized { name: "t".into() }));

        env.assign("t", Value::Text("listo".into())).unwrap();
        assert_eq!(env.lookup("t"), Ok(Value::Text("listo".into())));
    }

    #[rstest]
    #[case(&[ScopeKind::Function], true, false)]
    #[case(&[ScopeKind::Function, ScopeKind::If], true, false)]
    #[case(&[ScopeKind::While], false, true)]
    #[case(&[ScopeKind::While, ScopeKind::If, ScopeKind::If], false, true)]
    #[case(&[ScopeKind::While, ScopeKind::Function], true, false)]
    #[case(&[ScopeKind::Function, ScopeKind::While], true, true)]
    #[case(&[ScopeKind::If], false, false)]
    #[case(&[], false, false)]
    fn control_flow_placement(#[case] kinds: &[ScopeKind], #[case] in_function: bool, #[case] in_loop: bool) {
        let mut env = Environment::new_global();
        for kind in kinds {
            env = Environment::with_parent(&env, *kind);
        }

        assert_eq!(env.is_inside_function(), in_function);
        assert_eq!(env.is_inside_loop(), in_loop);
    }
}
