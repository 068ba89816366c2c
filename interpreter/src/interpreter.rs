// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::BTreeMap, io::Write, rc::Rc};

use log::{debug, trace};
use parlante::*;

use crate::{Builtin, Environment, FunctionValue, NativeContext, RuntimeError, RuntimeErrorKind, ScopeKind, Value};

/// How control leaves a statement. Anything but [`Signal::Normal`] skips
/// the remaining statements of the enclosing blocks until a construct that
/// consumes it: a call for `Return`, a `mientras` for the other two.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Normal,
    Return(Value),
    Break,
    Continue,
}

pub struct Interpreter<W>
        where W: Write {
    output: W,
    globals: Rc<Environment>,
    scope: Rc<Environment>,
    call_depth: usize,
}

impl<W> Interpreter<W>
        where W: Write {
    /// Deep enough for real recursion, shallow enough to fit in
    /// [`crate::INTERPRETER_STACK_SIZE`].
    pub const MAX_CALL_DEPTH: usize = 2_000;

    pub fn new(output: W) -> Self {
        let globals = Environment::new_global();

        let installed = Builtin::install(&globals);
        debug_assert!(installed.is_ok(), "Failed to install built-ins: {installed:?}");

        Self {
            output,
            scope: Rc::clone(&globals),
            globals,
            call_depth: 0,
        }
    }

    #[must_use]
    pub fn globals(&self) -> &Rc<Environment> {
        &self.globals
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs every top-level statement. The result is the value of the last
    /// statement if that was an expression statement, and `nulo` otherwise.
    pub fn execute_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        debug!("Executing program with {} statements", program.statements.len());

        let mut last_value = Value::Null;

        for statement in &program.statements {
            if let StatementKind::Expression(expression) = &statement.kind {
                last_value = self.execute_expression(expression)?;
                continue;
            }

            last_value = Value::Null;
            let signal = self.execute_statement(statement)?;
            debug_assert_eq!(signal, Signal::Normal, "control signal escaped to the top level");
        }

        Ok(last_value)
    }

    pub fn execute_statement(&mut self, statement: &Statement) -> Result<Signal, RuntimeError> {
        match &statement.kind {
            StatementKind::Break => {
                if !self.scope.is_inside_loop() {
                    return Err(RuntimeErrorKind::LoopControlOutsideLoop { keyword: "romper" }.at(statement.range));
                }

                Ok(Signal::Break)
            }

            StatementKind::Continue => {
                if !self.scope.is_inside_loop() {
                    return Err(RuntimeErrorKind::LoopControlOutsideLoop { keyword: "continuar" }.at(statement.range));
                }

                Ok(Signal::Continue)
            }

            StatementKind::Expression(expression) => {
                self.execute_expression(expression)?;
                Ok(Signal::Normal)
            }

            StatementKind::Function(function) => {
                let value = self.create_function(Some(&function.name), &function.definition)?;

                self.scope.declare(function.name.value(), Some(value), Some(ValueType::Function), true)
                    .map_err(|e| e.at(function.name.range()))?;

                Ok(Signal::Normal)
            }

            StatementKind::If(statement) => self.execute_if_statement(statement),

            StatementKind::Return(statement) => {
                if !self.scope.is_inside_function() {
                    return Err(RuntimeErrorKind::ReturnOutsideFunction.at(statement.keyword_range));
                }

                let value = match &statement.expression {
                    Some(expression) => self.execute_expression(expression)?,
                    None => Value::Null,
                };

                Ok(Signal::Return(value))
            }

            StatementKind::Variable(statement) => {
                self.execute_variable_statement(statement)?;
                Ok(Signal::Normal)
            }

            StatementKind::While(statement) => self.execute_while_statement(statement),
        }
    }

    fn execute_variable_statement(&mut self, statement: &VariableStatement) -> Result<(), RuntimeError> {
        let ty = statement.type_annotation.as_ref()
            .map(resolve_type)
            .transpose()?;

        let value = match &statement.expression {
            Some(expression) => Some(self.execute_expression(expression)?),
            None => None,
        };

        trace!("Declaring {} `{}`", statement.kind.value().as_ref(), statement.name.value());

        self.scope.declare(statement.name.value(), value, ty, statement.kind.is_constant())
            .map_err(|e| e.at(statement.name.range()))
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> Result<Signal, RuntimeError> {
        if self.execute_condition(&statement.condition)? {
            return self.execute_block(&statement.consequent);
        }

        match &statement.alternate {
            Some(Alternate::ElseIf(statement)) => self.execute_if_statement(statement),
            Some(Alternate::Else(block)) => self.execute_block(block),
            None => Ok(Signal::Normal),
        }
    }

    fn execute_while_statement(&mut self, statement: &WhileStatement) -> Result<Signal, RuntimeError> {
        while self.execute_condition(&statement.condition)? {
            match self.execute_block(&statement.body)? {
                Signal::Normal | Signal::Continue => continue,
                Signal::Break => break,
                Signal::Return(value) => return Ok(Signal::Return(value)),
            }
        }

        Ok(Signal::Normal)
    }

    fn execute_condition(&mut self, condition: &Ranged<Expression>) -> Result<bool, RuntimeError> {
        let value = self.execute_expression(condition)?;

        value.as_bool().ok_or_else(|| {
            RuntimeErrorKind::ConditionNotBoolean { found: value.value_type() }.at(condition.range())
        })
    }

    /// Runs a block in a fresh child of the current scope.
    fn execute_block(&mut self, block: &BlockStatement) -> Result<Signal, RuntimeError> {
        let scope = Environment::with_parent(&self.scope, block.kind.into());
        self.with_scope(scope, |this| this.execute_statements(&block.statements))
    }

    fn execute_statements(&mut self, statements: &[Statement]) -> Result<Signal, RuntimeError> {
        for statement in statements {
            let signal = self.execute_statement(statement)?;

            if signal != Signal::Normal {
                return Ok(signal);
            }
        }

        Ok(Signal::Normal)
    }

    fn with_scope<T>(&mut self, scope: Rc<Environment>, f: impl FnOnce(&mut Self) -> Result<T, RuntimeError>) -> Result<T, RuntimeError> {
        let previous = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = previous;
        result
    }

    pub fn execute_expression(&mut self, expression: &Ranged<Expression>) -> Result<Value, RuntimeError> {
        match expression.value() {
            Expression::Assignment(expr) => self.execute_assignment(expr),
            Expression::BiExpression(expr) => self.execute_bi_expression(expr),
            Expression::Function(definition) => self.create_function(None, definition),
            Expression::Object(expr) => self.execute_object_expression(expr),
            Expression::Postfix(expr) => self.execute_postfix_expression(expr, expression.range()),
            Expression::Primary(expr) => self.execute_primary_expression(expr),
        }
    }

    fn execute_primary_expression(&mut self, expression: &PrimaryExpression) -> Result<Value, RuntimeError> {
        match expression {
            PrimaryExpression::Number(number) => Ok(Value::Number(*number)),
            PrimaryExpression::Text(text) => Ok(Value::Text(text.clone())),
            PrimaryExpression::Reference(name) => {
                self.scope.lookup(name.value()).map_err(|e| e.at(name.range()))
            }
        }
    }

    fn execute_object_expression(&mut self, expression: &ObjectExpression) -> Result<Value, RuntimeError> {
        let mut fields = BTreeMap::new();

        for property in &expression.properties {
            let value = match &property.value {
                Some(value) => self.execute_expression(value)?,
                None => self.scope.lookup(property.key.value()).map_err(|e| e.at(property.key.range()))?,
            };

            fields.insert(property.key.value().clone(), value);
        }

        Ok(Value::new_object(fields))
    }

    fn execute_assignment(&mut self, expression: &AssignmentExpression) -> Result<Value, RuntimeError> {
        let value = self.execute_expression(&expression.source)?;
        let destination = &expression.destination;

        match destination.value() {
            Expression::Primary(PrimaryExpression::Reference(name)) => {
                self.scope.assign(name.value(), value.clone())
                    .map_err(|e| e.at(name.range()))?;
            }

            Expression::Postfix(postfix) => {
                let object = self.execute_expression(&postfix.lhs)?;
                let key = self.execute_property_key(&postfix.kind)?;

                let fields = match object {
                    Value::Object(fields) => fields,
                    other => return Err(RuntimeErrorKind::NotAnObject { found: other.value_type() }.at(postfix.lhs.range())),
                };

                fields.borrow_mut().insert(key, value.clone());
            }

            _ => return Err(RuntimeErrorKind::InvalidAssignmentTarget.at(destination.range())),
        }

        Ok(value)
    }

    fn execute_bi_expression(&mut self, expression: &BiExpression) -> Result<Value, RuntimeError> {
        let lhs = self.execute_expression(&expression.lhs)?;
        let rhs = self.execute_expression(&expression.rhs)?;

        let operator = *expression.operator.value();
        let result = match operator {
            BiOperator::Math(math) => execute_math(math, lhs, rhs),
            BiOperator::Comparison(comparison) => execute_comparison(comparison, lhs, rhs),
            BiOperator::Logical(logical) => execute_logical(logical, lhs, rhs),
        };

        result.map_err(|e| e.at(expression.operator.range()))
    }

    fn execute_postfix_expression(&mut self, expression: &PostfixExpression, range: FileRange) -> Result<Value, RuntimeError> {
        let lhs = self.execute_expression(&expression.lhs)?;

        match expression.kind.value() {
            PostfixExpressionKind::Call(call) => self.execute_function_call(lhs, call, range),

            PostfixExpressionKind::Member(..) | PostfixExpressionKind::Subscript(..) => {
                let key = self.execute_property_key(&expression.kind)?;

                let fields = match lhs {
                    Value::Object(fields) => fields,
                    other => return Err(RuntimeErrorKind::NotAnObject { found: other.value_type() }.at(expression.lhs.range())),
                };

                let value = fields.borrow().get(&key).cloned();
                value.ok_or_else(|| RuntimeErrorKind::MissingProperty { key }.at(expression.kind.range()))
            }
        }
    }

    /// The key named by `.name` or computed by `[expr]`.
    fn execute_property_key(&mut self, kind: &Ranged<PostfixExpressionKind>) -> Result<String, RuntimeError> {
        match kind.value() {
            PostfixExpressionKind::Member(name) => Ok(name.value().clone()),

            PostfixExpressionKind::Subscript(expression) => {
                match self.execute_expression(expression)? {
                    Value::Text(key) => Ok(key),
                    other => Err(RuntimeErrorKind::InvalidPropertyKey { found: other.value_type() }.at(expression.range())),
                }
            }

            PostfixExpressionKind::Call(..) => Err(RuntimeErrorKind::InvalidAssignmentTarget.at(kind.range())),
        }
    }

    fn execute_function_call(&mut self, callee: Value, call: &FunctionCallExpression, range: FileRange) -> Result<Value, RuntimeError> {
        if let Value::Function(function) = &callee {
            if call.arguments.len() != function.parameters.len() {
                return Err(RuntimeErrorKind::ArityMismatch {
                    name: function.name().to_string(),
                    expected: function.parameters.len(),
                    found: call.arguments.len(),
                }.at(range));
            }
        }

        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.execute_expression(argument)?);
        }

        match callee {
            Value::NativeFunction(function) => {
                trace!("Calling native function `{}` with {} argument(s)", function.name, arguments.len());

                let mut ctx = NativeContext {
                    output: &mut self.output,
                    environment: &self.scope,
                };

                (function.function)(&mut ctx, arguments).map_err(|e| e.at(range))
            }

            Value::Function(function) => self.execute_function(&function, arguments, call, range),

            other => Err(RuntimeErrorKind::NotCallable { found: other.value_type() }.at(range)),
        }
    }

    fn execute_function(&mut self, function: &FunctionValue, arguments: Vec<Value>, call: &FunctionCallExpression, range: FileRange) -> Result<Value, RuntimeError> {
        debug_assert_eq!(arguments.len(), function.parameters.len());

        if self.call_depth >= Self::MAX_CALL_DEPTH {
            return Err(RuntimeErrorKind::CallDepthExceeded { limit: Self::MAX_CALL_DEPTH }.at(range));
        }

        // Arguments live in a scope of the function's own, parented to the
        // scope the function was created in rather than the caller's.
        let scope = Environment::with_parent(&function.closure, ScopeKind::Function);

        for (((name, ty), argument), expression) in function.parameters.iter().zip(arguments).zip(&call.arguments) {
            let found = argument.value_type();
            if found != *ty {
                return Err(RuntimeErrorKind::ArgumentTypeMismatch {
                    parameter: name.clone(),
                    expected: *ty,
                    found,
                }.at(expression.range()));
            }

            scope.declare(name, Some(argument), Some(*ty), true)
                .map_err(|e| e.at(range))?;
        }

        trace!("Calling `{}` at depth {}", function.name(), self.call_depth + 1);

        self.call_depth += 1;
        let result = self.with_scope(scope, |this| this.execute_statements(&function.definition.body.statements));
        self.call_depth -= 1;

        match result? {
            Signal::Return(value) => Ok(value),
            _ => Ok(Value::Null),
        }
    }

    fn create_function(&mut self, name: Option<&Ranged<String>>, definition: &Rc<FunctionDefinition>) -> Result<Value, RuntimeError> {
        let parameters = definition.parameters.iter()
            .map(|parameter| Ok((parameter.name.value().clone(), resolve_type(&parameter.type_annotation)?)))
            .collect::<Result<Vec<_>, RuntimeError>>()?;

        let return_type = definition.return_type.as_ref()
            .map(resolve_type)
            .transpose()?;

        Ok(Value::Function(Rc::new(FunctionValue {
            name: name.map(|x| x.value().clone()),
            definition: Rc::clone(definition),
            parameters,
            return_type,
            closure: Rc::clone(&self.scope),
        })))
    }
}

fn resolve_type(annotation: &Ranged<String>) -> Result<ValueType, RuntimeError> {
    ValueType::parse(annotation.value())
        .ok_or_else(|| RuntimeErrorKind::UnknownType { name: annotation.value().clone() }.at(annotation.range()))
}

fn execute_math(operator: MathOperator, lhs: Value, rhs: Value) -> Result<Value, RuntimeErrorKind> {
    match (&lhs, &rhs) {
        (Value::Number(a), Value::Number(b)) => {
            let (a, b) = (*a, *b);

            Ok(Value::Number(match operator {
                MathOperator::Add => a + b,
                MathOperator::Subtract => a - b,
                MathOperator::Multiply => a * b,
                MathOperator::Divide => a / b,
                MathOperator::Modulo => a % b,
                MathOperator::Power => a.powf(b),
            }))
        }

        (Value::Text(a), Value::Text(b)) if operator == MathOperator::Add => {
            Ok(Value::Text(format!("{a}{b}")))
        }

        _ => Err(invalid_operands(operator.as_str(), &lhs, &rhs)),
    }
}

fn execute_comparison(comparison: Comparison, lhs: Value, rhs: Value) -> Result<Value, RuntimeErrorKind> {
    let result = match (comparison, &lhs, &rhs) {
        (Comparison::Equality, ..) => lhs.equals(&rhs),
        (Comparison::Inequality, ..) => !lhs.equals(&rhs),
        (Comparison::GreaterThan, Value::Number(a), Value::Number(b)) => a > b,
        (Comparison::GreaterThanOrEqual, Value::Number(a), Value::Number(b)) => a >= b,
        (Comparison::LessThan, Value::Number(a), Value::Number(b)) => a < b,
        (Comparison::LessThanOrEqual, Value::Number(a), Value::Number(b)) => a <= b,
        _ => return Err(invalid_operands(comparison.as_str(), &lhs, &rhs)),
    };

    Ok(Value::Bool(result))
}

fn execute_logical(operator: LogicalOperator, lhs: Value, rhs: Value) -> Result<Value, RuntimeErrorKind> {
    let (Value::Bool(a), Value::Bool(b)) = (&lhs, &rhs) else {
        return Err(invalid_operands(operator.as_str(), &lhs, &rhs));
    };

    Ok(Value::Bool(match operator {
        LogicalOperator::And => *a && *b,
        LogicalOperator::Or => *a || *b,
    }))
}

fn invalid_operands(operator: &'static str, lhs: &Value, rhs: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::InvalidOperands {
        operator,
        lhs: lhs.value_type(),
        rhs: rhs.value_type(),
    }
}
