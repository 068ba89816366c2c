// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::{Debug, Display, Write}, rc::Rc};

use crate::{BlockStatement, FileRange, Ranged};

#[derive(Clone, Debug)]
pub enum PrimaryExpression {
    Number(f64),
    Text(String),
    Reference(Ranged<String>),
}

impl Display for PrimaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryExpression::Number(number) => Display::fmt(number, f),
            PrimaryExpression::Text(text) => {
                f.write_char('"')?;
                f.write_str(text)?;
                f.write_char('"')
            }
            PrimaryExpression::Reference(name) => f.write_str(name.value()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Expression {
    Assignment(AssignmentExpression),
    BiExpression(BiExpression),
    Function(Rc<FunctionDefinition>),
    Object(ObjectExpression),
    Postfix(PostfixExpression),
    Primary(PrimaryExpression),
}

impl Expression {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Ranged<String>> {
        match self {
            Self::Primary(PrimaryExpression::Reference(ident)) => Some(ident),
            _ => None,
        }
    }

    /// Only plain names and member accesses may appear on the left side of
    /// an `=`.
    #[must_use]
    pub const fn is_assignable(&self) -> bool {
        match self {
            Self::Primary(PrimaryExpression::Reference(..)) => true,
            Self::Postfix(postfix) => matches!(
                postfix.kind.value(),
                PostfixExpressionKind::Member(..) | PostfixExpressionKind::Subscript(..)
            ),
            _ => false,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(expr) => Display::fmt(expr, f),
            Self::BiExpression(expr) => Display::fmt(expr, f),
            Self::Function(function) => {
                f.write_str("fun ")?;
                Display::fmt(function, f)
            }
            Self::Object(expr) => Display::fmt(expr, f),
            Self::Postfix(expr) => Display::fmt(expr, f),
            Self::Primary(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AssignmentExpression {
    pub destination: Box<Ranged<Expression>>,
    pub source: Box<Ranged<Expression>>,
}

impl Display for AssignmentExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.destination.value(), f)?;
        f.write_str(" = ")?;
        Display::fmt(self.source.value(), f)
    }
}

#[derive(Clone, Debug)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
}

impl Display for ObjectExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;

        for (idx, property) in self.properties.iter().enumerate() {
            if idx != 0 {
                f.write_char(',')?;
            }

            f.write_char(' ')?;
            f.write_str(property.key.value())?;

            if let Some(value) = &property.value {
                f.write_str(": ")?;
                Display::fmt(value.value(), f)?;
            }
        }

        if !self.properties.is_empty() {
            f.write_char(' ')?;
        }

        f.write_char('}')
    }
}

/// A `key: value` pair inside an object literal. Without a value, the
/// property is shorthand for the variable with the same name.
#[derive(Clone, Debug)]
pub struct ObjectProperty {
    pub key: Ranged<String>,
    pub value: Option<Ranged<Expression>>,
}

/// The parameters, return type and body shared by function declarations
/// and function literals.
#[derive(Clone, Debug)]
pub struct FunctionDefinition {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Ranged<String>>,
    pub body: BlockStatement,
    pub range: FileRange,
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;

        for (idx, parameter) in self.parameters.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(parameter, f)?;
        }

        f.write_char(')')?;

        if let Some(return_type) = &self.return_type {
            f.write_str(": ")?;
            f.write_str(return_type.value())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: Ranged<String>,
    pub type_annotation: Ranged<String>,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.value())?;
        f.write_str(": ")?;
        f.write_str(self.type_annotation.value())
    }
}

#[derive(Debug, Clone)]
pub struct PostfixExpression {
    pub lhs: Box<Ranged<Expression>>,
    pub kind: Ranged<PostfixExpressionKind>,
}

impl Display for PostfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.lhs.value(), f)?;

        match self.kind.value() {
            PostfixExpressionKind::Call(call) => {
                Display::fmt(call, f)
            }

            PostfixExpressionKind::Member(member) => {
                f.write_char('.')?;
                f.write_str(member.value())
            }

            PostfixExpressionKind::Subscript(expr) => {
                f.write_char('[')?;
                Display::fmt(expr.value(), f)?;
                f.write_char(']')
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum PostfixExpressionKind {
    Call(FunctionCallExpression),

    /// `objeto.clave`
    Member(Ranged<String>),

    /// `objeto["clave"]`, the computed form of a member access.
    Subscript(Box<Ranged<Expression>>),
}

#[derive(Clone, Debug)]
pub struct FunctionCallExpression {
    pub arguments: Vec<Ranged<Expression>>,

    pub token_left_paren: FileRange,
    pub token_right_paren: FileRange,
}

impl Display for FunctionCallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;

        for (idx, arg) in self.arguments.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(arg.value(), f)?;
        }

        f.write_char(')')
    }
}

#[derive(Clone, Debug)]
pub struct BiExpression {
    pub operator: Ranged<BiOperator>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(self.lhs.value(), f)?;

        f.write_char(' ')?;
        f.write_str(self.operator.as_str())?;
        f.write_char(' ')?;

        Display::fmt(self.rhs.value(), f)?;
        f.write_char(')')
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BiOperator {
    Comparison(Comparison),
    Logical(LogicalOperator),
    Math(MathOperator),
}

impl BiOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comparison(comp) => comp.as_str(),
            Self::Logical(logical) => logical.as_str(),
            Self::Math(math) => math.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl MathOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
        }
    }
}

impl From<MathOperator> for BiOperator {
    fn from(value: MathOperator) -> Self {
        Self::Math(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "y",
            Self::Or => "o",
        }
    }
}

impl From<LogicalOperator> for BiOperator {
    fn from(value: LogicalOperator) -> Self {
        Self::Logical(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl From<Comparison> for BiOperator {
    fn from(value: Comparison) -> Self {
        Self::Comparison(value)
    }
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}
