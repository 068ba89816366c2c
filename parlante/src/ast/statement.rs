// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use strum::AsRefStr;

use crate::{Expression, FileRange, FunctionDefinition, Ranged};

#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub range: FileRange,
}

#[derive(Debug, Clone)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone)]
pub enum StatementKind {
    Break,
    Continue,
    Expression(Ranged<Expression>),
    Function(FunctionStatement),
    If(IfStatement),
    Return(ReturnStatement),
    Variable(VariableStatement),
    While(WhileStatement),
}

impl StatementKind {
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(..))
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BlockKind {
    Function,
    If,
    While,
}

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub kind: BlockKind,
    pub range: FileRange,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct FunctionStatement {
    pub name: Ranged<String>,
    pub definition: Rc<FunctionDefinition>,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,
    pub consequent: BlockStatement,
    pub alternate: Option<Alternate>,
    pub range: FileRange,
}

/// What follows the consequent of an `si`: either a `pero_si` that carries
/// its own condition, or a closing `sino`.
#[derive(Debug, Clone)]
pub enum Alternate {
    ElseIf(Box<IfStatement>),
    Else(BlockStatement),
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: Ranged<Expression>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub keyword_range: FileRange,
    pub expression: Option<Ranged<Expression>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum VariableKind {
    Var,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Const)
    }
}

#[derive(Debug, Clone)]
pub struct VariableStatement {
    pub kind: Ranged<VariableKind>,
    pub name: Ranged<String>,
    pub type_annotation: Option<Ranged<String>>,
    pub expression: Option<Ranged<Expression>>,
}
