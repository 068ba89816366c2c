// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod statement;

pub use self::{
    expression::{
        AssignmentExpression,
        BiExpression,
        BiOperator,
        Comparison,
        Expression,
        FunctionCallExpression,
        FunctionDefinition,
        LogicalOperator,
        MathOperator,
        ObjectExpression,
        ObjectProperty,
        Parameter,
        PostfixExpression,
        PostfixExpressionKind,
        PrimaryExpression,
    },
    statement::{
        Alternate,
        BlockKind,
        BlockStatement,
        FunctionStatement,
        IfStatement,
        Program,
        ReturnStatement,
        Statement,
        StatementKind,
        VariableKind,
        VariableStatement,
        WhileStatement,
    },
};
