// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use log::trace;
use strum::AsRefStr;

use crate::{
    Alternate, AssignmentExpression, BiExpression, BiOperator, BlockKind, BlockStatement, Comparison, Expression, FileLocation, FileRange, FunctionCallExpression, FunctionDefinition, FunctionStatement, IfStatement, Keyword, LogicalOperator, MathOperator, ObjectExpression, ObjectProperty, Parameter, PostfixExpression, PostfixExpressionKind, PrimaryExpression, Program, Punctuator, Ranged, ReturnStatement, Statement, StatementKind, Token, TokenKind, VariableKind, VariableStatement, WhileStatement
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser over a slice of tokens. Parsing stops at the
/// first violated expectation; there is no recovery.
#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    token_begin: FileLocation,
    token_end: FileLocation,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            token_begin: Default::default(),
            token_end: Default::default(),
            tokens,
            cursor: 0,
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                begin: end,
                end,
            }
        }
    }

    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let start = self.peek_token().begin;
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        trace!("Parsed {} top-level statements", statements.len());

        let end = self.peek_token().end;
        Ok(Program {
            statements,
            range: FileRange::new(start, end),
        })
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.peek_token().begin;

        let first_token = self.peek_token();
        let kind = match first_token.kind {
            TokenKind::Keyword(Keyword::Var | Keyword::Const) => {
                StatementKind::Variable(self.parse_variable_statement()?)
            }

            TokenKind::Keyword(Keyword::Fun) if self.peek_nth(1).as_identifier().is_some() => {
                StatementKind::Function(self.parse_function_statement()?)
            }

            TokenKind::Keyword(Keyword::Devolver) => {
                StatementKind::Return(self.parse_return_statement()?)
            }

            TokenKind::Keyword(Keyword::Si) => {
                StatementKind::If(self.parse_if_statement()?)
            }

            TokenKind::Keyword(Keyword::PeroSi | Keyword::Sino) => {
                return Err(ParseError::DanglingAlternate { token: first_token.clone() });
            }

            TokenKind::Keyword(Keyword::Mientras) => {
                StatementKind::While(self.parse_while_statement()?)
            }

            TokenKind::Keyword(Keyword::Romper) => {
                _ = self.consume_token();
                self.expect_semicolon_after_statement()?;
                StatementKind::Break
            }

            TokenKind::Keyword(Keyword::Continuar) => {
                _ = self.consume_token();
                self.expect_semicolon_after_statement()?;
                StatementKind::Continue
            }

            _ => {
                let expression = self.parse_expression()?;
                self.expect_semicolon_after_statement()?;
                StatementKind::Expression(expression)
            }
        };

        let range = FileRange::new(start, self.token_end);
        Ok(Statement {
            range,
            kind,
        })
    }

    fn parse_variable_statement(&mut self) -> ParseResult<VariableStatement> {
        let keyword = self.consume_token();
        let kind = match keyword.kind {
            TokenKind::Keyword(Keyword::Const) => VariableKind::Const,
            _ => VariableKind::Var,
        };
        let kind = Ranged::new(keyword.range(), kind);

        let name = self.expect_identifier("el nombre de la variable")?;

        let type_annotation = if self.peek_punctuator() == Some(Punctuator::Colon) {
            _ = self.consume_token();
            Some(self.expect_identifier("el tipo de la variable")?)
        } else {
            None
        };

        let expression = if self.peek_punctuator() == Some(Punctuator::Assignment) {
            _ = self.consume_token();
            Some(self.parse_expression()?)
        } else if kind.is_constant() {
            return Err(ParseError::ConstantWithoutInitializer { name });
        } else if type_annotation.is_none() {
            return Err(ParseError::MissingTypeAnnotation { name });
        } else {
            None
        };

        self.expect_semicolon_after_statement()?;

        Ok(VariableStatement {
            kind,
            name,
            type_annotation,
            expression,
        })
    }

    fn parse_function_statement(&mut self) -> ParseResult<FunctionStatement> {
        let keyword = self.consume_token();
        let name = self.expect_identifier("`fun`")?;
        let definition = self.parse_function_definition(keyword.begin, FunctionParsingContext::Declaration)?;

        Ok(FunctionStatement {
            name,
            definition: Rc::new(definition),
        })
    }

    fn parse_function_definition(&mut self, start: FileLocation, ctx: FunctionParsingContext) -> ParseResult<FunctionDefinition> {
        self.expect_left_paren(ctx.name())?;

        let mut parameters = Vec::new();
        while self.peek_punctuator() != Some(Punctuator::RightParenthesis) {
            parameters.push(self.parse_parameter()?);

            if self.peek_punctuator() != Some(Punctuator::RightParenthesis) {
                self.expect_comma("un parámetro")?;
            }
        }

        self.expect_right_paren("la lista de parámetros")?;

        let return_type = if ctx.require_return_type() || self.peek_punctuator() == Some(Punctuator::Colon) {
            self.expect_colon("la lista de parámetros")?;
            Some(self.expect_identifier("el tipo de retorno")?)
        } else {
            None
        };

        let body = self.parse_block(BlockKind::Function, "la firma de la función")?;
        let range = FileRange::new(start, self.token_end);

        Ok(FunctionDefinition {
            parameters,
            return_type,
            body,
            range,
        })
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let name = self.expect_identifier("el nombre del parámetro")?;
        self.expect_colon("el nombre del parámetro")?;
        let type_annotation = self.expect_identifier("el tipo del parámetro")?;

        Ok(Parameter {
            name,
            type_annotation,
        })
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let keyword_range = self.consume_token().range();

        let expression = if self.peek_punctuator() == Some(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect_semicolon_after_statement()?;

        Ok(ReturnStatement {
            keyword_range,
            expression,
        })
    }

    /// Parses `si (...) { ... }` and, through recursion, every `pero_si`
    /// that follows it. The cursor must be at the `si` or `pero_si`.
    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        let keyword = self.consume_token();
        let context = match keyword.kind {
            TokenKind::Keyword(Keyword::PeroSi) => "`pero_si`",
            _ => "`si`",
        };

        self.expect_left_paren(context)?;
        let condition = self.parse_expression()?;
        self.expect_right_paren("la condición")?;

        let consequent = self.parse_block(BlockKind::If, "la condición")?;

        let alternate = match self.peek_token().kind {
            TokenKind::Keyword(Keyword::Sino) => {
                _ = self.consume_token();
                Some(Alternate::Else(self.parse_block(BlockKind::If, "`sino`")?))
            }

            TokenKind::Keyword(Keyword::PeroSi) => {
                Some(Alternate::ElseIf(Box::new(self.parse_if_statement()?)))
            }

            _ => None,
        };

        let range = FileRange::new(keyword.begin, self.token_end);

        Ok(IfStatement {
            condition,
            consequent,
            alternate,
            range,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        _ = self.consume_token();

        self.expect_left_paren("`mientras`")?;
        let condition = self.parse_expression()?;
        self.expect_right_paren("la condición")?;

        let token = self.consume_token();
        if token.kind != TokenKind::Keyword(Keyword::Hacer) {
            return Err(ParseError::ExpectedHacer { token });
        }

        let body = self.parse_block(BlockKind::While, "`hacer`")?;

        Ok(WhileStatement {
            condition,
            body,
        })
    }

    fn parse_block(&mut self, kind: BlockKind, context: &'static str) -> ParseResult<BlockStatement> {
        let start = self.expect_left_curly_bracket(context)?.start();

        let mut statements = Vec::new();
        loop {
            match self.peek_token().kind {
                TokenKind::Punctuator(Punctuator::RightCurlyBracket) => {
                    _ = self.consume_token();
                    break;
                }

                TokenKind::EndOfFile => {
                    return Err(ParseError::ExpectedRightCurlyBracket {
                        token: self.peek_token().clone(),
                        context: "el bloque",
                    });
                }

                _ => statements.push(self.parse_statement()?),
            }
        }

        Ok(BlockStatement {
            kind,
            range: FileRange::new(start, self.token_end),
            statements,
        })
    }

    pub fn parse_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_assignment_expression()
    }

    fn parse_assignment_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let destination = self.parse_object_expression()?;

        if self.peek_punctuator() != Some(Punctuator::Assignment) {
            return Ok(destination);
        }

        let equals = self.consume_token();
        if !destination.is_assignable() {
            return Err(ParseError::InvalidAssignmentTarget {
                equals,
                range: destination.range(),
            });
        }

        let source = self.parse_expression()?;
        let range = destination.range().to(source.range());

        Ok(Ranged::new(range, Expression::Assignment(AssignmentExpression {
            destination: Box::new(destination),
            source: Box::new(source),
        })))
    }

    fn parse_object_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        if self.peek_punctuator() != Some(Punctuator::LeftCurlyBracket) {
            return self.parse_function_expression();
        }

        let start = self.consume_token().begin;

        let mut properties = Vec::new();
        while self.peek_punctuator() != Some(Punctuator::RightCurlyBracket) {
            let key = self.expect_identifier("una propiedad del objeto")?;

            let value = if self.peek_punctuator() == Some(Punctuator::Colon) {
                _ = self.consume_token();
                Some(self.parse_expression()?)
            } else {
                None
            };

            properties.push(ObjectProperty { key, value });

            if self.peek_punctuator() != Some(Punctuator::RightCurlyBracket) {
                self.expect_comma("una propiedad del objeto")?;
            }
        }

        let end = self.consume_token().end;

        Ok(Ranged::new(
            FileRange::new(start, end),
            Expression::Object(ObjectExpression { properties }),
        ))
    }

    fn parse_function_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        if self.peek_token().kind != TokenKind::Keyword(Keyword::Fun) {
            return self.parse_logical_expression();
        }

        let start = self.consume_token().begin;
        let definition = self.parse_function_definition(start, FunctionParsingContext::Literal)?;

        Ok(Ranged::new(definition.range, Expression::Function(Rc::new(definition))))
    }

    fn parse_logical_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_equality_expression, &[
            (TokenKind::Keyword(Keyword::Y), BiOperator::Logical(LogicalOperator::And)),
            (TokenKind::Keyword(Keyword::O), BiOperator::Logical(LogicalOperator::Or)),
        ])
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            (TokenKind::Punctuator(Punctuator::Equals), BiOperator::Comparison(Comparison::Equality)),
            (TokenKind::Punctuator(Punctuator::NotEquals), BiOperator::Comparison(Comparison::Inequality)),
        ])
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            (TokenKind::Punctuator(Punctuator::GreaterThan), BiOperator::Comparison(Comparison::GreaterThan)),
            (TokenKind::Punctuator(Punctuator::GreaterThanOrEqual), BiOperator::Comparison(Comparison::GreaterThanOrEqual)),
            (TokenKind::Punctuator(Punctuator::LessThan), BiOperator::Comparison(Comparison::LessThan)),
            (TokenKind::Punctuator(Punctuator::LessThanOrEqual), BiOperator::Comparison(Comparison::LessThanOrEqual)),
        ])
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            (TokenKind::Punctuator(Punctuator::PlusSign), BiOperator::Math(MathOperator::Add)),
            (TokenKind::Punctuator(Punctuator::HyphenMinus), BiOperator::Math(MathOperator::Subtract)),
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_power_expression, &[
            (TokenKind::Punctuator(Punctuator::Asterisk), BiOperator::Math(MathOperator::Multiply)),
            (TokenKind::Punctuator(Punctuator::Solidus), BiOperator::Math(MathOperator::Divide)),
            (TokenKind::Punctuator(Punctuator::PercentageSign), BiOperator::Math(MathOperator::Modulo)),
        ])
    }

    fn parse_power_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_postfix_expression, &[
            (TokenKind::Punctuator(Punctuator::Caret), BiOperator::Math(MathOperator::Power)),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(TokenKind, BiOperator)]) -> ParseResult<Ranged<Expression>>
            where F: FnMut(&mut Self) -> ParseResult<Ranged<Expression>> {
        let mut expr = operand(self)?;

        loop {
            let next = self.peek_token();

            let Some(operator) = operators.iter().find(|(kind, _)| next.kind == *kind).map(|(_, op)| *op) else {
                break;
            };

            let operator_range = self.consume_token().range();
            let operator = Ranged::new(operator_range, operator);

            let lhs = expr;
            let rhs = operand(self)?;
            let range = FileRange::new(lhs.range().start(), rhs.range().end());

            let expression = Expression::BiExpression(BiExpression {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });
            expr = Ranged::new(range, expression);
        }

        Ok(expr)
    }

    /// Calls, `.name` and `[key]` accesses, folded left to right so that
    /// `a.b(1)["c"]` reads `a` first.
    fn parse_postfix_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let mut expression = self.parse_primary_expression()?;
        let start = expression.range().start();

        loop {
            let kind_start = self.peek_token().begin;

            let kind = match self.peek_punctuator() {
                Some(Punctuator::LeftParenthesis) => {
                    let token_left_paren = self.consume_token().range();
                    PostfixExpressionKind::Call(self.parse_function_call_expression(token_left_paren)?)
                }

                Some(Punctuator::Period) => {
                    _ = self.consume_token();
                    PostfixExpressionKind::Member(self.expect_identifier("el punto `.`")?)
                }

                Some(Punctuator::LeftSquareBracket) => {
                    _ = self.consume_token();
                    let key = self.parse_expression()?;
                    self.expect_right_square_bracket("la clave")?;
                    PostfixExpressionKind::Subscript(Box::new(key))
                }

                _ => break,
            };

            let kind = Ranged::new(FileRange::new(kind_start, self.token_end), kind);
            let range = FileRange::new(start, self.token_end);
            expression = Ranged::new(range, Expression::Postfix(PostfixExpression {
                lhs: Box::new(expression),
                kind,
            }));
        }

        Ok(expression)
    }

    fn parse_function_call_expression(&mut self, token_left_paren: FileRange) -> ParseResult<FunctionCallExpression> {
        let mut arguments = Vec::new();

        while self.peek_punctuator() != Some(Punctuator::RightParenthesis) {
            arguments.push(self.parse_expression()?);

            if self.peek_punctuator() != Some(Punctuator::RightParenthesis) {
                self.expect_comma("un argumento")?;
            }
        }

        let token_right_paren = self.expect_right_paren("los argumentos")?;

        Ok(FunctionCallExpression {
            arguments,
            token_left_paren,
            token_right_paren,
        })
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let token = self.consume_token();
        let range = token.range();

        if let Some(name) = token.as_identifier() {
            return Ok(Ranged::new(range, Expression::Primary(PrimaryExpression::Reference(name))));
        }

        let primary = match &token.kind {
            TokenKind::Number(literal) => {
                let Ok(number) = literal.parse() else {
                    return Err(ParseError::InvalidNumber { token: token.clone() });
                };

                PrimaryExpression::Number(number)
            }

            TokenKind::Text(text) => PrimaryExpression::Text(text.clone()),

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                let expression = self.parse_expression()?;
                let right_paren = self.expect_right_paren("la expresión")?;
                let range = FileRange::new(range.start(), right_paren.end());
                return Ok(Ranged::new(range, expression.into_value()));
            }

            _ => return Err(ParseError::UnknownStartOfExpression { token }),
        };

        Ok(Ranged::new(range, Expression::Primary(primary)))
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind.is_end_of_file()
    }

    fn peek_token(&self) -> &Token {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(self.cursor + n).unwrap_or(&self.end_of_file_token)
    }

    fn peek_punctuator(&self) -> Option<Punctuator> {
        match self.peek_token().kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }

    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        self.token_begin = token.begin;
        self.token_end = token.end;

        if !token.kind.is_end_of_file() {
            self.cursor += 1;
        }

        token
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator, error: impl FnOnce(Token) -> ParseError) -> ParseResult<FileRange> {
        let token = self.consume_token();

        if token.kind != TokenKind::Punctuator(punctuator) {
            return Err(error(token));
        }

        Ok(token.range())
    }

    fn expect_left_paren(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::LeftParenthesis, |token| ParseError::ExpectedLeftParen { token, context })
    }

    fn expect_right_paren(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::RightParenthesis, |token| ParseError::ExpectedRightParen { token, context })
    }

    fn expect_left_curly_bracket(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::LeftCurlyBracket, |token| ParseError::ExpectedLeftCurlyBracket { token, context })
    }

    fn expect_right_square_bracket(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::RightSquareBracket, |token| ParseError::ExpectedRightSquareBracket { token, context })
    }

    fn expect_comma(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::Comma, |token| ParseError::ExpectedComma { token, context })
    }

    fn expect_colon(&mut self, context: &'static str) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::Colon, |token| ParseError::ExpectedColon { token, context })
    }

    fn expect_semicolon_after_statement(&mut self) -> ParseResult<FileRange> {
        self.expect_punctuator(Punctuator::Semicolon, |token| ParseError::ExpectedSemicolonAfterStatement { token })
    }

    fn expect_identifier(&mut self, context: &'static str) -> ParseResult<Ranged<String>> {
        let token = self.consume_token();

        match token.as_identifier() {
            Some(ident) => Ok(ident),
            None => Err(ParseError::ExpectedIdentifier { token, context }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("Se esperaba un paréntesis de apertura `(` después de {context}, pero se encontró: {token}")]
    ExpectedLeftParen { token: Token, context: &'static str },

    #[error("Se esperaba un paréntesis de cierre `)` después de {context}, pero se encontró: {token}")]
    ExpectedRightParen { token: Token, context: &'static str },

    #[error("Se esperaba una llave de apertura `{{` después de {context}, pero se encontró: {token}")]
    ExpectedLeftCurlyBracket { token: Token, context: &'static str },

    #[error("Se esperaba una llave de cierre `}}` al final de {context}, pero se encontró: {token}")]
    ExpectedRightCurlyBracket { token: Token, context: &'static str },

    #[error("Se esperaba un corchete de cierre `]` después de {context}, pero se encontró: {token}")]
    ExpectedRightSquareBracket { token: Token, context: &'static str },

    #[error("Se esperaban dos puntos `:` después de {context}, pero se encontró: {token}")]
    ExpectedColon { token: Token, context: &'static str },

    #[error("Se esperaba una coma `,` después de {context}, pero se encontró: {token}")]
    ExpectedComma { token: Token, context: &'static str },

    #[error("Se esperaba un punto y coma `;` al final de la declaración, pero se encontró: {token}")]
    ExpectedSemicolonAfterStatement { token: Token },

    #[error("Se esperaba un identificador para {context}, pero se encontró: {token}")]
    ExpectedIdentifier { token: Token, context: &'static str },

    #[error("Se esperaba `hacer` después de la condición de `mientras`, pero se encontró: {token}")]
    ExpectedHacer { token: Token },

    #[error("Se esperaba un literal, un identificador o un paréntesis, pero se encontró: {token}")]
    UnknownStartOfExpression { token: Token },

    #[error("Solo se puede asignar a una variable o a una propiedad de un objeto")]
    InvalidAssignmentTarget { equals: Token, range: FileRange },

    #[error("No se permite usar `{token}` fuera de una declaración condicional `si`")]
    DanglingAlternate { token: Token },

    #[error("No se puede declarar la variable `{}` sin valor y sin tipo", name.value())]
    MissingTypeAnnotation { name: Ranged<String> },

    #[error("No se puede declarar la constante `{}` sin un valor", name.value())]
    ConstantWithoutInitializer { name: Ranged<String> },

    #[error("Número no válido: {token}")]
    InvalidNumber { token: Token },
}

impl ParseError {
    pub fn range(&self) -> FileRange {
        match self {
            Self::ExpectedLeftParen { token, .. } => token.range(),
            Self::ExpectedRightParen { token, .. } => token.range(),
            Self::ExpectedLeftCurlyBracket { token, .. } => token.range(),
            Self::ExpectedRightCurlyBracket { token, .. } => token.range(),
            Self::ExpectedRightSquareBracket { token, .. } => token.range(),
            Self::ExpectedColon { token, .. } => token.range(),
            Self::ExpectedComma { token, .. } => token.range(),
            Self::ExpectedSemicolonAfterStatement { token } => token.range(),
            Self::ExpectedIdentifier { token, .. } => token.range(),
            Self::ExpectedHacer { token } => token.range(),
            Self::UnknownStartOfExpression { token } => token.range(),
            Self::InvalidAssignmentTarget { range, .. } => *range,
            Self::DanglingAlternate { token } => token.range(),
            Self::MissingTypeAnnotation { name } => name.range(),
            Self::ConstantWithoutInitializer { name } => name.range(),
            Self::InvalidNumber { token } => token.range(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionParsingContext {
    Declaration,
    Literal,
}

impl FunctionParsingContext {
    #[must_use]
    const fn require_return_type(&self) -> bool {
        matches!(self, Self::Declaration)
    }

    #[must_use]
    const fn name(&self) -> &'static str {
        match self {
            Self::Declaration => "el nombre de la función",
            Self::Literal => "`fun`",
        }
    }
}
