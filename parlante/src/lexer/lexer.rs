// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use log::trace;
use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, Keyword, Punctuator, Token, TokenKind};

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,

    /// The last character that was consumed, whitespace and comments
    /// included. Decides whether a `-` starts a negative literal.
    previous: Option<char>,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            previous: None,
            line: 1,
            column: 1,
        }
    }

    /// Lexes the whole input. The returned tokens always end with a
    /// [`TokenKind::EndOfFile`] token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_end = token.kind.is_end_of_file();
            tokens.push(token);

            if is_end {
                break;
            }
        }

        trace!("Lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace_and_comments();

        let Some(ch) = self.peek_char() else {
            let location = self.current_location();
            return Ok(Token {
                kind: TokenKind::EndOfFile,
                begin: location,
                end: location,
            });
        };

        let token = match ch {
            '"' => return self.consume_string(),

            '0'..='9' => self.consume_number(),
            '-' if self.is_start_of_negative_number() => self.consume_number(),
            c if is_identifier_start(c) => self.consume_identifier_or_keyword(),

            '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
            ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
            '{' => self.consume_single_char_token(Punctuator::LeftCurlyBracket),
            '}' => self.consume_single_char_token(Punctuator::RightCurlyBracket),
            '[' => self.consume_single_char_token(Punctuator::LeftSquareBracket),
            ']' => self.consume_single_char_token(Punctuator::RightSquareBracket),
            ';' => self.consume_single_char_token(Punctuator::Semicolon),
            ',' => self.consume_single_char_token(Punctuator::Comma),
            ':' => self.consume_single_char_token(Punctuator::Colon),
            '.' => self.consume_single_char_token(Punctuator::Period),
            '+' => self.consume_single_char_token(Punctuator::PlusSign),
            '-' => self.consume_single_char_token(Punctuator::HyphenMinus),
            '*' => self.consume_single_char_token(Punctuator::Asterisk),
            '/' => self.consume_single_char_token(Punctuator::Solidus),
            '%' => self.consume_single_char_token(Punctuator::PercentageSign),
            '^' => self.consume_single_char_token(Punctuator::Caret),

            '=' => self.consume_with_optional_equals(Punctuator::Assignment, Punctuator::Equals),
            '>' => self.consume_with_optional_equals(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),
            '<' => self.consume_with_optional_equals(Punctuator::LessThan, Punctuator::LessThanOrEqual),
            '!' => return self.consume_exclamation_mark(),

            character => {
                return Err(LexerError {
                    location: self.current_location(),
                    kind: LexerErrorKind::IllegalCharacter { character },
                });
            }
        };

        Ok(token)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end,
        }
    }

    #[must_use]
    fn consume_with_optional_equals(&mut self, single: Punctuator, with_equals: Punctuator) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let punctuator = if self.peek_char() == Some('=') {
            self.consume_char();
            with_equals
        } else {
            single
        };

        let end = self.current_location();

        Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end,
        }
    }

    fn consume_exclamation_mark(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();
        self.consume_char();

        if self.peek_char() != Some('=') {
            return Err(LexerError {
                location: begin,
                kind: LexerErrorKind::IllegalCharacter { character: '!' },
            });
        }

        self.consume_char();

        Ok(Token {
            kind: TokenKind::Punctuator(Punctuator::NotEquals),
            begin,
            end: self.current_location(),
        })
    }

    fn consume_string(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        debug_assert_eq!(self.peek_char(), Some('"'));
        self.consume_char();

        let mut str = String::new();

        loop {
            let Some(c) = self.next_char() else {
                return Err(LexerError {
                    location: begin,
                    kind: LexerErrorKind::UnterminatedString,
                });
            };

            match c {
                '"' => break,

                '\\' => {
                    let Some(escaped) = self.next_char() else {
                        return Err(LexerError {
                            location: begin,
                            kind: LexerErrorKind::UnterminatedString,
                        });
                    };

                    str.push(match escaped {
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        'b' => '\u{8}',
                        'f' => '\u{c}',
                        'v' => '\u{b}',
                        other => other,
                    });
                }

                c => str.push(c),
            }
        }

        let end = self.current_location();

        Ok(Token {
            kind: TokenKind::Text(str),
            begin,
            end,
        })
    }

    #[must_use]
    fn consume_identifier_or_keyword(&mut self) -> Token {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(str.to_string()),
        };

        Token {
            kind,
            begin,
            end,
        }
    }

    fn is_start_of_negative_number(&mut self) -> bool {
        if matches!(self.previous, Some('0'..='9')) {
            return false;
        }

        matches!(self.peek_second_char(), Some('0'..='9'))
    }

    #[must_use]
    fn consume_number(&mut self) -> Token {
        let begin = self.current_location();

        if self.peek_char() == Some('-') {
            self.consume_char();
        }

        let mut seen_decimal_point = false;
        while let Some(c) = self.peek_char() {
            let is_decimal_point = c == '.'
                && !seen_decimal_point
                && matches!(self.peek_second_char(), Some('0'..='9'));

            if is_decimal_point {
                seen_decimal_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        Token {
            kind: TokenKind::Number(str.to_string()),
            begin,
            end,
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek_char() {
            match c {
                ' ' | '\t' | '\n' | '\r' => self.consume_char(),

                '/' => match self.peek_second_char() {
                    Some('/') => self.consume_until_end_of_line(),
                    Some('*') => self.consume_block_comment(),
                    _ => break,
                },

                _ => break,
            }
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' || c == '\r' {
                break;
            }

            self.consume_char();
        }
    }

    /// Block comments nest: `/* a /* b */ c */` is one comment. An
    /// unterminated comment runs to the end of the input.
    fn consume_block_comment(&mut self) {
        self.consume_char();
        self.consume_char();

        let mut depth = 1_usize;
        while depth > 0 {
            let Some(c) = self.next_char() else {
                break;
            };

            match (c, self.peek_char()) {
                ('/', Some('*')) => {
                    self.consume_char();
                    depth += 1;
                }

                ('*', Some('/')) => {
                    self.consume_char();
                    depth -= 1;
                }

                _ => (),
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn peek_second_char(&mut self) -> Option<char> {
        let (location, c) = {
            _ = self.peek_char();
            self.current?
        };

        self.input[location.offset() + c.len_utf8()..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        if let Some((_, c)) = self.current.take() {
            self.previous = Some(c);
        }

        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Se deben cerrar los textos con las comillas dobles (\"texto\")")]
    UnterminatedString,

    #[error("El carácter `{character}` no es válido")]
    IllegalCharacter { character: char },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
