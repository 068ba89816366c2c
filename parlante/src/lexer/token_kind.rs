// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),

    Identifier(String),

    /// The literal text of the number, including a leading `-` when the
    /// minus was folded into the literal.
    Number(String),

    /// The contents of a text literal with escapes already expanded.
    Text(String),

    Punctuator(Punctuator),
    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "palabra clave",

            Self::Identifier(..) => "identificador",
            Self::Number(..) => "número",
            Self::Text(..) => "texto",

            Self::Punctuator(punctuator) => punctuator.name(),
            Self::EndOfFile => "fin del archivo",
        }
    }

    #[must_use]
    pub const fn is_end_of_file(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => ident.fmt(f),
            Self::Number(number) => number.fmt(f),
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::Text(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::EndOfFile => f.write_str("fin del archivo"),
        }
    }
}
