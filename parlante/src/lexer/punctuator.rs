// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "dos puntos")]
    Colon,
    #[strum(serialize = "coma")]
    Comma,
    #[strum(serialize = "paréntesis de apertura")]
    LeftParenthesis,
    #[strum(serialize = "paréntesis de cierre")]
    RightParenthesis,
    #[strum(serialize = "llave de apertura")]
    LeftCurlyBracket,
    #[strum(serialize = "llave de cierre")]
    RightCurlyBracket,
    #[strum(serialize = "corchete de apertura")]
    LeftSquareBracket,
    #[strum(serialize = "corchete de cierre")]
    RightSquareBracket,
    #[strum(serialize = "punto y coma")]
    Semicolon,
    #[strum(serialize = "punto")]
    Period,

    #[strum(serialize = "asignación")]
    Assignment,
    #[strum(serialize = "igualdad")]
    Equals,
    #[strum(serialize = "desigualdad")]
    NotEquals,
    #[strum(serialize = "mayor que")]
    GreaterThan,
    #[strum(serialize = "mayor o igual que")]
    GreaterThanOrEqual,
    #[strum(serialize = "menor que")]
    LessThan,
    #[strum(serialize = "menor o igual que")]
    LessThanOrEqual,

    #[strum(serialize = "más")]
    PlusSign,
    #[strum(serialize = "menos")]
    HyphenMinus,
    #[strum(serialize = "asterisco")]
    Asterisk,
    #[strum(serialize = "barra")]
    Solidus,
    #[strum(serialize = "porcentaje")]
    PercentageSign,
    #[strum(serialize = "circunflejo")]
    Caret,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::LeftSquareBracket => "[",
            Self::RightSquareBracket => "]",
            Self::Semicolon => ";",
            Self::Period => ".",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::PlusSign => "+",
            Self::HyphenMinus => "-",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::PercentageSign => "%",
            Self::Caret => "^",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
