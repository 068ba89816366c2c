// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Const,
    Continuar,
    Devolver,
    Fun,
    Hacer,
    Mientras,
    PeroSi,
    Romper,
    Si,
    Sino,
    Var,

    /// Logical conjunction, `y`.
    Y,

    /// Logical disjunction, `o`.
    O,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    #[must_use]
    pub const fn is_logical_operator(&self) -> bool {
        matches!(self, Self::Y | Self::O)
    }
}
