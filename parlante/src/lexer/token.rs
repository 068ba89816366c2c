// Copyright (C) 2023 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange, Ranged};

use super::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    /// The name this token spells, if it can be used as one. `y` and `o`
    /// are only operators between two operands, so they are names too.
    pub fn as_identifier(&self) -> Option<Ranged<String>> {
        let name = match &self.kind {
            TokenKind::Identifier(ident) => ident.clone(),
            TokenKind::Keyword(keyword) if keyword.is_logical_operator() => keyword.as_ref().to_string(),
            _ => return None,
        };

        Some(Ranged::new(self.range(), name))
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
